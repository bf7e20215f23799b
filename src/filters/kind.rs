//! The closed filter enumeration.
//!
//! String names exist only at the edges (CLI flags, `booth.toml`); everything
//! past the boundary dispatches on the enum. `bw` and `blur` are accepted as
//! aliases for their spelled-out kinds on both edges.

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named deterministic pixel-color transform.
///
/// Every kind maps each pixel independently of its neighbors, so applying a
/// filter is embarrassingly parallel across rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum FilterKind {
    /// Identity — output is a byte-for-byte copy of the input.
    #[default]
    None,
    /// Sepia color matrix with a warm additive bias.
    Vintage,
    /// BT.601 luma grayscale.
    #[serde(alias = "bw")]
    #[value(alias = "bw")]
    BlackAndWhite,
    /// Flat +20 brightness lift. Stands in for the old renderer-side blur
    /// preview, which had no reproducible pixel math.
    #[serde(alias = "blur")]
    #[value(alias = "blur")]
    Soften,
    /// ×1.3 boost on all color channels.
    Enhance,
    /// Warmed reds and greens, cooled blues.
    Retro,
}

impl FilterKind {
    /// Every kind, in menu order.
    pub const ALL: [FilterKind; 6] = [
        FilterKind::None,
        FilterKind::Vintage,
        FilterKind::BlackAndWhite,
        FilterKind::Soften,
        FilterKind::Enhance,
        FilterKind::Retro,
    ];

    /// The canonical CLI/config label.
    pub fn label(self) -> &'static str {
        match self {
            FilterKind::None => "none",
            FilterKind::Vintage => "vintage",
            FilterKind::BlackAndWhite => "black-and-white",
            FilterKind::Soften => "soften",
            FilterKind::Enhance => "enhance",
            FilterKind::Retro => "retro",
        }
    }

    /// Uniformly sample one of the non-identity kinds.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> FilterKind {
        const EFFECTS: [FilterKind; 5] = [
            FilterKind::Vintage,
            FilterKind::BlackAndWhite,
            FilterKind::Soften,
            FilterKind::Enhance,
            FilterKind::Retro,
        ];
        EFFECTS[rng.gen_range(0..EFFECTS.len())]
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
