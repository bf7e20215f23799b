//! Photo-strip composition.
//!
//! [`compose`] lays 1–4 photos into one fixed-size canvas: equal slots along
//! the main axis, each photo stretch-fitted (non-uniform Lanczos3 resize) to
//! its slot box, placed in input order over a background fill.
//!
//! Slot geometry is pure integer math in [`slot_spans`], kept separate from
//! pixel work so it can be tested without touching an image.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use thiserror::Error;

/// Upper bound on photos per strip.
pub const MAX_PHOTOS: usize = 4;

#[derive(Error, Debug)]
pub enum StripError {
    #[error("a strip takes between 1 and {MAX_PHOTOS} photos, got {0}")]
    InvalidInputCount(usize),
    #[error("malformed image in slot {slot}: {width}x{height}")]
    MalformedImage { slot: usize, width: u32, height: u32 },
    #[error("{width}x{height} canvas with padding {padding} leaves no room for {count} photos")]
    LayoutTooSmall {
        width: u32,
        height: u32,
        padding: u32,
        count: usize,
    },
}

/// Direction photos are laid along the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    /// Left to right, each slot spanning the full canvas height.
    #[default]
    Horizontal,
    /// Top to bottom, each slot spanning the full canvas width.
    Vertical,
}

/// Canvas geometry for one strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StripLayout {
    pub width: u32,
    pub height: u32,
    /// Gutter around the canvas edge and between slots. Zero in the
    /// canonical layout.
    pub padding: u32,
    pub orientation: Orientation,
    pub background: Rgba<u8>,
}

impl Default for StripLayout {
    fn default() -> Self {
        Self {
            width: 800,
            height: 200,
            padding: 0,
            orientation: Orientation::Horizontal,
            background: Rgba([255, 255, 255, 255]),
        }
    }
}

/// Partition `extent` into `count` slots separated (and bordered) by
/// `padding`, returning `(offset, size)` per slot.
///
/// Boundaries sit at `i * usable / count`, so slot sizes differ by at most
/// one pixel and always sum to the usable extent — with zero padding the
/// slots tile `[0, extent)` exactly. Returns `None` when the geometry does
/// not leave every slot at least one pixel.
pub fn slot_spans(extent: u32, count: usize, padding: u32) -> Option<Vec<(u32, u32)>> {
    if count == 0 {
        return None;
    }
    let n = count as u64;
    let gutters = (n + 1) * padding as u64;
    let usable = (extent as u64).checked_sub(gutters)?;

    let mut spans = Vec::with_capacity(count);
    for i in 0..n {
        let start = i * usable / n;
        let end = (i + 1) * usable / n;
        if end == start {
            return None;
        }
        let offset = padding as u64 + start + i * padding as u64;
        spans.push((offset as u32, (end - start) as u32));
    }
    Some(spans)
}

/// Compose `photos` into a single `layout.width × layout.height` image.
///
/// Photos are placed in input order — first photo in the leftmost (or
/// topmost) slot — and are never reordered, truncated, or mutated. Zero
/// photos or more than [`MAX_PHOTOS`] is [`StripError::InvalidInputCount`];
/// the caller decides the product-level minimum, not this function.
pub fn compose<I>(photos: &[I], layout: &StripLayout) -> Result<RgbaImage, StripError>
where
    I: Borrow<RgbaImage> + Sync,
{
    if photos.is_empty() || photos.len() > MAX_PHOTOS {
        return Err(StripError::InvalidInputCount(photos.len()));
    }
    for (slot, photo) in photos.iter().enumerate() {
        let (width, height) = photo.borrow().dimensions();
        if width == 0 || height == 0 {
            return Err(StripError::MalformedImage { slot, width, height });
        }
    }

    let too_small = || StripError::LayoutTooSmall {
        width: layout.width,
        height: layout.height,
        padding: layout.padding,
        count: photos.len(),
    };

    let (main_extent, cross_extent) = match layout.orientation {
        Orientation::Horizontal => (layout.width, layout.height),
        Orientation::Vertical => (layout.height, layout.width),
    };
    let spans = slot_spans(main_extent, photos.len(), layout.padding).ok_or_else(too_small)?;
    let cross = (cross_extent as u64)
        .checked_sub(2 * layout.padding as u64)
        .filter(|c| *c > 0)
        .ok_or_else(too_small)? as u32;

    // Slots are disjoint by construction, so the scale work is independent
    // per photo; only the paste into the shared canvas is serialized.
    let fitted: Vec<(u32, RgbaImage)> = photos
        .par_iter()
        .zip(spans.par_iter())
        .map(|(photo, &(offset, size))| {
            let (w, h) = match layout.orientation {
                Orientation::Horizontal => (size, cross),
                Orientation::Vertical => (cross, size),
            };
            (offset, imageops::resize(photo.borrow(), w, h, FilterType::Lanczos3))
        })
        .collect();

    let mut canvas = RgbaImage::from_pixel(layout.width, layout.height, layout.background);
    for (offset, slot_image) in &fitted {
        let (x, y) = match layout.orientation {
            Orientation::Horizontal => (*offset, layout.padding),
            Orientation::Vertical => (layout.padding, *offset),
        };
        imageops::replace(&mut canvas, slot_image, x as i64, y as i64);
    }
    Ok(canvas)
}
