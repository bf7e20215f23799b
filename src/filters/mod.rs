//! Deterministic pixel filters.
//!
//! | Kind | Transform (per pixel, alpha untouched) |
//! |---|---|
//! | `none` | identity |
//! | `vintage` | sepia matrix + warm bias (+40/+20/+10) |
//! | `black-and-white` | BT.601 luma |
//! | `soften` | flat +20 brightness lift |
//! | `enhance` | ×1.3 channel boost |
//! | `retro` | ×1.2+20 / ×1.1+10 / ×0.9 |
//!
//! The module is split into:
//! - **Kind**: the closed [`FilterKind`] enumeration — all dispatch is a
//!   match over it, never over strings
//! - **Engine**: [`apply`], the pure per-pixel executor

pub mod engine;
mod kind;

pub use engine::{FilterError, apply};
pub use kind::FilterKind;
