//! # photostrip
//!
//! Deterministic photobooth image processing: named pixel filters and
//! photo-strip composition, with a session-scoped gallery in between.
//!
//! # Architecture
//!
//! The crate is two pure transformation functions plus the state that feeds
//! them:
//!
//! ```text
//! photo  →  filters::apply  →  Session gallery  →  strip::compose  →  strip
//! ```
//!
//! Both transformations are value-semantic: they take a borrowed
//! [`image::RgbaImage`] and return a freshly allocated one. Inputs are never
//! observably altered, which makes the functions safe to call concurrently
//! on different images.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`filters`] | Closed set of per-pixel color transforms, applied row-parallel |
//! | [`strip`] | Slot geometry and composition of 1–4 photos into one canvas |
//! | [`session`] | Ordered gallery, usage counters, and strip selection |
//! | [`config`] | `booth.toml` layout and output settings with stock defaults |
//! | [`codec`] | File decode/encode boundary (JPEG, PNG, WebP in; JPEG, PNG out) |
//!
//! # Design Decisions
//!
//! ## Per-Pixel Filters Only
//!
//! Every [`filters::FilterKind`] maps each pixel independently — no
//! convolution, no neighbor access. That invariant is what lets the engine
//! split work across output rows with rayon without changing a single
//! output byte. The `soften` kind is a flat brightness lift, not a gaussian
//! blur: a blur would break pixel independence and its radius was never a
//! specified quantity.
//!
//! ## Stretch-to-Fit Slots
//!
//! The compositor divides the canvas into equal slots and stretch-fits each
//! photo to its slot box, without preserving aspect ratio. Slot boundaries
//! are placed by integer partition so the slots tile the canvas exactly —
//! no gap or overflow pixel regardless of divisibility.
//!
//! ## Session as a Value
//!
//! Gallery and counters live in an owned [`session::Session`] value rather
//! than module-level state. The compositor reads an ordered slice of it and
//! writes nothing back; clearing or resetting is an explicit call by the
//! owner.

pub mod codec;
pub mod config;
pub mod filters;
pub mod session;
pub mod strip;
