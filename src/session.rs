//! Session state: the ordered photo gallery and usage counters.
//!
//! A [`Session`] is an owned value, not module-level state. Photos enter
//! through [`Session::add_photo`] (which runs the filter engine), strips
//! leave through [`Session::compose_strip`] (which reads the most recent
//! gallery entries in chronological order). Entries are read-only once
//! appended; only [`Session::clear_gallery`] and [`Session::reset`] remove
//! them.

use image::RgbaImage;
use rand::Rng;
use serde::Serialize;
use std::time::SystemTime;
use thiserror::Error;

use crate::filters::{self, FilterError, FilterKind};
use crate::strip::{self, StripError, StripLayout};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("a strip needs at least {need} photos, the gallery has {have}")]
    NotEnoughPhotos { have: usize, need: usize },
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error(transparent)]
    Strip(#[from] StripError),
}

/// One captured or uploaded photo, filtered and timestamped.
#[derive(Debug, Clone)]
pub struct GalleryEntry {
    image: RgbaImage,
    created_at: SystemTime,
    applied_filter: FilterKind,
}

impl GalleryEntry {
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn applied_filter(&self) -> FilterKind {
        self.applied_filter
    }
}

/// Usage counters shown alongside the gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub photos: u64,
    pub filters: u64,
    pub strips: u64,
}

/// Serializable snapshot of a session, for listings and CLI `--json` output.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub gallery_len: usize,
    pub stats: SessionStats,
}

/// A photobooth session: id, gallery, counters.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    gallery: Vec<GalleryEntry>,
    stats: SessionStats,
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(&mut rand::thread_rng())
    }

    /// Build a session from a caller-supplied RNG (deterministic ids in
    /// tests).
    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            id: generate_id(rng),
            gallery: Vec::new(),
            stats: SessionStats::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn gallery(&self) -> &[GalleryEntry] {
        &self.gallery
    }

    /// Run `kind` over `image` and append the result to the gallery.
    ///
    /// Counts the photo always, the filter only when it actually transforms
    /// pixels.
    pub fn add_photo(&mut self, image: RgbaImage, kind: FilterKind) -> Result<(), SessionError> {
        let processed = filters::apply(&image, kind)?;
        self.gallery.push(GalleryEntry {
            image: processed,
            created_at: SystemTime::now(),
            applied_filter: kind,
        });
        self.stats.photos += 1;
        if kind != FilterKind::None {
            self.stats.filters += 1;
        }
        Ok(())
    }

    /// The most recent `min(4, len)` gallery images, oldest first.
    ///
    /// Strip slots follow this order, so the compositor never reorders —
    /// photo age maps left-to-right (or top-to-bottom).
    pub fn strip_selection(&self) -> Vec<&RgbaImage> {
        let start = self.gallery.len().saturating_sub(strip::MAX_PHOTOS);
        self.gallery[start..].iter().map(|e| e.image()).collect()
    }

    /// Compose the current [`strip_selection`](Self::strip_selection) into a
    /// strip, requiring at least `min_photos` in the gallery.
    pub fn compose_strip(
        &mut self,
        layout: &StripLayout,
        min_photos: usize,
    ) -> Result<RgbaImage, SessionError> {
        if self.gallery.len() < min_photos {
            return Err(SessionError::NotEnoughPhotos {
                have: self.gallery.len(),
                need: min_photos,
            });
        }
        let composed = strip::compose(&self.strip_selection(), layout)?;
        self.stats.strips += 1;
        Ok(composed)
    }

    /// Drop every gallery entry and zero the photo counter. Filter and strip
    /// counters keep their totals.
    pub fn clear_gallery(&mut self) {
        self.gallery.clear();
        self.stats.photos = 0;
    }

    /// Start over: fresh id, empty gallery, zeroed counters.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Session::with_rng(rng);
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id.clone(),
            gallery_len: self.gallery.len(),
            stats: self.stats,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Six uppercase alphanumerics, the session tag format shown to users.
fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    (0..6)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
