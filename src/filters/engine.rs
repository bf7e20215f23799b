//! Per-pixel filter execution.
//!
//! [`apply`] is a pure function: same image and kind in, byte-identical
//! image out, input untouched. Work is split across output rows with rayon;
//! because every kind is pixel-independent, the parallel result is identical
//! to the sequential one.

use image::RgbaImage;
use rayon::prelude::*;
use thiserror::Error;

use super::FilterKind;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("malformed image: {width}x{height} with {len} buffer bytes")]
    MalformedImage { width: u32, height: u32, len: usize },
}

/// Apply `kind` to `source`, producing a freshly allocated image of the
/// same dimensions.
///
/// Color channels are transformed per [`FilterKind`] and clamped to
/// `[0, 255]`; alpha passes through. A zero-dimension image is rejected as
/// [`FilterError::MalformedImage`].
pub fn apply(source: &RgbaImage, kind: FilterKind) -> Result<RgbaImage, FilterError> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(FilterError::MalformedImage {
            width,
            height,
            len: source.as_raw().len(),
        });
    }
    if kind == FilterKind::None {
        return Ok(source.clone());
    }

    let stride = width as usize * 4;
    let src = source.as_raw();
    let mut dst = vec![0u8; src.len()];

    dst.par_chunks_mut(stride)
        .zip(src.par_chunks(stride))
        .for_each(|(row_out, row_in)| {
            for (out, px) in row_out
                .chunks_exact_mut(4)
                .zip(row_in.chunks_exact(4))
            {
                let [r, g, b] = transform(kind, px[0] as f32, px[1] as f32, px[2] as f32);
                out[0] = to_channel(r);
                out[1] = to_channel(g);
                out[2] = to_channel(b);
                out[3] = px[3];
            }
        });

    RgbaImage::from_raw(width, height, dst).ok_or(FilterError::MalformedImage {
        width,
        height,
        len: src.len(),
    })
}

/// The transform behind each kind, on raw channel values.
#[inline]
fn transform(kind: FilterKind, r: f32, g: f32, b: f32) -> [f32; 3] {
    match kind {
        FilterKind::None => [r, g, b],
        FilterKind::Vintage => [
            0.393 * r + 0.769 * g + 0.189 * b + 40.0,
            0.349 * r + 0.686 * g + 0.168 * b + 20.0,
            0.272 * r + 0.534 * g + 0.131 * b + 10.0,
        ],
        FilterKind::BlackAndWhite => {
            let luma = 0.299 * r + 0.587 * g + 0.114 * b;
            [luma, luma, luma]
        }
        FilterKind::Soften => [r + 20.0, g + 20.0, b + 20.0],
        FilterKind::Enhance => [r * 1.3, g * 1.3, b * 1.3],
        FilterKind::Retro => [r * 1.2 + 20.0, g * 1.1 + 10.0, b * 0.9],
    }
}

/// Clamp a computed channel into `[0, 255]`. Ties round down, so an exact
/// `.5` lands on the lower integer.
#[inline]
fn to_channel(x: f32) -> u8 {
    (x - 0.5).ceil().clamp(0.0, 255.0) as u8
}
