//! File decode/encode boundary.
//!
//! The core works on in-memory [`RgbaImage`] values; this module is the only
//! place bytes on disk are touched.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, WebP) | `image::ImageReader` (pure Rust decoders) |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder`, quality-controlled |
//! | Encode → PNG | `image::codecs::png::PngEncoder` (alpha preserved) |

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageReader, RgbaImage};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),
}

/// JPEG quality setting (1-100). Clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(90)
    }
}

/// Decode a photo from disk into RGBA.
pub fn load_photo(path: &Path) -> Result<RgbaImage, CodecError> {
    let decoded = ImageReader::open(path)
        .map_err(CodecError::Io)?
        .decode()
        .map_err(|source| CodecError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(decoded.to_rgba8())
}

/// Encode a photo to disk, format chosen by extension.
///
/// JPEG drops alpha (the encoder takes RGB); PNG keeps it. `quality`
/// applies to JPEG only.
pub fn save_photo(image: &RgbaImage, path: &Path, quality: Quality) -> Result<(), CodecError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let encode_err = |source| CodecError::Encode {
        path: path.to_path_buf(),
        source,
    };

    match ext.as_str() {
        "jpg" | "jpeg" => {
            let file = std::fs::File::create(path)?;
            let writer = BufWriter::new(file);
            let encoder = JpegEncoder::new_with_quality(writer, quality.value() as u8);
            DynamicImage::ImageRgba8(image.clone())
                .into_rgb8()
                .write_with_encoder(encoder)
                .map_err(encode_err)
        }
        "png" => {
            let file = std::fs::File::create(path)?;
            let writer = BufWriter::new(file);
            image
                .write_with_encoder(PngEncoder::new(writer))
                .map_err(encode_err)
        }
        other => Err(CodecError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(px))
    }

    #[test]
    fn quality_clamps_to_valid_range() {
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!(Quality::new(90).value(), 90);
        assert_eq!(Quality::new(150).value(), 100);
    }

    #[test]
    fn quality_default_is_90() {
        assert_eq!(Quality::default().value(), 90);
    }

    #[test]
    fn png_round_trip_is_exact() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("photo.png");
        let img = solid(40, 30, [12, 200, 96, 255]);

        save_photo(&img, &path, Quality::default()).unwrap();
        let back = load_photo(&path).unwrap();
        assert_eq!(back.dimensions(), (40, 30));
        assert_eq!(back.as_raw(), img.as_raw());
    }

    #[test]
    fn jpeg_round_trip_preserves_dimensions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("photo.jpg");
        let img = solid(64, 48, [200, 60, 20, 255]);

        save_photo(&img, &path, Quality::new(90)).unwrap();
        let back = load_photo(&path).unwrap();
        assert_eq!(back.dimensions(), (64, 48));
        // Lossy, but a solid color survives within a small tolerance
        let px = back.get_pixel(32, 24).0;
        for (got, want) in px[..3].iter().zip([200u8, 60, 20]) {
            assert!(got.abs_diff(want) <= 12, "{px:?}");
        }
        assert_eq!(px[3], 255);
    }

    #[test]
    fn unsupported_output_extension_errors() {
        let img = solid(4, 4, [1, 2, 3, 255]);
        let result = save_photo(&img, Path::new("/tmp/out.gif"), Quality::default());
        assert!(matches!(result, Err(CodecError::UnsupportedFormat(ext)) if ext == "gif"));
    }

    #[test]
    fn load_nonexistent_file_errors() {
        assert!(matches!(
            load_photo(Path::new("/nonexistent/photo.jpg")),
            Err(CodecError::Io(_))
        ));
    }

    #[test]
    fn load_garbage_bytes_errors() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("not-a-photo.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(
            load_photo(&path),
            Err(CodecError::Decode { .. })
        ));
    }
}
