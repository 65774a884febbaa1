//! Image normalization: raw payload → canonical opaque RGB buffer.
//!
//! The CDN serves a mix of encodings (JPEG, PNG, WebP, the odd GIF), some
//! with alpha or palette channels. Both output containers embed opaque
//! JPEGs, so everything is flattened here once: alpha sources are
//! composited over an opaque white canvas (palette sources come out of the
//! decoder with their alpha expanded already), everything else is coerced
//! to RGB directly.
//!
//! An unparseable payload is the slide's problem, not the batch's: the
//! orchestrator skips it and continues, mirroring the fetch stage's
//! partial-failure policy.

use crate::error::SlidesError;
use crate::pipeline::fetch::RawImage;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};
use tracing::debug;

/// A decoded slide in the canonical pixel format: 24-bit RGB, no alpha.
///
/// Created from one [`RawImage`], consumed exactly once by an encoder.
#[derive(Debug)]
pub struct NormalizedImage {
    /// 0-based position in the manifest.
    pub index: usize,
    /// Opaque RGB pixels.
    pub pixels: RgbImage,
}

/// Decode one payload and flatten it to opaque RGB.
///
/// # Errors
/// [`SlidesError::DecodeError`] when the payload is not a decodable image.
/// Callers are expected to absorb this per-slide rather than abort.
pub fn normalize(raw: &RawImage) -> Result<NormalizedImage, SlidesError> {
    let decoded = image::load_from_memory(&raw.bytes).map_err(|e| SlidesError::DecodeError {
        slide: raw.index + 1,
        detail: e.to_string(),
    })?;

    debug!(
        "Slide {}: {}x{} {:?}",
        raw.index + 1,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );

    Ok(NormalizedImage {
        index: raw.index,
        pixels: flatten_onto_white(decoded),
    })
}

/// Composite alpha over pure white; coerce everything else to RGB.
pub(crate) fn flatten_onto_white(img: DynamicImage) -> RgbImage {
    match img {
        DynamicImage::ImageRgb8(rgb) => rgb,
        img if !img.color().has_alpha() => img.to_rgb8(),
        img => {
            let rgba = img.to_rgba8();
            let (width, height) = rgba.dimensions();
            let mut out = RgbImage::new(width, height);
            for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
                let alpha = src[3] as u32;
                for channel in 0..3 {
                    // src·α + white·(1−α), in integer arithmetic.
                    dst[channel] =
                        ((src[channel] as u32 * alpha + 255 * (255 - alpha)) / 255) as u8;
                }
            }
            out
        }
    }
}

/// JPEG-encode an opaque RGB buffer at the given quality.
///
/// Shared by both container encoders (they use different qualities).
pub(crate) fn encode_jpeg(pixels: &RgbImage, quality: u8) -> Result<Vec<u8>, image::ImageError> {
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality).encode_image(pixels)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(img: &DynamicImage) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .expect("encode fixture");
        buf
    }

    #[test]
    fn opaque_rgb_passes_through() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([10, 20, 30])));
        let flat = flatten_onto_white(img);
        assert_eq!(flat.get_pixel(0, 0), &Rgb([10, 20, 30]));
    }

    #[test]
    fn fully_transparent_becomes_white() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([200, 0, 0, 0])));
        let flat = flatten_onto_white(img);
        assert_eq!(flat.get_pixel(2, 2), &Rgb([255, 255, 255]));
    }

    #[test]
    fn fully_opaque_alpha_keeps_color() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([200, 50, 0, 255])));
        let flat = flatten_onto_white(img);
        assert_eq!(flat.get_pixel(0, 0), &Rgb([200, 50, 0]));
    }

    #[test]
    fn half_alpha_blends_toward_white() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128])));
        let flat = flatten_onto_white(img);
        let px = flat.get_pixel(0, 0);
        // 0·(128/255) + 255·(127/255) = 127
        assert_eq!(px, &Rgb([127, 127, 127]));
    }

    #[test]
    fn grayscale_coerces_to_rgb() {
        let img = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(3, 3, image::Luma([90])));
        let flat = flatten_onto_white(img);
        assert_eq!(flat.get_pixel(1, 1), &Rgb([90, 90, 90]));
    }

    #[test]
    fn normalize_decodes_png_payload() {
        let fixture = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 6, Rgba([0, 0, 255, 255])));
        let raw = RawImage {
            index: 4,
            bytes: png_bytes(&fixture),
        };
        let normalized = normalize(&raw).unwrap();
        assert_eq!(normalized.index, 4);
        assert_eq!(normalized.pixels.dimensions(), (8, 6));
        assert_eq!(normalized.pixels.get_pixel(0, 0), &Rgb([0, 0, 255]));
    }

    #[test]
    fn normalize_rejects_garbage() {
        let raw = RawImage {
            index: 0,
            bytes: b"<html>not an image</html>".to_vec(),
        };
        let err = normalize(&raw).unwrap_err();
        assert!(matches!(err, SlidesError::DecodeError { slide: 1, .. }));
    }

    #[test]
    fn jpeg_roundtrip_produces_decodable_bytes() {
        let pixels = RgbImage::from_pixel(16, 16, Rgb([128, 64, 32]));
        let jpeg = encode_jpeg(&pixels, 90).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "JPEG SOI marker");
        let back = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(back.width(), 16);
        assert_eq!(back.height(), 16);
    }
}
