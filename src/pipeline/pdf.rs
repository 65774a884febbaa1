//! Paginated-image container: normalized slides → one PDF, one full page
//! per slide.
//!
//! Each slide is re-encoded as a quality-90 JPEG and embedded untouched as
//! a `/DCTDecode` image XObject — the PDF wraps the JPEG bytes rather than
//! re-compressing pixels, so page content is exactly the JPEG the encoder
//! produced. The page MediaBox equals the pixel dimensions in points
//! (one pixel = one point), which makes page geometry a deterministic
//! function of the input dimensions.

use crate::error::SlidesError;
use crate::pipeline::normalize::{encode_jpeg, NormalizedImage};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tracing::debug;

/// JPEG quality for PDF pages.
const JPEG_QUALITY: u8 = 90;

/// Encode the ordered slide set into a single PDF byte stream.
///
/// # Errors
/// * [`SlidesError::EmptyInput`] — zero images.
/// * [`SlidesError::EncodeError`] — JPEG or PDF serialisation failure.
pub fn encode_pdf(images: &[NormalizedImage]) -> Result<Vec<u8>, SlidesError> {
    if images.is_empty() {
        return Err(SlidesError::EmptyInput);
    }

    let encode_error = |detail: String| SlidesError::EncodeError {
        format: "pdf",
        detail,
    };

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(images.len());

    for img in images {
        let (width, height) = img.pixels.dimensions();
        let jpeg = encode_jpeg(&img.pixels, JPEG_QUALITY).map_err(|e| encode_error(e.to_string()))?;
        debug!(
            "Page for slide {}: {}x{} px, {} JPEG bytes",
            img.index + 1,
            width,
            height,
            jpeg.len()
        );

        let xobject = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            jpeg,
        )
        .with_compression(false);
        let xobject_id = doc.add_object(xobject);

        // Scale the unit image square up to the full page.
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        (width as i64).into(),
                        0.into(),
                        0.into(),
                        (height as i64).into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec!["Im0".into()]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_bytes = content.encode().map_err(|e| encode_error(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content_bytes));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), (width as i64).into(), (height as i64).into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => xobject_id },
            },
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).map_err(|e| encode_error(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn slide(index: usize, width: u32, height: u32) -> NormalizedImage {
        NormalizedImage {
            index,
            pixels: RgbImage::from_pixel(width, height, Rgb([index as u8 * 40, 100, 200])),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(encode_pdf(&[]), Err(SlidesError::EmptyInput)));
    }

    #[test]
    fn one_page_per_slide() {
        let slides = vec![slide(0, 64, 48), slide(1, 64, 48), slide(2, 32, 32)];
        let bytes = encode_pdf(&slides).unwrap();
        assert_eq!(&bytes[..5], b"%PDF-");

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 3);
    }

    #[test]
    fn media_box_matches_pixel_dimensions() {
        let slides = vec![slide(0, 120, 90)];
        let bytes = encode_pdf(&slides).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();

        let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
        let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
        let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
        let dims: Vec<i64> = media_box.iter().map(|o| o.as_i64().unwrap()).collect();
        assert_eq!(dims, vec![0, 0, 120, 90]);
    }

    #[test]
    fn embedded_stream_is_the_jpeg() {
        let slides = vec![slide(0, 20, 20)];
        let bytes = encode_pdf(&slides).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();

        // Find the image XObject and check the JPEG SOI marker survived.
        let found = doc.objects.values().any(|obj| {
            obj.as_stream()
                .ok()
                .filter(|s| {
                    s.dict
                        .get(b"Subtype")
                        .and_then(|v| v.as_name())
                        .map(|n| n == b"Image".as_slice())
                        .unwrap_or(false)
                })
                .map(|s| s.content.starts_with(&[0xFF, 0xD8]))
                .unwrap_or(false)
        });
        assert!(found, "no DCTDecode image stream found");
    }
}
