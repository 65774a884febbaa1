//! Slide-deck container: normalized slides → one PPTX.
//!
//! A PPTX file is an OPC package — a zip archive of XML parts plus media.
//! We emit the minimal part set PowerPoint accepts: content types, package
//! rels, the presentation part, one slide master / blank layout / theme,
//! and one slide + JPEG pair per image.
//!
//! ## Canvas and placement
//!
//! Every slide uses a fixed 13.333″ × 7.5″ canvas (the source renders at
//! 16:9; keeping the ratio preserves visual fidelity). Each image is
//! letterboxed/pillarboxed onto it: the constrained axis fills the canvas,
//! the other axis is scaled by the image aspect and centered. Offsets are
//! computed in f64 inches and only converted to integer EMU at the XML
//! boundary.

use crate::error::SlidesError;
use crate::pipeline::normalize::{encode_jpeg, NormalizedImage};
use std::io::{Cursor, Write};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// JPEG quality for deck media.
const JPEG_QUALITY: u8 = 85;

/// Canvas size in inches; 16:9 like the source player.
pub(crate) const CANVAS_WIDTH_IN: f64 = 13.333;
pub(crate) const CANVAS_HEIGHT_IN: f64 = 7.5;

const EMU_PER_INCH: f64 = 914_400.0;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const REL_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const REL_TYPE_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

// ── Layout ───────────────────────────────────────────────────────────────

/// Image placement on the canvas, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Placement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    fn x_emu(&self) -> i64 {
        emu(self.x)
    }
    fn y_emu(&self) -> i64 {
        emu(self.y)
    }
    fn width_emu(&self) -> i64 {
        emu(self.width)
    }
    fn height_emu(&self) -> i64 {
        emu(self.height)
    }
}

fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}

/// Letterbox/pillarbox an image onto the fixed canvas.
///
/// Wider-than-canvas images are width-constrained (full canvas width,
/// centered vertically); everything else is height-constrained (full
/// canvas height, centered horizontally). Exactly one axis fills the
/// canvas; the centering offset on the other axis is
/// `(canvas − scaled) / 2`.
pub(crate) fn letterbox(width: u32, height: u32) -> Placement {
    let img_aspect = width as f64 / height as f64;
    let canvas_aspect = CANVAS_WIDTH_IN / CANVAS_HEIGHT_IN;

    if img_aspect > canvas_aspect {
        let scaled_height = CANVAS_WIDTH_IN / img_aspect;
        Placement {
            x: 0.0,
            y: (CANVAS_HEIGHT_IN - scaled_height) / 2.0,
            width: CANVAS_WIDTH_IN,
            height: scaled_height,
        }
    } else {
        let scaled_width = CANVAS_HEIGHT_IN * img_aspect;
        Placement {
            x: (CANVAS_WIDTH_IN - scaled_width) / 2.0,
            y: 0.0,
            width: scaled_width,
            height: CANVAS_HEIGHT_IN,
        }
    }
}

// ── Entry point ──────────────────────────────────────────────────────────

/// Encode the ordered slide set into a single PPTX byte stream.
///
/// # Errors
/// * [`SlidesError::EmptyInput`] — zero images.
/// * [`SlidesError::EncodeError`] — JPEG, XML, or zip failure.
pub fn encode_pptx(images: &[NormalizedImage]) -> Result<Vec<u8>, SlidesError> {
    if images.is_empty() {
        return Err(SlidesError::EmptyInput);
    }

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let xml_opts = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    // JPEG is already compressed; deflating it again wastes CPU for nothing.
    let media_opts = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    let count = images.len();
    write_part(&mut zip, "[Content_Types].xml", content_types_xml(count).as_bytes(), xml_opts)?;
    write_part(&mut zip, "_rels/.rels", package_rels_xml().as_bytes(), xml_opts)?;
    write_part(&mut zip, "ppt/presentation.xml", presentation_xml(count).as_bytes(), xml_opts)?;
    write_part(
        &mut zip,
        "ppt/_rels/presentation.xml.rels",
        presentation_rels_xml(count).as_bytes(),
        xml_opts,
    )?;
    write_part(&mut zip, "ppt/slideMasters/slideMaster1.xml", slide_master_xml().as_bytes(), xml_opts)?;
    write_part(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        slide_master_rels_xml().as_bytes(),
        xml_opts,
    )?;
    write_part(&mut zip, "ppt/slideLayouts/slideLayout1.xml", slide_layout_xml().as_bytes(), xml_opts)?;
    write_part(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        slide_layout_rels_xml().as_bytes(),
        xml_opts,
    )?;
    write_part(&mut zip, "ppt/theme/theme1.xml", theme_xml().as_bytes(), xml_opts)?;

    for (seq, img) in images.iter().enumerate() {
        let number = seq + 1;
        let (width, height) = img.pixels.dimensions();
        let placement = letterbox(width, height);
        debug!(
            "Deck slide {number}: {width}x{height} px placed at ({:.3}\", {:.3}\") {:.3}\"x{:.3}\"",
            placement.x, placement.y, placement.width, placement.height
        );

        let jpeg = encode_jpeg(&img.pixels, JPEG_QUALITY).map_err(|e| SlidesError::EncodeError {
            format: "pptx",
            detail: e.to_string(),
        })?;

        write_part(
            &mut zip,
            &format!("ppt/slides/slide{number}.xml"),
            slide_xml(number, &placement).as_bytes(),
            xml_opts,
        )?;
        write_part(
            &mut zip,
            &format!("ppt/slides/_rels/slide{number}.xml.rels"),
            slide_rels_xml(number).as_bytes(),
            xml_opts,
        )?;
        write_part(&mut zip, &format!("ppt/media/image{number}.jpg"), &jpeg, media_opts)?;
    }

    let cursor = zip.finish().map_err(|e| SlidesError::EncodeError {
        format: "pptx",
        detail: e.to_string(),
    })?;
    Ok(cursor.into_inner())
}

fn write_part(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    name: &str,
    data: &[u8],
    opts: SimpleFileOptions,
) -> Result<(), SlidesError> {
    let encode_error = |detail: String| SlidesError::EncodeError {
        format: "pptx",
        detail,
    };
    zip.start_file(name, opts)
        .map_err(|e| encode_error(format!("{name}: {e}")))?;
    zip.write_all(data)
        .map_err(|e| encode_error(format!("{name}: {e}")))?;
    Ok(())
}

// ── Package parts ────────────────────────────────────────────────────────

fn content_types_xml(slide_count: usize) -> String {
    let mut xml = format!(
        r#"{XML_DECL}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Default Extension="jpg" ContentType="image/jpeg"/>
<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
"#
    );
    for i in 1..=slide_count {
        xml.push_str(&format!(
            "<Override PartName=\"/ppt/slides/slide{i}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>\n"
        ));
    }
    xml.push_str("</Types>");
    xml
}

fn package_rels_xml() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="{REL_NS}">
<Relationship Id="rId1" Type="{REL_TYPE_BASE}/officeDocument" Target="ppt/presentation.xml"/>
</Relationships>"#
    )
}

fn presentation_xml(slide_count: usize) -> String {
    let canvas_cx = emu(CANVAS_WIDTH_IN);
    let canvas_cy = emu(CANVAS_HEIGHT_IN);
    let mut slide_ids = String::new();
    for i in 1..=slide_count {
        // rId1 is the master; slides start at rId2.
        slide_ids.push_str(&format!(
            "<p:sldId id=\"{}\" r:id=\"rId{}\"/>",
            255 + i,
            1 + i
        ));
    }
    format!(
        r#"{XML_DECL}
<p:presentation xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">
<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
<p:sldIdLst>{slide_ids}</p:sldIdLst>
<p:sldSz cx="{canvas_cx}" cy="{canvas_cy}"/>
<p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#
    )
}

fn presentation_rels_xml(slide_count: usize) -> String {
    let mut rels = format!(
        r#"{XML_DECL}
<Relationships xmlns="{REL_NS}">
<Relationship Id="rId1" Type="{REL_TYPE_BASE}/slideMaster" Target="slideMasters/slideMaster1.xml"/>
"#
    );
    for i in 1..=slide_count {
        rels.push_str(&format!(
            "<Relationship Id=\"rId{}\" Type=\"{REL_TYPE_BASE}/slide\" Target=\"slides/slide{i}.xml\"/>\n",
            1 + i
        ));
    }
    rels.push_str("</Relationships>");
    rels
}

fn slide_master_xml() -> String {
    format!(
        r#"{XML_DECL}
<p:sldMaster xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">
<p:cSld>
<p:bg><p:bgPr><a:solidFill><a:srgbClr val="FFFFFF"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>
</p:spTree>
</p:cSld>
<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>
</p:sldMaster>"#
    )
}

fn slide_master_rels_xml() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="{REL_NS}">
<Relationship Id="rId1" Type="{REL_TYPE_BASE}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
<Relationship Id="rId2" Type="{REL_TYPE_BASE}/theme" Target="../theme/theme1.xml"/>
</Relationships>"#
    )
}

fn slide_layout_xml() -> String {
    format!(
        r#"{XML_DECL}
<p:sldLayout xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}" type="blank" preserve="1">
<p:cSld name="Blank">
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr/>
</p:spTree>
</p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#
    )
}

fn slide_layout_rels_xml() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="{REL_NS}">
<Relationship Id="rId1" Type="{REL_TYPE_BASE}/slideMaster" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#
    )
}

fn theme_xml() -> String {
    format!(
        r#"{XML_DECL}
<a:theme xmlns:a="{NS_A}" name="Office">
<a:themeElements>
<a:clrScheme name="Office">
<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
<a:dk2><a:srgbClr val="44546A"/></a:dk2>
<a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
<a:accent1><a:srgbClr val="4472C4"/></a:accent1>
<a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
<a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
<a:accent4><a:srgbClr val="FFC000"/></a:accent4>
<a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
<a:accent6><a:srgbClr val="70AD47"/></a:accent6>
<a:hlink><a:srgbClr val="0563C1"/></a:hlink>
<a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
</a:clrScheme>
<a:fontScheme name="Office">
<a:majorFont><a:latin typeface="Calibri Light"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>
<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>
</a:fontScheme>
<a:fmtScheme name="Office">
<a:fillStyleLst>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
</a:fillStyleLst>
<a:lnStyleLst>
<a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
<a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
<a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
</a:lnStyleLst>
<a:effectStyleLst>
<a:effectStyle><a:effectLst/></a:effectStyle>
<a:effectStyle><a:effectLst/></a:effectStyle>
<a:effectStyle><a:effectLst/></a:effectStyle>
</a:effectStyleLst>
<a:bgFillStyleLst>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
</a:bgFillStyleLst>
</a:fmtScheme>
</a:themeElements>
</a:theme>"#
    )
}

fn slide_xml(number: usize, placement: &Placement) -> String {
    let x = placement.x_emu();
    let y = placement.y_emu();
    let cx = placement.width_emu();
    let cy = placement.height_emu();
    format!(
        r#"{XML_DECL}
<p:sld xmlns:a="{NS_A}" xmlns:r="{NS_R}" xmlns:p="{NS_P}">
<p:cSld>
<p:spTree>
<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
<p:grpSpPr/>
<p:pic>
<p:nvPicPr><p:cNvPr id="2" name="Slide {number}"/><p:cNvPicPr/><p:nvPr/></p:nvPicPr>
<p:blipFill><a:blip r:embed="rId1"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>
<p:spPr>
<a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>
<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
</p:spPr>
</p:pic>
</p:spTree>
</p:cSld>
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#
    )
}

fn slide_rels_xml(number: usize) -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="{REL_NS}">
<Relationship Id="rId1" Type="{REL_TYPE_BASE}/image" Target="../media/image{number}.jpg"/>
<Relationship Id="rId2" Type="{REL_TYPE_BASE}/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>
</Relationships>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    const TOLERANCE: f64 = 1e-9;
    const CANVAS_ASPECT: f64 = CANVAS_WIDTH_IN / CANVAS_HEIGHT_IN;

    fn slide(index: usize, width: u32, height: u32) -> NormalizedImage {
        NormalizedImage {
            index,
            pixels: RgbImage::from_pixel(width, height, Rgb([50, 50, 50])),
        }
    }

    // ── Layout rule ──────────────────────────────────────────────────────

    #[test]
    fn wide_image_is_width_constrained() {
        // 4:1, much wider than 16:9.
        let p = letterbox(4000, 1000);
        assert!((p.width - CANVAS_WIDTH_IN).abs() < TOLERANCE);
        assert!((p.height - CANVAS_WIDTH_IN / 4.0).abs() < TOLERANCE);
        assert_eq!(p.x, 0.0);
        assert!((p.y - (CANVAS_HEIGHT_IN - p.height) / 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn tall_image_is_height_constrained() {
        // 3:4, narrower than 16:9.
        let p = letterbox(768, 1024);
        assert!((p.height - CANVAS_HEIGHT_IN).abs() < TOLERANCE);
        assert!((p.width - CANVAS_HEIGHT_IN * 0.75).abs() < TOLERANCE);
        assert_eq!(p.y, 0.0);
        assert!((p.x - (CANVAS_WIDTH_IN - p.width) / 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn exactly_one_axis_fills_the_canvas() {
        for (w, h) in [(1920, 1080), (800, 600), (2048, 512), (512, 2048), (1, 1)] {
            let p = letterbox(w, h);
            let fills_width = (p.width - CANVAS_WIDTH_IN).abs() < TOLERANCE;
            let fills_height = (p.height - CANVAS_HEIGHT_IN).abs() < TOLERANCE;
            let aspect = w as f64 / h as f64;
            if (aspect - CANVAS_ASPECT).abs() < TOLERANCE {
                assert!(fills_width && fills_height, "{w}x{h}");
            } else {
                assert!(
                    fills_width ^ fills_height,
                    "{w}x{h}: width={} height={}",
                    p.width,
                    p.height
                );
            }
            // Centered on the unconstrained axis, flush on the other.
            assert!((p.x - (CANVAS_WIDTH_IN - p.width) / 2.0).abs() < TOLERANCE);
            assert!((p.y - (CANVAS_HEIGHT_IN - p.height) / 2.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn placement_preserves_aspect_ratio() {
        let p = letterbox(1234, 777);
        let img_aspect = 1234.0 / 777.0;
        assert!((p.width / p.height - img_aspect).abs() < TOLERANCE);
    }

    #[test]
    fn emu_conversion_rounds() {
        assert_eq!(emu(1.0), 914_400);
        assert_eq!(emu(CANVAS_HEIGHT_IN), 6_858_000);
        assert_eq!(emu(0.0), 0);
    }

    // ── Container structure ──────────────────────────────────────────────

    fn read_archive(bytes: Vec<u8>) -> zip::ZipArchive<Cursor<Vec<u8>>> {
        zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip")
    }

    fn part_text(archive: &mut zip::ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        use std::io::Read;
        let mut part = archive.by_name(name).unwrap_or_else(|_| panic!("missing part {name}"));
        let mut text = String::new();
        part.read_to_string(&mut text).expect("utf-8 part");
        text
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(encode_pptx(&[]), Err(SlidesError::EmptyInput)));
    }

    #[test]
    fn one_slide_part_per_image() {
        let slides = vec![slide(0, 640, 360), slide(1, 640, 360), slide(2, 640, 360)];
        let bytes = encode_pptx(&slides).unwrap();
        let mut archive = read_archive(bytes);

        let slide_parts: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
            .collect();
        assert_eq!(slide_parts.len(), 3);

        let presentation = part_text(&mut archive, "ppt/presentation.xml");
        assert_eq!(presentation.matches("<p:sldId ").count(), 3);

        let types = part_text(&mut archive, "[Content_Types].xml");
        assert!(types.contains("/ppt/slides/slide3.xml"));
        assert!(!types.contains("/ppt/slides/slide4.xml"));
    }

    #[test]
    fn canvas_size_is_16_9() {
        let bytes = encode_pptx(&[slide(0, 100, 100)]).unwrap();
        let mut archive = read_archive(bytes);
        let presentation = part_text(&mut archive, "ppt/presentation.xml");
        assert!(presentation.contains(&format!(
            "<p:sldSz cx=\"{}\" cy=\"{}\"/>",
            emu(CANVAS_WIDTH_IN),
            emu(CANVAS_HEIGHT_IN)
        )));
    }

    #[test]
    fn square_image_is_pillarboxed_in_slide_xml() {
        let bytes = encode_pptx(&[slide(0, 500, 500)]).unwrap();
        let mut archive = read_archive(bytes);
        let slide_part = part_text(&mut archive, "ppt/slides/slide1.xml");

        let expected = letterbox(500, 500);
        assert!(slide_part.contains(&format!("<a:off x=\"{}\" y=\"0\"/>", emu(expected.x))));
        assert!(slide_part.contains(&format!(
            "<a:ext cx=\"{}\" cy=\"{}\"/>",
            emu(expected.width),
            emu(CANVAS_HEIGHT_IN)
        )));
    }

    #[test]
    fn media_is_jpeg() {
        use std::io::Read;
        let bytes = encode_pptx(&[slide(0, 320, 180)]).unwrap();
        let mut archive = read_archive(bytes);
        let mut media = archive.by_name("ppt/media/image1.jpg").unwrap();
        let mut payload = Vec::new();
        media.read_to_end(&mut payload).unwrap();
        assert_eq!(&payload[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn required_parts_present() {
        let bytes = encode_pptx(&[slide(0, 320, 180)]).unwrap();
        let mut archive = read_archive(bytes);
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/_rels/slide1.xml.rels",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing {name}");
        }
    }
}
