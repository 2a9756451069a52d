//! OOXML presentation writer.
//!
//! Stage 6: serializes [`SlideSpec`]s into a minimal but complete `.pptx`
//! package. A PresentationML package is a ZIP of XML parts tied together by
//! relationship files:
//!
//! ```text
//! [Content_Types].xml               part-name → MIME type map
//! _rels/.rels                       package root → presentation + doc props
//! docProps/{core,app}.xml           minimal document metadata
//! ppt/presentation.xml              slide size + ordered slide id list
//! ppt/_rels/presentation.xml.rels   presentation → master + slides
//! ppt/slideMasters/slideMaster1.xml one empty master
//! ppt/slideLayouts/slideLayout1.xml the "Blank" layout
//! ppt/theme/theme1.xml              minimal theme (required by the master)
//! ppt/slides/slideN.xml             one per slide spec
//! ppt/slides/_rels/slideN.xml.rels  slide → layout (+ QR image)
//! ppt/media/imageN.png              QR rasters, streamed from memory
//! ```
//!
//! ## Name Plate Geometry
//!
//! All positions are fixed, in EMU (914,400 per inch), on a 10×7.5in slide:
//!
//! - Name box: 1in from the left, 3in from the top, 6×2in; one paragraph,
//!   bold, 80pt, gray `808080`.
//! - QR picture: 7.5in from the left, 3in from the top, 1.5in tall, width
//!   scaled from the source raster's aspect ratio.
//!
//! Text lands in the XML through `quick_xml::escape`, so names like
//! `D&D <Club>` cannot break the part.

use crate::deck::SlideSpec;
use log::debug;
use quick_xml::escape::escape;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

#[derive(Error, Debug)]
pub enum PptxError {
    #[error("Failed to write presentation: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write presentation archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// EMU per inch, the native unit of OOXML drawing coordinates.
const EMU_PER_INCH: i64 = 914_400;

const fn inches(v_hundredths: i64) -> i64 {
    v_hundredths * EMU_PER_INCH / 100
}

// 10 × 7.5in slide — the stock 4:3 template.
const SLIDE_CX: i64 = inches(1000);
const SLIDE_CY: i64 = inches(750);

// Name box: left 1in, top 3in, 6in × 2in.
const NAME_LEFT: i64 = inches(100);
const NAME_TOP: i64 = inches(300);
const NAME_CX: i64 = inches(600);
const NAME_CY: i64 = inches(200);
/// Label font size in hundredths of a point (80pt).
const NAME_SIZE: i64 = 8000;
const NAME_COLOR: &str = "808080";

// QR picture: left 7.5in, top 3in, height 1.5in.
const QR_LEFT: i64 = inches(750);
const QR_TOP: i64 = inches(300);
const QR_CY: i64 = inches(150);

/// Serialize `slides` to a `.pptx` at `path`, overwriting any existing file.
///
/// Returns the absolute path of the written file. Zero slides is valid — the
/// package still opens, with an empty slide list.
pub fn write_deck(slides: &[SlideSpec], path: &Path) -> Result<PathBuf, PptxError> {
    let file = File::create(path)?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let part = |zip: &mut ZipWriter<File>, name: &str, body: &str| -> Result<(), PptxError> {
        zip.start_file(name, options)?;
        zip.write_all(body.as_bytes())?;
        Ok(())
    };

    part(&mut zip, "[Content_Types].xml", &content_types(slides.len()))?;
    part(&mut zip, "_rels/.rels", ROOT_RELS)?;
    part(&mut zip, "docProps/core.xml", CORE_PROPS)?;
    part(&mut zip, "docProps/app.xml", APP_PROPS)?;
    part(&mut zip, "ppt/presentation.xml", &presentation_xml(slides.len()))?;
    part(
        &mut zip,
        "ppt/_rels/presentation.xml.rels",
        &presentation_rels(slides.len()),
    )?;
    part(&mut zip, "ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER)?;
    part(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        MASTER_RELS,
    )?;
    part(&mut zip, "ppt/slideLayouts/slideLayout1.xml", BLANK_LAYOUT)?;
    part(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        LAYOUT_RELS,
    )?;
    part(&mut zip, "ppt/theme/theme1.xml", THEME)?;

    for (i, slide) in slides.iter().enumerate() {
        let n = i + 1;
        part(&mut zip, &format!("ppt/slides/slide{n}.xml"), &slide_xml(slide))?;
        part(
            &mut zip,
            &format!("ppt/slides/_rels/slide{n}.xml.rels"),
            &slide_rels(slide, n),
        )?;
        if let Some(qr) = &slide.qr {
            zip.start_file(format!("ppt/media/image{n}.png"), options)?;
            zip.write_all(&qr.bytes)?;
        }
    }

    zip.finish()?;

    let absolute = std::fs::canonicalize(path)?;
    debug!("wrote {} slide(s) to {}", slides.len(), absolute.display());
    Ok(absolute)
}

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

fn content_types(slide_count: usize) -> String {
    let mut xml = String::from(XML_DECL);
    xml.push_str(
        "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
         <Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
         <Default Extension=\"xml\" ContentType=\"application/xml\"/>\
         <Default Extension=\"png\" ContentType=\"image/png\"/>\
         <Override PartName=\"/docProps/core.xml\" ContentType=\"application/vnd.openxmlformats-package.core-properties+xml\"/>\
         <Override PartName=\"/docProps/app.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.extended-properties+xml\"/>\
         <Override PartName=\"/ppt/presentation.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml\"/>\
         <Override PartName=\"/ppt/slideMasters/slideMaster1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml\"/>\
         <Override PartName=\"/ppt/slideLayouts/slideLayout1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml\"/>\
         <Override PartName=\"/ppt/theme/theme1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.theme+xml\"/>",
    );
    for n in 1..=slide_count {
        xml.push_str(&format!(
            "<Override PartName=\"/ppt/slides/slide{n}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>"
        ));
    }
    xml.push_str("</Types>");
    xml
}

const ROOT_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"ppt/presentation.xml\"/>\
<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties\" Target=\"docProps/core.xml\"/>\
<Relationship Id=\"rId3\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties\" Target=\"docProps/app.xml\"/>\
</Relationships>";

const CORE_PROPS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<cp:coreProperties xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" \
xmlns:dc=\"http://purl.org/dc/elements/1.1/\">\
<dc:title>Name plates</dc:title><dc:creator>nameplate</dc:creator>\
</cp:coreProperties>";

const APP_PROPS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Properties xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\">\
<Application>nameplate</Application>\
</Properties>";

fn presentation_xml(slide_count: usize) -> String {
    let mut sld_ids = String::new();
    for n in 1..=slide_count {
        // rId1 is the master; slides start at rId2.
        sld_ids.push_str(&format!(
            "<p:sldId id=\"{}\" r:id=\"rId{}\"/>",
            255 + n,
            n + 1
        ));
    }
    format!(
        "{XML_DECL}<p:presentation xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\">\
<p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId1\"/></p:sldMasterIdLst>\
<p:sldIdLst>{sld_ids}</p:sldIdLst>\
<p:sldSz cx=\"{SLIDE_CX}\" cy=\"{SLIDE_CY}\" type=\"screen4x3\"/>\
<p:notesSz cx=\"{SLIDE_CY}\" cy=\"{SLIDE_CX}\"/>\
</p:presentation>"
    )
}

fn presentation_rels(slide_count: usize) -> String {
    let mut xml = String::from(XML_DECL);
    xml.push_str(
        "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
         <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster\" Target=\"slideMasters/slideMaster1.xml\"/>",
    );
    for n in 1..=slide_count {
        xml.push_str(&format!(
            "<Relationship Id=\"rId{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide\" Target=\"slides/slide{n}.xml\"/>",
            n + 1
        ));
    }
    xml.push_str("</Relationships>");
    xml
}

// An empty shape tree shared by the master, the layout, and every slide.
const EMPTY_SP_TREE_HEADER: &str = "<p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/>\
<p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
<p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/>\
<a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr>";

const SLIDE_MASTER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<p:sldMaster xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\">\
<p:cSld><p:bg><p:bgRef idx=\"1001\"><a:schemeClr val=\"bg1\"/></p:bgRef></p:bg>\
<p:spTree><p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/>\
<p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
<p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/>\
<a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld>\
<p:clrMap bg1=\"lt1\" tx1=\"dk1\" bg2=\"lt2\" tx2=\"dk2\" accent1=\"accent1\" \
accent2=\"accent2\" accent3=\"accent3\" accent4=\"accent4\" accent5=\"accent5\" \
accent6=\"accent6\" hlink=\"hlink\" folHlink=\"folHlink\"/>\
<p:sldLayoutIdLst><p:sldLayoutId id=\"2147483649\" r:id=\"rId1\"/></p:sldLayoutIdLst>\
</p:sldMaster>";

const MASTER_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout\" Target=\"../slideLayouts/slideLayout1.xml\"/>\
<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme\" Target=\"../theme/theme1.xml\"/>\
</Relationships>";

const BLANK_LAYOUT: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<p:sldLayout xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\" type=\"blank\" preserve=\"1\">\
<p:cSld name=\"Blank\"><p:spTree><p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/>\
<p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>\
<p:grpSpPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"0\" cy=\"0\"/>\
<a:chOff x=\"0\" y=\"0\"/><a:chExt cx=\"0\" cy=\"0\"/></a:xfrm></p:grpSpPr></p:spTree></p:cSld>\
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
</p:sldLayout>";

const LAYOUT_RELS: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster\" Target=\"../slideMasters/slideMaster1.xml\"/>\
</Relationships>";

// Smallest theme PowerPoint accepts: full color scheme, font scheme, and the
// three-entry fill/line/effect style lists.
const THEME: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
<a:theme xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" name=\"Plain\">\
<a:themeElements>\
<a:clrScheme name=\"Plain\">\
<a:dk1><a:sysClr val=\"windowText\" lastClr=\"000000\"/></a:dk1>\
<a:lt1><a:sysClr val=\"window\" lastClr=\"FFFFFF\"/></a:lt1>\
<a:dk2><a:srgbClr val=\"44546A\"/></a:dk2>\
<a:lt2><a:srgbClr val=\"E7E6E6\"/></a:lt2>\
<a:accent1><a:srgbClr val=\"4472C4\"/></a:accent1>\
<a:accent2><a:srgbClr val=\"ED7D31\"/></a:accent2>\
<a:accent3><a:srgbClr val=\"A5A5A5\"/></a:accent3>\
<a:accent4><a:srgbClr val=\"FFC000\"/></a:accent4>\
<a:accent5><a:srgbClr val=\"5B9BD5\"/></a:accent5>\
<a:accent6><a:srgbClr val=\"70AD47\"/></a:accent6>\
<a:hlink><a:srgbClr val=\"0563C1\"/></a:hlink>\
<a:folHlink><a:srgbClr val=\"954F72\"/></a:folHlink>\
</a:clrScheme>\
<a:fontScheme name=\"Plain\">\
<a:majorFont><a:latin typeface=\"Calibri Light\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:majorFont>\
<a:minorFont><a:latin typeface=\"Calibri\"/><a:ea typeface=\"\"/><a:cs typeface=\"\"/></a:minorFont>\
</a:fontScheme>\
<a:fmtScheme name=\"Plain\">\
<a:fillStyleLst>\
<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
</a:fillStyleLst>\
<a:lnStyleLst>\
<a:ln w=\"6350\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>\
<a:ln w=\"12700\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>\
<a:ln w=\"19050\"><a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill></a:ln>\
</a:lnStyleLst>\
<a:effectStyleLst>\
<a:effectStyle><a:effectLst/></a:effectStyle>\
<a:effectStyle><a:effectLst/></a:effectStyle>\
<a:effectStyle><a:effectLst/></a:effectStyle>\
</a:effectStyleLst>\
<a:bgFillStyleLst>\
<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
<a:solidFill><a:schemeClr val=\"phClr\"/></a:solidFill>\
</a:bgFillStyleLst>\
</a:fmtScheme>\
</a:themeElements>\
</a:theme>";

/// Build the XML part for one slide: the name box plus, when present, the QR
/// picture referencing `rId2` in the slide's relationship part.
fn slide_xml(slide: &SlideSpec) -> String {
    let name = escape(&slide.name);

    let picture = match &slide.qr {
        Some(qr) => {
            // Fixed height, width preserving the raster's aspect ratio.
            let cx = QR_CY * i64::from(qr.width) / i64::from(qr.height);
            format!(
                "<p:pic><p:nvPicPr><p:cNvPr id=\"3\" name=\"Contact QR\"/>\
<p:cNvPicPr/><p:nvPr/></p:nvPicPr>\
<p:blipFill><a:blip r:embed=\"rId2\"/><a:stretch><a:fillRect/></a:stretch></p:blipFill>\
<p:spPr><a:xfrm><a:off x=\"{QR_LEFT}\" y=\"{QR_TOP}\"/><a:ext cx=\"{cx}\" cy=\"{QR_CY}\"/></a:xfrm>\
<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></p:spPr></p:pic>"
            )
        }
        None => String::new(),
    };

    format!(
        "{XML_DECL}<p:sld xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\" \
xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\" \
xmlns:p=\"http://schemas.openxmlformats.org/presentationml/2006/main\">\
<p:cSld><p:spTree>{EMPTY_SP_TREE_HEADER}\
<p:sp><p:nvSpPr><p:cNvPr id=\"2\" name=\"Name Label\"/>\
<p:cNvSpPr txBox=\"1\"/><p:nvPr/></p:nvSpPr>\
<p:spPr><a:xfrm><a:off x=\"{NAME_LEFT}\" y=\"{NAME_TOP}\"/><a:ext cx=\"{NAME_CX}\" cy=\"{NAME_CY}\"/></a:xfrm>\
<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></p:spPr>\
<p:txBody><a:bodyPr wrap=\"square\"/><a:lstStyle/>\
<a:p><a:r><a:rPr lang=\"en-US\" sz=\"{NAME_SIZE}\" b=\"1\" dirty=\"0\">\
<a:solidFill><a:srgbClr val=\"{NAME_COLOR}\"/></a:solidFill></a:rPr>\
<a:t>{name}</a:t></a:r></a:p></p:txBody></p:sp>\
{picture}\
</p:spTree></p:cSld>\
<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>\
</p:sld>"
    )
}

fn slide_rels(slide: &SlideSpec, n: usize) -> String {
    let mut xml = String::from(XML_DECL);
    xml.push_str(
        "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
         <Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout\" Target=\"../slideLayouts/slideLayout1.xml\"/>",
    );
    if slide.qr.is_some() {
        xml.push_str(&format!(
            "<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/image\" Target=\"../media/image{n}.png\"/>"
        ));
    }
    xml.push_str("</Relationships>");
    xml
}
