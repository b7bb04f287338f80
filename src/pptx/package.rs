//! ZIP packaging: serialize a [`Presentation`] into the OOXML container.
//!
//! XML parts are deflated; media parts are stored as-is since PNG and JPEG
//! data is already compressed. Relationship IDs are assigned here and fed to
//! the XML generators so the part references always match the `.rels` parts:
//! in `presentation.xml.rels` rId1 is the slide master and slides start at
//! rId2; in each slide's rels rId1 is the blank layout and pictures start at
//! rId2.

use crate::pptx::presentation::Presentation;
use crate::pptx::template;
use std::fmt::Write as FmtWrite;
use std::io::{Seek, Write};
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

pub(crate) fn write_package<W: Write + Seek>(
    pres: &Presentation,
    writer: W,
) -> std::io::Result<()> {
    let mut zip = ZipWriter::new(writer);
    let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let stored = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    // Global media numbering across slides: image1, image2, ...
    let media_names = assign_media_names(pres);

    zip.start_file("[Content_Types].xml", deflated)?;
    zip.write_all(content_types_xml(pres).as_bytes())?;

    zip.start_file("_rels/.rels", deflated)?;
    zip.write_all(template::root_rels().as_bytes())?;

    let slide_rel_ids: Vec<String> = (0..pres.slide_count())
        .map(|i| format!("rId{}", i + 2))
        .collect();

    zip.start_file("ppt/presentation.xml", deflated)?;
    zip.write_all(pres.presentation_xml(&slide_rel_ids).as_bytes())?;

    zip.start_file("ppt/_rels/presentation.xml.rels", deflated)?;
    zip.write_all(presentation_rels_xml(pres, &slide_rel_ids).as_bytes())?;

    zip.start_file("ppt/slideMasters/slideMaster1.xml", deflated)?;
    zip.write_all(template::slide_master_xml().as_bytes())?;

    zip.start_file("ppt/slideMasters/_rels/slideMaster1.xml.rels", deflated)?;
    zip.write_all(template::slide_master_rels().as_bytes())?;

    zip.start_file("ppt/slideLayouts/slideLayout1.xml", deflated)?;
    zip.write_all(template::slide_layout_xml().as_bytes())?;

    zip.start_file("ppt/slideLayouts/_rels/slideLayout1.xml.rels", deflated)?;
    zip.write_all(template::slide_layout_rels().as_bytes())?;

    zip.start_file("ppt/theme/theme1.xml", deflated)?;
    zip.write_all(template::theme_xml().as_bytes())?;

    let mut media_cursor = 0usize;
    for (slide_index, slide) in pres.slides().iter().enumerate() {
        let slide_num = slide_index + 1;
        let slide_media = &media_names[media_cursor..media_cursor + slide.picture_count()];
        media_cursor += slide.picture_count();

        let picture_rel_ids: Vec<String> = (0..slide.picture_count())
            .map(|i| format!("rId{}", i + 2))
            .collect();

        zip.start_file(format!("ppt/slides/slide{slide_num}.xml"), deflated)?;
        zip.write_all(slide.to_xml(&picture_rel_ids).as_bytes())?;

        zip.start_file(
            format!("ppt/slides/_rels/slide{slide_num}.xml.rels"),
            deflated,
        )?;
        zip.write_all(slide_rels_xml(slide_media, &picture_rel_ids).as_bytes())?;
    }

    let mut media_cursor = 0usize;
    for slide in pres.slides() {
        for picture in &slide.pictures {
            zip.start_file(format!("ppt/media/{}", media_names[media_cursor]), stored)?;
            zip.write_all(&picture.data)?;
            media_cursor += 1;
        }
    }

    zip.finish()?;
    Ok(())
}

/// Name every media part, in slide then picture order.
fn assign_media_names(pres: &Presentation) -> Vec<String> {
    let mut names = Vec::new();
    for slide in pres.slides() {
        for picture in &slide.pictures {
            names.push(format!(
                "image{}.{}",
                names.len() + 1,
                picture.format.extension()
            ));
        }
    }
    names
}

fn content_types_xml(pres: &Presentation) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push_str(r#"<Default Extension="png" ContentType="image/png"/>"#);
    xml.push_str(r#"<Default Extension="jpeg" ContentType="image/jpeg"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>"#);
    xml.push_str(r#"<Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>"#);
    for i in 1..=pres.slide_count() {
        let _ = write!(
            xml,
            r#"<Override PartName="/ppt/slides/slide{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        );
    }
    xml.push_str("</Types>");
    xml
}

fn presentation_rels_xml(pres: &Presentation, slide_rel_ids: &[String]) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    xml.push_str(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster" Target="slideMasters/slideMaster1.xml"/>"#);
    for (i, rel_id) in slide_rel_ids.iter().enumerate().take(pres.slide_count()) {
        let _ = write!(
            xml,
            r#"<Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{}.xml"/>"#,
            rel_id,
            i + 1
        );
    }
    xml.push_str("</Relationships>");
    xml
}

fn slide_rels_xml(media_names: &[String], picture_rel_ids: &[String]) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    xml.push_str(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout" Target="../slideLayouts/slideLayout1.xml"/>"#);
    for (rel_id, media) in picture_rel_ids.iter().zip(media_names) {
        let _ = write!(
            xml,
            r#"<Relationship Id="{rel_id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="../media/{media}"/>"#
        );
    }
    xml.push_str("</Relationships>");
    xml
}
