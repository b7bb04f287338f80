//! End-to-end integration tests for pdf2pptx.
//!
//! Structural tests (validation, geometry, packaging, overwrite semantics)
//! always run and need no PDF engine. Tests that rasterise through pdfium
//! detect a missing engine at runtime and skip with a message, so CI without
//! a pdfium library still passes; point PDFIUM_LIB_PATH at a library to run
//! them for real.
//!
//! Run with:
//!   cargo test --test e2e -- --nocapture

use pdf2pptx::{
    convert, convert_sync, output_path_for, pixels_to_emu, ConversionConfig, Pdf2PptxError,
    Presentation, DEFAULT_PX_TO_EMU_RATIO,
};
use std::io::Read;
use std::path::{Path, PathBuf};

// ── Test helpers ─────────────────────────────────────────────────────────────

/// Generate a minimal valid PDF with `page_count` empty US-Letter pages
/// (612 x 792 pt — 816 x 1056 px at 96 DPI), with a correct xref table.
fn minimal_pdf(page_count: usize) -> Vec<u8> {
    let mut objects: Vec<String> = Vec::new();
    objects.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());

    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", i + 3)).collect();
    objects.push(format!(
        "<< /Type /Pages /Kids [{}] /Count {} >>",
        kids.join(" "),
        page_count
    ));
    for _ in 0..page_count {
        objects.push("<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>".to_string());
    }

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
    pdf.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        pdf.push_str(&format!("{:010} 00000 n \n", offset));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));
    pdf.into_bytes()
}

fn write_minimal_pdf(dir: &Path, name: &str, page_count: usize) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, minimal_pdf(page_count)).unwrap();
    path
}

fn read_part(pptx_path: &Path, part: &str) -> String {
    let file = std::fs::File::open(pptx_path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(part).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

fn slide_part_count(pptx_path: &Path) -> usize {
    let file = std::fs::File::open(pptx_path).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    archive
        .file_names()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count()
}

/// Run a pdfium-backed conversion, skipping (returning None) when no engine
/// can be bound on this machine.
async fn convert_or_skip(
    source: &Path,
    dest: &Path,
    config: &ConversionConfig,
) -> Option<Result<pdf2pptx::ConversionOutput, Pdf2PptxError>> {
    match convert(source, dest, config).await {
        Err(Pdf2PptxError::PdfiumBindingFailed(msg)) => {
            println!("SKIP — no pdfium library available: {msg}");
            None
        }
        other => Some(other),
    }
}

// ── Validation tests (no pdfium) ─────────────────────────────────────────────

#[tokio::test]
async fn txt_source_fails_precondition_before_rasterisation() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("notes.txt");
    std::fs::write(&source, "plain text").unwrap();

    let err = convert(&source, dir.path(), &ConversionConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Pdf2PptxError::InvalidExtension { .. }));
}

#[tokio::test]
async fn missing_source_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert(
        dir.path().join("ghost.pdf"),
        dir.path(),
        &ConversionConfig::default(),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Pdf2PptxError::FileNotFound { .. }));
}

#[tokio::test]
async fn renamed_non_pdf_is_rejected_by_magic_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("fake.pdf");
    std::fs::write(&source, b"GIF89a definitely not a pdf").unwrap();

    let err = convert(&source, dir.path(), &ConversionConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Pdf2PptxError::NotAPdf { .. }));
}

// ── Geometry property (exactness) ────────────────────────────────────────────

#[test]
fn emu_mapping_is_exact_for_arbitrary_sizes() {
    for (w, h) in [(1u32, 1u32), (816, 1056), (1234, 7), (4096, 4096)] {
        assert_eq!(pixels_to_emu(w, DEFAULT_PX_TO_EMU_RATIO), w as i64 * 3_000);
        assert_eq!(pixels_to_emu(h, DEFAULT_PX_TO_EMU_RATIO), h as i64 * 3_000);
    }
}

// ── Serializer tests (no pdfium) ─────────────────────────────────────────────

fn tiny_png() -> Vec<u8> {
    use image::{Rgba, RgbaImage};
    let img = image::DynamicImage::ImageRgba8(RgbaImage::from_pixel(
        4,
        4,
        Rgba([0, 0, 0, 255]),
    ));
    let mut buf = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut buf),
        image::ImageFormat::Png,
    )
    .unwrap();
    buf
}

fn deck_of(n: usize) -> Presentation {
    let mut pres = Presentation::new();
    for i in 0..n {
        let w = ((i + 1) * 100) as i64;
        let h = ((i + 1) * 200) as i64;
        pres.set_slide_width(w);
        pres.set_slide_height(h);
        pres.add_slide()
            .add_picture_from_bytes(tiny_png(), 0, 0, w, h, Some(format!("Page {}", i + 1)))
            .unwrap();
    }
    pres
}

#[test]
fn saved_deck_has_one_slide_part_per_page() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deck.pptx");

    deck_of(3).save(&out).unwrap();
    assert_eq!(slide_part_count(&out), 3);

    // Slide order matches page order.
    let pres_xml = read_part(&out, "ppt/presentation.xml");
    assert!(pres_xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
    assert!(pres_xml.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));
    assert!(pres_xml.contains(r#"<p:sldId id="258" r:id="rId4"/>"#));

    let rels = read_part(&out, "ppt/_rels/presentation.xml.rels");
    for i in 1..=3 {
        assert!(rels.contains(&format!(r#"Target="slides/slide{i}.xml""#)));
    }
}

#[test]
fn deck_slide_size_equals_last_pages_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deck.pptx");
    deck_of(3).save(&out).unwrap();

    let pres_xml = read_part(&out, "ppt/presentation.xml");
    assert!(pres_xml.contains(r#"<p:sldSz cx="300" cy="600"/>"#));

    // Earlier slides keep their own full-bleed extents.
    let slide1 = read_part(&out, "ppt/slides/slide1.xml");
    assert!(slide1.contains(r#"<a:ext cx="100" cy="200"/>"#));
}

#[test]
fn saving_twice_overwrites_silently() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("deck.pptx");

    deck_of(1).save(&out).unwrap();
    let first_len = std::fs::metadata(&out).unwrap().len();

    deck_of(2).save(&out).unwrap();
    assert_eq!(slide_part_count(&out), 2);
    let second_len = std::fs::metadata(&out).unwrap().len();
    assert_ne!(first_len, second_len);

    // Same name both times, exactly one output file.
    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[cfg(unix)]
#[test]
fn readonly_destination_fails_without_leaving_output() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let readonly = dir.path().join("readonly");
    std::fs::create_dir(&readonly).unwrap();
    std::fs::set_permissions(&readonly, std::fs::Permissions::from_mode(0o555)).unwrap();

    let out = readonly.join("deck.pptx");
    match deck_of(1).save(&out) {
        Err(err) => {
            assert!(matches!(err, Pdf2PptxError::OutputWriteFailed { .. }));
            assert!(!out.exists(), "no readable partial output may remain");
        }
        // Root (e.g. in a container) bypasses directory permissions.
        Ok(_) => println!("SKIP — running with privileges that bypass directory permissions"),
    }

    // Restore so tempdir cleanup can delete it.
    std::fs::set_permissions(&readonly, std::fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn output_naming_is_base_name_plus_pptx() {
    assert_eq!(
        output_path_for("/in/deck.pdf", "/out"),
        PathBuf::from("/out/deck.pptx")
    );
    assert_eq!(
        output_path_for("/in/Annual Report.PDF", "/out"),
        PathBuf::from("/out/Annual Report.pptx")
    );
}

// ── Full pipeline through pdfium (skips when no engine is available) ─────────

#[tokio::test]
async fn three_page_pdf_becomes_three_slide_deck() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_minimal_pdf(dir.path(), "deck.pdf", 3);
    let out_dir = dir.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();

    let config = ConversionConfig::default();
    let Some(result) = convert_or_skip(&source, &out_dir, &config).await else {
        return;
    };
    let output = result.expect("conversion should succeed");

    assert_eq!(output.stats.total_pages, 3);
    assert_eq!(output.stats.slide_count, 3);
    assert_eq!(output.output_path, out_dir.join("deck.pptx"));
    assert!(output.output_path.exists());
    assert_eq!(slide_part_count(&output.output_path), 3);

    // 612 x 792 pt at 96 DPI → 816 x 1056 px → x3000 EMU.
    for (i, slide) in output.slides.iter().enumerate() {
        assert_eq!(slide.page_num, i + 1);
        assert_eq!(slide.pixel_width, 816);
        assert_eq!(slide.pixel_height, 1056);
        assert_eq!(slide.emu_width, 816 * 3_000);
        assert_eq!(slide.emu_height, 1056 * 3_000);
    }

    let pres_xml = read_part(&output.output_path, "ppt/presentation.xml");
    assert!(pres_xml.contains(&format!(
        r#"<p:sldSz cx="{}" cy="{}"/>"#,
        816 * 3_000,
        1056 * 3_000
    )));

    // One PNG media part per page.
    let media = {
        let file = std::fs::File::open(&output.output_path).unwrap();
        let archive = zip::ZipArchive::new(file).unwrap();
        archive
            .file_names()
            .filter(|n| n.starts_with("ppt/media/"))
            .count()
    };
    assert_eq!(media, 3);
}

#[tokio::test]
async fn converting_twice_reuses_the_same_output_name() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_minimal_pdf(dir.path(), "deck.pdf", 2);
    let out_dir = dir.path().join("out");
    std::fs::create_dir(&out_dir).unwrap();

    let config = ConversionConfig::default();
    let Some(first) = convert_or_skip(&source, &out_dir, &config).await else {
        return;
    };
    let first = first.expect("first conversion should succeed");

    let second = convert(&source, &out_dir, &config)
        .await
        .expect("second conversion should overwrite, not error");

    assert_eq!(first.output_path, second.output_path);
    let entries: Vec<_> = std::fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(entries.len(), 1, "second run must overwrite the first");
}

#[tokio::test]
async fn pages_of_different_sizes_keep_their_own_picture_extents() {
    // Two pages: US-Letter portrait and a 288 x 288 pt square.
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("mixed.pdf");
    let mut objects: Vec<String> = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R 4 0 R] /Count 2 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 288 288] >>".to_string(),
    ];
    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::new();
    for (i, body) in objects.drain(..).enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
    }
    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n", offsets.len() + 1));
    pdf.push_str("0000000000 65535 f \n");
    for offset in &offsets {
        pdf.push_str(&format!("{:010} 00000 n \n", offset));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        offsets.len() + 1,
        xref_offset
    ));
    std::fs::write(&source, pdf).unwrap();

    let config = ConversionConfig::default();
    let Some(result) = convert_or_skip(&source, dir.path(), &config).await else {
        return;
    };
    let output = result.expect("conversion should succeed");

    // 288 pt at 96 DPI → 384 px.
    assert_eq!(output.slides[0].emu_width, 816 * 3_000);
    assert_eq!(output.slides[1].emu_width, 384 * 3_000);

    // Deck-level size follows the last page; slide 1's picture keeps its own.
    let pres_xml = read_part(&output.output_path, "ppt/presentation.xml");
    assert!(pres_xml.contains(&format!(r#"<p:sldSz cx="{}""#, 384 * 3_000)));
    let slide1 = read_part(&output.output_path, "ppt/slides/slide1.xml");
    assert!(slide1.contains(&format!(r#"<a:ext cx="{}""#, 816 * 3_000)));
}

#[tokio::test]
async fn convert_from_bytes_produces_a_deck() {
    let dir = tempfile::tempdir().unwrap();
    let bytes = minimal_pdf(1);

    match pdf2pptx::convert_from_bytes(&bytes, dir.path(), &ConversionConfig::default()).await {
        Err(Pdf2PptxError::PdfiumBindingFailed(msg)) => {
            println!("SKIP — no pdfium library available: {msg}");
        }
        Ok(output) => {
            assert_eq!(output.stats.slide_count, 1);
            assert!(output.output_path.exists());
            assert_eq!(slide_part_count(&output.output_path), 1);
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
}

// ── Shell-level plumbing (simulate mode, no pdfium) ──────────────────────────

#[test]
fn simulate_job_runs_on_a_worker_thread_like_the_gui_does() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("deck.pdf");
    std::fs::write(&source, b"%PDF-1.4\n%%EOF\n").unwrap();
    let dest = dir.path().to_path_buf();

    let (tx, rx) = std::sync::mpsc::channel();
    let handle = std::thread::spawn(move || {
        let config = ConversionConfig::builder()
            .simulate(true)
            .simulate_delay_ms(20)
            .build()
            .unwrap();
        let result = convert_sync(&source, &dest, &config).map_err(|e| e.to_string());
        let _ = tx.send(result);
    });

    let result = rx
        .recv_timeout(std::time::Duration::from_secs(10))
        .expect("worker must report a result");
    handle.join().unwrap();

    let output = result.expect("simulate job should finish");
    assert_eq!(output.stats.slide_count, 0);
    assert!(output.output_path.as_os_str().is_empty());
}

#[test]
fn worker_relays_errors_as_strings() {
    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().to_path_buf();

    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let config = ConversionConfig::default();
        let result =
            convert_sync(Path::new("missing.txt"), &dest, &config).map_err(|e| e.to_string());
        let _ = tx.send(result);
    });

    let result = rx
        .recv_timeout(std::time::Duration::from_secs(10))
        .expect("worker must report a result");
    let msg = result.expect_err("a .txt source must fail validation");
    assert!(msg.contains(".pdf"), "got: {msg}");
}

// ── Sanity check on the test PDF generator itself ────────────────────────────

#[test]
fn minimal_pdf_generator_produces_pdf_magic_and_eof() {
    let bytes = minimal_pdf(3);
    assert!(bytes.starts_with(b"%PDF-1.4"));
    assert!(String::from_utf8(bytes).unwrap().ends_with("%%EOF\n"));
}
