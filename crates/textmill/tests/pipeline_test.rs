//! End-to-end pipeline tests.
//!
//! Exercises the public `extract_file` / `extract_bytes` surface across every
//! format category, plus concurrency behavior: parallel extractions must not
//! interfere with each other and OCR temp artifacts must never leak, whether
//! or not a Tesseract installation is present on the host.

use std::io::Write;
use std::path::Path;

use tempfile::tempdir;
use textmill::{
    ExtractError, ExtractionConfig, ExtractionMethod, FormatCategory, extract_bytes, extract_file,
};

fn config_with_temp_dir(dir: &Path) -> ExtractionConfig {
    ExtractionConfig {
        temp_dir: Some(dir.to_path_buf()),
        ..Default::default()
    }
}

fn leftover_artifacts(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

/// Build a minimal DOCX archive around the given WordprocessingML body.
fn docx_with_body(body: &str) -> Vec<u8> {
    use zip::write::{SimpleFileOptions, ZipWriter};

    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    writer
        .start_file("[Content_Types].xml", options)
        .unwrap();
    writer
        .write_all(
            br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#,
        )
        .unwrap();

    writer.start_file("word/document.xml", options).unwrap();
    writer
        .write_all(
            format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>{body}</w:body>
</w:document>"#
            )
            .as_bytes(),
        )
        .unwrap();

    writer.finish().unwrap().into_inner()
}

#[tokio::test]
async fn test_txt_upload_round_trips_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("stored");
    std::fs::write(&path, b"Hello world").unwrap();

    let config = ExtractionConfig::default();
    let result = extract_file(&path, "notes.txt", &config).await.unwrap();

    assert_eq!(result.content, "Hello world");
    assert_eq!(result.category, FormatCategory::PlainText);
    assert_eq!(result.method, ExtractionMethod::TextLayer);
}

#[tokio::test]
async fn test_txt_upload_preserves_every_byte() {
    let content = "Grüße aus Berlin\n\ttabbed line\némojis: ☀️\n";
    let config = ExtractionConfig::default();

    let result = extract_bytes(content.as_bytes(), "notes.txt", &config).await.unwrap();
    assert_eq!(result.content, content);
}

#[tokio::test]
async fn test_docx_with_paragraphs_extracts_text_without_ocr() {
    let dir = tempdir().unwrap();
    let temp = tempdir().unwrap();
    let config = config_with_temp_dir(temp.path());

    let docx = docx_with_body(
        "<w:p><w:r><w:t>First paragraph of the essay.</w:t></w:r></w:p>\
         <w:p><w:r><w:t>Second paragraph with more detail.</w:t></w:r></w:p>",
    );
    let path = dir.path().join("stored");
    std::fs::write(&path, &docx).unwrap();

    let result = extract_file(&path, "essay.docx", &config).await.unwrap();

    assert!(result.content.contains("First paragraph of the essay."));
    assert!(result.content.contains("Second paragraph with more detail."));
    assert_eq!(result.category, FormatCategory::Docx);
    assert_eq!(result.method, ExtractionMethod::TextLayer);
    // DOCX never escalates to OCR, so no temp artifact may appear.
    assert_eq!(leftover_artifacts(temp.path()), 0);
}

#[tokio::test]
async fn test_empty_docx_fails_without_ocr() {
    let temp = tempdir().unwrap();
    let config = config_with_temp_dir(temp.path());

    let docx = docx_with_body("");
    let result = extract_bytes(&docx, "blank.docx", &config).await;

    assert!(matches!(result, Err(ExtractError::DocxEmptyContent)));
    assert_eq!(leftover_artifacts(temp.path()), 0);
}

#[tokio::test]
async fn test_unknown_extension_with_binary_content_is_unsupported() {
    let config = ExtractionConfig::default();
    let bytes: Vec<u8> = (0..64u8).map(|i| i.wrapping_mul(37) ^ 0x80).collect();

    let result = extract_bytes(&bytes, "data.xyz", &config).await;
    assert!(matches!(result, Err(ExtractError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_empty_upload_with_unmapped_extension_is_never_empty_success() {
    // An empty file under an unmapped textish extension must fail as
    // unsupported, not come back as a successful empty extraction.
    let config = ExtractionConfig::default();
    let result = extract_bytes(b"", "table.csv", &config).await;
    assert!(matches!(result, Err(ExtractError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_svg_routes_through_unknown_and_decodes_as_text() {
    // SVG has no extension mapping and no raster signature; the decodable
    // XML is accepted through the unknown-format path instead of OCR.
    let config = ExtractionConfig::default();
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><text>hi</text></svg>"#;

    let result = extract_bytes(svg.as_bytes(), "img.svg", &config).await.unwrap();
    assert_eq!(result.category, FormatCategory::Unknown);
    assert_eq!(result.content, svg);
}

#[tokio::test]
async fn test_unknown_extension_with_text_content_is_accepted() {
    let config = ExtractionConfig::default();
    let result = extract_bytes(b"exported report, no extension convention", "report.dat", &config)
        .await
        .unwrap();

    assert_eq!(result.category, FormatCategory::Unknown);
    assert_eq!(result.content, "exported report, no extension convention");
}

#[tokio::test]
async fn test_blank_image_fails_and_cleans_up() {
    let temp = tempdir().unwrap();
    let config = config_with_temp_dir(temp.path());

    // Blank white PNG: with Tesseract installed recognition yields only
    // whitespace (OcrEmptyResult); without it, worker setup fails
    // (OcrInitFailed). Either way the call fails and the artifact is gone.
    let img = image::RgbImage::from_pixel(64, 64, image::Rgb([255, 255, 255]));
    let mut png = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
        .unwrap();

    let result = extract_bytes(&png, "photo.png", &config).await;
    match result {
        Err(ExtractError::OcrEmptyResult) | Err(ExtractError::OcrInitFailed { .. }) => {}
        other => panic!("expected OCR failure for blank image, got {:?}", other),
    }
    assert_eq!(leftover_artifacts(temp.path()), 0);
}

#[tokio::test]
async fn test_image_category_routes_to_ocr_even_for_garbage() {
    let temp = tempdir().unwrap();
    let config = config_with_temp_dir(temp.path());

    let result = extract_bytes(b"jpeg in name only", "photo.jpg", &config).await;
    assert!(matches!(result, Err(ExtractError::OcrInitFailed { .. })));
    assert_eq!(leftover_artifacts(temp.path()), 0);
}

#[tokio::test]
async fn test_concurrent_text_extractions_do_not_interleave() {
    let config = ExtractionConfig::default();

    let mut handles = vec![];
    for i in 0..16 {
        let config = config.clone();
        handles.push(tokio::spawn(async move {
            let body = format!("document number {i} with its own distinct body");
            let result = extract_bytes(body.as_bytes(), "notes.txt", &config).await.unwrap();
            (body, result.content)
        }));
    }

    for handle in handles {
        let (expected, actual) = handle.await.unwrap();
        assert_eq!(expected, actual);
    }
}

#[tokio::test]
async fn test_concurrent_ocr_attempts_share_temp_dir_safely() {
    let temp = tempdir().unwrap();
    let config = config_with_temp_dir(temp.path());

    // All attempts fail before recognition (undecodable bytes), but each one
    // creates and removes its own uniquely-named artifact in the shared dir.
    let mut handles = vec![];
    for i in 0..8u8 {
        let config = config.clone();
        handles.push(tokio::spawn(async move {
            extract_bytes(&[i; 32], "scan.png", &config).await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_err());
    }
    assert_eq!(leftover_artifacts(temp.path()), 0);
}

#[tokio::test]
async fn test_classification_never_fails() {
    for (name, bytes) in [
        ("a.pdf", &b""[..]),
        ("b", &b"\x00\x01"[..]),
        ("c.docx", &b"zzz"[..]),
        ("d.unknownext", &b"text"[..]),
    ] {
        let category = textmill::classify_bytes(name, bytes);
        // Exhaustive enum; reaching here without panicking is the property.
        let _ = category.as_str();
    }
}
