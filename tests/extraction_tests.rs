use docx_tools::{extract_images, paragraph_lines, write_manifest, DocxContainer, Manifest};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Default Extension="png" ContentType="image/png"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;

const PACKAGE_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

fn load_test_data(filename: &str) -> Vec<u8> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("test_data");
    path.push("xml");
    path.push(filename);
    fs::read(path).expect("Unable to read test data file")
}

/// Assembles a minimal docx archive from raw parts.
fn write_test_docx(
    path: &Path,
    document_xml: &[u8],
    rels_xml: Option<&[u8]>,
    media: &[(&str, &[u8])],
) {
    let file = fs::File::create(path).expect("Unable to create test docx");
    let mut zip = zip::ZipWriter::new(file);
    let opts = zip::write::SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", opts).unwrap();
    zip.write_all(CONTENT_TYPES.as_bytes()).unwrap();
    zip.start_file("_rels/.rels", opts).unwrap();
    zip.write_all(PACKAGE_RELS.as_bytes()).unwrap();
    zip.start_file("word/document.xml", opts).unwrap();
    zip.write_all(document_xml).unwrap();

    if let Some(rels_xml) = rels_xml {
        zip.start_file("word/_rels/document.xml.rels", opts).unwrap();
        zip.write_all(rels_xml).unwrap();
    }

    for (name, data) in media {
        zip.start_file(format!("word/media/{}", name), opts).unwrap();
        zip.write_all(data).unwrap();
    }

    zip.finish().unwrap();
}

const IMAGE_A: &[u8] = b"not-really-a-png-but-bytes-are-bytes";
const IMAGE_B: &[u8] = b"second-payload";

fn docx_with_duplicate_references(dir: &Path) -> PathBuf {
    let docx_path = dir.join("sample.docx");
    write_test_docx(
        &docx_path,
        &load_test_data("document_with_images.xml"),
        Some(load_test_data("rels_with_images.xml").as_slice()),
        &[("image1.png", IMAGE_A), ("image2.png", IMAGE_B)],
    );
    docx_path
}

#[test]
fn test_duplicate_reference_yields_single_entry() {
    let dir = tempfile::tempdir().unwrap();
    let docx_path = docx_with_duplicate_references(dir.path());
    let out_dir = dir.path().join("images");

    // The document references rId5, rId7, rId5 in traversal order.
    let mut container = DocxContainer::open(&docx_path).unwrap();
    let manifest = extract_images(&mut container, &out_dir).unwrap();

    assert_eq!(manifest.count, 2);
    assert_eq!(manifest.count, manifest.images.len());

    assert_eq!(manifest.images[0].index, 1);
    assert_eq!(manifest.images[0].rel_id, "rId5");
    assert_eq!(manifest.images[0].filename, "img_01.png");
    assert_eq!(manifest.images[0].bytes, IMAGE_A.len());

    assert_eq!(manifest.images[1].index, 2);
    assert_eq!(manifest.images[1].rel_id, "rId7");
    assert_eq!(manifest.images[1].filename, "img_02.png");
    assert_eq!(manifest.images[1].bytes, IMAGE_B.len());
}

#[test]
fn test_written_files_match_manifest_byte_lengths() {
    let dir = tempfile::tempdir().unwrap();
    let docx_path = docx_with_duplicate_references(dir.path());
    let out_dir = dir.path().join("images");

    let mut container = DocxContainer::open(&docx_path).unwrap();
    let manifest = extract_images(&mut container, &out_dir).unwrap();

    for entry in &manifest.images {
        let written = fs::metadata(out_dir.join(&entry.filename)).unwrap().len();
        assert_eq!(written as usize, entry.bytes);
    }
}

#[test]
fn test_extraction_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let docx_path = docx_with_duplicate_references(dir.path());
    let out_dir = dir.path().join("images");

    let mut container = DocxContainer::open(&docx_path).unwrap();
    let first = extract_images(&mut container, &out_dir).unwrap();

    fs::remove_dir_all(&out_dir).unwrap();

    let mut container = DocxContainer::open(&docx_path).unwrap();
    let second = extract_images(&mut container, &out_dir).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_unresolvable_relationship_is_skipped() {
    // The document references rId5 first, but only rId7 resolves to a part.
    // rId5 must not consume an ordinal.
    let rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId7" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/image2.png"/>
</Relationships>"#;

    let dir = tempfile::tempdir().unwrap();
    let docx_path = dir.path().join("broken.docx");
    write_test_docx(
        &docx_path,
        &load_test_data("document_with_images.xml"),
        Some(rels.as_bytes()),
        &[("image2.png", IMAGE_B)],
    );
    let out_dir = dir.path().join("images");

    let mut container = DocxContainer::open(&docx_path).unwrap();
    let manifest = extract_images(&mut container, &out_dir).unwrap();

    assert_eq!(manifest.count, 1);
    assert_eq!(manifest.images[0].index, 1);
    assert_eq!(manifest.images[0].rel_id, "rId7");
    assert_eq!(manifest.images[0].filename, "img_01.png");
}

#[test]
fn test_unreadable_part_is_skipped() {
    // rId5 resolves in the rels table but its media part is absent from the
    // archive; rId7 still extracts as ordinal 1.
    let dir = tempfile::tempdir().unwrap();
    let docx_path = dir.path().join("missing-part.docx");
    write_test_docx(
        &docx_path,
        &load_test_data("document_with_images.xml"),
        Some(load_test_data("rels_with_images.xml").as_slice()),
        &[("image2.png", IMAGE_B)],
    );
    let out_dir = dir.path().join("images");

    let mut container = DocxContainer::open(&docx_path).unwrap();
    let manifest = extract_images(&mut container, &out_dir).unwrap();

    assert_eq!(manifest.count, 1);
    assert_eq!(manifest.images[0].rel_id, "rId7");
    assert_eq!(manifest.images[0].filename, "img_01.png");
}

#[test]
fn test_document_without_images_yields_empty_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let docx_path = dir.path().join("plain.docx");
    write_test_docx(
        &docx_path,
        &load_test_data("document_plain.xml"),
        Some(load_test_data("rels_without_images.xml").as_slice()),
        &[],
    );
    let out_dir = dir.path().join("images");

    let mut container = DocxContainer::open(&docx_path).unwrap();
    let manifest = extract_images(&mut container, &out_dir).unwrap();

    assert_eq!(manifest.count, 0);
    assert!(manifest.images.is_empty());

    let manifest_path = out_dir.join("images_manifest.json");
    write_manifest(&manifest, &manifest_path).unwrap();

    let entries: Vec<_> = fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(entries.len(), 1);

    let reloaded: Manifest =
        serde_json::from_slice(&fs::read(&manifest_path).unwrap()).unwrap();
    assert_eq!(reloaded, manifest);
}

#[test]
fn test_text_extraction_skips_blank_paragraphs() {
    let dir = tempfile::tempdir().unwrap();
    let docx_path = dir.path().join("plain.docx");
    write_test_docx(
        &docx_path,
        &load_test_data("document_plain.xml"),
        None,
        &[],
    );

    let mut container = DocxContainer::open(&docx_path).unwrap();
    let lines = paragraph_lines(&container.paragraphs().unwrap());
    assert_eq!(lines, vec!["Hello", "World"]);

    let mut content = lines.join("\n");
    content.push('\n');
    assert_eq!(content, "Hello\nWorld\n");
}

#[test]
fn test_opening_a_non_docx_fails() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("not-a-docx.docx");
    fs::write(&bogus, b"plain text, not a zip").unwrap();

    assert!(DocxContainer::open(&bogus).is_err());
}
