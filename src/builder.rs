use crate::Result;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// English Metric Units per inch, the unit drawing extents are measured in.
pub const EMU_PER_INCH: u64 = 914_400;

/// Relationship ids `rId1`/`rId2` are taken by the styles and numbering
/// parts; image relationships start after them.
const FIRST_IMAGE_REL: usize = 3;

const W_XMLNS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Builds a new Word document in memory and saves it as a docx archive.
///
/// The builder covers the pieces an itinerary document needs: headings,
/// plain paragraphs, bulleted lists, and inline pictures scaled to a fixed
/// width. Parts are assembled as XML strings and zipped on `save`.
///
/// # Example
///
/// ```
/// use docx_tools::DocxBuilder;
///
/// let mut doc = DocxBuilder::new();
/// doc.add_heading("Packing list", 1);
/// doc.add_bullet("Hiking boots");
/// // doc.save(Path::new("packing.docx"))?;
/// ```
pub struct DocxBuilder {
    body: String,
    media: Vec<MediaPart>,
    media_by_source: HashMap<PathBuf, usize>,
    drawing_count: usize,
}

struct MediaPart {
    rel_id: String,
    filename: String,
    ext: String,
    data: Vec<u8>,
}

impl Default for DocxBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxBuilder {
    pub fn new() -> Self {
        Self {
            body: String::new(),
            media: Vec::new(),
            media_by_source: HashMap::new(),
            drawing_count: 0,
        }
    }

    /// Appends a heading paragraph. Level 0 is the document title; levels
    /// 1 through 3 map to the corresponding heading styles.
    pub fn add_heading(&mut self, text: &str, level: usize) {
        let style = match level {
            0 => "Title".to_string(),
            1..=3 => format!("Heading{}", level),
            _ => "Heading3".to_string(),
        };
        self.push_paragraph(Some(&style), false, text);
    }

    /// Appends a plain body paragraph. An empty string yields a blank
    /// paragraph.
    pub fn add_paragraph(&mut self, text: &str) {
        self.push_paragraph(None, false, text);
    }

    /// Appends a bulleted list item.
    pub fn add_bullet(&mut self, text: &str) {
        self.push_paragraph(Some("ListBullet"), true, text);
    }

    /// Appends every item of a slice as a bulleted list.
    pub fn add_bullets(&mut self, items: &[&str]) {
        for item in items {
            self.add_bullet(item);
        }
    }

    /// Embeds a picture from `path` as its own paragraph, scaled to
    /// `width_emu` with height kept proportional to the image's pixel
    /// dimensions.
    ///
    /// Adding the same source path twice reuses the existing media part and
    /// relationship id instead of storing the payload again.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or its image header cannot be
    /// decoded.
    pub fn add_picture(&mut self, path: &Path, width_emu: u64) -> Result<()> {
        let (px_width, px_height) = image::image_dimensions(path)?;
        let height_emu = width_emu * u64::from(px_height) / u64::from(px_width);

        let media_index = match self.media_by_source.get(path) {
            Some(&index) => index,
            None => {
                let data = fs::read(path)?;
                let ext = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.to_ascii_lowercase())
                    .unwrap_or_else(|| "png".to_string());
                let index = self.media.len();
                self.media.push(MediaPart {
                    rel_id: format!("rId{}", FIRST_IMAGE_REL + index),
                    filename: format!("image{}.{}", index + 1, ext),
                    ext,
                    data,
                });
                self.media_by_source.insert(path.to_path_buf(), index);
                index
            }
        };

        let media = &self.media[media_index];
        self.drawing_count += 1;
        let doc_pr_id = self.drawing_count;

        self.body.push_str(&format!(
            concat!(
                "<w:p><w:r><w:drawing>",
                "<wp:inline distT=\"0\" distB=\"0\" distL=\"0\" distR=\"0\">",
                "<wp:extent cx=\"{cx}\" cy=\"{cy}\"/>",
                "<wp:effectExtent l=\"0\" t=\"0\" r=\"0\" b=\"0\"/>",
                "<wp:docPr id=\"{id}\" name=\"Picture {id}\"/>",
                "<wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect=\"1\"/></wp:cNvGraphicFramePr>",
                "<a:graphic><a:graphicData uri=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">",
                "<pic:pic>",
                "<pic:nvPicPr><pic:cNvPr id=\"{id}\" name=\"{name}\"/><pic:cNvPicPr/></pic:nvPicPr>",
                "<pic:blipFill><a:blip r:embed=\"{rel}\"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill>",
                "<pic:spPr><a:xfrm><a:off x=\"0\" y=\"0\"/><a:ext cx=\"{cx}\" cy=\"{cy}\"/></a:xfrm>",
                "<a:prstGeom prst=\"rect\"><a:avLst/></a:prstGeom></pic:spPr>",
                "</pic:pic>",
                "</a:graphicData></a:graphic>",
                "</wp:inline>",
                "</w:drawing></w:r></w:p>",
            ),
            cx = width_emu,
            cy = height_emu,
            id = doc_pr_id,
            name = escape_xml(&media.filename),
            rel = media.rel_id,
        ));

        Ok(())
    }

    fn push_paragraph(&mut self, style: Option<&str>, numbered: bool, text: &str) {
        self.body.push_str("<w:p>");

        if let Some(style) = style {
            self.body.push_str("<w:pPr>");
            self.body
                .push_str(&format!("<w:pStyle w:val=\"{}\"/>", style));
            if numbered {
                self.body.push_str(
                    "<w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"1\"/></w:numPr>",
                );
            }
            self.body.push_str("</w:pPr>");
        }

        if !text.is_empty() {
            self.body.push_str(&format!(
                "<w:r><w:t xml:space=\"preserve\">{}</w:t></w:r>",
                escape_xml(text)
            ));
        }

        self.body.push_str("</w:p>");
    }

    /// Writes the assembled document as a docx archive.
    ///
    /// Parent directories are created as needed. XML parts are deflated;
    /// media payloads are stored uncompressed, matching the layout Word
    /// itself produces.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = fs::File::create(path)?;
        let mut zip = ZipWriter::new(file);
        let deflated =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        let stored =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

        zip.start_file("[Content_Types].xml", deflated)?;
        zip.write_all(self.content_types_xml().as_bytes())?;

        zip.start_file("_rels/.rels", deflated)?;
        zip.write_all(PACKAGE_RELS_XML.as_bytes())?;

        zip.start_file("word/document.xml", deflated)?;
        zip.write_all(self.document_xml().as_bytes())?;

        zip.start_file("word/_rels/document.xml.rels", deflated)?;
        zip.write_all(self.document_rels_xml().as_bytes())?;

        zip.start_file("word/styles.xml", deflated)?;
        zip.write_all(STYLES_XML.as_bytes())?;

        zip.start_file("word/numbering.xml", deflated)?;
        zip.write_all(NUMBERING_XML.as_bytes())?;

        for media in &self.media {
            zip.start_file(format!("word/media/{}", media.filename), stored)?;
            zip.write_all(&media.data)?;
        }

        zip.finish()?;
        Ok(())
    }

    fn document_xml(&self) -> String {
        format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
                "<w:document xmlns:w=\"{w}\"",
                " xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\"",
                " xmlns:wp=\"http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing\"",
                " xmlns:a=\"http://schemas.openxmlformats.org/drawingml/2006/main\"",
                " xmlns:pic=\"http://schemas.openxmlformats.org/drawingml/2006/picture\">",
                "<w:body>{body}",
                "<w:sectPr>",
                "<w:pgSz w:w=\"12240\" w:h=\"15840\"/>",
                "<w:pgMar w:top=\"1440\" w:right=\"1440\" w:bottom=\"1440\" w:left=\"1440\"",
                " w:header=\"708\" w:footer=\"708\" w:gutter=\"0\"/>",
                "<w:cols w:space=\"708\"/>",
                "</w:sectPr>",
                "</w:body>",
                "</w:document>",
            ),
            w = W_XMLNS,
            body = self.body,
        )
    }

    fn content_types_xml(&self) -> String {
        let mut types = String::from(concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
            "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">",
            "<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>",
            "<Default Extension=\"xml\" ContentType=\"application/xml\"/>",
        ));

        let extensions: BTreeSet<&str> = self.media.iter().map(|m| m.ext.as_str()).collect();
        for ext in extensions {
            types.push_str(&format!(
                "<Default Extension=\"{}\" ContentType=\"{}\"/>",
                ext,
                media_content_type(ext)
            ));
        }

        types.push_str(concat!(
            "<Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>",
            "<Override PartName=\"/word/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml\"/>",
            "<Override PartName=\"/word/numbering.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml\"/>",
            "</Types>",
        ));
        types
    }

    fn document_rels_xml(&self) -> String {
        let mut rels = String::from(concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
            "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
            "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\"/>",
            "<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering\" Target=\"numbering.xml\"/>",
        ));

        for media in &self.media {
            rels.push_str(&format!(
                "<Relationship Id=\"{}\" Type=\"{}\" Target=\"media/{}\"/>",
                media.rel_id,
                crate::constants::IMAGE_RELATIONSHIP_TYPE,
                media.filename
            ));
        }

        rels.push_str("</Relationships>");
        rels
    }
}

const PACKAGE_RELS_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
    "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"word/document.xml\"/>",
    "</Relationships>",
);

const STYLES_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    "<w:styles xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">",
    "<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\">",
    "<w:name w:val=\"Normal\"/><w:qFormat/>",
    "</w:style>",
    "<w:style w:type=\"paragraph\" w:styleId=\"Title\">",
    "<w:name w:val=\"Title\"/><w:basedOn w:val=\"Normal\"/><w:qFormat/>",
    "<w:rPr><w:b/><w:sz w:val=\"56\"/></w:rPr>",
    "</w:style>",
    "<w:style w:type=\"paragraph\" w:styleId=\"Heading1\">",
    "<w:name w:val=\"heading 1\"/><w:basedOn w:val=\"Normal\"/><w:qFormat/>",
    "<w:pPr><w:spacing w:before=\"240\" w:after=\"120\"/></w:pPr>",
    "<w:rPr><w:b/><w:sz w:val=\"32\"/></w:rPr>",
    "</w:style>",
    "<w:style w:type=\"paragraph\" w:styleId=\"Heading2\">",
    "<w:name w:val=\"heading 2\"/><w:basedOn w:val=\"Normal\"/><w:qFormat/>",
    "<w:pPr><w:spacing w:before=\"200\" w:after=\"100\"/></w:pPr>",
    "<w:rPr><w:b/><w:sz w:val=\"26\"/></w:rPr>",
    "</w:style>",
    "<w:style w:type=\"paragraph\" w:styleId=\"Heading3\">",
    "<w:name w:val=\"heading 3\"/><w:basedOn w:val=\"Normal\"/><w:qFormat/>",
    "<w:rPr><w:b/></w:rPr>",
    "</w:style>",
    "<w:style w:type=\"paragraph\" w:styleId=\"ListBullet\">",
    "<w:name w:val=\"List Bullet\"/><w:basedOn w:val=\"Normal\"/><w:qFormat/>",
    "</w:style>",
    "</w:styles>",
);

const NUMBERING_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    "<w:numbering xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">",
    "<w:abstractNum w:abstractNumId=\"0\">",
    "<w:lvl w:ilvl=\"0\">",
    "<w:start w:val=\"1\"/><w:numFmt w:val=\"bullet\"/><w:lvlText w:val=\"\u{2022}\"/><w:lvlJc w:val=\"left\"/>",
    "<w:pPr><w:ind w:left=\"720\" w:hanging=\"360\"/></w:pPr>",
    "</w:lvl>",
    "</w:abstractNum>",
    "<w:num w:numId=\"1\"><w:abstractNumId w:val=\"0\"/></w:num>",
    "</w:numbering>",
);

fn media_content_type(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "tiff" | "tif" => "image/tiff",
        _ => "application/octet-stream",
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & b < c"), "a &amp; b &lt; c");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_media_content_type() {
        assert_eq!(media_content_type("png"), "image/png");
        assert_eq!(media_content_type("jpeg"), "image/jpeg");
        assert_eq!(media_content_type("webp"), "application/octet-stream");
    }

    #[test]
    fn test_body_paragraph_markup() {
        let mut doc = DocxBuilder::new();
        doc.add_heading("Plan", 1);
        doc.add_paragraph("");
        doc.add_bullet("Pack snacks & water");

        assert!(doc.body.contains("<w:pStyle w:val=\"Heading1\"/>"));
        assert!(doc.body.contains("<w:p></w:p>"));
        assert!(doc.body.contains("<w:numId w:val=\"1\"/>"));
        assert!(doc.body.contains("Pack snacks &amp; water"));
    }
}
