use crate::constants::DOCUMENT_PART;
use crate::types::{Paragraph, Relationship};
use crate::Result;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Holds the internal representation of a loaded Word (docx) container.
///
/// `DocxContainer` provides access to the main document part, its
/// relationship table, and the binary parts (such as images) those
/// relationships point to, directly from the underlying ZIP archive.
pub struct DocxContainer {
    archive: zip::ZipArchive<std::fs::File>,
    path: PathBuf,
}

impl DocxContainer {
    /// Opens a Word docx file and initializes a `DocxContainer`.
    ///
    /// # Arguments
    ///
    /// - `path`: Path to the docx file.
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(DocxContainer)`: container instance upon successful file opening.
    /// - `Err(Error)`: if file access or reading the archive directory fails.
    pub fn open(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let archive = zip::ZipArchive::new(file)?;

        Ok(Self {
            archive,
            path: path.to_path_buf(),
        })
    }

    /// The path the container was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the main document part into body-level paragraphs.
    pub fn paragraphs(&mut self) -> Result<Vec<Paragraph>> {
        let data = self.read_file_from_archive(DOCUMENT_PART)?;
        crate::parse_xml::parse_document_xml(&data)
    }

    /// Reads and parses the main document part's relationship table.
    ///
    /// A document without a `.rels` part has no resolvable references, so a
    /// missing part yields an empty list rather than an error.
    pub fn relationships(&mut self) -> Result<Vec<Relationship>> {
        let rels_path = Self::get_part_rels_path(DOCUMENT_PART);
        match self.read_file_from_archive(&rels_path) {
            Ok(data) => crate::parse_rels::parse_document_rels(&data),
            Err(_) => Ok(Vec::new()),
        }
    }

    /// Reads the binary payload of a relationship target.
    ///
    /// # Arguments
    ///
    /// * `target` - The relationship's `Target` value, relative to the
    ///   document part (e.g. `media/image1.png`).
    pub fn part_bytes(&mut self, target: &str) -> Result<Vec<u8>> {
        let full_path = Self::get_full_part_path(target);
        self.read_file_from_archive(&full_path)
    }

    /// Reads a file from the docx archive by its internal path.
    ///
    /// # Arguments
    ///
    /// * `path` - The internal path of the file within the docx archive.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - The content of the file as a byte vector.
    /// * `Err(_)` - If the file could not be found or read.
    pub fn read_file_from_archive(&mut self, path: &str) -> Result<Vec<u8>> {
        let mut file = self.archive.by_name(path)?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    /// Constructs the path to the relationships file for a given part.
    ///
    /// # Example
    ///
    /// ```
    /// // For the part path "word/document.xml"
    /// // Returns "word/_rels/document.xml.rels"
    /// ```
    pub fn get_part_rels_path(part_path: &str) -> String {
        let mut rels_path = part_path.to_string();
        if let Some(pos) = rels_path.rfind('/') {
            rels_path.insert_str(pos + 1, "_rels/");
        }
        rels_path.push_str(".rels");
        rels_path
    }

    /// Resolves a relationship target to a full archive path.
    ///
    /// Targets are relative to the `word/` directory; a leading `../` refers
    /// to the package root.
    pub fn get_full_part_path(target: &str) -> String {
        if let Some(adjusted_target) = target.strip_prefix("../") {
            adjusted_target.to_string()
        } else if let Some(absolute) = target.strip_prefix('/') {
            absolute.to_string()
        } else {
            format!("word/{}", target)
        }
    }
}
