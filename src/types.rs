use serde::{Deserialize, Serialize};

/// A body-level paragraph with its runs in document order.
#[derive(Debug, Clone)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Concatenates the text of all runs in the paragraph.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A single text run. `picture_ids` holds the relationship identifiers of
/// any pictures embedded in the run's drawing content, in markup order.
#[derive(Debug, Clone, Default)]
pub struct Run {
    pub text: String,
    pub picture_ids: Vec<String>,
}

/// One `<Relationship>` entry from a package `.rels` part.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub id: String,
    pub rel_type: String,
    pub target: String,
}

impl Relationship {
    pub fn is_image(&self) -> bool {
        self.rel_type == crate::constants::IMAGE_RELATIONSHIP_TYPE
    }
}

/// The extraction record for one unique embedded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    /// 1-based ordinal in order of first appearance.
    pub index: usize,
    /// Relationship identifier the image was referenced by.
    pub rel_id: String,
    /// Output filename under the extraction directory.
    pub filename: String,
    /// Payload size in bytes.
    pub bytes: usize,
}

/// Summary of one extraction run, persisted as JSON next to the images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub source: String,
    pub output_dir: String,
    pub count: usize,
    pub images: Vec<ImageEntry>,
}
