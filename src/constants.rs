/// Main WordprocessingML namespace (`w:` prefix in document markup).
pub const W_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// DrawingML namespace (`a:` prefix), used by embedded picture markup.
pub const A_NAMESPACE: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// Relationship-reference namespace (`r:` prefix), used for attributes such
/// as `r:embed` that point into a part's `.rels` table.
pub const RELS_NAMESPACE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Relationship `Type` value identifying an image part.
pub const IMAGE_RELATIONSHIP_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

/// Archive path of the main document part.
pub const DOCUMENT_PART: &str = "word/document.xml";
