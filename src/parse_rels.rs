use crate::types::Relationship;
use crate::Result;
use roxmltree::Document;

/// Parses relationship (`.rels`) XML data from a Word document part.
///
/// A document's relationships map opaque identifiers (`rId5`, ...) to the
/// parts they reference, such as images under `word/media/`. Entries with
/// `TargetMode="External"` point outside the package (hyperlinks) and have
/// no part to resolve, so they are excluded.
///
/// # Arguments
///
/// - `xml_data`: Raw relationship XML data as a byte slice.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Relationship>)`: All internal relationships, in document order.
/// - `Err(Error)`: If provided XML data isn't valid UTF-8 or XML parsing fails.
pub fn parse_document_rels(xml_data: &[u8]) -> Result<Vec<Relationship>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let mut relationships = Vec::new();
    for rel in root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "Relationship")
    {
        if rel.attribute("TargetMode") == Some("External") {
            continue;
        }

        if let Some(id) = rel.attribute("Id") {
            if let Some(rel_type) = rel.attribute("Type") {
                if let Some(target) = rel.attribute("Target") {
                    relationships.push(Relationship {
                        id: id.to_string(),
                        rel_type: rel_type.to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }
    }

    Ok(relationships)
}
