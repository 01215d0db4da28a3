use crate::types::Paragraph;

/// Produces one trimmed line per non-empty paragraph, in document order.
///
/// Paragraphs that are empty or whitespace-only are omitted.
pub fn paragraph_lines(paragraphs: &[Paragraph]) -> Vec<String> {
    paragraphs
        .iter()
        .map(|p| p.text().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}
