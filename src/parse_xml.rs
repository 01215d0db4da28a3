use crate::constants::{A_NAMESPACE, RELS_NAMESPACE, W_NAMESPACE};
use crate::types::{Paragraph, Run};
use crate::{Error, Result};
use roxmltree::{Document, Node};

/// Parses the main document part (`word/document.xml`) of a Word file into
/// body-level paragraphs.
///
/// Only direct `<w:p>` children of `<w:body>` are collected, in document
/// order; paragraphs nested inside tables or other containers are not
/// visited. Within each paragraph, direct `<w:r>` children are collected in
/// order.
///
/// # Arguments
///
/// - `xml_data`: Raw XML data of the document part as a byte slice.
///
/// # Returns
///
/// Returns a `Result` containing either:
/// - `Vec<Paragraph>`: Vector of parsed paragraphs.
/// - `Error`: If the data isn't valid UTF-8, XML parsing fails, or the
///   `<w:body>` element is missing.
pub fn parse_document_xml(xml_data: &[u8]) -> Result<Vec<Paragraph>> {
    let xml_str = std::str::from_utf8(xml_data)?;
    let doc = Document::parse(xml_str)?;
    let root = doc.root_element();

    let body = root
        .children()
        .find(|n| {
            n.is_element()
                && n.tag_name().name() == "body"
                && n.tag_name().namespace() == Some(W_NAMESPACE)
        })
        .ok_or(Error::ParseError("No <w:body> tag was found"))?;

    let mut paragraphs = Vec::new();
    for p_node in body.children().filter(|n| {
        n.is_element()
            && n.tag_name().name() == "p"
            && n.tag_name().namespace() == Some(W_NAMESPACE)
    }) {
        paragraphs.push(parse_paragraph(&p_node));
    }

    Ok(paragraphs)
}

/// Collects the direct `<w:r>` children of a paragraph node.
fn parse_paragraph(p_node: &Node) -> Paragraph {
    let runs = p_node
        .children()
        .filter(|n| {
            n.is_element()
                && n.tag_name().name() == "r"
                && n.tag_name().namespace() == Some(W_NAMESPACE)
        })
        .map(|r_node| parse_run(&r_node))
        .collect();

    Paragraph { runs }
}

/// Parses a single run node (`<w:r>`).
///
/// Text content is assembled from `<w:t>` elements, with `<w:tab>` mapped to
/// a tab character and `<w:br>`/`<w:cr>` mapped to a newline. The run's
/// drawing subtree is scanned for `blip` elements and each `r:embed`
/// attribute is recorded as an embedded picture reference.
fn parse_run(r_node: &Node) -> Run {
    let mut run = Run::default();

    for child in r_node.children().filter(|n| {
        n.is_element() && n.tag_name().namespace() == Some(W_NAMESPACE)
    }) {
        match child.tag_name().name() {
            "t" => {
                if let Some(t) = child.text() {
                    run.text.push_str(t);
                }
            }
            "tab" => run.text.push('\t'),
            "br" | "cr" => run.text.push('\n'),
            _ => {}
        }
    }

    for blip_node in r_node.descendants().filter(|n| {
        n.is_element()
            && n.tag_name().name() == "blip"
            && n.tag_name().namespace() == Some(A_NAMESPACE)
    }) {
        let embed_attr = blip_node
            .attribute((RELS_NAMESPACE, "embed"))
            .or_else(|| blip_node.attribute("r:embed"));

        if let Some(rel_id) = embed_attr {
            run.picture_ids.push(rel_id.to_string());
        }
    }

    run
}
