use crate::container::DocxContainer;
use crate::types::{ImageEntry, Manifest, Paragraph};
use crate::Result;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Collects embedded picture relationship identifiers in visual order.
///
/// Walks paragraphs in document order and runs within each paragraph in
/// order, keeping the first occurrence of every identifier. A picture that
/// is referenced again later in the document is a duplicate of the same
/// logical image and is dropped.
pub fn picture_ids_in_order(paragraphs: &[Paragraph]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();

    for paragraph in paragraphs {
        for run in &paragraph.runs {
            for rel_id in &run.picture_ids {
                if seen.insert(rel_id.clone()) {
                    ordered.push(rel_id.clone());
                }
            }
        }
    }

    ordered
}

/// Derives a lowercase file extension from a part's target path.
///
/// Total over all inputs: a target whose final segment carries no suffix
/// falls back to `"bin"`.
pub fn derive_extension(name: &str) -> String {
    let segment = name.rsplit('/').next().unwrap_or(name);
    match segment.rfind('.') {
        Some(pos) if pos > 0 && pos + 1 < segment.len() => {
            segment[pos + 1..].to_ascii_lowercase()
        }
        _ => "bin".to_string(),
    }
}

/// Extracts all embedded images from an opened document into `out_dir`.
///
/// Images are written as numbered files (`img_01.png`, `img_02.jpeg`, ...)
/// in order of first appearance across the paragraph/run traversal. A
/// relationship identifier that cannot be resolved to a part is skipped and
/// does not consume an ordinal.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Manifest)`: description of every extracted image, with `count`
///   equal to the number of files written.
/// - `Err(Error)`: if the document parts cannot be read or an output file
///   cannot be written.
pub fn extract_images(container: &mut DocxContainer, out_dir: &Path) -> Result<Manifest> {
    fs::create_dir_all(out_dir)?;

    let paragraphs = container.paragraphs()?;
    let relationships = container.relationships()?;
    let targets_by_id: HashMap<&str, &str> = relationships
        .iter()
        .map(|rel| (rel.id.as_str(), rel.target.as_str()))
        .collect();

    let mut entries: Vec<ImageEntry> = Vec::new();

    for rel_id in picture_ids_in_order(&paragraphs) {
        let Some(target) = targets_by_id.get(rel_id.as_str()).copied() else {
            log::warn!("relationship {rel_id} has no matching part, skipping");
            continue;
        };

        let payload = match container.part_bytes(target) {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("part {target} for {rel_id} is unreadable, skipping: {err}");
                continue;
            }
        };

        let ext = derive_extension(target);
        let index = entries.len() + 1;
        // Past 99 images the counter widens to three digits on its own.
        let filename = format!("img_{index:02}.{ext}");
        fs::write(out_dir.join(&filename), &payload)?;
        log::debug!("wrote {filename} ({} bytes) from {rel_id}", payload.len());

        entries.push(ImageEntry {
            index,
            rel_id,
            filename,
            bytes: payload.len(),
        });
    }

    Ok(Manifest {
        source: container.path().display().to_string(),
        output_dir: out_dir.display().to_string(),
        count: entries.len(),
        images: entries,
    })
}

/// Serializes a manifest as pretty-printed JSON.
///
/// The JSON is written to a temporary sibling first and renamed into place,
/// so a failed run never leaves a half-written manifest behind.
pub fn write_manifest(manifest: &Manifest, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest)?;

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = Path::new(&tmp_path);

    fs::write(tmp_path, json)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Run;

    fn paragraph_with_ids(ids: &[&str]) -> Paragraph {
        Paragraph {
            runs: ids
                .iter()
                .map(|id| Run {
                    text: String::new(),
                    picture_ids: vec![id.to_string()],
                })
                .collect(),
        }
    }

    #[test]
    fn test_picture_ids_first_occurrence_wins() {
        let paragraphs = vec![
            paragraph_with_ids(&["rId5"]),
            paragraph_with_ids(&["rId7", "rId5"]),
        ];
        assert_eq!(picture_ids_in_order(&paragraphs), vec!["rId5", "rId7"]);
    }

    #[test]
    fn test_picture_ids_empty_document() {
        let paragraphs = vec![Paragraph { runs: Vec::new() }];
        assert!(picture_ids_in_order(&paragraphs).is_empty());
    }

    #[test]
    fn test_derive_extension() {
        assert_eq!(derive_extension("media/image1.png"), "png");
        assert_eq!(derive_extension("media/image2.JPEG"), "jpeg");
        assert_eq!(derive_extension("media/archive.tar.gz"), "gz");
        assert_eq!(derive_extension("media/blob"), "bin");
        assert_eq!(derive_extension("media/.hidden"), "bin");
        assert_eq!(derive_extension("media/trailing."), "bin");
        assert_eq!(derive_extension(""), "bin");
    }
}
