mod builder;
mod constants;
mod container;
mod extract;
mod itinerary;
mod parse_rels;
mod parse_xml;
mod text;
mod types;

pub use builder::{DocxBuilder, EMU_PER_INCH};
pub use container::DocxContainer;
pub use extract::{derive_extension, extract_images, picture_ids_in_order, write_manifest};
pub use itinerary::build_itinerary;
pub use parse_rels::parse_document_rels;
pub use parse_xml::parse_document_xml;
pub use text::paragraph_lines;
pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Part not found: {0}")]
    PartNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
