//! Extract all embedded images from a docx, in the order they appear.
//!
//! Writes numbered image files into the output directory together with a
//! JSON manifest describing each image (order, relationship id, filename,
//! size in bytes).

use clap::Parser;
use docx_tools::{extract_images, write_manifest, DocxContainer, Result};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "extract-images")]
#[command(version)]
#[command(about = "Extract embedded images from a .docx in document order")]
struct Cli {
    /// Path to the .docx file
    docx: PathBuf,

    /// Output directory for extracted images
    #[arg(long, default_value = "images")]
    out: PathBuf,

    /// Manifest filename, written inside the output directory
    #[arg(long, default_value = "images_manifest.json")]
    manifest: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let docx_path = fs::canonicalize(&cli.docx)?;
    fs::create_dir_all(&cli.out)?;
    let out_dir = fs::canonicalize(&cli.out)?;

    let mut container = DocxContainer::open(&docx_path)?;
    let manifest = extract_images(&mut container, &out_dir)?;

    let manifest_path = out_dir.join(&cli.manifest);
    write_manifest(&manifest, &manifest_path)?;

    println!("Extracted {} images to: {}", manifest.count, out_dir.display());
    println!("Manifest: {}", manifest_path.display());
    Ok(())
}
