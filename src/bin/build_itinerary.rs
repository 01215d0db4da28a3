//! Build the cohesive Michigan itinerary docx and embed extracted images.
//!
//! Inputs are kept intentionally simple and local to this repo: the content
//! is fixed, and images extracted earlier by `extract-images` are picked up
//! from the images directory when present.

use clap::Parser;
use docx_tools::{build_itinerary, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "build-itinerary")]
#[command(version)]
#[command(about = "Build the cohesive Michigan itinerary .docx")]
struct Cli {
    /// Output docx path
    #[arg(long, default_value = "output/Girls Trip to Michigan - Cohesive Itinerary.docx")]
    out: PathBuf,

    /// Directory containing extracted images
    #[arg(long = "images_dir", default_value = "output/michigan_docx_images")]
    images_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let doc = build_itinerary(&cli.images_dir)?;
    doc.save(&cli.out)?;

    println!("Wrote: {}", cli.out.display());
    Ok(())
}
