//! Extract reasonably structured text from a docx.
//!
//! Intentionally simple: headings and paragraphs become plain text lines,
//! one non-empty paragraph per line.

use clap::Parser;
use docx_tools::{paragraph_lines, DocxContainer, Result};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "extract-text")]
#[command(version)]
#[command(about = "Extract paragraph text from a .docx into a plain-text file")]
struct Cli {
    /// Path to the .docx file
    docx: PathBuf,

    /// Output text file path
    #[arg(long, default_value = "docx_text.txt")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let docx_path = fs::canonicalize(&cli.docx)?;
    if let Some(parent) = cli.out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut container = DocxContainer::open(&docx_path)?;
    let lines = paragraph_lines(&container.paragraphs()?);

    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&cli.out, content)?;

    println!("Wrote: {}", cli.out.display());
    Ok(())
}
