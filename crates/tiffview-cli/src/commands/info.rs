use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::Style;
use tiffview_core::io::loader::{decode, inspect};
use tiffview_core::metadata::format_metadata;
use tracing::debug;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let header = Style::new().cyan().bold();
    let label = Style::new().dim();

    for (i, path) in args.files.iter().enumerate() {
        if i > 0 {
            println!();
        }
        debug!("Inspecting {}", path.display());
        let img = decode(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let metadata = inspect(&img);

        println!("{}", header.apply_to(path.display()));
        println!(
            "{} {}",
            label.apply_to("Sample format:"),
            metadata.sample_format
        );
        println!("{}", format_metadata(&metadata));
    }

    Ok(())
}
