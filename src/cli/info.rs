//! Info command implementation.
//!
//! Loads a source and prints a summary of the resulting collection.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::points::PointCollection;

/// Show point count and bounds of an image or point document
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Image or JSON point document to inspect
    #[arg(required = true)]
    pub input: PathBuf,
}

pub fn run(args: InfoArgs) -> Result<()> {
    let printer = Printer::new();
    printer.status("Loading", &display_path(&args.input));

    let collection = PointCollection::load(&args.input)?;
    for line in summary(&collection) {
        println!("{}", line);
    }

    Ok(())
}

/// Human-readable summary lines for a collection.
fn summary(collection: &PointCollection) -> Vec<String> {
    let (width, height) = collection.bounds().raster_size();
    vec![
        format!("source: {}", collection.provenance().as_str()),
        format!("points: {}", collection.len()),
        format!("bounds: {}", collection.bounds()),
        format!("raster: {}x{}", width, height),
    ]
}
