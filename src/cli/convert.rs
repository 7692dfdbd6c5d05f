//! Convert command implementation.
//!
//! Loads an image or point document, runs the filters in order, and writes
//! the result to every requested output.

use std::path::PathBuf;

use clap::Args;
use nanorand::WyRand;

use crate::config::PipelineConfig;
use crate::error::{Img2JsonError, Result};
use crate::filters::FilterStep;
use crate::output::{display_path, plural, Printer};
use crate::points::{Format, PointCollection, Provenance};

/// Convert an image or point document, optionally filtering it
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Image or JSON point document to read
    pub input: Option<PathBuf>,

    /// Filter to apply, in order: color:RMIN,GMIN,BMIN,RMAX,GMAX,BMAX or rand:PERCENT
    #[arg(long = "filter", short = 'f')]
    pub filters: Vec<FilterStep>,

    /// Output path; `.json` writes points, anything else writes a PNG
    #[arg(long = "output", short = 'o')]
    pub outputs: Vec<PathBuf>,

    /// Pipeline file (YAML) supplying defaults for the above
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for the random filter
    #[arg(long)]
    pub seed: Option<u64>,

    /// Only report errors
    #[arg(long, short)]
    pub quiet: bool,
}

/// A fully resolved conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    pub input: PathBuf,
    pub filters: Vec<FilterStep>,
    pub outputs: Vec<PathBuf>,
    pub seed: Option<u64>,
}

impl Pipeline {
    /// Merge command-line arguments over an optional pipeline file.
    pub fn resolve(args: &ConvertArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };
        Self::merge(args, config)
    }

    fn merge(args: &ConvertArgs, config: PipelineConfig) -> Result<Self> {
        let filters = if args.filters.is_empty() {
            config.filter_steps()?
        } else {
            args.filters.clone()
        };

        let outputs = if args.outputs.is_empty() {
            config.outputs
        } else {
            args.outputs.clone()
        };

        let input = args.input.clone().or(config.input).ok_or_else(|| Img2JsonError::Parse {
            message: "No input given".to_string(),
            help: Some("Pass an input path or set `input` in the pipeline file".to_string()),
        })?;

        if outputs.is_empty() {
            return Err(Img2JsonError::Parse {
                message: "No outputs given".to_string(),
                help: Some("Pass --output PATH or set `outputs` in the pipeline file".to_string()),
            });
        }

        Ok(Self {
            input,
            filters,
            outputs,
            seed: args.seed.or(config.seed),
        })
    }

    /// Run the pipeline, returning the filtered collection.
    ///
    /// Every output is attempted even if an earlier one fails; the first
    /// failure is returned once all have been tried.
    pub fn execute(&self, printer: &Printer) -> Result<PointCollection> {
        printer.status("Loading", &display_path(&self.input));
        let mut collection = PointCollection::load(&self.input)?;
        printer.info(
            "Loaded",
            &format!(
                "{} ({} bounds {})",
                plural(collection.len(), "point", "points"),
                collection.provenance().as_str(),
                collection.bounds()
            ),
        );

        let mut rng = match self.seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        };

        for step in &self.filters {
            let before = collection.len();
            step.apply(&mut collection, &mut rng)?;
            printer.status(
                "Filtered",
                &format!("{} ({} -> {})", step, before, collection.len()),
            );
        }

        let mut first_error = None;
        for output in &self.outputs {
            if Format::from_path(output) == Format::Image
                && collection.provenance() == Provenance::Json
            {
                printer.warning(
                    "Warning",
                    &format!(
                        "{} is sized to the max corner {}; points on its last row and column are dropped",
                        display_path(output),
                        collection.bounds()
                    ),
                );
            }

            printer.status("Writing", &display_path(output));
            if let Err(e) = collection.save(output) {
                printer.error("Failed", &e.to_string());
                first_error.get_or_insert(e);
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        printer.success(
            "Finished",
            &format!(
                "{} written to {}",
                plural(collection.len(), "point", "points"),
                plural(self.outputs.len(), "output", "outputs")
            ),
        );

        Ok(collection)
    }
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let printer = if args.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    let pipeline = Pipeline::resolve(&args)?;
    pipeline.execute(&printer)?;
    Ok(())
}
