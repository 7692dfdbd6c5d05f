pub mod completions;
pub mod convert;
pub mod info;

use clap::{Parser, Subcommand};

/// img2json - Image to JSON point converter with filtering
#[derive(Parser, Debug)]
#[command(name = "img2json")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an image or point document, optionally filtering it
    Convert(convert::ConvertArgs),

    /// Show point count and bounds of an image or point document
    Info(info::InfoArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
