use clap::Parser;
use miette::Result;
use img2json::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert(args) => img2json::cli::convert::run(args)?,
        Commands::Info(args) => img2json::cli::info::run(args)?,
        Commands::Completions(args) => img2json::cli::completions::run(args)?,
    }

    Ok(())
}
