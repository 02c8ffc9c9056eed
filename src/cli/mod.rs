pub mod categories;
pub mod check;

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use ledgerlint::error::Result;

#[derive(Parser)]
#[command(name = "ledgerlint", about = "Validate budget transaction CSV exports.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate transaction export files.
    Check {
        /// A file, or a directory to scan for exports
        path: String,
        /// File extension to look for when scanning a directory
        #[arg(long, default_value = "csv")]
        ext: String,
        /// Print one JSON report per file instead of text
        #[arg(long)]
        json: bool,
        /// Also reject calendar-impossible dates and amounts with
        /// trailing characters
        #[arg(long)]
        strict: bool,
        /// Cross-check each row's category against the taxonomy for the
        /// row's type
        #[arg(long)]
        categories: bool,
    },
    /// List the category taxonomy.
    Categories,
    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn completions(shell: Shell) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), "ledgerlint", &mut io::stdout());
    Ok(())
}
