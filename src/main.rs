mod cli;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            path,
            ext,
            json,
            strict,
            categories,
        } => cli::check::run(&path, &ext, json, strict, categories),
        Commands::Categories => cli::categories::run(),
        Commands::Completions { shell } => cli::completions(shell),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
