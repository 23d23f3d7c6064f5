//! sgr - user-based collaborative filtering recommender CLI.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;
mod output;

use commands::{recommend, sample};

/// sgr - Recommend items from a user-item rating file
///
/// Loads a `userId,itemId,rating` CSV, computes user-user similarities,
/// and prints ranked recommendations for a target user.
#[derive(Parser, Debug)]
#[command(name = "sgr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recommend items for a target user
    Recommend {
        /// Target user id
        #[arg(value_name = "USER")]
        user: String,

        /// Number of neighbors to consider
        #[arg(short, long, default_value_t = sugerir::pipeline::DEFAULT_K)]
        k: usize,

        /// Number of recommendations to return
        #[arg(short = 'n', long, default_value_t = sugerir::pipeline::DEFAULT_TOP_N)]
        top_n: usize,

        /// Rating file (created with sample data when missing)
        #[arg(long, default_value = "sample_ratings.csv")]
        data: PathBuf,
    },

    /// Write the bundled sample dataset
    Sample {
        /// Destination path
        #[arg(value_name = "FILE", default_value = "sample_ratings.csv")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Recommend { user, k, top_n, data } => {
            recommend::run(&data, &user, k, top_n, cli.json, cli.quiet)
        }

        Commands::Sample { path, force } => sample::run(&path, force, cli.quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e.to_string());
            e.exit_code()
        }
    }
}
