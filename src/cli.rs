use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// EcoFootprint: estimate your annual carbon footprint and get tips to reduce it.
#[derive(Parser, Debug)]
#[command(name = "eco_footprint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate a footprint from saved answers or an interactive survey.
    Estimate(EstimateArgs),

    /// Score random surveys to explore the range of results.
    Sample {
        /// Number of surveys to generate.
        #[arg(long, default_value = "100")]
        count: usize,

        /// Random seed for reproducibility.
        #[arg(long, default_value = "123")]
        seed: u64,

        /// Write every sampled result to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Register for the event.
    Signup {
        /// Full name (prompted if omitted).
        #[arg(long)]
        name: Option<String>,

        /// Email address (prompted if omitted).
        #[arg(long)]
        email: Option<String>,

        /// Access code (prompted if omitted).
        #[arg(long)]
        code: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct EstimateArgs {
    /// Read survey answers from a JSON file instead of prompting.
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Save the answers used to this JSON file.
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Append the result as a row to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Print the breakdown and tips as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,
}

impl Default for Command {
    fn default() -> Self {
        Command::Estimate(EstimateArgs::default())
    }
}
