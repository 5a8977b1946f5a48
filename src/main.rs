use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use eco_footprint_rs::cli::{Cli, Command, EstimateArgs};
use eco_footprint_rs::error::Result;
use eco_footprint_rs::estimator::{compute, generate_tips};
use eco_footprint_rs::interface::{
    collect_signup, collect_survey, display_results, display_sample_summary, prompt_yes_no,
};
use eco_footprint_rs::sampler::{run_sampler, summarize, SampleConfig};
use eco_footprint_rs::signup::submit;
use eco_footprint_rs::storage::{append_result_csv, load_survey, save_survey, write_results_csv};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Filter used when `RUST_LOG` is not set.
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "eco_footprint_rs=debug,eco_footprint=debug,warn"
    } else {
        "eco_footprint_rs=warn"
    }
}

fn init_logging(verbose: bool) {
    let default_filter = default_log_filter(verbose);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Estimate(args) => cmd_estimate(args),
        Command::Sample { count, seed, csv } => cmd_sample(count, seed, csv.as_deref()),
        Command::Signup { name, email, code } => cmd_signup(name, email, code),
    }
}

/// Compute and display a footprint.
fn cmd_estimate(args: EstimateArgs) -> Result<()> {
    let interactive = args.answers.is_none();

    let survey = match &args.answers {
        Some(path) => {
            if !path.exists() {
                eprintln!("Answers file not found: {}", path.display());
                return Ok(());
            }
            load_survey(path)?
        }
        None => collect_survey()?,
    };

    let breakdown = compute(&survey);
    let tips = generate_tips(breakdown.total, &breakdown);

    if args.json {
        let report = serde_json::json!({
            "breakdown": breakdown,
            "tips": tips,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_results(&breakdown, &tips);
    }

    if let Some(path) = &args.csv {
        let label = args
            .answers
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "survey".to_string());
        append_result_csv(&label, &breakdown, path)?;
    }

    match &args.save {
        Some(path) => {
            save_survey(path, &survey)?;
            println!("Answers saved to {}.", path.display());
        }
        None if interactive => {
            if prompt_yes_no("Save your answers to answers.json?", false)? {
                save_survey("answers.json", &survey)?;
                println!("Answers saved to answers.json.");
            }
        }
        None => {}
    }

    Ok(())
}

/// Score a batch of random surveys and summarize them.
fn cmd_sample(count: usize, seed: u64, csv: Option<&std::path::Path>) -> Result<()> {
    let config = SampleConfig {
        count,
        seed,
        ..Default::default()
    };

    let results = run_sampler(&config);

    match summarize(&results) {
        Some(summary) => display_sample_summary(&summary),
        None => println!("No surveys sampled (count was 0)."),
    }

    if let Some(path) = csv {
        write_results_csv(&results, path)?;
        println!("Results written to {}.", path.display());
    }

    Ok(())
}

/// Validate a registration and report the outcome.
fn cmd_signup(name: Option<String>, email: Option<String>, code: Option<String>) -> Result<()> {
    let form = collect_signup(name, email, code)?;
    let message = submit(&form)?;
    println!("{}", message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter() {
        assert_eq!(default_log_filter(false), "eco_footprint_rs=warn");
        assert!(default_log_filter(true).starts_with("eco_footprint_rs=debug"));
        assert!(EnvFilter::try_new(default_log_filter(false)).is_ok());
        assert!(EnvFilter::try_new(default_log_filter(true)).is_ok());
    }
}
