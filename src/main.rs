mod cli;
mod config;
mod error;
mod extension;
mod lister;
mod logging;
mod reporter;
mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use lister::JobResult;
use std::process::exit;
use std::time::Instant;

fn main() {
    let start_time = Instant::now();
    let args = Cli::parse();
    let json = args.json;

    if let Err(e) = logging::init() {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    match run(args) {
        Ok(results) => {
            if json {
                reporter::print_json_report(&results);
            } else {
                reporter::print_human_report(&results, start_time);
            }
        }
        Err(e) => {
            if json {
                reporter::print_json_error(&format!("{:#}", e));
            } else {
                eprintln!("Error: {:#}", e);
            }
            exit(1);
        }
    }
}

fn run(args: Cli) -> Result<Vec<JobResult>> {
    let config_path = args.config.clone();
    let config = args.into_config().with_context(|| match &config_path {
        Some(p) => format!("Failed to load configuration from {:?}", p),
        None => "Invalid command-line configuration".to_string(),
    })?;

    config
        .jobs
        .iter()
        .map(|job| {
            lister::list_resources(job).with_context(|| {
                format!(
                    "Failed to list resources under {:?} into {:?}",
                    job.root, job.output_file
                )
            })
        })
        .collect()
}
