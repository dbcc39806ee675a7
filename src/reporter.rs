use crate::lister::JobResult;
use colored::*;
use std::time::Instant;

pub fn print_human_report(results: &[JobResult], start_time: Instant) {
    println!(
        "{} {} v{}",
        "⛊".bold(),
        "resource-lister".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    let mut total_entries = 0;

    for result in results {
        total_entries += result.entries.len();

        let file_symbol = "›".bold();
        let count = match result.entries.len() {
            0 => "0 resources".yellow(),
            1 => "1 resource".green(),
            n => format!("{} resources", n).green(),
        };
        println!(
            "{} {}  {}",
            file_symbol,
            result.output_file.bold(),
            count
        );
        println!("  {} {}", "from".dimmed(), result.root.dimmed());
    }
    println!();

    let elapsed = start_time.elapsed().as_secs_f64();

    let summary_parts = [
        format!("{} manifest(s) written", results.len()),
        format!("{} resource(s)", total_entries),
        format!("{:.2}s", elapsed),
    ];

    println!(
        "Done: {}",
        summary_parts.join(&format!(" {} ", "·".dimmed()))
    );
}

pub fn print_json_report(results: &[JobResult]) {
    match serde_json::to_string_pretty(results) {
        Ok(json_output) => println!("{}", json_output),
        Err(e) => print_json_error(&format!("Failed to serialize results to JSON: {}", e)),
    }
}

pub fn print_json_error(msg: &str) {
    let error_json = serde_json::json!({
        "error": msg
    });
    println!("{}", error_json);
}
