use colored::Colorize;

use crate::errors::ErrorAggregator;
use crate::runner::{RunSummary, StepOutcome};

pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_073_741_824 {
        format!("{:.2} GB", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1_024 {
        format!("{:.2} KB", bytes as f64 / 1_024.0)
    } else {
        format!("{} B", bytes)
    }
}

pub fn print_banner(dry_run: bool) {
    println!(
        "{}",
        "devsweep — developer workstation cleanup".bold().cyan()
    );
    if dry_run {
        println!("{}", "dry run: nothing will be deleted".yellow().bold());
    }
    println!();
}

pub fn print_step_header(label: &str) {
    println!("{}", format!("=== {label} ===").bold().white());
}

pub fn print_step_skipped(label: &str) {
    println!("  {}", format!("skipped {label}").dimmed());
    println!();
}

pub fn print_step_done(duration_secs: u64, bytes: Option<u64>) {
    match bytes {
        Some(bytes) => println!(
            "  {} {} freed in {duration_secs}s",
            "done:".green().bold(),
            format_size(bytes).green()
        ),
        None => println!("  {} finished in {duration_secs}s", "done:".green().bold()),
    }
    println!();
}

pub fn print_step_failed(code: i32, duration_secs: u64) {
    println!(
        "  {} step exited with status {code} after {duration_secs}s",
        "warning:".red().bold()
    );
    println!();
}

pub fn print_fast_skip(label: &str) {
    println!("{}", format!("fast mode: skipping {label}").dimmed());
    println!();
}

pub fn print_would_remove(path: &str) {
    println!("  {} {}", "would remove".yellow(), path.dimmed());
}

pub fn print_would_run(cmd: &str) {
    println!("  {} `{cmd}`", "would run".yellow());
}

pub fn print_info(msg: &str) {
    println!("{} {}", "info:".cyan().bold(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

pub fn print_step_diagnostics(outcome: &StepOutcome) {
    println!(
        "  {} step={} confirmation={:?} status={:?} reclaimed={:?}",
        "debug:".dimmed(),
        outcome.name,
        outcome.confirmation,
        outcome.status,
        outcome.bytes_reclaimed
    );
}

pub fn print_summary(
    summary: &RunSummary,
    errors: &ErrorAggregator,
    verbose: bool,
    free_delta: Option<u64>,
) {
    println!("{}", "=== Summary ===".bold().white());
    println!("  {:<24} {}", "Steps completed:", summary.completed());
    if summary.skipped() > 0 {
        println!("  {:<24} {}", "Steps skipped:", summary.skipped());
    }
    if summary.failed() > 0 {
        println!(
            "  {:<24} {}",
            "Steps failed:",
            summary.failed().to_string().red()
        );
    }
    println!(
        "  {:<24} {}",
        "Reclaimed (measured):",
        format_size(summary.total_reclaimed).green().bold()
    );
    if let Some(delta) = free_delta {
        println!(
            "  {:<24} {}",
            "Free space delta:",
            format_size(delta).green()
        );
    }
    println!("  {:<24} {}s", "Elapsed (steps):", summary.total_duration_secs);

    if errors.count() > 0 {
        println!(
            "  {} {} error(s) during the run",
            "warning:".red().bold(),
            errors.count()
        );
        if verbose {
            for record in errors.records() {
                println!(
                    "    {} {}",
                    format!("[{}]", record.sequence).dimmed(),
                    record.message
                );
            }
        }
    }
}
