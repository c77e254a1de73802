//! Scan command: extract line items from a PDF and print them.

use std::path::Path;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use super::OutputFormat;
use crate::config::Settings;
use crate::models::ScanReport;
use crate::services::ScanService;

/// Scan a single PDF and print the results in the requested format.
pub async fn cmd_scan(settings: &Settings, file: &Path, format: OutputFormat) -> anyhow::Result<()> {
    if !file.exists() {
        anyhow::bail!("File not found: {}", file.display());
    }

    let service = ScanService::new(settings.clone());

    // Page count is only known once extraction starts, so the bar length is
    // set from the first progress callback.
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    progress.set_message(file.display().to_string());

    let result = service.scan_file_with_progress(file, |page, total| {
        if progress.length() != Some(total as u64) {
            progress.set_length(total as u64);
        }
        progress.set_position(page as u64);
    });
    progress.finish_and_clear();

    let report = match result {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} Scan failed: {}", style("✗").red(), e);
            return Err(e.into());
        }
    };

    match format {
        OutputFormat::Table => print_tables(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Tsv => print_tsv(&report),
    }

    Ok(())
}

fn print_tables(report: &ScanReport) {
    if report.is_empty() {
        println!(
            "{} No codes or quantities found in the PDF.",
            style("!").yellow()
        );
        return;
    }

    if !report.found.is_empty() {
        println!("\n{}", style("Found").bold());
        println!("{}", "-".repeat(40));
        println!("{:<25} {:>8}", "Code", "Quantity");
        println!("{}", "-".repeat(40));
        for item in &report.found {
            println!("{:<25} {:>8}", item.code, item.quantity);
        }
    }

    if !report.possible.is_empty() {
        println!("\n{}", style("Possible").bold());
        println!("{}", "-".repeat(78));
        println!("{:<25} {:>8}  Reason", "Code", "Quantity");
        println!("{}", "-".repeat(78));
        for item in &report.possible {
            println!(
                "{:<25} {:>8}  {}",
                item.code_label(),
                item.quantity_label(),
                item.reason
            );
        }
    }

    println!(
        "\n{} {} found, {} possible across {} pages",
        style("✓").green(),
        report.found_count,
        report.possible_count,
        report.pages
    );
}

/// Print `code<TAB><TAB>quantity` lines, skipping candidates with no code.
fn print_tsv(report: &ScanReport) {
    for item in &report.found {
        println!("{}\t\t{}", item.code, item.quantity);
    }
    for item in &report.possible {
        if let Some(code) = &item.code {
            println!("{}\t\t{}", code, item.quantity_label());
        }
    }
}
