//! Inspect command - build a report from a saved endpoint response.

use std::path::PathBuf;

use colored::Colorize;
use foodguard::{AnalysisReport, AnalysisResponse, Classifier, Resolved};

use super::classify::{print_sections, risk_label};

pub fn run(
    file: PathBuf,
    status: u16,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = AnalysisResponse::read_from(&file, status)?;

    if verbose {
        eprintln!(
            "{} {} (HTTP {})",
            "Loaded".cyan(),
            file.display(),
            status
        );
    }

    let report = AnalysisReport::from_response(&response, &Classifier::new());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("{}", "Analysis Report".bold().underline());
    println!();

    if let Some(error) = &report.error {
        println!("{} {}", "Error:".red().bold(), error);
        println!();
    }

    match &report.content {
        Resolved::Text(sections) => print_sections(sections),
        Resolved::Structured(value) => {
            println!("{}", "Structured analysis".bold());
            println!("{}", serde_json::to_string_pretty(value)?);
            println!();
            println!("Risk level: {}", risk_label(report.risk_level));
        }
    }

    println!();
    println!("{}", "Image".bold());
    println!("  Filename: {}", report.image.filename_display());
    println!("  Size:     {}", report.image.size_display());
    println!("  Type:     {}", report.image.content_type_display());

    Ok(())
}
