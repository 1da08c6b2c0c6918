//! Example: Turn a saved analysis endpoint response into a report.
//!
//! Usage:
//!   cargo run --example inspect_response -- <response.json> [http_status]
//!
//! Example:
//!   cargo run --example inspect_response -- responses/honey.json 200

use std::env;

use foodguard::{AnalysisReport, AnalysisResponse, Classifier, Resolved, Section};

fn main() -> foodguard::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example inspect_response -- <response.json> [http_status]");
        std::process::exit(1);
    }

    let status = match args.get(2) {
        Some(s) => s.parse().unwrap_or(200),
        None => 200,
    };

    let response = AnalysisResponse::read_from(&args[1], status)?;
    let report = AnalysisReport::from_response(&response, &Classifier::new());

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Analysis report: {}", args[1]);
    println!("{}", separator);
    println!();

    if let Some(error) = &report.error {
        println!("Error: {}", error);
        println!();
    }

    match &report.content {
        Resolved::Text(sections) => {
            if !sections.summary.is_empty() {
                println!("## Summary");
                println!("  {}", sections.summary);
                println!();
            }
            for section in [
                Section::Indicators,
                Section::KeyPoints,
                Section::Recommendations,
                Section::HomeTests,
            ] {
                let items = sections.items(section);
                if items.is_empty() {
                    continue;
                }
                println!("## {}", section.label());
                for item in items {
                    println!("  - {}", item);
                }
                println!();
            }
        }
        Resolved::Structured(value) => {
            println!("## Structured analysis");
            println!("{}", serde_json::to_string_pretty(value)?);
            println!();
        }
    }

    println!(
        "Risk level: {}",
        report.risk_level.map(|r| r.label()).unwrap_or("Unknown")
    );
    println!("Filename: {}", report.image.filename_display());
    println!("Size: {}", report.image.size_display());
    println!("Type: {}", report.image.content_type_display());

    Ok(())
}
