//! Classify command - split analysis text into display sections.

use std::io::Read;
use std::path::PathBuf;

use colored::Colorize;
use foodguard::{ClassifiedAnalysis, Classifier, RiskLevel, Section, Strategy};

pub fn run(
    file: Option<PathBuf>,
    json_output: bool,
    strategy: Strategy,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = match &file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if verbose {
        let source = file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdin".to_string());
        eprintln!(
            "{} {} ({} bytes, {:?})",
            "Classifying".cyan(),
            source,
            text.len(),
            strategy
        );
    }

    let result = Classifier::new().with_strategy(strategy).classify(&text);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_sections(&result);
    }

    Ok(())
}

/// Print classified sections in the order the result view shows them.
pub fn print_sections(result: &ClassifiedAnalysis) {
    if result.is_empty() {
        println!("{}", "No analysis content.".dimmed());
        return;
    }

    if !result.summary.is_empty() {
        println!("{}", "Summary".bold());
        println!("  {}", result.summary);
        println!();
    }

    for section in [
        Section::Indicators,
        Section::KeyPoints,
        Section::Recommendations,
        Section::HomeTests,
    ] {
        let items = result.items(section);
        if items.is_empty() {
            continue;
        }
        println!("{} ({})", section.label().bold(), items.len());
        for item in items {
            println!("  - {}", item);
        }
        println!();
    }

    println!("Risk level: {}", risk_label(result.risk_level));
}

/// Colored risk label; unknown when the text named none.
pub fn risk_label(level: Option<RiskLevel>) -> colored::ColoredString {
    match level {
        Some(RiskLevel::Low) => "Low".green().bold(),
        Some(RiskLevel::Medium) => "Medium".yellow().bold(),
        Some(RiskLevel::High) => "High".red().bold(),
        None => "Unknown".dimmed(),
    }
}
