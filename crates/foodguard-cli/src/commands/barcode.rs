//! Barcode command - validate a barcode and print the request body.

use colored::Colorize;
use foodguard::{Barcode, BarcodeRequest};

pub fn run(code: &str, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let barcode = Barcode::parse(code)?;

    if verbose {
        eprintln!("{} {}", "Valid barcode:".green(), barcode);
    }

    let request = BarcodeRequest::new(barcode);
    println!("{}", serde_json::to_string_pretty(&request)?);

    Ok(())
}
