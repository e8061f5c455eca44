//! Basic Extraction Example
//!
//! This example demonstrates the most basic usage of messmenu:
//! converting a mess menu spreadsheet to JSON using default settings.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example basic_extraction -- input.xlsx output.json
//! ```
//!
//! If no arguments are provided, it will try to use `mess_menu.xlsx`
//! as input and `mess_menu.json` as output.

use std::fs::File;
use messmenu::ExtractorBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get input file path from command line arguments or use default
    let input_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "mess_menu.xlsx".to_string());

    // Get output file path from command line arguments or use default
    let output_path = std::env::args()
        .nth(2)
        .unwrap_or_else(|| "mess_menu.json".to_string());

    println!("Converting {} to {}...", input_path, output_path);

    // Create an extractor with default settings
    let extractor = ExtractorBuilder::new().build()?;

    // Open input file
    let input = File::open(&input_path).map_err(|e| {
        eprintln!("Error: Could not open input file '{}'", input_path);
        eprintln!("  {}", e);
        eprintln!("\nHint: Provide a path to an existing mess menu workbook.");
        e
    })?;

    // Create output file
    let output = File::create(&output_path).map_err(|e| {
        eprintln!("Error: Could not create output file '{}'", output_path);
        eprintln!("  {}", e);
        e
    })?;

    // Convert the menu sheet to JSON
    extractor.convert(input, output)?;

    println!("Conversion completed successfully!");
    println!("Output written to: {}", output_path);

    Ok(())
}
