//! messmenu command-line tool
//!
//! One-shot conversion of a mess menu spreadsheet into a JSON document.
//! With no arguments it reads `mess_menu.xlsx` and writes `mess_menu.json`
//! next to it, overwriting any existing file of that name.

use std::fs::File;
use std::io::{self, Write};
use std::process;

use messmenu::{ExtractorBuilder, SheetSelector, XlsxToMenuError};

const DEFAULT_INPUT: &str = "mess_menu.xlsx";
const DEFAULT_OUTPUT: &str = "mess_menu.json";

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage(&args[0]);
        process::exit(0);
    }

    // Positional arguments default to the fixed sibling paths
    let mut positional = Vec::new();
    let mut sheet_selector = SheetSelector::First;
    let mut use_stdout = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sheet-index" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --sheet-index requires a value");
                    process::exit(1);
                }
                let index = args[i + 1].parse::<usize>().unwrap_or_else(|_| {
                    eprintln!("Error: Invalid sheet index: {}", args[i + 1]);
                    process::exit(1);
                });
                sheet_selector = SheetSelector::Index(index);
                i += 2;
            }
            "--sheet-name" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --sheet-name requires a value");
                    process::exit(1);
                }
                sheet_selector = SheetSelector::Name(args[i + 1].clone());
                i += 2;
            }
            "--stdout" => {
                use_stdout = true;
                i += 1;
            }
            arg if arg.starts_with("--") => {
                eprintln!("Error: Unknown option: {}", arg);
                process::exit(1);
            }
            arg => {
                positional.push(arg.to_string());
                i += 1;
            }
        }
    }

    if positional.len() > 2 {
        eprintln!("Error: Too many arguments");
        print_usage(&args[0]);
        process::exit(1);
    }

    let input_path = positional
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output_path = positional
        .get(1)
        .cloned()
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    if output_path == "-" {
        use_stdout = true;
    }

    match run(&input_path, &output_path, &sheet_selector, use_stdout) {
        Ok(_) => {
            if !use_stdout {
                println!(
                    "Mess menu data has been processed and saved to {}.",
                    output_path
                );
            }
        }
        Err(e) => {
            handle_error(e);
            process::exit(1);
        }
    }
}

fn run(
    input_path: &str,
    output_path: &str,
    sheet_selector: &SheetSelector,
    use_stdout: bool,
) -> Result<(), XlsxToMenuError> {
    let extractor = ExtractorBuilder::new()
        .with_sheet_selector(sheet_selector.clone())
        .build()?;

    let input = File::open(input_path)?;

    if use_stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        extractor.convert(input, &mut handle)?;
        handle.flush()?;
    } else {
        let output = File::create(output_path)?;
        extractor.convert(input, output)?;
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [input.xlsx] [output.json] [options]", program);
    eprintln!("\nDefaults:");
    eprintln!("  input   {}", DEFAULT_INPUT);
    eprintln!("  output  {}", DEFAULT_OUTPUT);
    eprintln!("\nOptions:");
    eprintln!("  --sheet-index <n>    Select sheet by index (0-based)");
    eprintln!("  --sheet-name <name>  Select sheet by name");
    eprintln!("  --stdout             Write output to stdout instead of a file");
    eprintln!("\nExamples:");
    eprintln!("  {}", program);
    eprintln!("  {} menu.xlsx menu.json", program);
    eprintln!("  {} menu.xlsx - --stdout", program);
}

fn handle_error(error: XlsxToMenuError) {
    match error {
        XlsxToMenuError::Io(io_err) => {
            eprintln!("I/O Error: {}", io_err);
            eprintln!("Please check that the file exists and you have permission to access it.");
        }
        XlsxToMenuError::Parse(parse_err) => {
            eprintln!("Parse Error: {}", parse_err);
            eprintln!("The file may not be a valid Excel file or may be corrupted.");
        }
        XlsxToMenuError::Json(json_err) => {
            eprintln!("Output Error: {}", json_err);
            eprintln!("Failed to serialize the extracted menu.");
        }
        XlsxToMenuError::Config(msg) => {
            eprintln!("Configuration Error: {}", msg);
            eprintln!("Please check your sheet selection.");
        }
        XlsxToMenuError::SecurityViolation(msg) => {
            eprintln!("Security Violation: {}", msg);
            eprintln!("The file violates security constraints (e.g., file size limit).");
        }
    }
}
