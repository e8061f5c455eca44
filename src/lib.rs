//! messmenu - Pure-Rust Excel mess menu parser and JSON converter
//!
//! This crate converts a weekly cafeteria ("mess") menu spreadsheet into a
//! structured JSON document keyed by date. The expected layout is: row 0
//! carries day labels (MON, TUE, ...), row 1 carries one date per column,
//! and the remaining rows alternate between meal markers (BREAKFAST / LUNCH
//! / DINNER) and item rows aligned with the date columns.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//! use messmenu::ExtractorBuilder;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create an extractor with default settings
//!     let extractor = ExtractorBuilder::new().build()?;
//!
//!     // Open input Excel file
//!     let input = File::open("mess_menu.xlsx")?;
//!
//!     // Create output JSON file
//!     let output = File::create("mess_menu.json")?;
//!
//!     // Convert the menu sheet to JSON
//!     extractor.convert(input, output)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! For in-memory conversion, use `Cursor`:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//! use messmenu::ExtractorBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = ExtractorBuilder::new().build()?;
//! let excel_data: Vec<u8> = vec![]; // Your Excel file bytes
//! let mut json_output = Vec::new();
//! extractor.convert(Cursor::new(excel_data), &mut json_output)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Custom Configuration
//!
//! ```rust,no_run
//! use messmenu::{DateStyle, ExtractorBuilder, SheetSelector};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let extractor = ExtractorBuilder::new()
//!         .with_sheet_selector(SheetSelector::Name("Week 1".to_string()))
//!         .with_date_style(DateStyle::Custom("%Y-%m-%d".to_string()))
//!         .build()?;
//!
//!     let input = std::fs::File::open("mess_menu.xlsx")?;
//!     let json = extractor.convert_to_string(input)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Inspecting the extracted table
//!
//! `extract` returns the in-memory [`MenuTable`] instead of serializing it,
//! which is useful when the menu feeds another system:
//!
//! ```rust,no_run
//! use messmenu::{ExtractorBuilder, Meal};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = ExtractorBuilder::new().build()?;
//! let input = std::fs::File::open("mess_menu.xlsx")?;
//! let table = extractor.extract(input)?;
//!
//! for date in table.dates() {
//!     let day = table.day(date).unwrap();
//!     println!("{}: {} breakfast items", date, day.items(Meal::Breakfast).len());
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod builder;
mod error;
mod extract;
mod formatter;
mod grid;
mod menu;
mod output;
mod parser;
mod security;
mod types;

// 公開API
pub use api::{DateStyle, SheetSelector};
pub use builder::{Extractor, ExtractorBuilder};
pub use error::XlsxToMenuError;
pub use menu::{DayMenu, Meal, MenuTable};
