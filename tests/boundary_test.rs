//! Boundary Tests for messmenu
//!
//! Degenerate grid shapes: empty sheets, truncated layouts, rows shorter
//! than the date row, and inputs that are not workbooks at all.

use messmenu::{ExtractorBuilder, XlsxToMenuError};
use rust_xlsxwriter::*;
use std::io::Cursor;

// Helper module for generating boundary test fixtures
mod fixtures {
    use super::*;

    pub fn date_format() -> Format {
        Format::new().set_num_format("d-mmm-yy")
    }

    /// Generate a workbook with one completely empty sheet
    pub fn generate_empty_sheet() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("EmptySheet")?;
        // No cells written
        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a workbook with only a day-label row
    pub fn generate_labels_only() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "MON")?;
        worksheet.write_string(0, 1, "TUE")?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a workbook with labels and dates but no data rows
    pub fn generate_no_data_rows() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        worksheet.write_string(0, 0, "MON")?;
        let date = ExcelDateTime::from_ymd(2024, 1, 5)?;
        worksheet.write_datetime_with_format(1, 0, &date, &date_format())?;

        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a menu whose item rows never follow any meal marker
    pub fn generate_no_markers() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        worksheet.write_string(0, 0, "MON")?;
        let date = ExcelDateTime::from_ymd(2024, 1, 5)?;
        worksheet.write_datetime_with_format(1, 0, &date, &date_format())?;
        worksheet.write_string(2, 0, "Orphan 1")?;
        worksheet.write_string(3, 0, "Orphan 2")?;

        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a menu with a numeric cell in the date row
    pub fn generate_numeric_date_row() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        worksheet.write_string(0, 0, "MON")?;
        // Plain number, no date format: coerced to its text form
        worksheet.write_number(1, 0, 42.0)?;
        worksheet.write_string(2, 0, "LUNCH")?;
        worksheet.write_string(3, 0, "Rice")?;

        Ok(workbook.save_to_buffer()?)
    }

    /// Generate a menu where item rows are shorter than the date row
    pub fn generate_ragged_rows() -> Result<Vec<u8>, XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        worksheet.write_string(0, 0, "MON")?;
        worksheet.write_string(0, 1, "TUE")?;
        worksheet.write_string(0, 2, "WED")?;

        let format = date_format();
        for (col, day) in [(0u16, 5u8), (1, 6), (2, 7)] {
            let date = ExcelDateTime::from_ymd(2024, 1, day)?;
            worksheet.write_datetime_with_format(1, col, &date, &format)?;
        }

        worksheet.write_string(2, 0, "BREAKFAST")?;
        // Only the first column carries an item
        worksheet.write_string(3, 0, "Eggs")?;

        Ok(workbook.save_to_buffer()?)
    }
}

fn convert(buffer: Vec<u8>) -> String {
    let extractor = ExtractorBuilder::new().build().unwrap();
    extractor.convert_to_string(Cursor::new(buffer)).unwrap()
}

fn parse(json: &str) -> serde_json::Value {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_empty_sheet_yields_empty_object() {
    let json = convert(fixtures::generate_empty_sheet().unwrap());
    assert_eq!(json, "{}");
}

#[test]
fn test_labels_only_yields_empty_object() {
    let json = convert(fixtures::generate_labels_only().unwrap());
    assert_eq!(json, "{}");
}

#[test]
fn test_no_data_rows_yields_empty_meal_lists() {
    let json = convert(fixtures::generate_no_data_rows().unwrap());
    let value = parse(&json);

    assert_eq!(value.as_object().unwrap().len(), 1);
    assert_eq!(value["5-Jan-24"]["BREAKFAST"], serde_json::json!([]));
    assert_eq!(value["5-Jan-24"]["LUNCH"], serde_json::json!([]));
    assert_eq!(value["5-Jan-24"]["DINNER"], serde_json::json!([]));
}

#[test]
fn test_items_before_any_marker_are_dropped() {
    let json = convert(fixtures::generate_no_markers().unwrap());
    let value = parse(&json);

    assert!(!json.contains("Orphan"));
    assert_eq!(value["5-Jan-24"]["BREAKFAST"], serde_json::json!([]));
}

#[test]
fn test_numeric_date_row_coerced_to_text() {
    // A non-date cell in the date row becomes a key without validation
    let json = convert(fixtures::generate_numeric_date_row().unwrap());
    let value = parse(&json);

    assert_eq!(value["42"]["LUNCH"], serde_json::json!(["Rice"]));
}

#[test]
fn test_ragged_rows_treated_as_missing_cells() {
    let json = convert(fixtures::generate_ragged_rows().unwrap());
    let value = parse(&json);

    assert_eq!(value.as_object().unwrap().len(), 3);
    assert_eq!(value["5-Jan-24"]["BREAKFAST"], serde_json::json!(["Eggs"]));
    assert_eq!(value["6-Jan-24"]["BREAKFAST"], serde_json::json!([]));
    assert_eq!(value["7-Jan-24"]["BREAKFAST"], serde_json::json!([]));
}

#[test]
fn test_garbage_input_is_a_parse_error() {
    let extractor = ExtractorBuilder::new().build().unwrap();
    let garbage = b"this is not a workbook".to_vec();

    let result = extractor.convert_to_string(Cursor::new(garbage));
    assert!(matches!(result, Err(XlsxToMenuError::Parse(_))));
}

#[test]
fn test_empty_input_is_an_error() {
    let extractor = ExtractorBuilder::new().build().unwrap();
    let result = extractor.convert_to_string(Cursor::new(Vec::new()));
    assert!(result.is_err());
}
