//! Output Module
//!
//! メニュー対応表のJSON書き出しを提供するモジュール。

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::Write;

use crate::error::XlsxToMenuError;
use crate::menu::MenuTable;

/// メニュー対応表をJSONとして書き出す
///
/// # 出力形式
///
/// - 日付キーは初出順、各日付の下は `BREAKFAST`, `LUNCH`, `DINNER` の固定順
/// - インデントは4スペース
/// - 非ASCII文字はエスケープせずそのまま出力（UTF-8）
/// - 末尾改行なし
///
/// # 戻り値
///
/// * `Ok(())` - 書き出しに成功した場合
/// * `Err(XlsxToMenuError)` - シリアライズまたはI/Oに失敗した場合
pub(crate) fn write_json<W: Write>(
    table: &MenuTable,
    mut writer: W,
) -> Result<(), XlsxToMenuError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    table.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Meal;

    fn sample_table() -> MenuTable {
        let mut table = MenuTable::new();
        table.insert_day("5-Jan-24");
        table.push_item("5-Jan-24", Meal::Breakfast, "Eggs");
        table.push_item("5-Jan-24", Meal::Breakfast, "Toast");
        table
    }

    #[test]
    fn test_write_json_four_space_indent() {
        let mut buffer = Vec::new();
        write_json(&sample_table(), &mut buffer).unwrap();
        let json = String::from_utf8(buffer).unwrap();

        let expected = concat!(
            "{\n",
            "    \"5-Jan-24\": {\n",
            "        \"BREAKFAST\": [\n",
            "            \"Eggs\",\n",
            "            \"Toast\"\n",
            "        ],\n",
            "        \"LUNCH\": [],\n",
            "        \"DINNER\": []\n",
            "    }\n",
            "}"
        );
        assert_eq!(json, expected);
    }

    #[test]
    fn test_write_json_empty_table() {
        let mut buffer = Vec::new();
        write_json(&MenuTable::new(), &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{}");
    }

    #[test]
    fn test_write_json_preserves_non_ascii() {
        let mut table = MenuTable::new();
        table.insert_day("5-Jan-24");
        table.push_item("5-Jan-24", Meal::Lunch, "Café au lait");
        table.push_item("5-Jan-24", Meal::Lunch, "味噌汁");

        let mut buffer = Vec::new();
        write_json(&table, &mut buffer).unwrap();
        let json = String::from_utf8(buffer).unwrap();

        assert!(json.contains("Café au lait"));
        assert!(json.contains("味噌汁"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_write_json_no_trailing_newline() {
        let mut buffer = Vec::new();
        write_json(&sample_table(), &mut buffer).unwrap();
        assert!(!buffer.ends_with(b"\n"));
    }
}
