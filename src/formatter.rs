//! Formatter Module
//!
//! セル値の表示文字列への整形処理を提供するモジュール。
//! 日付セルのシリアル値変換と、それ以外のセルのテキスト化を担当します。

use chrono::{Duration, NaiveDate};

use crate::api::DateStyle;
use crate::error::XlsxToMenuError;
use crate::types::CellValue;

/// デフォルト日付形式のchronoフォーマット文字列
///
/// 日は先頭ゼロなし（`%-d`）、月は3文字略称（`%b`）、年は2桁（`%y`）。
/// OS分岐は行わず、全プラットフォームでこの1つの形式を適用する。
const DAY_MONTH_YEAR_FORMAT: &str = "%-d-%b-%y";

/// セルフォーマッター
///
/// セル値を表示文字列へ整形するファサードとして機能します。
/// 日付キーの整形と品目テキストの整形の両方で使用されます。
#[derive(Debug)]
pub(crate) struct CellFormatter {
    /// 日付フォーマッター
    date_formatter: DateFormatter,

    /// 日付キーの出力形式
    date_style: DateStyle,

    /// 1904年エポックを使用するか
    use_1904_epoch: bool,
}

impl CellFormatter {
    /// 新しいCellFormatterインスタンスを生成
    pub fn new(date_style: DateStyle, use_1904_epoch: bool) -> Self {
        Self {
            date_formatter: DateFormatter,
            date_style,
            use_1904_epoch,
        }
    }

    /// セル値の表示文字列を返す
    ///
    /// # 戻り値
    ///
    /// * `Ok(Some(String))` - 前後空白を除去した表示文字列
    /// * `Ok(None)` - 空セルの場合
    /// * `Err(XlsxToMenuError)` - 日付変換に失敗した場合
    ///
    /// 日付以外のセルは検証なしでテキスト化されます。論理値は
    /// `TRUE` / `FALSE`、エラー値はエラーメッセージ文字列になります。
    pub fn display_text(&self, cell: &CellValue) -> Result<Option<String>, XlsxToMenuError> {
        let text = match cell {
            CellValue::Number(n) => n.to_string(),
            CellValue::String(s) => s.trim().to_string(),
            CellValue::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
            CellValue::DateTime(serial) => {
                self.date_formatter
                    .format(*serial, &self.date_style, self.use_1904_epoch)?
            }
            CellValue::Error(e) => e.trim().to_string(),
            CellValue::Empty => return Ok(None),
        };
        Ok(Some(text))
    }
}

/// 日付フォーマッター
///
/// Excelのシリアル日付値を文字列に変換します。
#[derive(Debug)]
pub(crate) struct DateFormatter;

impl DateFormatter {
    /// 日付値をフォーマット
    ///
    /// # 引数
    ///
    /// * `serial_value` - Excelのシリアル日付値
    /// * `style` - 日付キーの出力形式
    /// * `is_1904` - 1904年エポックを使用するかどうか
    ///
    /// # エポックシステム
    ///
    /// - 1900年システム（デフォルト）: 1899年12月30日起算
    ///   - Excelの1900年うるう年バグにより、シリアル値60以下は
    ///     Excel表示と1日ずれる（実在のメニュー表には現れない領域）
    ///   - シリアル値61以降は正確（61 = 1900年3月1日）
    /// - 1904年システム: 1904年1月1日起算
    ///   - Mac版Excelで使用される
    ///   - シリアル値0 = 1904年1月1日
    pub fn format(
        &self,
        serial_value: f64,
        style: &DateStyle,
        is_1904: bool,
    ) -> Result<String, XlsxToMenuError> {
        let epoch = if is_1904 {
            NaiveDate::from_ymd_opt(1904, 1, 1)
                .ok_or_else(|| XlsxToMenuError::Config("Invalid epoch date".to_string()))?
        } else {
            NaiveDate::from_ymd_opt(1899, 12, 30)
                .ok_or_else(|| XlsxToMenuError::Config("Invalid epoch date".to_string()))?
        };

        // 時刻成分（小数部）は切り捨てて日単位で変換する
        let days = serial_value.floor() as i64;
        let date = epoch
            .checked_add_signed(Duration::days(days))
            .ok_or_else(|| {
                XlsxToMenuError::Config(format!(
                    "Date calculation overflow: serial_value={}, is_1904={}",
                    serial_value, is_1904
                ))
            })?;

        let formatted = match style {
            DateStyle::DayMonthYear => date.format(DAY_MONTH_YEAR_FORMAT).to_string(),
            DateStyle::Custom(format_str) => date.format(format_str).to_string(),
        };

        Ok(formatted)
    }
}
