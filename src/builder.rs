//! Builder Module
//!
//! Fluent Builder APIを提供し、`Extractor`インスタンスを段階的に構築する。

use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufWriter, Read, Seek, Write};
use std::path::Path;

use crate::api::{DateStyle, SheetSelector};
use crate::error::XlsxToMenuError;
use crate::extract::MenuExtractor;
use crate::formatter::CellFormatter;
use crate::menu::MenuTable;
use crate::output::write_json;
use crate::parser::WorkbookParser;

/// 抽出処理の設定を保持する内部構造体
#[derive(Debug, Clone)]
pub(crate) struct ExtractionConfig {
    /// シート選択方式
    pub sheet_selector: SheetSelector,

    /// 日付キーの出力形式
    pub date_style: DateStyle,

    /// 1904年エポックを使用するか
    pub use_1904_epoch: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sheet_selector: SheetSelector::First,
            date_style: DateStyle::DayMonthYear,
            use_1904_epoch: false,
        }
    }
}

/// Fluent Builder APIを提供する構造体
///
/// `Extractor`インスタンスを段階的に構築するためのビルダーです。
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。
///
/// # 使用例
///
/// ```rust,no_run
/// use messmenu::{ExtractorBuilder, SheetSelector};
///
/// # fn main() -> Result<(), messmenu::XlsxToMenuError> {
/// let extractor = ExtractorBuilder::new()
///     .with_sheet_selector(SheetSelector::Name("Menu".to_string()))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ExtractorBuilder {
    /// 内部設定（構築中）
    config: ExtractionConfig,
}

impl Default for ExtractorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorBuilder {
    /// デフォルト設定を持つビルダーインスタンスを生成する
    ///
    /// # デフォルト設定
    ///
    /// - シート選択: 先頭のシート
    /// - 日付形式: `{日}-{月略称}-{2桁年}`（例: `5-Jan-24`）
    /// - エポック: 1900年システム
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// 抽出対象のシートを選択する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use messmenu::{ExtractorBuilder, SheetSelector};
    ///
    /// // 2番目のシートをインデックスで指定
    /// let builder = ExtractorBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Index(1));
    ///
    /// // シートを名前で指定
    /// let builder = ExtractorBuilder::new()
    ///     .with_sheet_selector(SheetSelector::Name("Week 1".to_string()));
    /// ```
    pub fn with_sheet_selector(mut self, selector: SheetSelector) -> Self {
        self.config.sheet_selector = selector;
        self
    }

    /// 日付キーの出力形式を指定する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use messmenu::{DateStyle, ExtractorBuilder};
    ///
    /// // デフォルト形式（5-Jan-24）
    /// let builder = ExtractorBuilder::new()
    ///     .with_date_style(DateStyle::DayMonthYear);
    ///
    /// // カスタム形式
    /// let builder = ExtractorBuilder::new()
    ///     .with_date_style(DateStyle::Custom("%Y-%m-%d".to_string()));
    /// ```
    pub fn with_date_style(mut self, style: DateStyle) -> Self {
        self.config.date_style = style;
        self
    }

    /// 1904年エポック（Mac版Excel）として日付を解釈するかを指定する
    ///
    /// デフォルトは1900年システムです。
    pub fn with_1904_epoch(mut self, use_1904: bool) -> Self {
        self.config.use_1904_epoch = use_1904;
        self
    }

    /// 設定を検証し、`Extractor`インスタンスを生成する
    ///
    /// # 戻り値
    ///
    /// * `Ok(Extractor)` - 設定が有効な場合
    /// * `Err(XlsxToMenuError::Config)` - 設定が無効な場合
    ///   （例: カスタム日付形式が空の結果を生む）
    pub fn build(self) -> Result<Extractor, XlsxToMenuError> {
        // カスタム日付形式の検証: テスト用の日付でフォーマット試行
        if let DateStyle::Custom(ref format_str) = self.config.date_style {
            let probe_date = NaiveDate::from_ymd_opt(2024, 1, 5)
                .ok_or_else(|| XlsxToMenuError::Config("Failed to create probe date".to_string()))?;
            let formatted = probe_date.format(format_str).to_string();
            if formatted.is_empty() {
                return Err(XlsxToMenuError::Config(format!(
                    "Invalid date format string: '{}'",
                    format_str
                )));
            }
        }

        Ok(Extractor::new(self.config))
    }
}

/// 抽出処理のファサード
///
/// Excelのメニュー表をJSONへ変換するためのメインエントリーポイントです。
/// `ExtractorBuilder`で構築された設定に基づいて変換処理を実行します。
///
/// # 使用例
///
/// ```rust,no_run
/// use messmenu::ExtractorBuilder;
/// use std::fs::File;
///
/// # fn main() -> Result<(), messmenu::XlsxToMenuError> {
/// let extractor = ExtractorBuilder::new().build()?;
/// let input = File::open("mess_menu.xlsx")?;
/// let output = File::create("mess_menu.json")?;
/// extractor.convert(input, output)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Extractor {
    /// 抽出設定
    config: ExtractionConfig,

    /// セルフォーマッター
    formatter: CellFormatter,
}

impl Extractor {
    pub(crate) fn new(config: ExtractionConfig) -> Self {
        Self {
            formatter: CellFormatter::new(config.date_style.clone(), config.use_1904_epoch),
            config,
        }
    }

    /// Excelのメニュー表から`MenuTable`を抽出する
    ///
    /// # 処理フロー
    ///
    /// 1. WorkbookParserの初期化（入力サイズ検証を含む）
    /// 2. シート選択
    /// 3. グリッドの構築
    /// 4. メニューの抽出
    ///
    /// # 引数
    ///
    /// * `input` - Excelファイルを読み込むためのリーダー（Read + Seekトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(MenuTable)` - 抽出されたメニュー対応表
    /// * `Err(XlsxToMenuError)` - エラーが発生した場合
    pub fn extract<R: Read + Seek>(&self, input: R) -> Result<MenuTable, XlsxToMenuError> {
        let mut parser = WorkbookParser::open(input)?;
        let sheet_name = parser.select_sheet(&self.config.sheet_selector)?;
        let grid = parser.load_grid(&sheet_name)?;

        MenuExtractor::new(&self.formatter).extract(&grid)
    }

    /// Excelのメニュー表をJSONへ変換して書き出す
    ///
    /// 抽出が完全に成功した場合にのみ出力が書き込まれます。
    ///
    /// # 引数
    ///
    /// * `input` - Excelファイルを読み込むためのリーダー（Read + Seekトレイトを実装）
    /// * `output` - JSON出力先のライター（Writeトレイトを実装）
    ///
    /// # 使用例
    ///
    /// ## メモリバッファからの変換
    ///
    /// ```rust,no_run
    /// use messmenu::ExtractorBuilder;
    /// use std::io::Cursor;
    ///
    /// # fn main() -> Result<(), messmenu::XlsxToMenuError> {
    /// let extractor = ExtractorBuilder::new().build()?;
    /// let excel_data: Vec<u8> = vec![]; // Excelファイルのバイト列
    /// let mut json_output = Vec::new();
    /// extractor.convert(Cursor::new(excel_data), &mut json_output)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert<R: Read + Seek, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<(), XlsxToMenuError> {
        let table = self.extract(input)?;

        let mut writer = BufWriter::new(output);
        write_json(&table, &mut writer)?;
        writer.flush()?;

        Ok(())
    }

    /// Excelのメニュー表をJSON文字列へ変換する
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use messmenu::ExtractorBuilder;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), messmenu::XlsxToMenuError> {
    /// let extractor = ExtractorBuilder::new().build()?;
    /// let input = File::open("mess_menu.xlsx")?;
    /// let json = extractor.convert_to_string(input)?;
    /// println!("{}", json);
    /// # Ok(())
    /// # }
    /// ```
    pub fn convert_to_string<R: Read + Seek>(&self, input: R) -> Result<String, XlsxToMenuError> {
        let mut buffer = Vec::new();
        self.convert(input, &mut buffer)?;

        let result = String::from_utf8(buffer).map_err(|e| {
            XlsxToMenuError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;

        Ok(result)
    }

    /// ファイルパス指定の薄いアダプター
    ///
    /// 入力パスのExcelファイルを読み、出力パスへJSONを書き出します。
    /// 既存の出力ファイルは確認なしで上書きされます。
    ///
    /// # 引数
    ///
    /// * `input_path` - 入力Excelファイルのパス
    /// * `output_path` - 出力JSONファイルのパス
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<(), XlsxToMenuError> {
        let input = File::open(input_path)?;
        let output = File::create(output_path)?;
        self.convert(input, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extractor_builder_new() {
        let builder = ExtractorBuilder::new();
        assert_eq!(builder.config.sheet_selector, SheetSelector::First);
        assert_eq!(builder.config.date_style, DateStyle::DayMonthYear);
        assert!(!builder.config.use_1904_epoch);
    }

    #[test]
    fn test_with_sheet_selector() {
        let builder = ExtractorBuilder::new().with_sheet_selector(SheetSelector::Index(2));
        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Index(2)
        ));

        let builder =
            ExtractorBuilder::new().with_sheet_selector(SheetSelector::Name("Menu".to_string()));
        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Name(ref name) if name == "Menu"
        ));
    }

    #[test]
    fn test_with_date_style() {
        let builder =
            ExtractorBuilder::new().with_date_style(DateStyle::Custom("%Y-%m-%d".to_string()));
        assert!(matches!(
            builder.config.date_style,
            DateStyle::Custom(ref s) if s == "%Y-%m-%d"
        ));
    }

    #[test]
    fn test_with_1904_epoch() {
        let builder = ExtractorBuilder::new().with_1904_epoch(true);
        assert!(builder.config.use_1904_epoch);
    }

    #[test]
    fn test_build_success() {
        let result = ExtractorBuilder::new().build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_with_valid_custom_date_style() {
        let result = ExtractorBuilder::new()
            .with_date_style(DateStyle::Custom("%Y/%m/%d".to_string()))
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_with_invalid_custom_date_style() {
        // 空のフォーマット文字列は無効
        let result = ExtractorBuilder::new()
            .with_date_style(DateStyle::Custom("".to_string()))
            .build();
        assert!(result.is_err());
        match result {
            Err(XlsxToMenuError::Config(msg)) => {
                assert!(msg.contains("Invalid date format"));
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_builder_method_chaining() {
        let builder = ExtractorBuilder::new()
            .with_sheet_selector(SheetSelector::Index(0))
            .with_date_style(DateStyle::DayMonthYear)
            .with_1904_epoch(true);

        assert!(matches!(
            builder.config.sheet_selector,
            SheetSelector::Index(0)
        ));
        assert_eq!(builder.config.date_style, DateStyle::DayMonthYear);
        assert!(builder.config.use_1904_epoch);
    }

    #[test]
    fn test_extractor_with_invalid_input() {
        let extractor = ExtractorBuilder::new().build().unwrap();
        // 無効な入力データ（空のVec）
        let invalid_input: Vec<u8> = vec![];
        let result = extractor.convert_to_string(std::io::Cursor::new(invalid_input));
        assert!(result.is_err());
    }
}
