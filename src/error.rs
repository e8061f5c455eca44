//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use thiserror::Error;

/// messmenuクレート全体で使用するエラー型
///
/// Excelファイルの読み込み、メニュー抽出、JSON書き出し処理中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
///
/// # エラーの種類
///
/// - `Io`: I/O操作中に発生したエラー（ファイル読み込み失敗など）
/// - `Parse`: Excelファイルの解析中に発生したエラー（calamine由来）
/// - `Json`: JSON書き出し中に発生したエラー（serde_json由来）
/// - `Config`: 設定の検証に失敗したエラー（無効なシート指定など）
/// - `SecurityViolation`: セキュリティ制限に違反したエラー
///
/// # 使用例
///
/// ```rust,no_run
/// use messmenu::XlsxToMenuError;
/// use std::fs::File;
///
/// fn read_menu_file(path: &str) -> Result<(), XlsxToMenuError> {
///     let file = File::open(path)?;  // Ioエラーが自動的に変換される
///     // ... 処理 ...
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum XlsxToMenuError {
    /// I/O操作中に発生したエラー
    ///
    /// 入力ファイルの読み込み失敗、出力ファイルの書き込み失敗など、
    /// 標準ライブラリの`std::io::Error`が発生した場合に使用されます。
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Excelファイルの解析中に発生したエラー
    ///
    /// calamineクレートがExcelファイルを解析する際に発生したエラーです。
    /// ファイル形式が不正、破損したファイルなどが原因となります。
    #[error("Failed to parse Excel file: {0}")]
    Parse(#[from] calamine::Error),

    /// JSON書き出し中に発生したエラー
    #[error("Failed to write JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ExtractorBuilder::build()`時の検証、またはシート選択時に
    /// 無効な指定が検出された場合に発生します。例えば、存在しない
    /// シート名や範囲外のシートインデックスなどです。
    #[error("Configuration error: {0}")]
    Config(String),

    /// セキュリティ制限に違反したエラー
    ///
    /// 入力ファイルサイズ制限などのセキュリティ制限に違反した場合に
    /// 発生します。
    #[error("Security violation: {0}")]
    SecurityViolation(String),
}
