//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

/// シート選択方式
///
/// 抽出対象のワークシートを選択する方法を指定します。
/// メニュー表は1枚のシートに収まるため、常に1枚だけが選択されます。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SheetSelector {
    /// 先頭のシートを選択（デフォルト）
    First,

    /// インデックス指定（0始まり）
    ///
    /// 例: `SheetSelector::Index(1)` は2番目のシートを選択
    Index(usize),

    /// シート名指定
    ///
    /// 例: `SheetSelector::Name("Menu".to_string())`
    Name(String),
}

impl Default for SheetSelector {
    fn default() -> Self {
        SheetSelector::First
    }
}

/// 日付キーの出力形式
///
/// 日付行のセルをJSONの日付キーへ整形する際の形式を指定します。
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateStyle {
    /// `{日}-{月略称}-{2桁年}` 形式（デフォルト）
    ///
    /// 日は先頭ゼロなし、月は3文字の先頭大文字略称です。
    /// プラットフォームに依存せず、常にこの1つの形式で整形されます。
    ///
    /// 例: `5-Jan-24`（`05-Jan-24`にはなりません）
    DayMonthYear,

    /// カスタム形式（chrono互換フォーマット文字列）
    ///
    /// # 使用例
    ///
    /// ```rust,no_run
    /// use messmenu::{ExtractorBuilder, DateStyle};
    ///
    /// # fn main() -> Result<(), messmenu::XlsxToMenuError> {
    /// let extractor = ExtractorBuilder::new()
    ///     .with_date_style(DateStyle::Custom("%Y-%m-%d".to_string()))
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    Custom(String),
}

impl Default for DateStyle {
    fn default() -> Self {
        DateStyle::DayMonthYear
    }
}
