//! Extraction Module
//!
//! グリッドからメニュー対応表を組み立てる純粋な抽出コア。
//! ファイルI/Oには一切依存せず、グリッドのみを入力として動作するため、
//! ファイルシステムなしで単体テストできます。

use std::collections::HashSet;

use crate::error::XlsxToMenuError;
use crate::formatter::CellFormatter;
use crate::grid::SheetGrid;
use crate::menu::{Meal, MenuTable};
use crate::types::CellValue;

/// 曜日ラベル行のインデックス
const DAY_LABEL_ROW: usize = 0;

/// 日付行のインデックス
const DATE_ROW: usize = 1;

/// データ行の開始インデックス
const FIRST_DATA_ROW: usize = 2;

/// メニュー抽出器
///
/// 4つの段階を順に実行して、グリッドを`MenuTable`へ変換します。
///
/// 1. 曜日ラベル行（行0）の収集
/// 2. 日付行（行1）の整形
/// 3. 日付キーごとの空バケット初期化
/// 4. 残りの行の走査と品目の蓄積
#[derive(Debug)]
pub(crate) struct MenuExtractor<'a> {
    formatter: &'a CellFormatter,
}

impl<'a> MenuExtractor<'a> {
    /// 新しい抽出器を生成
    pub fn new(formatter: &'a CellFormatter) -> Self {
        Self { formatter }
    }

    /// グリッドからメニュー対応表を抽出
    pub fn extract(&self, grid: &SheetGrid) -> Result<MenuTable, XlsxToMenuError> {
        let day_labels = self.extract_day_labels(grid)?;
        let date_columns = self.extract_date_columns(grid)?;
        let mut table = init_buckets(&date_columns);
        self.walk_rows(grid, &date_columns, &day_labels, &mut table)?;
        Ok(table)
    }

    /// 行0から曜日ラベルの集合を収集
    ///
    /// 欠損でないセルごとに、前後空白を除去し大文字化して集合へ追加します。
    /// 行が存在しない、またはすべて欠損の場合は空集合になります。
    fn extract_day_labels(&self, grid: &SheetGrid) -> Result<HashSet<String>, XlsxToMenuError> {
        let mut labels = HashSet::new();
        if let Some(row) = grid.row(DAY_LABEL_ROW) {
            for cell in row {
                if let Some(text) = self.formatter.display_text(cell)? {
                    if !text.is_empty() {
                        labels.insert(text.to_uppercase());
                    }
                }
            }
        }
        Ok(labels)
    }

    /// 行1を列順に整形し、列ごとの日付キー候補を返す
    ///
    /// 欠損セルは`None`、それ以外は表示文字列になります。
    /// 結果は行1とちょうど同じ長さです（行1がなければ空）。
    fn extract_date_columns(
        &self,
        grid: &SheetGrid,
    ) -> Result<Vec<Option<String>>, XlsxToMenuError> {
        match grid.row(DATE_ROW) {
            Some(row) => row
                .iter()
                .map(|cell| self.formatter.display_text(cell))
                .collect(),
            None => Ok(Vec::new()),
        }
    }

    /// 行2以降を走査し、現在の食事区分のバケットへ品目を蓄積する
    ///
    /// 状態は「現在の食事区分」のみで、初期値はなし（どの区分の
    /// マーカーも見ていない間は何も蓄積しない）。
    fn walk_rows(
        &self,
        grid: &SheetGrid,
        date_columns: &[Option<String>],
        day_labels: &HashSet<String>,
        table: &mut MenuTable,
    ) -> Result<(), XlsxToMenuError> {
        let mut current_meal: Option<Meal> = None;

        for row_index in FIRST_DATA_ROW..grid.row_count() {
            let row = match grid.row(row_index) {
                Some(row) => row,
                None => continue,
            };

            // マーカー行は区分を切り替えるだけで、品目は一切拾わない
            if let Some(meal) = find_meal_marker(row) {
                current_meal = Some(meal);
                continue;
            }

            let meal = match current_meal {
                Some(meal) => meal,
                None => continue,
            };

            for (col_index, maybe_key) in date_columns.iter().enumerate() {
                let date_key = match maybe_key {
                    Some(key) => key,
                    None => continue,
                };
                if !table.contains_day(date_key) {
                    continue;
                }

                // 行が日付行より短い場合、範囲外の列は欠損セル扱い
                let cell = match row.get(col_index) {
                    Some(cell) => cell,
                    None => continue,
                };
                let text = match self.formatter.display_text(cell)? {
                    Some(text) => text,
                    None => continue,
                };

                if text.is_empty() || is_decorative(&text) || is_stray_label(&text, day_labels) {
                    continue;
                }

                table.push_item(date_key, meal, text);
            }
        }

        Ok(())
    }
}

/// 日付キー候補から対応表を初期化
///
/// 存在し、かつ空文字列でないキーごとに3つの空の品目リストを作ります。
/// 同じキーが複数列に現れても、バケットは1つに集約されます。
fn init_buckets(date_columns: &[Option<String>]) -> MenuTable {
    let mut table = MenuTable::new();
    for date_key in date_columns.iter().flatten() {
        if !date_key.is_empty() {
            table.insert_day(date_key);
        }
    }
    table
}

/// 行から食事区分マーカーを探す
///
/// 文字列セルのみを左から走査し、最初に区分ラベルへ完全一致した
/// ものを返します（先勝ち）。
fn find_meal_marker(row: &[CellValue]) -> Option<Meal> {
    row.iter()
        .filter_map(|cell| cell.as_str())
        .find_map(Meal::from_cell_text)
}

/// 装飾セルの判定
///
/// `*`を1つでも含むテキストは脚注/注釈の慣習とみなして除外する。
fn is_decorative(text: &str) -> bool {
    text.contains('*')
}

/// 迷い込んだ曜日ラベルの判定
///
/// 大文字化したテキストが行0で収集したラベルへ完全一致する場合、
/// 本体に紛れ込んだ曜日ラベルの繰り返しとみなして除外する。
fn is_stray_label(text: &str, day_labels: &HashSet<String>) -> bool {
    day_labels.contains(&text.to_uppercase())
}
