//! Grid Module
//!
//! ワークシートの使用範囲を行×列の稠密グリッドとして保持するモジュール。
//! 範囲外アクセスは常に「欠損セル」として扱い、パニックしない。

use calamine::{Data, Range};

use crate::types::CellValue;

/// シートグリッド
///
/// 読み取り専用の入力データです。行0が曜日ラベル行、行1が日付行、
/// 行2以降がデータ行という前提のレイアウトをそのまま保持します。
#[derive(Debug, Clone, Default)]
pub(crate) struct SheetGrid {
    rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    /// calamineのセル範囲からグリッドを構築
    pub fn from_range(range: &Range<Data>) -> Self {
        let rows = range
            .rows()
            .map(|row| row.iter().map(convert_cell).collect())
            .collect();
        Self { rows }
    }

    /// テスト用: セル値の二次元配列から直接構築
    #[cfg(test)]
    pub fn from_cells(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// 指定行を取得（範囲外は`None`）
    pub fn row(&self, index: usize) -> Option<&[CellValue]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// 行数を取得
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// calamineのセルデータを内部表現へ変換
///
/// 日付/時刻セルはシリアル値のまま保持し、整形は後段に委ねる。
/// ISO文字列形式の日付（ODS由来など）はテキストとして扱う。
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::Error(format!("{:?}", e)),
        _ => CellValue::Empty,
    }
}
