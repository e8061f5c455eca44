//! Workbook Parser
//!
//! calamineを使用したExcelファイル解析の基礎実装。
//! ワークブックを開き、1枚のシートを選択してグリッドを取り出す。

use calamine::{open_workbook_auto_from_rs, Reader, Sheets, Xlsx};
use std::io::{Cursor, Read, Seek};

use crate::api::SheetSelector;
use crate::error::XlsxToMenuError;
use crate::grid::SheetGrid;
use crate::security::SecurityConfig;

/// ワークブックパーサー
///
/// calamineのラッパーとして、ワークブックレベルの操作を提供します。
pub(crate) struct WorkbookParser {
    /// calamineのワークブック（XLSX形式のみサポート）
    workbook: Xlsx<Cursor<Vec<u8>>>,
}

impl WorkbookParser {
    /// ワークブックを開く
    ///
    /// # 引数
    ///
    /// * `reader` - Excelファイルを読み込むためのリーダー（Read + Seekトレイトを実装）
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - ワークブックの読み込みに成功した場合
    /// * `Err(XlsxToMenuError::SecurityViolation)` - 入力サイズ制限を超えた場合
    /// * `Err(XlsxToMenuError::Parse)` - ワークブックの解析に失敗した場合
    /// * `Err(XlsxToMenuError::Config)` - XLSX形式でない場合
    pub fn open<R: Read + Seek>(mut reader: R) -> Result<Self, XlsxToMenuError> {
        // セキュリティチェック: 入力ファイルサイズの上限
        let security_config = SecurityConfig::default();

        let mut buffer = Vec::new();
        let bytes_read = reader.read_to_end(&mut buffer)?;

        if bytes_read as u64 > security_config.max_input_file_size {
            return Err(XlsxToMenuError::SecurityViolation(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                bytes_read, security_config.max_input_file_size
            )));
        }

        let sheets = open_workbook_auto_from_rs(Cursor::new(buffer)).map_err(XlsxToMenuError::Parse)?;
        match sheets {
            Sheets::Xlsx(workbook) => Ok(Self { workbook }),
            _ => Err(XlsxToMenuError::Config(
                "Only XLSX format is supported".to_string(),
            )),
        }
    }

    /// すべてのシート名を取得
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// シート選択方式に基づいて1枚のシートを選択
    ///
    /// # 引数
    ///
    /// * `selector` - シート選択方式
    ///
    /// # 戻り値
    ///
    /// * `Ok(String)` - 選択されたシート名
    /// * `Err(XlsxToMenuError::Config)` - シートが存在しない、見つからない、
    ///   またはインデックスが範囲外の場合
    pub fn select_sheet(&self, selector: &SheetSelector) -> Result<String, XlsxToMenuError> {
        let all_sheet_names = self.sheet_names();

        match selector {
            SheetSelector::First => all_sheet_names
                .first()
                .cloned()
                .ok_or_else(|| XlsxToMenuError::Config("Workbook has no sheets".to_string())),

            SheetSelector::Index(index) => {
                if *index >= all_sheet_names.len() {
                    return Err(XlsxToMenuError::Config(format!(
                        "Sheet index {} is out of range (total: {})",
                        index,
                        all_sheet_names.len()
                    )));
                }
                Ok(all_sheet_names[*index].clone())
            }

            SheetSelector::Name(name) => {
                if !all_sheet_names.contains(name) {
                    return Err(XlsxToMenuError::Config(format!("Sheet '{}' not found", name)));
                }
                Ok(name.clone())
            }
        }
    }

    /// 指定シートの使用範囲をグリッドとして読み出す
    ///
    /// # 引数
    ///
    /// * `sheet_name` - 読み出すシート名
    ///
    /// # 戻り値
    ///
    /// * `Ok(SheetGrid)` - シートのグリッド（空シートは空グリッド）
    /// * `Err(XlsxToMenuError::Parse)` - シートの読み出しに失敗した場合
    pub fn load_grid(&mut self, sheet_name: &str) -> Result<SheetGrid, XlsxToMenuError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|e| XlsxToMenuError::Parse(e.into()))?;

        Ok(SheetGrid::from_range(&range))
    }
}

// パーサー本体のテストは統合テスト（tests/）で実装します。
// 実際のXLSXファイルが必要なため、単体テストではなく統合テストとして実装します。
