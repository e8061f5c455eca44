//! Security Module
//!
//! ファイル処理時のセキュリティ制限を定義するモジュール。

/// セキュリティ設定
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 100MB (104_857_600 bytes)
    ///
    /// メニュー表は小さな有界グリッドであり、これを超える入力は
    /// 不正なファイルとみなして拒否します。
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 104_857_600, // 100MB
        }
    }
}
