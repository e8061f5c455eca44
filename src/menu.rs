//! Menu Model Module
//!
//! 抽出結果を表すドメイン型を定義するモジュール。
//! 日付キーの出現順を保持したまま、固定キー順（BREAKFAST / LUNCH / DINNER）で
//! シリアライズできるデータ構造を提供する。

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// 食事区分
///
/// 行走査中の「現在の食事区分」を表す状態でもあり、
/// 出力JSONの固定キーでもあります。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meal {
    /// 朝食（`BREAKFAST`）
    Breakfast,

    /// 昼食（`LUNCH`）
    Lunch,

    /// 夕食（`DINNER`）
    Dinner,
}

impl Meal {
    /// 出力キー順に並んだ全区分
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    /// 正規化済みラベルを返す
    pub fn label(&self) -> &'static str {
        match self {
            Meal::Breakfast => "BREAKFAST",
            Meal::Lunch => "LUNCH",
            Meal::Dinner => "DINNER",
        }
    }

    /// セル文字列から食事区分を認識する
    ///
    /// 前後空白を除去し大文字化した結果が、ラベルと完全一致した場合のみ
    /// 区分として認識します。部分一致は認識しません。
    pub fn from_cell_text(text: &str) -> Option<Meal> {
        match text.trim().to_uppercase().as_str() {
            "BREAKFAST" => Some(Meal::Breakfast),
            "LUNCH" => Some(Meal::Lunch),
            "DINNER" => Some(Meal::Dinner),
            _ => None,
        }
    }
}

/// 1日分のメニュー
///
/// 3つの食事区分それぞれの品目リストを保持します。
/// シリアライズ時のキー順は常に `BREAKFAST`, `LUNCH`, `DINNER` で、
/// 空であってもすべてのキーが出力されます。
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct DayMenu {
    /// 朝食の品目（追加順）
    #[serde(rename = "BREAKFAST")]
    pub breakfast: Vec<String>,

    /// 昼食の品目（追加順）
    #[serde(rename = "LUNCH")]
    pub lunch: Vec<String>,

    /// 夕食の品目（追加順）
    #[serde(rename = "DINNER")]
    pub dinner: Vec<String>,
}

impl DayMenu {
    /// 指定区分の品目リストを取得
    pub fn items(&self, meal: Meal) -> &[String] {
        match meal {
            Meal::Breakfast => &self.breakfast,
            Meal::Lunch => &self.lunch,
            Meal::Dinner => &self.dinner,
        }
    }

    fn items_mut(&mut self, meal: Meal) -> &mut Vec<String> {
        match meal {
            Meal::Breakfast => &mut self.breakfast,
            Meal::Lunch => &mut self.lunch,
            Meal::Dinner => &mut self.dinner,
        }
    }

    /// 全区分が空かどうかを判定
    pub fn is_empty(&self) -> bool {
        self.breakfast.is_empty() && self.lunch.is_empty() && self.dinner.is_empty()
    }
}

/// 日付キー → 1日分メニューの対応表
///
/// 日付キーは日付行での初出順を保持します。同じ表示文字列に整形される
/// 日付が複数列に現れた場合、キーは1つに集約され、各列の品目は同じ
/// バケットへ蓄積されます。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuTable {
    /// 日付キーの初出順
    order: Vec<String>,

    /// 日付キー → メニュー
    days: HashMap<String, DayMenu>,
}

impl MenuTable {
    /// 空の対応表を生成
    pub fn new() -> Self {
        Self::default()
    }

    /// 日付キーを登録し、3つの空の品目リストを初期化する
    ///
    /// 既存キーの場合は何もしません（蓄積済みの品目は保持されます）。
    pub fn insert_day(&mut self, date_key: &str) {
        if !self.days.contains_key(date_key) {
            self.order.push(date_key.to_string());
            self.days.insert(date_key.to_string(), DayMenu::default());
        }
    }

    /// 登録済みの日付キーかどうかを判定
    pub fn contains_day(&self, date_key: &str) -> bool {
        self.days.contains_key(date_key)
    }

    /// 指定キーの指定区分へ品目を追加する
    ///
    /// 未登録キーへの追加は無視され、`false`を返します。
    pub fn push_item(&mut self, date_key: &str, meal: Meal, item: impl Into<String>) -> bool {
        match self.days.get_mut(date_key) {
            Some(day) => {
                day.items_mut(meal).push(item.into());
                true
            }
            None => false,
        }
    }

    /// 指定キーのメニューを取得
    pub fn day(&self, date_key: &str) -> Option<&DayMenu> {
        self.days.get(date_key)
    }

    /// 日付キーを初出順に列挙
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// 登録済み日付キー数
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// 日付キーが1つも登録されていないかを判定
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

// HashMapのイテレーション順ではなく、初出順でマップをシリアライズする
impl Serialize for MenuTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for date_key in &self.order {
            map.serialize_entry(date_key, &self.days[date_key])?;
        }
        map.end()
    }
}
