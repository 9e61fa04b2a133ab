use std::collections::HashMap;
use serde::{Serialize, Deserialize};

/// One row of a user editable code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    pub code: String,
    pub description: String,
}

impl MapEntry {
    pub fn new(code: &str, description: &str) -> Self {
        Self { code: code.to_string(), description: description.to_string() }
    }
}

/// Lookup form of a list of [`MapEntry`]. A later entry wins over an earlier
/// one with the same code.
#[derive(Debug, Default, Clone)]
pub struct CodeTable(HashMap<String, String>);

impl CodeTable {
    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[MapEntry]> for CodeTable {
    fn from(entries: &[MapEntry]) -> Self {
        CodeTable(entries.iter()
            .map(|entry| (entry.code.clone(), entry.description.clone()))
            .collect())
    }
}

/// Both tables a report is decoded with, built once at startup.
#[derive(Debug, Default, Clone)]
pub struct CodeTables {
    pub weather: CodeTable,
    pub cloud: CodeTable,
}

impl CodeTables {
    pub fn new(weather: &[MapEntry], cloud: &[MapEntry]) -> Self {
        Self { weather: weather.into(), cloud: cloud.into() }
    }
}

pub fn default_weather_map() -> Vec<MapEntry> {
    [
        ("BR", "雾"),
        ("FG", "雾或薄雾"),
        ("HZ", "霾"),
        ("FU", "烟雾"),
        ("VA", "火山灰"),
        ("DU", "沙尘"),
        ("SA", "沙"),
        ("SS", "尘暴"),
        ("DS", "风沙"),
        ("SG", "雪粒"),
        ("IC", "冰晶"),
        ("PL", "霰"),
        ("GR", "冰雹"),
        ("GS", "小冰雹"),
        ("UP", "未知降水"),
        ("RA", "雨"),
        ("DZ", "毛毛雨"),
        ("SN", "雪"),
        ("SQ", "飑线"),
        ("FC", "风暴"),
        ("TS", "雷暴"),
        ("MI", "微型沙尘暴"),
        ("PR", "部分地区"),
        ("BC", "局部"),
        ("DR", "吹动的尘土或雪花"),
        ("BL", "风暴"),
        ("SH", "阵性降水"),
        ("+", "大"),
        ("-", "小"),
    ].iter().map(|(code, description)| MapEntry::new(code, description)).collect()
}

pub fn default_cloud_coverage_map() -> Vec<MapEntry> {
    [
        ("FEW", "少云"),
        ("SCT", "疏云"),
        ("BKN", "多云"),
        ("OVC", "满天云"),
        ("NSC", "无显著云层"),
        ("SKC", "晴空"),
        ("CLR", "晴朗"),
    ].iter().map(|(code, description)| MapEntry::new(code, description)).collect()
}
