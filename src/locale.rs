//! zh-CN strings shown on report cards and in command replies.

pub const CLEAR_SKY: &str = "晴天";
pub const UNKNOWN_WEATHER: &str = "未知天气现象";
pub const NO_SIGNIFICANT_CLOUD: &str = "无特别云层（NSC）";
pub const CLOUD_LAYER_HEIGHT: &str = "云层高度";
pub const HUNDRED_FEET: &str = "00英尺";
pub const CLOUD_LAYER_SEPARATOR: &str = "，";
pub const NO_REMARK: &str = "无 RMK 信息";
pub const NO_SIGNIFICANT_CHANGE: &str = "无显著变化";
pub const CALM: &str = "地面静风";
pub const UNKNOWN: &str = "未知";
pub const NOT_AVAILABLE: &str = "N/A";

pub const METER: &str = "米";
pub const MILE: &str = "英里";

pub const TITLE: &str = "METAR 报告";
pub const HEADER: &str = "METAR 信息";
pub const DATA_SOURCE: &str = "XFlysim Network";

pub const WIND_DIRECTION: &str = "风向";
pub const WIND_SPEED: &str = "风速";
pub const TEMPERATURE: &str = "温度";
pub const VISIBILITY: &str = "能见度";
pub const PRESSURE: &str = "气压";
pub const TIME: &str = "时间";
pub const WEATHER: &str = "天气现象";
pub const DEWPOINT: &str = "露点";
pub const CLOUDS: &str = "云层状况";
pub const FORECAST: &str = "预报";
pub const REMARK: &str = "Remark";
pub const RAW_METAR: &str = "原始METAR";

pub const INVALID_ICAO: &str = "请提供一个有效的 ICAO 代码。";
pub const FETCH_FAILED: &str = "无法获取 METAR 数据";
pub const REPORT_FAILED: &str = "获取或生成 METAR 信息失败，请稍后再试。";
pub const DESCRIPTION: &str = "查询指定 ICAO 机场的 METAR/SPECI 天气报告";

pub fn usage(command: &str, alias: &str) -> String {
    format!("{command} <icao>\n{DESCRIPTION}\n别名：{alias}\n使用方法：{command} <ICAO代码>\n示例：{command} KSFO")
}

/// `本页面由九号生成于 2024年03月25日18时00分05秒，数据源于XFlysim Network`
pub fn generated_at(date: &str) -> String {
    format!("本页面由九号生成于 {date}，数据源于{DATA_SOURCE}")
}

pub const GENERATED_AT_FORMAT: &str = "%Y年%m月%d日%H时%M分%S秒";
