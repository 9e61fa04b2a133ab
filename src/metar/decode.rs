use crate::locale;
use crate::metar::tables::CodeTable;
use crate::metar::{CloudLayer, WeatherCodes};

/// Describes the reported weather phenomena. Codes missing from the table
/// read as "unknown phenomenon"; no phenomena at all reads as clear sky.
pub fn parse_weather(codes: Option<&WeatherCodes>, table: &CodeTable) -> String {
    let describe = |code: &str| table.get(code).unwrap_or(locale::UNKNOWN_WEATHER).to_string();

    match codes {
        None => locale::CLEAR_SKY.to_string(),
        Some(WeatherCodes::Single(code)) => describe(code),
        Some(WeatherCodes::Many(codes)) => codes.iter()
            .map(|code| describe(code))
            .collect::<Vec<String>>()
            .join(", "),
    }
}

/// Unmapped coverage codes are shown as is.
pub fn parse_cloud_coverage<'a>(code: &'a str, table: &'a CodeTable) -> &'a str {
    table.get(code).unwrap_or(code)
}

pub fn parse_clouds(layers: Option<&[CloudLayer]>, table: &CodeTable) -> String {
    match layers {
        Some(layers) if !layers.is_empty() => layers.iter()
            .map(|layer| format!(
                "{} {} {} {}",
                parse_cloud_coverage(&layer.coverage, table),
                locale::CLOUD_LAYER_HEIGHT,
                layer.height,
                locale::HUNDRED_FEET,
            ))
            .collect::<Vec<String>>()
            .join(locale::CLOUD_LAYER_SEPARATOR),
        _ => locale::NO_SIGNIFICANT_CLOUD.to_string(),
    }
}

/// Everything after the first `RMK` marker, trimmed.
pub fn extract_remark(metar: &str) -> String {
    match metar.find("RMK") {
        Some(index) => metar[index + 3..].trim().to_string(),
        None => locale::NO_REMARK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metar::tables::MapEntry;

    fn weather_table() -> CodeTable {
        CodeTable::from(&[MapEntry::new("RA", "雨"), MapEntry::new("-", "小"), MapEntry::new("BR", "雾")][..])
    }

    fn cloud_table() -> CodeTable {
        CodeTable::from(&[MapEntry::new("FEW", "少云"), MapEntry::new("BKN", "多云")][..])
    }

    fn layer(coverage: &str, height: &str) -> CloudLayer {
        CloudLayer { coverage: coverage.to_string(), height: height.to_string() }
    }

    #[test]
    fn weather_absent_is_clear_sky() {
        assert_eq!(parse_weather(None, &weather_table()), "晴天");
        assert_eq!(parse_weather(None, &CodeTable::default()), "晴天");
    }

    #[test]
    fn weather_single_code() {
        assert_eq!(parse_weather(Some(&WeatherCodes::Single("RA".into())), &weather_table()), "雨");
        assert_eq!(parse_weather(Some(&WeatherCodes::Single("XX".into())), &weather_table()), "未知天气现象");
    }

    #[test]
    fn weather_many_codes_keep_order() {
        let codes = WeatherCodes::Many(vec!["-".into(), "RA".into(), "XX".into(), "BR".into()]);
        assert_eq!(parse_weather(Some(&codes), &weather_table()), "小, 雨, 未知天气现象, 雾");
    }

    #[test]
    fn cloud_coverage_falls_back_to_code() {
        let table = cloud_table();
        assert_eq!(parse_cloud_coverage("FEW", &table), "少云");
        assert_eq!(parse_cloud_coverage("VV", &table), "VV");
    }

    #[test]
    fn clouds_one_sentence_per_layer() {
        let layers = vec![layer("FEW", "015"), layer("BKN", "040"), layer("OVC", "100")];
        assert_eq!(
            parse_clouds(Some(layers.as_slice()), &cloud_table()),
            "少云 云层高度 015 00英尺，多云 云层高度 040 00英尺，OVC 云层高度 100 00英尺"
        );
    }

    #[test]
    fn clouds_empty_or_absent() {
        assert_eq!(parse_clouds(Some(&[][..]), &cloud_table()), "无特别云层（NSC）");
        assert_eq!(parse_clouds(None, &cloud_table()), "无特别云层（NSC）");
    }

    #[test]
    fn remark_after_marker() {
        assert_eq!(extract_remark("METAR KSFO 221651Z 28012KT 10SM FEW008 14/11 A3001 RMK AO2 SLP123"), "AO2 SLP123");
        assert_eq!(extract_remark("METAR KSFO RMK AO2 RMK X"), "AO2 RMK X");
    }

    #[test]
    fn remark_missing() {
        assert_eq!(extract_remark("METAR KSFO 221651Z 28012KT"), "无 RMK 信息");
        assert_eq!(extract_remark(""), "无 RMK 信息");
        assert_eq!(extract_remark("METAR KSFO rmk lowercase"), "无 RMK 信息");
    }
}
