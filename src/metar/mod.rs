pub mod decode;
pub mod tables;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Upstream payload for one airport at one observation instant.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RawReport {
    pub icao: Option<String>,
    pub metar: Option<String>,
    /// JSON encoded [`DecodedFields`], as sent by the weather API.
    pub metar_decode: Option<String>,
}

impl RawReport {
    /// Decodes `metar_decode`. A payload that is not valid JSON is logged and
    /// read as if no field had been decoded.
    pub fn decoded(&self) -> DecodedFields {
        match self.metar_decode.as_deref().map(str::trim) {
            Some(payload) if !payload.is_empty() => DecodedFields::parse(payload).unwrap_or_else(|e| {
                warn!("Failed to parse metarDecode of {} : {}", self.icao.as_deref().unwrap_or("?"), e);
                DecodedFields::default()
            }),
            _ => DecodedFields::default(),
        }
    }
}

/// Fields pre-decoded by the weather API. Every field is optional and values
/// of an unexpected shape are dropped instead of failing the whole record.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct DecodedFields {
    #[serde(default, deserialize_with = "lenient::text")]
    pub wind_dir: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub wind_speed: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub wind_unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub visibility: Option<String>,
    #[serde(default, deserialize_with = "lenient::visibility_unit")]
    pub visibility_unit: VisibilityUnit,
    #[serde(default, deserialize_with = "lenient::text")]
    pub temperature: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub dewpoint: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub qnh: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub qnh_unit: Option<String>,
    #[serde(default, deserialize_with = "lenient::weather")]
    pub weather: Option<WeatherCodes>,
    #[serde(default, deserialize_with = "lenient::clouds")]
    pub cloud: Vec<CloudLayer>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub forecast: Option<String>,
}

impl DecodedFields {
    pub fn parse(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityUnit {
    Meter,
    Mile,
    #[default]
    Unknown,
}

/// Weather phenomenon codes, as one code or as a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherCodes {
    Single(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudLayer {
    pub coverage: String,
    /// Hundreds of feet, verbatim from upstream.
    pub height: String,
}

mod lenient {
    use super::*;
    use crate::locale;

    fn number(n: &serde_json::Number) -> String {
        match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        }
    }

    fn as_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(number(n)),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    pub(super) fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(as_text(&Value::deserialize(d)?))
    }

    pub(super) fn visibility_unit<'de, D: Deserializer<'de>>(d: D) -> Result<VisibilityUnit, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(unit) if unit == "meter" => VisibilityUnit::Meter,
            Value::String(unit) if unit == "mile" => VisibilityUnit::Mile,
            _ => VisibilityUnit::Unknown,
        })
    }

    pub(super) fn weather<'de, D: Deserializer<'de>>(d: D) -> Result<Option<WeatherCodes>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(codes) if !codes.is_empty() => Some(WeatherCodes::Many(
                codes.iter()
                    .map(|code| as_text(code).unwrap_or_else(|| code.to_string()))
                    .collect()
            )),
            other => as_text(&other).map(WeatherCodes::Single),
        })
    }

    pub(super) fn clouds<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<CloudLayer>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(layers) => layers.iter()
                .filter_map(Value::as_object)
                .map(|layer| CloudLayer {
                    coverage: layer.get("type").and_then(as_text).unwrap_or_else(|| locale::UNKNOWN.to_string()),
                    height: layer.get("height").and_then(as_text).unwrap_or_else(|| locale::UNKNOWN.to_string()),
                })
                .collect(),
            _ => Vec::new(),
        })
    }
}
