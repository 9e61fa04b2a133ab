pub mod markup;

use chrono::{DateTime, FixedOffset};
use crate::locale;
use crate::metar::decode::{extract_remark, parse_clouds, parse_weather};
use crate::metar::tables::CodeTables;
use crate::metar::{RawReport, VisibilityUnit};
use crate::stamp::{format_observation_time, StampError};

/// A labelled value of the report card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub label: &'static str,
    pub value: String,
}

impl Item {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Report card content, before any markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    pub icao: String,
    pub generated_at: String,
    pub overview: Vec<Item>,
    pub details: Vec<Item>,
}

impl Sections {
    pub fn overview(&self, label: &str) -> Option<&str> {
        self.overview.iter().find(|item| item.label == label).map(|item| item.value.as_str())
    }

    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details.iter().find(|item| item.label == label).map(|item| item.value.as_str())
    }
}

impl VisibilityUnit {
    pub fn word(&self) -> &'static str {
        match self {
            VisibilityUnit::Meter => locale::METER,
            VisibilityUnit::Mile => locale::MILE,
            VisibilityUnit::Unknown => locale::UNKNOWN,
        }
    }
}

/// Lays out a report. Missing data always degrades to a placeholder; the only
/// error is a raw METAR without an observation time token.
pub fn compose(report: &RawReport, tables: &CodeTables, now: DateTime<FixedOffset>) -> Result<Sections, StampError> {
    let decoded = report.decoded();
    let unit = decoded.visibility_unit.word();
    let metar = report.metar.as_deref().filter(|metar| !metar.is_empty());

    let or = |value: &Option<String>, fallback: &str| value.clone().unwrap_or_else(|| fallback.to_string());
    let unknown = |value: &Option<String>| or(value, locale::UNKNOWN);
    let not_available = |value: &Option<String>| or(value, locale::NOT_AVAILABLE);

    // a zero direction is how a calm wind (00000KT) comes through
    let wind_dir = decoded.wind_dir.clone()
        .filter(|dir| dir.trim().parse::<f64>().map_or(true, |degrees| degrees != 0.0));

    let observed = match metar {
        Some(metar) => format_observation_time(metar, now)?,
        None => locale::UNKNOWN.to_string(),
    };

    let overview = vec![
        Item::new(locale::WIND_DIRECTION, format!("{}°", or(&wind_dir, locale::CALM))),
        Item::new(locale::WIND_SPEED, format!("{} m/s", not_available(&decoded.wind_speed))),
        Item::new(locale::TEMPERATURE, format!("{}°C", not_available(&decoded.temperature))),
        Item::new(locale::VISIBILITY, format!("{} {}", not_available(&decoded.visibility), unit)),
        Item::new(locale::PRESSURE, format!("{} hPa", not_available(&decoded.qnh))),
    ];

    let details = vec![
        Item::new(locale::TIME, observed),
        Item::new(locale::WIND_DIRECTION, format!("{}°", unknown(&decoded.wind_dir))),
        Item::new(locale::WIND_SPEED, format!("{} /{}", unknown(&decoded.wind_speed), unknown(&decoded.wind_unit))),
        Item::new(locale::VISIBILITY, format!("{} {}", unknown(&decoded.visibility), unit)),
        Item::new(locale::WEATHER, parse_weather(decoded.weather.as_ref(), &tables.weather)),
        Item::new(locale::TEMPERATURE, format!("{}°C", unknown(&decoded.temperature))),
        Item::new(locale::DEWPOINT, format!("{}°C", unknown(&decoded.dewpoint))),
        Item::new(locale::PRESSURE, format!("{} {}", unknown(&decoded.qnh), unknown(&decoded.qnh_unit))),
        Item::new(locale::CLOUDS, parse_clouds(Some(decoded.cloud.as_slice()), &tables.cloud)),
        Item::new(locale::FORECAST, or(&decoded.forecast, locale::NO_SIGNIFICANT_CHANGE)),
        Item::new(locale::REMARK, extract_remark(metar.unwrap_or_default())),
        Item::new(locale::RAW_METAR, unknown(&report.metar.clone().filter(|metar| !metar.is_empty()))),
    ];

    Ok(Sections {
        icao: unknown(&report.icao.clone().filter(|icao| !icao.is_empty())),
        generated_at: locale::generated_at(&now.format(locale::GENERATED_AT_FORMAT).to_string()),
        overview,
        details,
    })
}

/// Composes a report and serializes it to the styled document handed to the
/// renderer.
pub fn render_document(report: &RawReport, tables: &CodeTables, now: DateTime<FixedOffset>) -> Result<String, StampError> {
    Ok(markup::render(&compose(report, tables, now)?))
}
