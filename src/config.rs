use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::metar::tables::{default_cloud_coverage_map, default_weather_map, CodeTables, MapEntry};

pub const DEFAULT_UPSTREAM_URL: &str = "https://api.xflysim.com/pilot/api/realTimeMap/weather";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
  pub command_name: String,
  pub command_alias: String,
  pub image_mode: ImageMode,
  /// Viewport width, manual mode only.
  pub image_width: u32,
  /// Viewport height, manual mode only.
  pub image_height: u32,
  /// JPEG quality, 30 to 100.
  pub screenshot_quality: u8,
  pub weather_map: Vec<MapEntry>,
  pub cloud_coverage_map: Vec<MapEntry>,
  /// Log every step of every request.
  pub console_info: bool,
  /// Drop the rendered page and screenshot files once captured.
  pub page_auto_close: bool,
  pub upstream_url: String,
  pub browser: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageMode {
  /// Capture the report card only.
  Auto,
  /// Capture a fixed `imageWidth` x `imageHeight` viewport.
  Manual,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      command_name: "metar".to_string(),
      command_alias: "气象".to_string(),
      image_mode: ImageMode::Auto,
      image_width: 1600,
      image_height: 700,
      screenshot_quality: 80,
      weather_map: default_weather_map(),
      cloud_coverage_map: default_cloud_coverage_map(),
      console_info: false,
      page_auto_close: true,
      upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
      browser: "chromium".to_string(),
    }
  }
}

impl Config {
  /// Loads the config file, writing the defaults there first if it is missing.
  pub fn load(path: &Path) -> Result<Self> {
    let config: Config = confy::load_path(path)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if !(30..=100).contains(&self.screenshot_quality) {
      return Err(Error::Config(format!("screenshotQuality must be within 30..=100, got {}", self.screenshot_quality)));
    }
    if self.image_mode == ImageMode::Manual && (self.image_width == 0 || self.image_height == 0) {
      return Err(Error::Config(format!("manual imageMode needs a non zero size, got {}x{}", self.image_width, self.image_height)));
    }
    if self.command_name.trim().is_empty() {
      return Err(Error::Config("commandName must not be empty".to_string()));
    }
    Ok(())
  }

  pub fn code_tables(&self) -> CodeTables {
    CodeTables::new(&self.weather_map, &self.cloud_coverage_map)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn partial_file_keeps_defaults() {
    let config: Config = serde_yaml::from_str("commandName: wx\nimageMode: manual\nimageWidth: 1200\n").unwrap();

    assert_eq!(config.command_name, "wx");
    assert_eq!(config.command_alias, "气象");
    assert_eq!(config.image_mode, ImageMode::Manual);
    assert_eq!(config.image_width, 1200);
    assert_eq!(config.image_height, 700);
    assert_eq!(config.weather_map, default_weather_map());
    assert!(config.validate().is_ok());
  }

  #[test]
  fn custom_tables() {
    let config: Config = serde_yaml::from_str(r#"
weatherMap:
  - code: RA
    description: rain
cloudCoverageMap: []
"#).unwrap();

    let tables = config.code_tables();
    assert_eq!(tables.weather.get("RA"), Some("rain"));
    assert_eq!(tables.weather.get("SN"), None);
    assert!(tables.cloud.is_empty());
  }

  #[test]
  fn rejects_out_of_range_quality() {
    let config = Config { screenshot_quality: 20, ..Config::default() };
    assert!(matches!(config.validate(), Err(Error::Config(_))));

    let config = Config { screenshot_quality: 101, ..Config::default() };
    assert!(matches!(config.validate(), Err(Error::Config(_))));
  }

  #[test]
  fn manual_mode_needs_a_size() {
    let config = Config { image_mode: ImageMode::Manual, image_height: 0, ..Config::default() };
    assert!(matches!(config.validate(), Err(Error::Config(_))));

    let config = Config { image_mode: ImageMode::Auto, image_height: 0, ..Config::default() };
    assert!(config.validate().is_ok());
  }

  #[test]
  fn load_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    let config = Config::load(&path).unwrap();
    assert_eq!(config, Config::default());
    assert!(path.exists());
  }
}
