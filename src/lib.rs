#[macro_use]
extern crate log;

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod locale;
pub mod metar;
pub mod pipeline;
pub mod providers;
pub mod render;
pub mod report;
pub mod stamp;

use std::sync::Arc;
use crate::clock::SystemClock;
use crate::config::Config;
use crate::error::Result;
use crate::pipeline::MetarService;
use crate::providers::xflysim::XFlysim;
use crate::render::chromium::Chromium;

/// Wires the production fetcher, renderer and clock after `config`.
pub fn service(config: &Config) -> Result<MetarService> {
  Ok(MetarService::new(
    Box::new(XFlysim::new(&config.upstream_url)?),
    Box::new(Chromium::from_config(config)),
    Arc::new(config.code_tables()),
    Box::new(SystemClock),
  )
    .with_usage(&config.command_name, &config.command_alias)
    .verbose(config.console_info))
}
