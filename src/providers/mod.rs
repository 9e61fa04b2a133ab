pub mod xflysim;

use rocket::async_trait;
use crate::error::Result;
use crate::metar::RawReport;

/// Where METAR reports come from.
#[async_trait]
pub trait Fetcher: Send + Sync {
  fn id(&self) -> String;

  /// Fetches the latest report of an airport, `icao` is already uppercased.
  async fn fetch(&self, icao: &str) -> Result<RawReport>;
}
