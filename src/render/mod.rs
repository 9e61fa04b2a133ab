pub mod capture;
pub mod chromium;

use rocket::async_trait;
use crate::error::Result;

/// Turns a report document into an image.
#[async_trait]
pub trait Renderer: Send + Sync {
  /// Renders `document` and returns the encoded JPEG screenshot.
  async fn capture(&self, document: &str) -> Result<Vec<u8>>;
}
