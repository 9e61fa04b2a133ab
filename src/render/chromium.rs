use std::io::Write;
use std::path::PathBuf;
use async_process::Command;
use rocket::async_trait;
use tempfile::NamedTempFile;
use crate::config::{Config, ImageMode};
use crate::error::{Error, Result};
use crate::render::capture::{crop, encode_jpeg, locate_card, touches_edge};
use crate::render::Renderer;
use crate::report::markup::{CONTAINER_CLASS, PAGE_BACKGROUND};

/// Viewport used in auto mode, large enough for the card to fit whole.
const AUTO_VIEWPORT: (u32, u32) = (1280, 1024);

/// Renders documents with a headless Chromium (or any browser accepting the
/// same `--screenshot` flags).
pub struct Chromium {
    browser: String,
    mode: ImageMode,
    viewport: (u32, u32),
    quality: u8,
    auto_close: bool,
}

impl Chromium {
    pub fn from_config(config: &Config) -> Self {
        Self {
            browser: config.browser.clone(),
            mode: config.image_mode,
            viewport: match config.image_mode {
                ImageMode::Auto => AUTO_VIEWPORT,
                ImageMode::Manual => (config.image_width, config.image_height),
            },
            quality: config.screenshot_quality,
            auto_close: config.page_auto_close,
        }
    }

    fn temp_file(suffix: &str) -> Result<NamedTempFile> {
        Ok(tempfile::Builder::new().prefix("metar-").suffix(suffix).tempfile()?)
    }
}

/// Drops the page and screenshot files, or persists them and returns their
/// paths when `auto_close` is off.
fn release(page: NamedTempFile, screenshot: NamedTempFile, auto_close: bool) -> Result<Option<(PathBuf, PathBuf)>> {
    if auto_close {
        return Ok(None);
    }

    let (_, page) = page.keep().map_err(|e| e.error)?;
    let (_, screenshot) = screenshot.keep().map_err(|e| e.error)?;
    info!("Kept rendered page {} and screenshot {}", page.display(), screenshot.display());

    Ok(Some((page, screenshot)))
}

#[async_trait]
impl Renderer for Chromium {
    async fn capture(&self, document: &str) -> Result<Vec<u8>> {
        let mut page = Self::temp_file(".html")?;
        page.write_all(document.as_bytes())?;
        page.flush()?;

        let screenshot = Self::temp_file(".png")?;

        debug!("Render {} at {}x{} to {}", page.path().display(), self.viewport.0, self.viewport.1, screenshot.path().display());

        let output = Command::new(&self.browser)
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--hide-scrollbars")
            .arg(format!("--window-size={},{}", self.viewport.0, self.viewport.1))
            .arg(format!("--screenshot={}", screenshot.path().display()))
            .arg(format!("file://{}", page.path().display()))
            .output().await?;

        debug!("{}", String::from_utf8_lossy(output.stdout.as_slice()));
        if !output.status.success() {
            error!("Error rendering page : {}", String::from_utf8_lossy(output.stderr.as_slice()));
            return Err(Error::Render(format!("{} exited with {}", self.browser, output.status)));
        }

        let image = image::open(screenshot.path())?;
        let image = match self.mode {
            ImageMode::Auto => {
                let card = locate_card(&image.to_rgb8(), PAGE_BACKGROUND)
                    .ok_or_else(|| Error::CaptureTarget(format!(".{}", CONTAINER_CLASS)))?;
                if touches_edge(card, image.width(), image.height()) {
                    warn!("Report card reaches the {}x{} viewport edge and may be clipped", image.width(), image.height());
                }
                crop(&image, card)
            },
            ImageMode::Manual => image,
        };

        let jpeg = encode_jpeg(&image, self.quality)?;
        release(page, screenshot, self.auto_close)?;

        Ok(jpeg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_follows_mode() {
        let auto = Chromium::from_config(&Config::default());
        assert_eq!(auto.viewport, AUTO_VIEWPORT);

        let manual = Chromium::from_config(&Config { image_mode: ImageMode::Manual, image_width: 800, image_height: 600, ..Config::default() });
        assert_eq!(manual.viewport, (800, 600));
        assert_eq!(manual.quality, 80);
    }

    #[test]
    fn auto_close_removes_files() {
        let page = Chromium::temp_file(".html").unwrap();
        let screenshot = Chromium::temp_file(".png").unwrap();
        let paths = (page.path().to_path_buf(), screenshot.path().to_path_buf());

        assert!(release(page, screenshot, true).unwrap().is_none());
        assert!(!paths.0.exists());
        assert!(!paths.1.exists());
    }

    #[test]
    fn files_survive_without_auto_close() {
        let page = Chromium::temp_file(".html").unwrap();
        let screenshot = Chromium::temp_file(".png").unwrap();
        let paths = (page.path().to_path_buf(), screenshot.path().to_path_buf());

        let kept = release(page, screenshot, false).unwrap();
        assert_eq!(kept.as_ref(), Some(&paths));
        assert!(paths.0.exists());
        assert!(paths.1.exists());

        std::fs::remove_file(&paths.0).unwrap();
        std::fs::remove_file(&paths.1).unwrap();
    }

    #[tokio::test]
    async fn missing_browser_is_an_error() {
        let chromium = Chromium::from_config(&Config { browser: "/nonexistent/chromium".to_string(), ..Config::default() });
        assert!(matches!(chromium.capture("<html></html>").await, Err(Error::IoError(_))));
    }
}
