use crate::stamp::StampError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("ConfigError: {0}")]
    Config(String),

    #[error("UpstreamError: {0}")]
    Upstream(String),

    #[error("Could not find the {0} element")]
    CaptureTarget(String),

    #[error("RenderError: {0}")]
    Render(String),

    #[error("StampError: {0}")]
    StampError(#[from] StampError),

    #[error("IoError: {0}")]
    IoError(#[from] std::io::Error),

    #[error("ReqwestError: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("JsonError: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("ImageError: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("ConfyError: {0}")]
    ConfyError(#[from] confy::ConfyError),
}
