use thiserror::Error;

/// Errors raised while setting the sketchpad up.
///
/// Drawing operations themselves never fail; only loading configuration does.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}

pub type SketchResult<T> = Result<T, SketchError>;
