use thiserror::Error;

#[derive(Debug, Error)]
pub enum TracerError {
    #[error("sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("invalid camera: {0}")]
    InvalidCamera(String),

    #[error("invalid render settings: {0}")]
    InvalidSettings(String),

    #[error("render cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TracerError>;
