use thiserror::Error;

#[derive(Debug, Error)]
pub enum SomniaError {
    #[error("API not configured: {0}")]
    NotConfigured(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
