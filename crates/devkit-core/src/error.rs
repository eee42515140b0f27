use thiserror::Error;

#[derive(Debug, Error)]
pub enum DevError {
    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error("failed to gather randomness: {0}")]
    Entropy(String),
}

pub type Result<T> = std::result::Result<T, DevError>;
