use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("unknown banner location: {0}")]
    UnknownBannerLocation(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
