use thiserror::Error;
pub type Result<T> = std::result::Result<T, crate::error::ErrorCore>;

#[derive(Debug, Error)]
pub enum ErrorCore {
    #[error("Failed to parse integer value: {0}")]
    ParseIntError(#[from] std::num::ParseIntError),

    #[error("Failed to parse boolean value: {0}")]
    ParseBoolError(#[from] std::str::ParseBoolError),

    #[error("Environment variable error: {0}")]
    EnvError(#[from] std::env::VarError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Uninitialize element: {0}")]
    UninitializeElement(#[from] derive_builder::UninitializedFieldError),
}
