use thiserror::Error;

/// Core error type shared across fixtura crates.
#[derive(Debug, Error)]
pub enum Error {
    /// No bundle exists for the requested (domain, locale) pair.
    #[error("resource not found: {domain} for locale '{locale}'")]
    ResourceNotFound { domain: String, locale: String },
    /// Caller-supplied input that cannot produce a well-formed value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Registration of something that cannot act as a provider.
    #[error("invalid provider: {0}")]
    InvalidProvider(String),
    /// An enumerated option outside the recognised set.
    #[error("unsupported {option}: '{value}'")]
    UnsupportedOption { option: &'static str, value: String },
    /// A bundle was found but lacks a key or has the wrong shape.
    #[error("invalid bundle: {0}")]
    InvalidBundle(String),
    /// Locale has no support for the requested operation.
    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn unsupported(option: &'static str, value: impl Into<String>) -> Self {
        Error::UnsupportedOption {
            option,
            value: value.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }
}

/// Convenience alias for results returned by fixtura crates.
pub type Result<T> = std::result::Result<T, Error>;
