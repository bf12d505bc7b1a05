use thiserror::Error;

#[derive(Error, Debug)]
pub enum GaanaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    JsonParse(String),

    #[error("Detail response contained no records")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, GaanaError>;
