use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid boolean for {key}: {value:?}")]
    InvalidBool { key: String, value: String },

    #[error("value of {key} is not valid unicode")]
    NotUnicode { key: String },

    #[error("logging setup failed: {0}")]
    Logging(String),
}
