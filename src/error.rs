use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AppError {
    #[error("Unknown routing value: {0}")]
    InvalidRouting(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown endpoint: {0} (run `riotq list` to see the catalogue)")]
    UnknownEndpoint(String),

    #[error("Unknown method {method} on {endpoint}")]
    UnknownMethod { endpoint: String, method: String },

    #[error("{method} expects {expected} argument(s), got {got}")]
    WrongArgCount {
        method: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid option {0:?}, expected key=value")]
    MalformedOption(String),

    #[error("Option {key} is not recognized by {method}")]
    UnknownOption { method: String, key: String },

    #[error("Option {key} expects a number, got {value:?}")]
    InvalidNumber { key: String, value: String },
}
