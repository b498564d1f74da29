use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("invalid expression: {message}")]
    Eval { message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unknown currency code: {code}")]
    UnknownCurrency { code: String },

    #[error("unknown conversion category: {name}")]
    UnknownCategory { name: String },

    #[error("unknown unit: {name}")]
    UnknownUnit { name: String },

    #[error("invalid menu choice: {input}")]
    InvalidChoice { input: String },

    #[error("invalid number: {input}")]
    InvalidNumber { input: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl CalcError {
    pub fn eval(message: impl Into<String>) -> Self {
        CalcError::Eval {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
