use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormscoreError {
    #[error("{ingredient} = {value} is outside its range [{min}, {max}]")]
    OutOfRange {
        ingredient: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{ingredient} must be a finite number")]
    NotFinite { ingredient: &'static str },

    #[error("score must be a finite number in [0, 10]: {0}")]
    InvalidScore(f64),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FormscoreError>;
