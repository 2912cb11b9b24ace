use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;

// 用于从字符串创建错误
impl From<String> for ScreenerError {
    fn from(s: String) -> Self {
        ScreenerError::Unknown(s)
    }
}

// 用于从&str创建错误
impl From<&str> for ScreenerError {
    fn from(s: &str) -> Self {
        ScreenerError::Unknown(s.to_string())
    }
}
