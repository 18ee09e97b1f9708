use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumeroError {
    #[error("Integer overflow: {lhs} + {rhs} does not fit in i32")]
    Overflow { lhs: i32, rhs: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl NumeroError {
    /// 根據錯誤類型決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            NumeroError::ConfigError { .. }
            | NumeroError::InvalidConfigValueError { .. }
            | NumeroError::MissingConfigError { .. } => 1,
            NumeroError::Overflow { .. } => 2,
            NumeroError::IoError(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, NumeroError>;
