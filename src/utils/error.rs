use thiserror::Error;

/// 抽籤核心只會產生的兩種錯誤，兩者皆可由呼叫端修正後重試
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("At least {required} participants are needed, got {found}")]
    InsufficientParticipants { required: usize, found: usize },

    #[error("No valid assignment found after {attempts} attempts")]
    NoValidAssignment { attempts: usize },
}

#[derive(Error, Debug)]
pub enum SantaError {
    #[error("Draw failed: {0}")]
    DrawError(#[from] DrawError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Roster parsing error: {0}")]
    RosterParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Draw,
    Io,
    Format,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 程式結束碼，失敗一律非零
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SantaError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SantaError::DrawError(_) => ErrorCategory::Draw,
            SantaError::IoError(_) => ErrorCategory::Io,
            SantaError::CsvError(_) | SantaError::SerializationError(_) => ErrorCategory::Format,
            SantaError::RosterParseError(_)
            | SantaError::ConfigError { .. }
            | SantaError::InvalidConfigValueError { .. }
            | SantaError::ValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 決定程式結束碼的嚴重程度
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 重新抽籤可能成功
            SantaError::DrawError(DrawError::NoValidAssignment { .. }) => ErrorSeverity::Medium,
            SantaError::DrawError(DrawError::InsufficientParticipants { .. }) => ErrorSeverity::High,
            SantaError::RosterParseError(_)
            | SantaError::ConfigError { .. }
            | SantaError::InvalidConfigValueError { .. }
            | SantaError::ValidationError { .. } => ErrorSeverity::High,
            SantaError::CsvError(_) | SantaError::SerializationError(_) => ErrorSeverity::High,
            SantaError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SantaError::DrawError(DrawError::InsufficientParticipants { required, found }) => {
                format!("Only {} participant(s) registered, a draw needs at least {}", found, required)
            }
            SantaError::DrawError(DrawError::NoValidAssignment { .. }) => {
                "No valid draw could be made with these couples".to_string()
            }
            SantaError::IoError(e) => format!("Could not read or write a file: {}", e),
            SantaError::RosterParseError(e) => format!("The roster file is not valid TOML: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SantaError::DrawError(DrawError::InsufficientParticipants { .. }) => {
                "Add more participants before starting the draw"
            }
            SantaError::DrawError(DrawError::NoValidAssignment { .. }) => {
                "Remove some couples or add participants, then try again"
            }
            SantaError::IoError(_) => "Check that the path exists and is writable",
            SantaError::CsvError(_) | SantaError::SerializationError(_) => {
                "Check the output file format (csv, tsv or json)"
            }
            SantaError::RosterParseError(_) => "Fix the roster file syntax",
            SantaError::ConfigError { .. }
            | SantaError::InvalidConfigValueError { .. }
            | SantaError::ValidationError { .. } => "Check the command line options and roster file",
        }
    }
}

pub type Result<T> = std::result::Result<T, SantaError>;
