use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GitscribeError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Not-found errors, kept distinct from transport failures
    RepositoryNotFound {
        name: String,
    },
    FileNotFound {
        repository: String,
        path: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },
    RateLimited {
        operation: String,
        reset_at: Option<u64>,
    },
    PermissionDenied {
        operation: String,
        reason: String,
    },

    // Write-back target changed since it was last read
    WriteConflict {
        repository: String,
        path: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        reason: String,
    },

    // AI provider errors
    AiError {
        provider: String,
        reason: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl GitscribeError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn repo_not_found(name: &str) -> Self {
        Self::RepositoryNotFound {
            name: name.to_string(),
        }
    }

    pub fn file_not_found(repository: &str, path: &str) -> Self {
        Self::FileNotFound {
            repository: repository.to_string(),
            path: path.to_string(),
        }
    }

    pub fn network_error(operation: &str, url: Option<&str>, status_code: Option<u16>, reason: &str) -> Self {
        Self::NetworkError {
            operation: operation.to_string(),
            url: url.map(|s| s.to_string()),
            status_code,
            reason: reason.to_string(),
        }
    }

    pub fn permission_denied(operation: &str, reason: &str) -> Self {
        Self::PermissionDenied {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write_conflict(repository: &str, path: &str) -> Self {
        Self::WriteConflict {
            repository: repository.to_string(),
            path: path.to_string(),
        }
    }

    pub fn parse_error(content_type: &str, reason: &str) -> Self {
        Self::ParseError {
            content_type: content_type.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::PermissionDenied { .. } => ErrorSeverity::High,
            Self::AiError { .. } => ErrorSeverity::High,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::RateLimited { .. } => ErrorSeverity::Medium,
            Self::WriteConflict { .. } => ErrorSeverity::Medium,
            Self::RepositoryNotFound { .. } => ErrorSeverity::Medium,
            Self::FileNotFound { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::RepositoryNotFound { name } => {
                format!("Repository '{}' not found\n💡 Check the repository name and your token's access", name)
            }
            Self::FileNotFound { repository, path } => {
                format!("File '{}' not found in repository '{}'", path, repository)
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check your internet connection and try again");
                msg
            }
            Self::RateLimited { operation, reset_at } => {
                let mut msg = format!("Rate limit exceeded during {}", operation);
                if let Some(reset) = reset_at {
                    msg.push_str(&format!(" (resets at unix time {})", reset));
                }
                msg.push_str("\n💡 Wait for the limit to reset before retrying");
                msg
            }
            Self::PermissionDenied { operation, reason } => {
                format!("Permission denied during {}: {}\n💡 Check your token's scopes", operation, reason)
            }
            Self::WriteConflict { repository, path } => {
                format!(
                    "'{}' in repository '{}' changed since it was last read\n💡 Re-fetch the file and try again",
                    path, repository
                )
            }
            Self::ParseError { content_type, reason } => {
                format!("Parse error in {}: {}", content_type, reason)
            }
            Self::AiError { provider, reason } => {
                format!("AI provider '{}' error: {}", provider, reason)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for GitscribeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for GitscribeError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for gitscribe operations
pub type GitscribeResult<T> = Result<T, GitscribeError>;

/// Error handler for consistent top-level error reporting
pub struct ErrorHandler;

impl ErrorHandler {
    pub fn handle_error(error: &GitscribeError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());
    }
}

impl From<std::io::Error> for GitscribeError {
    fn from(error: std::io::Error) -> Self {
        GitscribeError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for GitscribeError {
    fn from(error: serde_json::Error) -> Self {
        GitscribeError::ParseError {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for GitscribeError {
    fn from(error: toml::de::Error) -> Self {
        GitscribeError::ParseError {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for GitscribeError {
    fn from(error: reqwest::Error) -> Self {
        GitscribeError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

impl From<AiProviderError> for GitscribeError {
    fn from(error: AiProviderError) -> Self {
        GitscribeError::AiError {
            provider: "gemini".to_string(),
            reason: error.to_string(),
        }
    }
}
