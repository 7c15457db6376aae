use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DupError {
    #[error("IO error on '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
}

impl DupError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError { .. } => ErrorCategory::Io,
            Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Io => ErrorSeverity::High,
        }
    }

    /// Process exit code for this error. Never zero.
    pub fn exit_code(&self) -> u8 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError { path, source } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("File not found: {}", path.display())
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("Permission denied: {}", path.display())
                }
                std::io::ErrorKind::InvalidData => {
                    format!("File is not valid UTF-8 text: {}", path.display())
                }
                _ => format!("Could not access {}: {}", path.display(), source),
            },
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => {
                    "Check that the input path exists and the output directory is present"
                }
                std::io::ErrorKind::PermissionDenied => {
                    "Check read permission on the input and write permission on the output"
                }
                std::io::ErrorKind::InvalidData => "Convert the input file to UTF-8",
                _ => "Check the file paths and available disk space",
            },
            Self::InvalidConfigValueError { .. } => "Run with --help to see the expected arguments",
        }
    }
}

pub type Result<T> = std::result::Result<T, DupError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_maps_to_exit_code_one() {
        let err = DupError::io("missing.txt", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("missing.txt"));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_config_error_maps_to_exit_code_two() {
        let err = DupError::InvalidConfigValueError {
            field: "min_copies".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);
    }
}
