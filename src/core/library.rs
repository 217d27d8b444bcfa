use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
    },
    Serialization {
        message: String,
    },
    // Raised when the HTTP listener cannot claim its address. The process
    // cannot serve without it, so callers treat this as fatal.
    BindFailure {
        message: String,
    },
    Runtime {
        message: String,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str) -> LibraryError {
        LibraryError::Validation { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn bind_failure(message: &str) -> LibraryError {
        LibraryError::BindFailure { message: message.to_string() }
    }

    pub fn runtime(message: &str) -> LibraryError {
        LibraryError::Runtime { message: message.to_string() }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io {:?}", err).as_str())
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::BindFailure { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog and its repository.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test"), LibraryError::Validation{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_bind_failure_error() {
        assert!(matches!(LibraryError::bind_failure("test"), LibraryError::BindFailure{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test"), LibraryError::Runtime{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").expect_err("should fail");
        let converted = LibraryError::from(err);
        assert!(matches!(converted, LibraryError::Serialization{ message: _ }));
        assert!(converted.to_string().starts_with("serde json parsing"));
    }

    #[tokio::test]
    async fn test_should_display_message() {
        assert_eq!("book 7 not found", LibraryError::not_found("book 7 not found").to_string());
        assert_eq!("id missing", LibraryError::validation("id missing").to_string());
    }
}
