use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message } => {
                CommandError::Validation { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::BindFailure { message } => {
                CommandError::Runtime { message }
            }
            LibraryError::Runtime { message } => {
                CommandError::Runtime { message }
            }
        }
    }
}

impl From<CommandError> for LibraryError {
    fn from(other: CommandError) -> Self {
        match other {
            CommandError::NotFound { message } => LibraryError::NotFound { message },
            CommandError::Runtime { message } => LibraryError::Runtime { message },
            CommandError::Serialization { message } => LibraryError::Serialization { message },
            CommandError::Validation { message } => LibraryError::Validation { message },
        }
    }
}
