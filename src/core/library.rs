use std::fmt;
use std::fmt::{Display, Formatter};

pub const BOOK_NOT_AVAILABLE: &str = "Book not available";

#[derive(Debug)]
pub enum LibraryError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // Raised when a book cannot be lent out, either because it is unknown or because it is
    // already borrowed. Callers cannot tell the two cases apart.
    Unavailable {
        message: String,
    },
    // This is a retry-able error, which indicates that the record was changed by another
    // caller since it was read, i.e. the version being written is stale.
    Conflict {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Config {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str) -> LibraryError {
        LibraryError::Unavailable { message: message.to_string() }
    }

    pub fn conflict(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Conflict { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn config(message: &str) -> LibraryError {
        LibraryError::Config { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::DuplicateKey { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::Unavailable { .. } => { false }
            LibraryError::Conflict { .. } => { true }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Config { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("console io {:?}", err).as_str(), None)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<figment::Error> for LibraryError {
    fn from(err: figment::Error) -> Self {
        LibraryError::config(
            format!("failed to load configuration {}", err).as_str())
    }
}

fn write_with_reason(f: &mut Formatter<'_>, message: &str, reason_code: &Option<String>) -> fmt::Result {
    match reason_code {
        Some(code) => write!(f, "{} ({})", message, code),
        None => write!(f, "{}", message),
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Unavailable { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Conflict { message, reason_code } => {
                write_with_reason(f, message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Config { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write_with_reason(f, message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

// Lending state of a book, derived from its availability flag
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl From<bool> for BookStatus {
    fn from(available: bool) -> Self {
        if available {
            BookStatus::Available
        } else {
            BookStatus::Borrowed
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}
