//! Domain-specific errors for the account ledger.
//!
//! Contains error variants for common failure cases like:
//! - Creation validation errors (underage holder, malformed PIN)
//! - Amount validation errors (out of range, insufficient balance)
//! - Authorization failures (no record matching account number + PIN)
//! - Storage failures while loading or rewriting the backing file
//!
//! Every variant renders as the human-readable sentence the caller is
//! expected to show; nothing panics past the ledger boundary.

use std::fmt;

#[derive(Debug)]
pub enum Error {
    AccountNotFound,
    AmountMustBePositive,
    AmountOutOfRange,
    InsufficientFunds,
    InvalidPin,
    Underage,
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AccountNotFound => write!(f, "Account not found."),
            Error::AmountMustBePositive => write!(f, "Invalid amount."),
            Error::AmountOutOfRange => {
                write!(f, "Invalid amount (must be between 1 and 10000).")
            }
            Error::InsufficientFunds => write!(f, "Insufficient balance."),
            Error::InvalidPin => write!(f, "PIN must be exactly 4 digits."),
            Error::Underage => {
                write!(f, "Account holders must be at least 18 years old.")
            }
            Error::Io(err) => write!(f, "Could not access the account data file: {err}"),
            Error::Json(err) => write!(f, "Account data file is not valid JSON: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
