//! Parse errors.
//!
//! Each [`ParseError`] names the token that was rejected.

use serde::Serialize;
use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

/// Why an input line could not be turned into a subnet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Bad format: '{input}'. {detail}")]
    BadFormat { input: String, detail: String },

    #[error("Invalid IP address: '{token}'")]
    InvalidIpAddress { token: String },

    #[error("Invalid subnet mask: '{token}'")]
    InvalidSubnetMask { token: String },

    #[error("Mask is not contiguous: '{token}'")]
    NonContiguousMask { token: String },

    #[error("CIDR prefix must be between 0-32, got '{token}'")]
    PrefixOutOfRange { token: String },
}

/// Error category without the offending token.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadFormat,
    #[serde(rename = "InvalidIPAddress")]
    InvalidIpAddress,
    InvalidSubnetMask,
    NonContiguousMask,
    PrefixOutOfRange,
}

impl ParseError {
    pub(crate) fn bad_format(input: &str, detail: impl Into<String>) -> ParseError {
        ParseError::BadFormat {
            input: input.to_string(),
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::BadFormat { .. } => ErrorKind::BadFormat,
            ParseError::InvalidIpAddress { .. } => ErrorKind::InvalidIpAddress,
            ParseError::InvalidSubnetMask { .. } => ErrorKind::InvalidSubnetMask,
            ParseError::NonContiguousMask { .. } => ErrorKind::NonContiguousMask,
            ParseError::PrefixOutOfRange { .. } => ErrorKind::PrefixOutOfRange,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ErrorKind::BadFormat => "BadFormat",
            ErrorKind::InvalidIpAddress => "InvalidIPAddress",
            ErrorKind::InvalidSubnetMask => "InvalidSubnetMask",
            ErrorKind::NonContiguousMask => "NonContiguousMask",
            ErrorKind::PrefixOutOfRange => "PrefixOutOfRange",
        };
        f.write_str(name)
    }
}
