// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// The caller handed over a notification that cannot be displayed.
    InvalidNotification(InvalidNotification),
}

/// Reasons a notification is rejected by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNotification {
    /// The message is empty or only whitespace.
    EmptyMessage,
}

impl fmt::Display for InvalidNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidNotification::EmptyMessage => write!(f, "message must not be empty"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidNotification(e) => write!(f, "Invalid notification: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<InvalidNotification> for Error {
    fn from(err: InvalidNotification) -> Self {
        Error::InvalidNotification(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
