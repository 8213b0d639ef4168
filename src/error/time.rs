use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TimeParseError {
    /// Input is neither a relative phrase ("3 hours ago") nor an absolute date/time.
    #[error("Invalid time '{0}'")]
    InvalidTime(String),

    /// A relative phrase used a unit we don't know.
    #[error("Invalid time unit '{0}'")]
    InvalidUnit(String),
}
