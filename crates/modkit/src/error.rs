use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A numeric field of a format token could not be parsed
    #[error("Failed to parse format token: {0}")]
    Parse(String),

    /// A value the formatter needs is missing or unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed format string: {0}")]
    MalformedFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error came from a malformed numeric field
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}
