use core::error;
use core::fmt::{self, Display, Formatter};
use std::io;

/// An error.
#[derive(Debug)]
pub enum Error {
    /// An argument of an unexpected shape.
    InvalidArgument(&'static str),
    /// A name or token containing characters a document does not accept.
    InvalidCharacter(String),
    /// A malformed token.
    Syntax(String),
    /// An I/O failure.
    Io(io::Error),
    /// A JSON failure.
    Json(serde_json::Error),
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(formatter, "{message}"),
            Self::InvalidCharacter(name) => {
                write!(formatter, "invalid character in \"{name}\"")
            }
            Self::Syntax(message) => write!(formatter, "{message}"),
            Self::Io(error) => write!(formatter, "{error}"),
            Self::Json(error) => write!(formatter, "{error}"),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_invalid_argument() {
        assert_eq!(
            Error::InvalidArgument("Attributes must be an object").to_string(),
            "Attributes must be an object"
        );
    }

    #[test]
    fn display_invalid_character() {
        assert_eq!(
            Error::InvalidCharacter("a b".into()).to_string(),
            "invalid character in \"a b\""
        );
    }
}
