use thiserror::Error;

/// Errors raised by strict version construction.
///
/// Lenient construction ([`Version::parse`](crate::Version::parse)) never fails, it falls back
/// to the invalid representation instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid version format: no version string given")]
    MissingInput,

    #[error("invalid version format: {0:?} does not start with a digit")]
    InvalidFormat(String),
}

impl Error {
    /// Both variants describe a malformed version string, one of them a missing one.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Error::MissingInput | Error::InvalidFormat(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
