//! Error types for the map network.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::format::LineError;
use crate::map::CityId;

/// Why a colonist move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// The colonist is on a city that is not an endpoint of the path.
    NotAdjacent,
    /// The path's transport mode does not match the colonist's type.
    WrongMode,
    /// One of the path's endpoints is not a city in the network.
    UnknownEndpoint,
    /// The path is not one of the network's own paths.
    ForeignPath,
    /// A colonist entering from supply needs an explicit target city.
    MissingTarget,
    /// The requested target is the colonist's own city, not the far end.
    TargetMismatch,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAdjacent => write!(f, "colonist is not on an endpoint of the path"),
            Self::WrongMode => write!(f, "path mode does not match colonist type"),
            Self::UnknownEndpoint => write!(f, "path endpoint is not in the network"),
            Self::ForeignPath => write!(f, "path does not belong to the network"),
            Self::MissingTarget => write!(f, "target city required when entering from supply"),
            Self::TargetMismatch => write!(f, "target city is not the far end of the path"),
        }
    }
}

/// Errors raised by network operations and the file formats.
#[derive(Debug)]
pub enum NetworkError {
    /// A production-good token did not match any good exactly.
    InvalidGoodToken(String),
    /// No city with this id exists in the network.
    UnknownCity(CityId),
    /// The city is not an endpoint of the path.
    NotAnEndpoint {
        /// The city that was asked about.
        city: CityId,
        /// The path's endpoints.
        endpoints: (CityId, CityId),
    },
    /// The move violates the movement rules. Nothing was changed.
    IllegalMove(MoveRejection),
    /// A city with this id is already in the network.
    DuplicateCity(CityId),
    /// A line could not be parsed and strict loading was requested.
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: LineError,
    },
    /// Reading or writing a map file failed.
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying cause.
        source: io::Error,
    },
    /// A city cannot be written as a line that reads back as the same city.
    UnrepresentableCity {
        /// The offending city.
        city: CityId,
        /// Which field is the problem.
        reason: &'static str,
    },
    /// The shared network lock was poisoned by a panicking holder.
    Poisoned,
}

impl NetworkError {
    /// Wrap an I/O error with the path it happened on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGoodToken(token) => write!(f, "invalid good token: {token:?}"),
            Self::UnknownCity(id) => write!(f, "unknown city: {id}"),
            Self::NotAnEndpoint { city, endpoints } => write!(
                f,
                "city {city} is not an endpoint of path {}-{}",
                endpoints.0, endpoints.1
            ),
            Self::IllegalMove(reason) => write!(f, "illegal move: {reason}"),
            Self::DuplicateCity(id) => write!(f, "duplicate city id: {id}"),
            Self::MalformedLine { line, reason } => write!(f, "line {line}: {reason}"),
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::UnrepresentableCity { city, reason } => {
                write!(f, "city {city} cannot be written: {reason}")
            }
            Self::Poisoned => write!(f, "network lock poisoned"),
        }
    }
}

impl std::error::Error for NetworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for network operations.
pub type NetworkResult<T> = Result<T, NetworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(NetworkError::UnknownCity(7).to_string(), "unknown city: 7");
        assert_eq!(
            NetworkError::IllegalMove(MoveRejection::WrongMode).to_string(),
            "illegal move: path mode does not match colonist type"
        );
        let err = NetworkError::NotAnEndpoint {
            city: 3,
            endpoints: (0, 1),
        };
        assert_eq!(err.to_string(), "city 3 is not an endpoint of path 0-1");
        let err = NetworkError::UnrepresentableCity {
            city: 2,
            reason: "letter is ':'",
        };
        assert_eq!(err.to_string(), "city 2 cannot be written: letter is ':'");
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error;

        let err = NetworkError::io("cities.txt", io::Error::other("denied"));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("cities.txt: "));
        assert!(NetworkError::Poisoned.source().is_none());
    }
}
