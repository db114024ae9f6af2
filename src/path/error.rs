//! Parse errors for the compact path grammar.

use thiserror::Error;

/// A malformed path string. Raised eagerly by the parser; resolution never
/// sees these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty path")]
    Empty,
    #[error("path must start with a track segment (t<n>, rt<n> or mt), got `{0}`")]
    MissingTrack(String),
    #[error("unrecognized segment `{0}`")]
    UnrecognizedSegment(String),
    #[error("drum pad segment `{0}` is missing a note name")]
    EmptyNote(String),
}
