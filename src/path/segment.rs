//! Path segment types.
//!
//! A parsed path is a `Vec<PathSegment>` beginning with exactly one track
//! segment. Device and chain segments alternate, except that a drum pad
//! segment may stand wherever a chain segment could and swallows the rest of
//! the path as an opaque tail: those tokens index into the virtual note-group
//! layer and are only classified at resolution time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The track a path is rooted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackRef {
    /// A regular track, by index.
    Track(usize),
    /// A return track, by index.
    Return(usize),
    /// The master track.
    Master,
}

/// One segment of a compact path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathSegment {
    Track(TrackRef),
    Device {
        index: usize,
    },
    Chain {
        index: usize,
    },
    ReturnChain {
        index: usize,
    },
    /// A drum pad note group. `note` is a note name or `"*"`; `tail` carries
    /// every following token verbatim.
    DrumPad {
        note: String,
        tail: Vec<String>,
    },
}

impl fmt::Display for TrackRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackRef::Track(i) => write!(f, "t{i}"),
            TrackRef::Return(i) => write!(f, "rt{i}"),
            TrackRef::Master => write!(f, "mt"),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Track(track) => write!(f, "{track}"),
            PathSegment::Device { index } => write!(f, "d{index}"),
            PathSegment::Chain { index } => write!(f, "c{index}"),
            PathSegment::ReturnChain { index } => write!(f, "rc{index}"),
            PathSegment::DrumPad { note, tail } => {
                write!(f, "p{note}")?;
                for token in tail {
                    write!(f, "/{token}")?;
                }
                Ok(())
            }
        }
    }
}

/// Render a segment list back into its canonical compact path.
///
/// The exact inverse of [`parse`](crate::path::parse) for any list it
/// produced.
pub fn format_path(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('/');
        }
        out.push_str(&segment.to_string());
    }
    out
}
