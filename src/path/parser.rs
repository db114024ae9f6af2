//! Parser for the compact path grammar.
//!
//! ```text
//! path    := track ("/" segment)*
//! track   := "t" <uint> | "rt" <uint> | "mt"
//! segment := "d" <uint> | "c" <uint> | "rc" <uint> | "p" (<noteName> | "*")
//! ```
//!
//! Parsing is eager and total: any token that cannot be classified raises
//! [`ParseError`] immediately. The one deliberate exception is everything
//! after a `p` segment. Its meaning depends on the note group found at
//! resolution time, so those tokens are captured verbatim and re-read by the
//! navigator.

use super::error::ParseError;
use super::segment::{PathSegment, TrackRef};
use super::token::{classify, SegmentToken};

/// Parse a compact path string into an ordered segment list.
pub fn parse(path: &str) -> Result<Vec<PathSegment>, ParseError> {
    if path.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut tokens = path.split('/');

    let first = tokens.next().unwrap_or_default();
    let track = match classify(first) {
        Some(SegmentToken::Track(i)) => TrackRef::Track(i),
        Some(SegmentToken::ReturnTrack(i)) => TrackRef::Return(i),
        Some(SegmentToken::MasterTrack) => TrackRef::Master,
        _ => return Err(ParseError::MissingTrack(first.to_string())),
    };

    let mut segments = vec![PathSegment::Track(track)];

    while let Some(token) = tokens.next() {
        match classify(token) {
            Some(SegmentToken::Device(index)) => {
                segments.push(PathSegment::Device { index });
            }
            Some(SegmentToken::Chain(index)) => {
                segments.push(PathSegment::Chain { index });
            }
            Some(SegmentToken::ReturnChain(index)) => {
                segments.push(PathSegment::ReturnChain { index });
            }
            Some(SegmentToken::Pad(note)) => {
                // Everything after the pad belongs to the note-group layer.
                let tail: Vec<String> = tokens.map(str::to_string).collect();
                segments.push(PathSegment::DrumPad { note, tail });
                break;
            }
            Some(SegmentToken::Track(_))
            | Some(SegmentToken::ReturnTrack(_))
            | Some(SegmentToken::MasterTrack)
            | None => {
                if token == "p" {
                    return Err(ParseError::EmptyNote(token.to_string()));
                }
                return Err(ParseError::UnrecognizedSegment(token.to_string()));
            }
        }
    }

    Ok(segments)
}
