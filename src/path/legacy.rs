//! Translation of the older positional path notation.
//!
//! Before the prefixed grammar, paths were bare indexes alternating by depth
//! parity: `"0/2/1"` meant track 0, device 2, chain 1. The positional form is
//! treated purely as an encoding: it is rewritten into the prefixed grammar
//! and parsed from there, never resolved directly. Return tracks, return
//! chains, the master track and drum pads are inexpressible in it.

use std::fmt::Write as _;

use super::error::ParseError;

/// Rewrite a positional path into the prefixed grammar.
pub fn from_legacy(path: &str) -> Result<String, ParseError> {
    if path.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut out = String::new();
    for (depth, token) in path.split('/').enumerate() {
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::UnrecognizedSegment(token.to_string()));
        }
        // Indexes alternate device/chain below the track root.
        let prefix = match depth {
            0 => "t",
            d if d % 2 == 1 => "/d",
            _ => "/c",
        };
        let _ = write!(out, "{prefix}{token}");
    }
    Ok(out)
}
