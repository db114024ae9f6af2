//! Raw segment-token classification.
//!
//! One `/`-separated token classified by its single- or two-letter prefix.
//! Shared by the parser and the note-group navigator, because the tokens
//! behind a drum-pad segment are carried verbatim and only classified at
//! resolution time.

/// A classified path token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SegmentToken {
    Track(usize),
    ReturnTrack(usize),
    MasterTrack,
    Device(usize),
    Chain(usize),
    ReturnChain(usize),
    /// Drum pad note name, or `"*"` for the catch-all group.
    Pad(String),
}

/// Classify a single token, or `None` if it matches no segment shape.
///
/// Two-letter prefixes (`rt`, `rc`, `mt`) are tried before the one-letter
/// ones they would otherwise shadow.
pub(crate) fn classify(token: &str) -> Option<SegmentToken> {
    if token == "mt" {
        return Some(SegmentToken::MasterTrack);
    }
    if let Some(rest) = token.strip_prefix("rt") {
        return parse_index(rest).map(SegmentToken::ReturnTrack);
    }
    if let Some(rest) = token.strip_prefix("rc") {
        return parse_index(rest).map(SegmentToken::ReturnChain);
    }
    if let Some(rest) = token.strip_prefix('t') {
        return parse_index(rest).map(SegmentToken::Track);
    }
    if let Some(rest) = token.strip_prefix('d') {
        return parse_index(rest).map(SegmentToken::Device);
    }
    if let Some(rest) = token.strip_prefix('c') {
        return parse_index(rest).map(SegmentToken::Chain);
    }
    if let Some(rest) = token.strip_prefix('p') {
        if rest.is_empty() {
            return None;
        }
        return Some(SegmentToken::Pad(rest.to_string()));
    }
    None
}

/// Parse a non-negative decimal index. Rejects empty strings, signs, and
/// anything non-numeric.
fn parse_index(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_prefix() {
        assert_eq!(classify("t0"), Some(SegmentToken::Track(0)));
        assert_eq!(classify("rt3"), Some(SegmentToken::ReturnTrack(3)));
        assert_eq!(classify("mt"), Some(SegmentToken::MasterTrack));
        assert_eq!(classify("d12"), Some(SegmentToken::Device(12)));
        assert_eq!(classify("c1"), Some(SegmentToken::Chain(1)));
        assert_eq!(classify("rc0"), Some(SegmentToken::ReturnChain(0)));
        assert_eq!(classify("pC1"), Some(SegmentToken::Pad("C1".into())));
        assert_eq!(classify("p*"), Some(SegmentToken::Pad("*".into())));
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("x1"), None);
        assert_eq!(classify("d"), None);
        assert_eq!(classify("d-1"), None);
        assert_eq!(classify("d+1"), None);
        assert_eq!(classify("c1.5"), None);
        assert_eq!(classify("p"), None);
        assert_eq!(classify("mt0"), None);
        assert_eq!(classify("7"), None);
    }
}
