//! Note-group navigation.
//!
//! A drum pad is not a tree node. It is the set of a drum rack's chains whose
//! `in_note` property equals a target note (or the catch-all sentinel for the
//! wildcard `"*"`), recomputed by filtering every time it is needed. Chain
//! indexes behind a pad are relative to that group, not to the rack's full
//! chain list.
//!
//! The navigator consumes a drum-pad segment's verbatim tail: an optional
//! group-relative `c<n>`, then alternating `d<n>` and `c<n>`/`rc<n>`/`p<note>`
//! tokens, so racks nest inside pads to arbitrary depth. It is one explicit
//! loop over the token slice; the call stack does not grow with path depth.

use crate::note::{note_name_to_midi, CATCH_ALL_NOTE, WILDCARD_NOTE};
use crate::path::token::{classify, SegmentToken};
use crate::tree::{ChildCollection, TreeHost, NOTE_PROPERTY};

use super::walker::{ResolvedTarget, TargetKind};

/// The MIDI value a note name addresses, with `"*"` mapping to the catch-all
/// sentinel.
pub(crate) fn note_value(note: &str) -> Option<i64> {
    if note == WILDCARD_NOTE {
        Some(CATCH_ALL_NOTE)
    } else {
        note_name_to_midi(note).map(i64::from)
    }
}

/// The note group of `device` for a MIDI value, in stable child order.
pub(crate) fn note_group<H: TreeHost>(host: &H, device: &H::Node, midi: i64) -> Vec<H::Node> {
    host.children(device, ChildCollection::Chains)
        .into_iter()
        .filter(|chain| host.get_property(chain, NOTE_PROPERTY) == Some(midi))
        .collect()
}

/// Resolve a drum-pad segment against `device`.
///
/// `note` is the pad's note name (or `"*"`); `tail` is everything the parser
/// captured after it.
pub(crate) fn resolve_drum_pad<H: TreeHost>(
    host: &H,
    device: &H::Node,
    note: &str,
    tail: &[String],
) -> ResolvedTarget<H::Node> {
    if !host.exists(device) {
        return ResolvedTarget::missing(TargetKind::Chain);
    }

    let mut current = device.clone();
    // Set while the next chain selection goes through a note group rather
    // than the plain chain list.
    let mut pad_note = Some(note.to_string());
    let mut rest = tail;

    loop {
        // Select a chain under `current`.
        let (chain, chain_kind) = if let Some(note) = pad_note.take() {
            let Some(midi) = note_value(&note) else {
                return ResolvedTarget::missing(TargetKind::Chain);
            };
            let group = note_group(host, &current, midi);
            // A leading chain token is group-relative; absent means the
            // group's first chain. A malformed `c...` token is a failure,
            // not a default.
            let index = match rest.first() {
                Some(tok) if tok.starts_with('c') => match classify(tok) {
                    Some(SegmentToken::Chain(i)) => {
                        rest = &rest[1..];
                        i
                    }
                    _ => return ResolvedTarget::missing(TargetKind::Chain),
                },
                _ => 0,
            };
            match group.get(index) {
                Some(chain) => (chain.clone(), TargetKind::DrumPadChain),
                None => return ResolvedTarget::missing(TargetKind::Chain),
            }
        } else {
            match rest.first().and_then(|tok| classify(tok)) {
                Some(SegmentToken::Chain(i)) => {
                    rest = &rest[1..];
                    match host.children(&current, ChildCollection::Chains).get(i) {
                        Some(chain) => (chain.clone(), TargetKind::Chain),
                        None => return ResolvedTarget::missing(TargetKind::Chain),
                    }
                }
                Some(SegmentToken::ReturnChain(i)) => {
                    rest = &rest[1..];
                    match host.children(&current, ChildCollection::ReturnChains).get(i) {
                        Some(chain) => (chain.clone(), TargetKind::ReturnChain),
                        None => return ResolvedTarget::missing(TargetKind::ReturnChain),
                    }
                }
                _ => return ResolvedTarget::missing(TargetKind::Chain),
            }
        };

        if rest.is_empty() {
            return ResolvedTarget::found(chain, chain_kind);
        }

        // Next token must address a device inside the selected chain.
        let Some(SegmentToken::Device(index)) = rest.first().and_then(|tok| classify(tok)) else {
            return ResolvedTarget::missing(TargetKind::Device);
        };
        rest = &rest[1..];
        let Some(device) = host
            .children(&chain, ChildCollection::Devices)
            .get(index)
            .cloned()
        else {
            return ResolvedTarget::missing(TargetKind::Device);
        };
        if rest.is_empty() {
            return ResolvedTarget::found(device, TargetKind::Device);
        }
        current = device;

        // The device may itself be another drum rack: a `p` token starts a
        // new note-group selection on it.
        if let Some(SegmentToken::Pad(note)) = rest.first().and_then(|tok| classify(tok)) {
            pad_note = Some(note);
            rest = &rest[1..];
            if rest.is_empty() {
                // Pad with no further tokens: its group's first chain.
                continue;
            }
        }
    }
}
