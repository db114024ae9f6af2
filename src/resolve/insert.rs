//! Insertion-oriented resolution with bounded auto-creation.
//!
//! Plain reads never mutate the tree. Placement requests may: when the
//! container path's final chain is missing, the host's insert-chain primitive
//! runs until the requested index exists, capped at
//! [`MAX_AUTO_CREATE_CHAINS`] per resolution. Chains created for a note group
//! additionally get their `in_note` property set, since new chains default to
//! the catch-all sentinel and would otherwise land in the wrong group.

use thiserror::Error;
use tracing::debug;

use crate::path::token::{classify, SegmentToken};
use crate::path::{parse, ParseError};
use crate::tree::{ChildCollection, TreeHost, INSERT_CHAIN_METHOD, NOTE_PROPERTY};

use super::drum::{note_group, note_value};
use super::walker::{resolve, TargetKind};

/// Hard cap on chains materialized by a single resolution.
pub const MAX_AUTO_CREATE_CHAINS: usize = 16;

/// Where an insertion should happen: the container to insert into, and the
/// device position within it (`None` means append).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertLocation<N> {
    pub container: Option<N>,
    pub position: Option<usize>,
}

/// Failures of insertion-oriented resolution that are raised rather than
/// reported as a `None` container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    #[error(transparent)]
    Path(#[from] ParseError),
    /// The request can never be satisfied: honoring it would create more
    /// chains than the cap allows. Nothing is created in this case.
    #[error("{required} chains would have to be created, but at most {max} may be auto-created")]
    AutoCreateLimitExceeded { required: usize, max: usize },
}

/// The final chain target of a container path, when it has one that
/// auto-creation can satisfy.
enum ChainTarget {
    /// `.../d<i>/c<k>`: the k-th chain of the device at the prefix.
    Plain { index: usize },
    /// `.../p<note>` or `.../p<note>/c<k>`: the k-th chain of the note group
    /// on the device at the prefix.
    Group { note: String, index: usize },
}

/// Resolve `path` for an insertion or placement request.
///
/// A trailing `d<n>` token names the position and is stripped; the rest is
/// the container, resolved with auto-creation. Structural absence that
/// creation cannot fix (missing tracks or devices, invalid notes, return
/// chains) yields a `None` container. Malformed paths and cap violations are
/// raised.
pub fn resolve_for_insertion<H: TreeHost>(
    host: &mut H,
    path: &str,
) -> Result<InsertLocation<H::Node>, InsertError> {
    let mut tokens: Vec<&str> = path.split('/').collect();

    let position = match tokens.last().and_then(|tok| classify(tok)) {
        Some(SegmentToken::Device(index)) if tokens.len() > 1 => {
            tokens.pop();
            Some(index)
        }
        _ => None,
    };

    let container_path = tokens.join("/");
    let segments = parse(&container_path)?;

    let plain = resolve(host, &segments);
    if plain.node.is_some() {
        return Ok(InsertLocation {
            container: plain.node,
            position,
        });
    }
    // Only a missing chain is creatable. Missing tracks and devices stay
    // missing.
    if !matches!(plain.kind, TargetKind::Chain | TargetKind::DrumPadChain) {
        return Ok(InsertLocation {
            container: None,
            position,
        });
    }

    let container = create_missing_chain(host, &tokens)?;
    Ok(InsertLocation {
        container,
        position,
    })
}

/// Materialize the container path's final chain, then re-resolve the whole
/// path from scratch.
fn create_missing_chain<H: TreeHost>(
    host: &mut H,
    tokens: &[&str],
) -> Result<Option<H::Node>, InsertError> {
    let (prefix_len, target) = match chain_target(tokens) {
        Some(found) => found,
        None => return Ok(None),
    };

    // The prefix of a parseable path parses; resolve it to the owning rack.
    let prefix = parse(&tokens[..prefix_len].join("/"))?;
    let resolved = resolve(host, &prefix);
    let Some(device) = resolved.node else {
        return Ok(None);
    };

    match target {
        ChainTarget::Plain { index } => {
            let existing = host.children(&device, ChildCollection::Chains).len();
            let required = (index + 1).saturating_sub(existing);
            check_cap(required)?;
            debug!(index, existing, required, "auto-creating chains");
            let mut created = 0;
            // Re-read the child list after every insertion instead of
            // trusting that one call adds exactly one chain.
            while host.children(&device, ChildCollection::Chains).len() <= index
                && created < required
            {
                if !host.invoke(&device, INSERT_CHAIN_METHOD) {
                    break;
                }
                created += 1;
            }
        }
        ChainTarget::Group { note, index } => {
            let Some(midi) = note_value(&note) else {
                return Ok(None);
            };
            let existing = note_group(host, &device, midi).len();
            let required = (index + 1).saturating_sub(existing);
            check_cap(required)?;
            debug!(note = %note, midi, index, existing, required, "auto-creating note-group chains");
            let mut created = 0;
            while note_group(host, &device, midi).len() <= index && created < required {
                let before = host.children(&device, ChildCollection::Chains);
                if !host.invoke(&device, INSERT_CHAIN_METHOD) {
                    break;
                }
                let after = host.children(&device, ChildCollection::Chains);
                // Tag every chain the insertion produced; a fresh chain
                // defaults to the catch-all sentinel and would land in the
                // wrong group.
                for chain in &after {
                    if !before.contains(chain) {
                        host.set_property(chain, NOTE_PROPERTY, midi);
                    }
                }
                created += 1;
            }
        }
    }

    // Pick up the new chains in their final tree position.
    let segments = parse(&tokens.join("/"))?;
    Ok(resolve(host, &segments).node)
}

fn check_cap(required: usize) -> Result<(), InsertError> {
    if required > MAX_AUTO_CREATE_CHAINS {
        return Err(InsertError::AutoCreateLimitExceeded {
            required,
            max: MAX_AUTO_CREATE_CHAINS,
        });
    }
    Ok(())
}

/// Classify the final chain target of a token list, returning it with the
/// length of the device prefix in front of it.
fn chain_target(tokens: &[&str]) -> Option<(usize, ChainTarget)> {
    let last = tokens.last()?;
    match classify(last)? {
        SegmentToken::Chain(index) => {
            let previous = classify(tokens.get(tokens.len().checked_sub(2)?)?)?;
            match previous {
                SegmentToken::Pad(note) => Some((
                    tokens.len() - 2,
                    ChainTarget::Group { note, index },
                )),
                SegmentToken::Device(_) => Some((tokens.len() - 1, ChainTarget::Plain { index })),
                _ => None,
            }
        }
        SegmentToken::Pad(note) => Some((
            tokens.len() - 1,
            ChainTarget::Group { note, index: 0 },
        )),
        _ => None,
    }
}
