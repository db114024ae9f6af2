//! Read-only path resolution.
//!
//! Walks a parsed segment list against the live tree, one host query per
//! step. Nothing is cached: two resolutions of the same path may disagree if
//! the tree changed in between.

use serde::{Deserialize, Serialize};

use crate::path::{parse, ParseError, PathSegment, TrackRef};
use crate::tree::{ChildCollection, TreeHost};

use super::drum;

/// What a resolution was seeking. Populated even on failure, so callers can
/// tell a missing device from a missing chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    Device,
    Chain,
    ReturnChain,
    DrumPadChain,
}

/// Outcome of a resolution. `node` is `None` exactly when the walk failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget<N> {
    pub node: Option<N>,
    pub kind: TargetKind,
}

impl<N> ResolvedTarget<N> {
    pub(crate) fn found(node: N, kind: TargetKind) -> Self {
        Self {
            node: Some(node),
            kind,
        }
    }

    pub(crate) fn missing(kind: TargetKind) -> Self {
        Self { node: None, kind }
    }
}

/// Resolve a parsed segment list to its target node.
///
/// A path ending at a container returns that container, tagged with the kind
/// its last segment implies; a bare track path is tagged [`TargetKind::Device`],
/// the granularity the next segment would have asked for. A `DrumPad` segment
/// hands the walk to the note-group navigator, which owns the rest of it.
pub fn resolve<H: TreeHost>(host: &H, segments: &[PathSegment]) -> ResolvedTarget<H::Node> {
    let Some((first, rest)) = segments.split_first() else {
        return ResolvedTarget::missing(TargetKind::Device);
    };
    let PathSegment::Track(track) = first else {
        return ResolvedTarget::missing(TargetKind::Device);
    };

    let track_node = match track {
        TrackRef::Track(i) => host.track(*i),
        TrackRef::Return(i) => host.return_track(*i),
        TrackRef::Master => host.master_track(),
    };
    let Some(mut current) = track_node else {
        // Track absence is reported at the granularity the next segment
        // would have asked for.
        return ResolvedTarget::missing(TargetKind::Device);
    };

    let mut kind = TargetKind::Device;
    for segment in rest {
        let (collection, index, sought) = match segment {
            PathSegment::Device { index } => (ChildCollection::Devices, *index, TargetKind::Device),
            PathSegment::Chain { index } => (ChildCollection::Chains, *index, TargetKind::Chain),
            PathSegment::ReturnChain { index } => {
                (ChildCollection::ReturnChains, *index, TargetKind::ReturnChain)
            }
            PathSegment::DrumPad { note, tail } => {
                // Control never returns: the navigator owns everything
                // behind the pad, including further nested racks.
                return drum::resolve_drum_pad(host, &current, note, tail);
            }
            PathSegment::Track(_) => return ResolvedTarget::missing(TargetKind::Device),
        };
        match host.children(&current, collection).get(index) {
            Some(child) => {
                current = child.clone();
                kind = sought;
            }
            None => return ResolvedTarget::missing(sought),
        }
    }

    ResolvedTarget::found(current, kind)
}

/// Parse and resolve in one step.
pub fn resolve_path<H: TreeHost>(
    host: &H,
    path: &str,
) -> Result<ResolvedTarget<H::Node>, ParseError> {
    Ok(resolve(host, &parse(path)?))
}
