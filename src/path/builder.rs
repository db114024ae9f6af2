//! Path builder: native tree locations back into compact paths.
//!
//! The host addresses nodes positionally, as an ordered list of
//! (container kind, index) steps from the tree root. `extract` turns such a
//! location into the canonical compact path, or `None` when the location does
//! not lie in the addressable track/device/chain subtree.
//!
//! Note groups never appear here: a drum pad chain is, natively, just a chain
//! of its rack, so its extracted path uses the plain `c` index. That path
//! re-resolves to the same node even though it is not the `p`-form the caller
//! may have started from.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// One step of a native, fully qualified tree location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationStep {
    Track(usize),
    ReturnTrack(usize),
    MasterTrack,
    Device(usize),
    Chain(usize),
    ReturnChain(usize),
}

#[derive(Clone, Copy)]
enum Expect {
    Device,
    ChainLevel,
}

/// Derive the compact path for a native location.
///
/// Returns `None` unless the location starts at a track and then strictly
/// alternates device and chain/return-chain steps.
pub fn extract(location: &[LocationStep]) -> Option<String> {
    let (first, rest) = location.split_first()?;

    let mut out = match first {
        LocationStep::Track(i) => format!("t{i}"),
        LocationStep::ReturnTrack(i) => format!("rt{i}"),
        LocationStep::MasterTrack => "mt".to_string(),
        _ => return None,
    };

    let mut expect = Expect::Device;
    for step in rest {
        match (expect, step) {
            (Expect::Device, LocationStep::Device(i)) => {
                let _ = write!(out, "/d{i}");
                expect = Expect::ChainLevel;
            }
            (Expect::ChainLevel, LocationStep::Chain(i)) => {
                let _ = write!(out, "/c{i}");
                expect = Expect::Device;
            }
            (Expect::ChainLevel, LocationStep::ReturnChain(i)) => {
                let _ = write!(out, "/rc{i}");
                expect = Expect::Device;
            }
            _ => return None,
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use LocationStep::*;

    #[test]
    fn track_rooted_paths() {
        assert_eq!(extract(&[Track(0)]).as_deref(), Some("t0"));
        assert_eq!(extract(&[Track(0), Device(2)]).as_deref(), Some("t0/d2"));
        assert_eq!(
            extract(&[ReturnTrack(1), Device(0), ReturnChain(0)]).as_deref(),
            Some("rt1/d0/rc0")
        );
        assert_eq!(
            extract(&[MasterTrack, Device(0), Chain(1), Device(3)]).as_deref(),
            Some("mt/d0/c1/d3")
        );
    }

    #[test]
    fn rejects_non_track_roots() {
        assert_eq!(extract(&[]), None);
        assert_eq!(extract(&[Device(0)]), None);
        assert_eq!(extract(&[Chain(0), Device(0)]), None);
    }

    #[test]
    fn rejects_broken_alternation() {
        assert_eq!(extract(&[Track(0), Chain(0)]), None);
        assert_eq!(extract(&[Track(0), Device(0), Device(1)]), None);
        assert_eq!(extract(&[Track(0), Device(0), Chain(0), Chain(1)]), None);
        assert_eq!(extract(&[Track(0), Device(0), MasterTrack]), None);
    }
}
