//! rackpath: compact path addressing for live-set device trees.
//!
//! External tools address locations deep inside a dynamically shaped device
//! tree (tracks → devices → chains → devices → …, plus drum-pad note groups)
//! with a short path string instead of a verbose positional route:
//!
//! ```text
//! t0/d0          device 0 on track 0
//! t0/d0/c2       chain 2 of that device
//! rt1/d0/rc0     return chain 0 of a device on return track 1
//! mt/d0          device 0 on the master track
//! t0/d0/pC1/c2   chain 2 within the C1 note group of a drum rack
//! ```
//!
//! The crate parses that grammar, derives it back from native tree locations,
//! resolves paths read-only against a [`tree::TreeHost`], and, for insertion
//! requests, materializes missing chains under a hard cap
//! ([`resolve::MAX_AUTO_CREATE_CHAINS`]).

pub mod note;
pub mod path;
pub mod resolve;
pub mod tree;

pub use path::{extract, format_path, parse, LocationStep, ParseError, PathSegment, TrackRef};
pub use resolve::{
    resolve, resolve_for_insertion, resolve_path, InsertError, InsertLocation, ResolvedTarget,
    TargetKind, MAX_AUTO_CREATE_CHAINS,
};
pub use tree::{ChildCollection, MemoryTree, NodeId, TreeHost};
