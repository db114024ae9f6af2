//! Path resolution against a live tree host.

pub mod drum;
pub mod insert;
pub mod walker;

pub use insert::{resolve_for_insertion, InsertError, InsertLocation, MAX_AUTO_CREATE_CHAINS};
pub use walker::{resolve, resolve_path, ResolvedTarget, TargetKind};
