//! Tree host collaborator trait and the in-memory reference implementation.

pub mod host;
pub mod memory;

pub use host::{ChildCollection, TreeHost, INSERT_CHAIN_METHOD, NOTE_PROPERTY};
pub use memory::{MemoryTree, NodeId};
