//! The tree host collaborator.
//!
//! The resolver does not own the device tree. It talks to whatever hosts it
//! (a remote-control surface, an RPC bridge, the in-memory tree in tests)
//! through this trait. Node handles are opaque to the resolver; the host
//! decides what they are. Every operation is synchronous and re-reads live
//! state: the host is shared, mutable, and may change between two calls.

/// A child collection of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildCollection {
    Devices,
    Chains,
    ReturnChains,
}

impl ChildCollection {
    /// The host-side collection name.
    pub fn name(self) -> &'static str {
        match self {
            ChildCollection::Devices => "devices",
            ChildCollection::Chains => "chains",
            ChildCollection::ReturnChains => "return_chains",
        }
    }
}

/// Property holding a chain's note-group membership.
pub const NOTE_PROPERTY: &str = "in_note";

/// Method that appends a new chain to a rack device.
pub const INSERT_CHAIN_METHOD: &str = "insert_chain";

/// Access to the live device tree.
pub trait TreeHost {
    /// Opaque node handle.
    type Node: Clone + PartialEq;

    /// Regular track by index.
    fn track(&self, index: usize) -> Option<Self::Node>;

    /// Return track by index.
    fn return_track(&self, index: usize) -> Option<Self::Node>;

    /// The master track.
    fn master_track(&self) -> Option<Self::Node>;

    /// A node's children in stable enumeration order. Nodes without the
    /// collection enumerate as empty.
    fn children(&self, node: &Self::Node, collection: ChildCollection) -> Vec<Self::Node>;

    /// Read an integer property, `None` when absent.
    fn get_property(&self, node: &Self::Node, name: &str) -> Option<i64>;

    /// Write an integer property.
    fn set_property(&mut self, node: &Self::Node, name: &str, value: i64);

    /// Invoke a method on a node. Returns whether the host accepted it.
    fn invoke(&mut self, node: &Self::Node, method: &str) -> bool;

    /// Whether the handle still refers to a live node.
    fn exists(&self, node: &Self::Node) -> bool;
}
