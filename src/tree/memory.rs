//! In-memory tree host.
//!
//! An id-arena implementation of [`TreeHost`] with parent links, used as the
//! test double and as a reference for what the resolver expects from a real
//! host. New chains appear at the end of their rack's chain list with
//! `in_note` set to the catch-all sentinel, mirroring the live host's
//! insert-chain behavior.

use std::collections::HashMap;

use crate::note::CATCH_ALL_NOTE;
use crate::path::LocationStep;

use super::host::{ChildCollection, TreeHost, INSERT_CHAIN_METHOD, NOTE_PROPERTY};

/// Handle to a [`MemoryTree`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Track,
    ReturnTrack,
    MasterTrack,
    Device,
    Chain,
    ReturnChain,
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    devices: Vec<NodeId>,
    chains: Vec<NodeId>,
    return_chains: Vec<NodeId>,
    properties: HashMap<String, i64>,
}

impl NodeData {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            devices: Vec::new(),
            chains: Vec::new(),
            return_chains: Vec::new(),
            properties: HashMap::new(),
        }
    }
}

/// An owned, in-memory device tree.
#[derive(Debug, Default)]
pub struct MemoryTree {
    nodes: Vec<NodeData>,
    tracks: Vec<NodeId>,
    return_tracks: Vec<NodeId>,
    master: Option<NodeId>,
    insert_chain_calls: usize,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(kind, parent));
        id
    }

    /// Append a regular track.
    pub fn add_track(&mut self) -> NodeId {
        let id = self.alloc(NodeKind::Track, None);
        self.tracks.push(id);
        id
    }

    /// Append a return track.
    pub fn add_return_track(&mut self) -> NodeId {
        let id = self.alloc(NodeKind::ReturnTrack, None);
        self.return_tracks.push(id);
        id
    }

    /// Create the master track if absent, returning it.
    pub fn master(&mut self) -> NodeId {
        if let Some(id) = self.master {
            return id;
        }
        let id = self.alloc(NodeKind::MasterTrack, None);
        self.master = Some(id);
        id
    }

    /// Append a device to a track or chain.
    pub fn add_device(&mut self, parent: NodeId) -> NodeId {
        let id = self.alloc(NodeKind::Device, Some(parent));
        self.nodes[parent.0].devices.push(id);
        id
    }

    /// Append a chain to a rack device. `in_note` starts at the catch-all
    /// sentinel, as on the live host.
    pub fn add_chain(&mut self, device: NodeId) -> NodeId {
        let id = self.alloc(NodeKind::Chain, Some(device));
        self.nodes[id.0]
            .properties
            .insert(NOTE_PROPERTY.to_string(), CATCH_ALL_NOTE);
        self.nodes[device.0].chains.push(id);
        id
    }

    /// Append a chain with a specific note-group membership.
    pub fn add_drum_chain(&mut self, device: NodeId, note: i64) -> NodeId {
        let id = self.add_chain(device);
        self.nodes[id.0]
            .properties
            .insert(NOTE_PROPERTY.to_string(), note);
        id
    }

    /// Append a return chain to a rack device.
    pub fn add_return_chain(&mut self, device: NodeId) -> NodeId {
        let id = self.alloc(NodeKind::ReturnChain, Some(device));
        self.nodes[device.0].return_chains.push(id);
        id
    }

    /// How many times the insert-chain primitive has run.
    pub fn insert_chain_calls(&self) -> usize {
        self.insert_chain_calls
    }

    /// The native location of a node, root first. `None` for dangling ids.
    pub fn location(&self, node: NodeId) -> Option<Vec<LocationStep>> {
        let mut steps = Vec::new();
        let mut current = node;
        loop {
            let data = self.nodes.get(current.0)?;
            let step = match (data.kind, data.parent) {
                (NodeKind::Track, None) => {
                    LocationStep::Track(self.tracks.iter().position(|t| *t == current)?)
                }
                (NodeKind::ReturnTrack, None) => {
                    LocationStep::ReturnTrack(self.return_tracks.iter().position(|t| *t == current)?)
                }
                (NodeKind::MasterTrack, None) => LocationStep::MasterTrack,
                (NodeKind::Device, Some(parent)) => LocationStep::Device(self.child_index(
                    parent,
                    current,
                    ChildCollection::Devices,
                )?),
                (NodeKind::Chain, Some(parent)) => LocationStep::Chain(self.child_index(
                    parent,
                    current,
                    ChildCollection::Chains,
                )?),
                (NodeKind::ReturnChain, Some(parent)) => LocationStep::ReturnChain(
                    self.child_index(parent, current, ChildCollection::ReturnChains)?,
                ),
                _ => return None,
            };
            steps.push(step);
            match data.parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
        steps.reverse();
        Some(steps)
    }

    fn child_index(
        &self,
        parent: NodeId,
        child: NodeId,
        collection: ChildCollection,
    ) -> Option<usize> {
        let data = self.nodes.get(parent.0)?;
        let list = match collection {
            ChildCollection::Devices => &data.devices,
            ChildCollection::Chains => &data.chains,
            ChildCollection::ReturnChains => &data.return_chains,
        };
        list.iter().position(|c| *c == child)
    }
}

impl TreeHost for MemoryTree {
    type Node = NodeId;

    fn track(&self, index: usize) -> Option<NodeId> {
        self.tracks.get(index).copied()
    }

    fn return_track(&self, index: usize) -> Option<NodeId> {
        self.return_tracks.get(index).copied()
    }

    fn master_track(&self) -> Option<NodeId> {
        self.master
    }

    fn children(&self, node: &NodeId, collection: ChildCollection) -> Vec<NodeId> {
        let Some(data) = self.nodes.get(node.0) else {
            return Vec::new();
        };
        match collection {
            ChildCollection::Devices => data.devices.clone(),
            ChildCollection::Chains => data.chains.clone(),
            ChildCollection::ReturnChains => data.return_chains.clone(),
        }
    }

    fn get_property(&self, node: &NodeId, name: &str) -> Option<i64> {
        self.nodes.get(node.0)?.properties.get(name).copied()
    }

    fn set_property(&mut self, node: &NodeId, name: &str, value: i64) {
        if let Some(data) = self.nodes.get_mut(node.0) {
            data.properties.insert(name.to_string(), value);
        }
    }

    fn invoke(&mut self, node: &NodeId, method: &str) -> bool {
        if method != INSERT_CHAIN_METHOD {
            return false;
        }
        if self.nodes.get(node.0).map(|data| data.kind) != Some(NodeKind::Device) {
            return false;
        }
        self.add_chain(*node);
        self.insert_chain_calls += 1;
        true
    }

    fn exists(&self, node: &NodeId) -> bool {
        node.0 < self.nodes.len()
    }
}
