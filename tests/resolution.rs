//! Integration tests for read-only path resolution over the in-memory host.

use pretty_assertions::assert_eq;
use rackpath::{parse, resolve, resolve_path, MemoryTree, NodeId, TargetKind};

/// Two tracks; track 1 carries a rack with two chains, the second chain
/// holding a nested device. Plus a return track and the master track, each
/// with one device.
fn set_with_racks() -> (MemoryTree, Fixture) {
    let mut tree = MemoryTree::new();
    let t0 = tree.add_track();
    let t1 = tree.add_track();
    let d0 = tree.add_device(t1);
    let c0 = tree.add_chain(d0);
    let c1 = tree.add_chain(d0);
    let rc0 = tree.add_return_chain(d0);
    let nested = tree.add_device(c1);
    let rt0 = tree.add_return_track();
    let return_device = tree.add_device(rt0);
    let master = tree.master();
    let master_device = tree.add_device(master);
    (
        tree,
        Fixture {
            t0,
            d0,
            c0,
            c1,
            rc0,
            nested,
            return_device,
            master_device,
        },
    )
}

struct Fixture {
    t0: NodeId,
    d0: NodeId,
    c0: NodeId,
    c1: NodeId,
    rc0: NodeId,
    nested: NodeId,
    return_device: NodeId,
    master_device: NodeId,
}

#[test]
fn resolves_device_on_track() {
    let (tree, fx) = set_with_racks();
    let target = resolve(&tree, &parse("t1/d0").unwrap());
    assert_eq!(target.kind, TargetKind::Device);
    assert_eq!(target.node, Some(fx.d0));
}

#[test]
fn resolves_chains_and_return_chains() {
    let (tree, fx) = set_with_racks();

    let target = resolve(&tree, &parse("t1/d0/c0").unwrap());
    assert_eq!((target.node, target.kind), (Some(fx.c0), TargetKind::Chain));

    let target = resolve(&tree, &parse("t1/d0/c1").unwrap());
    assert_eq!(target.node, Some(fx.c1));

    let target = resolve(&tree, &parse("t1/d0/rc0").unwrap());
    assert_eq!(
        (target.node, target.kind),
        (Some(fx.rc0), TargetKind::ReturnChain)
    );
}

#[test]
fn resolves_nested_device_inside_chain() {
    let (tree, fx) = set_with_racks();
    let target = resolve(&tree, &parse("t1/d0/c1/d0").unwrap());
    assert_eq!(
        (target.node, target.kind),
        (Some(fx.nested), TargetKind::Device)
    );
}

#[test]
fn resolves_return_and_master_tracks() {
    let (tree, fx) = set_with_racks();
    assert_eq!(
        resolve(&tree, &parse("rt0/d0").unwrap()).node,
        Some(fx.return_device)
    );
    assert_eq!(
        resolve(&tree, &parse("mt/d0").unwrap()).node,
        Some(fx.master_device)
    );
}

#[test]
fn bare_track_resolves_to_the_track_itself() {
    let (tree, fx) = set_with_racks();
    let target = resolve(&tree, &parse("t0").unwrap());
    assert_eq!(target.node, Some(fx.t0));
    assert_eq!(target.kind, TargetKind::Device);
}

#[test]
fn missing_track_fails_at_device_granularity() {
    let (tree, _) = set_with_racks();
    let target = resolve(&tree, &parse("t9/d0").unwrap());
    assert_eq!((target.node, target.kind), (None, TargetKind::Device));
    assert_eq!(resolve(&tree, &parse("rt5/d0").unwrap()).node, None);
}

#[test]
fn missing_master_track() {
    let tree = MemoryTree::new();
    let target = resolve(&tree, &parse("mt/d0").unwrap());
    assert_eq!((target.node, target.kind), (None, TargetKind::Device));
}

#[test]
fn out_of_range_indexes_carry_the_sought_kind() {
    let (tree, _) = set_with_racks();

    let target = resolve(&tree, &parse("t1/d7").unwrap());
    assert_eq!((target.node, target.kind), (None, TargetKind::Device));

    let target = resolve(&tree, &parse("t1/d0/c9").unwrap());
    assert_eq!((target.node, target.kind), (None, TargetKind::Chain));

    let target = resolve(&tree, &parse("t1/d0/rc3").unwrap());
    assert_eq!((target.node, target.kind), (None, TargetKind::ReturnChain));
}

#[test]
fn device_without_chains_has_no_chain_children() {
    let (tree, _) = set_with_racks();
    // t0 has no devices at all, and a chain segment straight after a track
    // indexes an empty collection.
    assert_eq!(resolve(&tree, &parse("t0/d0").unwrap()).node, None);
    let target = resolve(&tree, &parse("t0/c0").unwrap());
    assert_eq!((target.node, target.kind), (None, TargetKind::Chain));
}

#[test]
fn resolve_path_parses_and_resolves() {
    let (tree, fx) = set_with_racks();
    let target = resolve_path(&tree, "t1/d0/c1/d0").unwrap();
    assert_eq!(target.node, Some(fx.nested));
    assert!(resolve_path(&tree, "t1/x0").is_err());
}

#[test]
fn no_caching_between_calls() {
    let (mut tree, fx) = set_with_racks();
    // Mutate between calls: the same path must see the new state.
    let segments = parse("t1/d0/c2").unwrap();
    assert_eq!(resolve(&tree, &segments).node, None);
    let c2 = tree.add_chain(fx.d0);
    assert_eq!(resolve(&tree, &segments).node, Some(c2));
}
