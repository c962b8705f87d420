// Copyright 2026 the Twinning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Link-set registry: shared membership records for mirrored groups.
//!
//! A *link set* is the set of group nodes that mirror each other's content
//! under independent local transforms. Rather than having every group node
//! share ownership of a membership record, the records live in a central
//! [`LinkRegistry`] and group nodes hold a plain [`LinkSetId`]. Two group
//! nodes are in the same link set exactly when their ids are equal.
//!
//! Each group node also carries a [`GroupId`], allocated by the registry at
//! construction time. Member lists store `GroupId`s, so a record never owns
//! or borrows the nodes it names; resolving an id back to a node is the
//! caller's job (see [`update_linked_groups`](crate::propagate::update_linked_groups)).
//!
//! A group node is in one of three observable states:
//!
//! - **singleton** — its record is private to itself and the member list is
//!   empty (the state of every freshly constructed group node),
//! - **linkable** — it shares a record with other groups but does not appear
//!   in the member list, so updates pass it by,
//! - **linked** — it appears in its record's member list.
//!
//! Records are created one per group node and are never freed; see DESIGN.md
//! for the lifetime discussion.

use core::fmt;

use crate::node::Node;

/// A handle to a link-set record in a [`LinkRegistry`].
///
/// Two group nodes are in the same link set iff their `LinkSetId`s are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkSetId(pub(crate) u32);

impl fmt::Debug for LinkSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkSetId({})", self.0)
    }
}

/// The stable identity of a group node, allocated by the [`LinkRegistry`].
///
/// Member lists and replacement plans refer to group nodes by `GroupId`, so
/// the identity survives the node being moved within (or out of) a tree.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub(crate) u32);

impl fmt::Debug for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupId({})", self.0)
    }
}

/// The identity used to recognize a link set across save/load cycles.
///
/// Purely informational for this crate: propagation never consults it. The
/// serialization collaborator assigns and persists these.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersistentId(
    /// Raw id value, assigned by the serialization collaborator.
    pub u64,
);

impl fmt::Debug for PersistentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersistentId({})", self.0)
    }
}

/// One shared membership record.
#[derive(Debug, Default)]
struct LinkSetRecord {
    /// Ordered list of linked members. Order is the propagation order.
    members: Vec<GroupId>,
    /// Seeded by the first member that receives a persistent id; never
    /// overwritten afterwards.
    persistent_id: Option<PersistentId>,
}

/// Central storage for link-set records and group identities.
///
/// All membership mutation goes through the registry; the group nodes
/// themselves only carry ids. The registry is not internally synchronized:
/// exclusive access is enforced by `&mut` borrows, which matches the
/// single-mutator model of the editor's command thread.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    records: Vec<LinkSetRecord>,
    next_group_id: u32,
}

impl LinkRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of link-set records ever created.
    ///
    /// Records are never freed, so this grows monotonically; hosts can use
    /// it to monitor registry growth over long sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether no record has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Allocates a fresh, empty link-set record.
    pub(crate) fn create_set(&mut self) -> LinkSetId {
        let id = LinkSetId(u32::try_from(self.records.len()).expect("link set count overflow"));
        self.records.push(LinkSetRecord::default());
        id
    }

    /// Allocates a fresh group identity.
    pub(crate) fn allocate_group_id(&mut self) -> GroupId {
        let id = GroupId(self.next_group_id);
        self.next_group_id += 1;
        id
    }

    /// Returns whether `node` appears in its own record's member list.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a group or its handle is stale.
    #[must_use]
    pub fn is_linked(&self, node: &Node) -> bool {
        let group = node.expect_group();
        self.record(group.link_set()).members.contains(&group.id())
    }

    /// Connects `node` to its link set by appending it to the member list.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a group, or is already linked.
    pub fn link(&mut self, node: &Node) {
        assert!(!self.is_linked(node), "group is already linked");
        let group = node.expect_group();
        let id = group.id();
        self.record_mut(group.link_set()).members.push(id);
    }

    /// Disconnects `node` from its link set by removing it from the member
    /// list. Other members are unaffected.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a group, or is not currently linked.
    pub fn unlink(&mut self, node: &Node) {
        assert!(self.is_linked(node), "group is not linked");
        let group = node.expect_group();
        let id = group.id();
        self.record_mut(group.link_set())
            .members
            .retain(|member| *member != id);
    }

    /// Returns a snapshot of the member list of `node`'s link set, in
    /// propagation order. Includes `node` itself only if it is linked.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a group or its handle is stale.
    #[must_use]
    pub fn linked_groups(&self, node: &Node) -> Vec<GroupId> {
        self.record(node.expect_group().link_set()).members.clone()
    }

    /// Swaps the member-list entry `old` for `new`'s id, preserving list
    /// order. This is how a caller splicing a replacement node into the tree
    /// hands the old node's membership slot to the replacement.
    ///
    /// # Panics
    ///
    /// Panics if `new` is not a group, does not share the record that lists
    /// `old`, is already listed itself, or if `old` is not listed.
    pub fn replace_member(&mut self, old: GroupId, new: &Node) {
        let group = new.expect_group();
        let new_id = group.id();
        let record = self.record_mut(group.link_set());
        assert!(
            !record.members.contains(&new_id),
            "replacement group is already linked"
        );
        let slot = record
            .members
            .iter()
            .position(|member| *member == old)
            .expect("old group is not a member of the replacement's link set");
        record.members[slot] = new_id;
    }

    /// Assigns `node`'s own persistent id, and seeds the link set's shared
    /// persistent id if it has none yet. A shared id that is already set is
    /// never overwritten.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a group or its handle is stale.
    pub fn set_persistent_id(&mut self, node: &mut Node, id: PersistentId) {
        let group = node.expect_group_mut();
        group.set_persistent_id(id);
        let record = self.record_mut(group.link_set());
        if record.persistent_id.is_none() {
            record.persistent_id = Some(id);
        }
    }

    /// Returns the shared persistent id of `node`'s link set, if any member
    /// has seeded one.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a group or its handle is stale.
    #[must_use]
    pub fn shared_persistent_id(&self, node: &Node) -> Option<PersistentId> {
        self.record(node.expect_group().link_set()).persistent_id
    }

    fn record(&self, id: LinkSetId) -> &LinkSetRecord {
        assert!(
            (id.0 as usize) < self.records.len(),
            "stale LinkSetId: {id:?} (registry has {} records)",
            self.records.len()
        );
        &self.records[id.0 as usize]
    }

    fn record_mut(&mut self, id: LinkSetId) -> &mut LinkSetRecord {
        assert!(
            (id.0 as usize) < self.records.len(),
            "stale LinkSetId: {id:?} (registry has {} records)",
            self.records.len()
        );
        &mut self.records[id.0 as usize]
    }
}
