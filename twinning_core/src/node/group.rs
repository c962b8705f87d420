// Copyright 2026 the Twinning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group payload and the nested-editing state machine.

use glam::DMat4;

use crate::link::{GroupId, LinkSetId, PersistentId};
use crate::node::{Node, NodeContent};

/// The value payload of a group: a name and the transformation accumulated
/// from the group's own edits.
///
/// The transformation is bookkeeping for linked-group propagation; children
/// are stored in model space, so changing it does not move anything by
/// itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    name: String,
    transformation: DMat4,
}

impl Group {
    /// Creates a group value with the identity transformation.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transformation: DMat4::IDENTITY,
        }
    }

    /// Returns the name of the group.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the group.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the accumulated transformation.
    #[inline]
    #[must_use]
    pub fn transformation(&self) -> DMat4 {
        self.transformation
    }

    /// Composes `transformation` onto the accumulated transformation
    /// (the new edit is applied after all previous ones).
    pub fn transform(&mut self, transformation: DMat4) {
        self.transformation = transformation * self.transformation;
    }
}

/// Visibility state of a group during nested editing.
///
/// Exactly one state holds at a time; `DescendantOpen` marks the strict
/// ancestors of an open group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    /// Neither this group nor any descendant group is open.
    #[default]
    Closed,
    /// This group is the one being edited.
    Open,
    /// A descendant group is open.
    DescendantOpen,
}

/// The node payload of a group: the [`Group`] value plus edit state and the
/// identities linking it to its link set.
#[derive(Debug)]
pub struct GroupNode {
    group: Group,
    edit_state: EditState,
    link_set: LinkSetId,
    id: GroupId,
    persistent_id: Option<PersistentId>,
}

impl GroupNode {
    pub(crate) fn new(group: Group, link_set: LinkSetId, id: GroupId) -> Self {
        Self {
            group,
            edit_state: EditState::Closed,
            link_set,
            id,
            persistent_id: None,
        }
    }

    /// Returns the group value.
    #[must_use]
    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Replaces the group value, returning the previous one.
    pub fn set_group(&mut self, group: Group) -> Group {
        core::mem::replace(&mut self.group, group)
    }

    pub(crate) fn group_mut(&mut self) -> &mut Group {
        &mut self.group
    }

    /// Returns the stable identity of this group node.
    #[inline]
    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the handle of the link-set record this group shares.
    #[inline]
    #[must_use]
    pub fn link_set(&self) -> LinkSetId {
        self.link_set
    }

    pub(crate) fn set_link_set(&mut self, link_set: LinkSetId) {
        self.link_set = link_set;
    }

    /// Returns this node's own persistent id, if assigned.
    #[inline]
    #[must_use]
    pub fn persistent_id(&self) -> Option<PersistentId> {
        self.persistent_id
    }

    pub(crate) fn set_persistent_id(&mut self, id: PersistentId) {
        self.persistent_id = Some(id);
    }

    /// Returns whether this group is the one being edited.
    #[inline]
    #[must_use]
    pub fn opened(&self) -> bool {
        self.edit_state == EditState::Open
    }

    /// Returns whether a descendant group is being edited.
    #[inline]
    #[must_use]
    pub fn has_opened_descendant(&self) -> bool {
        self.edit_state == EditState::DescendantOpen
    }

    /// Returns whether neither this group nor any descendant is open.
    #[inline]
    #[must_use]
    pub fn closed(&self) -> bool {
        self.edit_state == EditState::Closed
    }

    /// Returns the edit state.
    #[inline]
    #[must_use]
    pub fn edit_state(&self) -> EditState {
        self.edit_state
    }

    pub(crate) fn set_edit_state(&mut self, edit_state: EditState) {
        self.edit_state = edit_state;
    }
}

impl Node {
    /// Opens the group identified by `target` for editing: the target
    /// becomes [`Open`](EditState::Open) and every strict-ancestor group in
    /// this subtree becomes [`DescendantOpen`](EditState::DescendantOpen).
    ///
    /// Returns whether the target was found in this subtree.
    ///
    /// # Panics
    ///
    /// Panics if the target is found but not currently closed.
    pub fn open_group(&mut self, target: GroupId) -> bool {
        set_edit_states(self, target, true)
    }

    /// Closes the group identified by `target`: the target becomes
    /// [`Closed`](EditState::Closed), and so does every strict-ancestor
    /// group — unconditionally, even if another descendant of an ancestor
    /// is still open (last writer wins).
    ///
    /// Returns whether the target was found in this subtree.
    ///
    /// # Panics
    ///
    /// Panics if the target is found but not currently open.
    pub fn close_group(&mut self, target: GroupId) -> bool {
        set_edit_states(self, target, false)
    }
}

/// Recursive walk shared by open and close. Marks the target on the way
/// down and the strict-ancestor groups on the way back up — the ancestor
/// chain is exactly the recursion path through the owned tree.
fn set_edit_states(node: &mut Node, target: GroupId, opening: bool) -> bool {
    if let NodeContent::Group(group) = &mut node.content {
        if group.id() == target {
            if opening {
                assert!(group.closed(), "cannot open a group that is not closed");
                group.set_edit_state(EditState::Open);
            } else {
                assert!(group.opened(), "cannot close a group that is not open");
                group.set_edit_state(EditState::Closed);
            }
            return true;
        }
    }

    for index in 0..node.children.len() {
        if set_edit_states(&mut node.children[index], target, opening) {
            if let NodeContent::Group(group) = &mut node.content {
                group.set_edit_state(if opening {
                    EditState::DescendantOpen
                } else {
                    EditState::Closed
                });
            }
            return true;
        }
    }
    false
}
