// Copyright 2026 the Twinning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linked-group update propagation.
//!
//! [`update_linked_groups`] takes an edited group node and builds, for every
//! other linked member of its link set, a replacement node whose content is
//! the edited content re-expressed in that member's frame:
//!
//! ```text
//!   source content ──(member.transformation ∘ source.transformation⁻¹)──►
//!       cloned content ──(preserve pinned entity properties)──►
//!           replacement member
//! ```
//!
//! The operation is a pure builder: it never touches the live tree. The
//! caller splices each replacement over its old node (and hands over the
//! membership slot with
//! [`LinkRegistry::replace_member`](crate::link::LinkRegistry::replace_member)),
//! which keeps the whole update undoable by an external command stack.
//!
//! Failure is all-or-nothing: the first error anywhere — a non-invertible
//! source transformation, a structural violation, a failed brush transform,
//! content leaving the world bounds — aborts the entire call and discards
//! every replacement built so far. Propagation never cascades on its own;
//! updating the link set of an ancestor group is a separate, caller-driven
//! invocation.

mod clone;
mod preserve;

use glam::DMat4;
use thiserror::Error;
use tracing::{debug, trace};

use crate::bounds::Bounds3;
use crate::link::{GroupId, LinkRegistry};
use crate::node::{BrushError, Node, NodeKind};

use clone::clone_and_transform_children;
use preserve::preserve_entity_properties;

/// An error aborting a linked-group update.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UpdateLinkedGroupsError {
    /// The propagating group's own transformation has no inverse; no member
    /// was processed.
    #[error("group transformation is not invertible")]
    NotInvertible,
    /// A world or layer node was found inside a group's content, which
    /// indicates a tree-invariant breach upstream of this crate.
    #[error("found a {0} node inside a group while updating linked groups")]
    StructuralViolation(NodeKind),
    /// Transforming a brush failed.
    #[error("failed to transform a brush: {0}")]
    BrushTransformFailed(#[from] BrushError),
    /// A transformed node's bounds escape the permitted world volume.
    #[error("linked node exceeds world bounds")]
    WorldBoundsExceeded,
}

/// The replacement plan of a successful update: for each processed member,
/// the member's id paired with its freshly built replacement node, in
/// member-list order.
pub type UpdateLinkedGroupsResult = Vec<(GroupId, Node)>;

/// Builds replacements for every other linked member of `source`'s link
/// set.
///
/// For each member, the relative transform
/// `member.transformation ∘ source.transformation⁻¹` is applied to a clone
/// of `source`'s children, the member's pinned entity properties are
/// re-applied, and the reconciled children are attached to a shallow clone
/// of the member. The replacement shares the member's link-set record (so
/// the set does not change size) but carries a fresh [`GroupId`] and is not
/// itself linked until the caller hands it the old node's membership slot.
///
/// `resolve` maps a member id to its node; members live wherever the caller
/// keeps them, typically `|id| root.find_group(id)`.
///
/// Returns the ordered replacement plan — empty if `source` is the only
/// linked member — or the first error encountered, in which case no
/// replacement is returned for any member.
///
/// # Panics
///
/// Panics if `source` is not a linked group node, or if `resolve` fails to
/// produce a member named by the link set (a stale handle; callers must
/// keep the registry and their trees consistent).
pub fn update_linked_groups<'a>(
    source: &Node,
    links: &mut LinkRegistry,
    world_bounds: &Bounds3,
    mut resolve: impl FnMut(GroupId) -> Option<&'a Node>,
) -> Result<UpdateLinkedGroupsResult, UpdateLinkedGroupsError> {
    let source_group = source.expect_group();
    assert!(
        links.is_linked(source),
        "update_linked_groups requires a linked group"
    );

    let transformation = source_group.group().transformation();
    let determinant = transformation.determinant();
    if determinant == 0.0 || !determinant.is_finite() {
        return Err(UpdateLinkedGroupsError::NotInvertible);
    }
    let inverted = transformation.inverse();
    if !inverted.is_finite() {
        return Err(UpdateLinkedGroupsError::NotInvertible);
    }

    let members = links.linked_groups(source);
    let mut result = Vec::with_capacity(members.len());

    for member_id in members {
        if member_id == source_group.id() {
            continue;
        }
        let member = resolve(member_id)
            .unwrap_or_else(|| panic!("stale {member_id:?}: linked member is not resolvable"));

        let relative: DMat4 = member.expect_group().group().transformation() * inverted;
        trace!(?member_id, "cloning into linked group");

        let mut new_children =
            clone_and_transform_children(source, world_bounds, relative, links)?;
        preserve_entity_properties(&mut new_children, member.children());

        let mut replacement = member.clone_node(links);
        source.add_to_link_set(&mut replacement);
        replacement.append_children(new_children);

        result.push((member_id, replacement));
    }

    debug!(
        source = ?source_group.id(),
        replacements = result.len(),
        "updated linked groups"
    );
    Ok(result)
}

/// Recursively clones a group and connects source and clone as linked
/// members of the source's link set. The source is linked first if it was
/// not already; the clone is always linked. Returns the clone, owned by the
/// caller.
///
/// # Panics
///
/// Panics if `source` is not a group node.
pub fn create_linked_duplicate(source: &Node, links: &mut LinkRegistry) -> Node {
    let _ = source.expect_group();
    let mut duplicate = source.clone_recursively(links);
    source.add_to_link_set(&mut duplicate);
    if !links.is_linked(source) {
        links.link(source);
    }
    links.link(&duplicate);
    duplicate
}

#[cfg(test)]
mod tests {
    use glam::DVec3;

    use super::*;
    use crate::node::{Brush, Entity, EntityProperty, Group, transform_subtree};

    fn world_bounds() -> Bounds3 {
        Bounds3::from_half_size(8192.0)
    }

    fn translation(x: f64, y: f64, z: f64) -> DMat4 {
        DMat4::from_translation(DVec3::new(x, y, z))
    }

    fn linked_group_with_entity(links: &mut LinkRegistry) -> Node {
        let mut group = Node::new_group(Group::new("name"), links);
        group.add_child(Node::new_entity(Entity::new()));
        links.link(&group);
        group
    }

    #[test]
    fn update_of_a_lone_member_returns_no_replacements() {
        let mut links = LinkRegistry::new();
        let mut group = linked_group_with_entity(&mut links);
        transform_subtree(&mut group, translation(1.0, 0.0, 0.0), &world_bounds(), false)
            .unwrap();

        let result =
            update_linked_groups(&group, &mut links, &world_bounds(), |_| None).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn update_propagates_content_through_the_relative_transform() {
        let mut links = LinkRegistry::new();
        let mut group = linked_group_with_entity(&mut links);
        transform_subtree(&mut group, translation(1.0, 0.0, 0.0), &world_bounds(), false)
            .unwrap();

        let mut clone = create_linked_duplicate(&group, &mut links);
        transform_subtree(&mut clone, translation(0.0, 2.0, 0.0), &world_bounds(), false)
            .unwrap();
        assert_eq!(
            clone.children()[0].as_entity().unwrap().origin(),
            DVec3::new(1.0, 2.0, 0.0)
        );

        // Edit the source: move its entity without touching the group
        // transformation.
        transform_subtree(
            group.child_mut(0),
            translation(0.0, 0.0, 3.0),
            &world_bounds(),
            false,
        )
        .unwrap();

        let clone_id = clone.as_group().unwrap().id();
        let result = update_linked_groups(&group, &mut links, &world_bounds(), |id| {
            (id == clone_id).then_some(&clone)
        })
        .unwrap();

        assert_eq!(result.len(), 1);
        let (old_id, replacement) = &result[0];
        assert_eq!(*old_id, clone_id);

        assert!(replacement.in_link_set_with(&group));
        assert_eq!(
            replacement.as_group().unwrap().group(),
            clone.as_group().unwrap().group()
        );
        assert_eq!(replacement.children().len(), 1);
        assert_eq!(
            replacement.children()[0].as_entity().unwrap().origin(),
            DVec3::new(1.0, 2.0, 3.0)
        );

        // The replacement is linkable but takes the old slot only when the
        // caller hands it over.
        assert!(!links.is_linked(replacement));
        links.replace_member(*old_id, replacement);
        assert!(links.is_linked(replacement));
    }

    #[test]
    fn replacement_child_bounds_follow_the_relative_delta() {
        let mut links = LinkRegistry::new();
        let group = linked_group_with_entity(&mut links);

        let mut clone = create_linked_duplicate(&group, &mut links);
        transform_subtree(&mut clone, translation(32.0, 0.0, 0.0), &world_bounds(), false)
            .unwrap();

        let clone_id = clone.as_group().unwrap().id();
        let result = update_linked_groups(&group, &mut links, &world_bounds(), |id| {
            (id == clone_id).then_some(&clone)
        })
        .unwrap();

        let (_, replacement) = &result[0];
        assert_eq!(
            replacement.children()[0].logical_bounds(),
            group.children()[0]
                .logical_bounds()
                .translated(DVec3::new(32.0, 0.0, 0.0))
        );
    }

    #[test]
    fn update_of_a_nested_linked_group_uses_only_the_inner_delta() {
        let mut links = LinkRegistry::new();

        let mut outer = Node::new_group(Group::new("outer"), &mut links);
        let mut inner = Node::new_group(Group::new("inner"), &mut links);
        inner.add_child(Node::new_entity(Entity::new()));
        links.link(&inner);
        let inner_id = inner.as_group().unwrap().id();

        let mut inner_clone = create_linked_duplicate(&inner, &mut links);
        let inner_clone_id = inner_clone.as_group().unwrap().id();
        transform_subtree(
            &mut inner_clone,
            translation(0.0, 2.0, 0.0),
            &world_bounds(),
            false,
        )
        .unwrap();

        outer.add_child(inner);

        // Move the inner group (through the outer tree), then propagate
        // from it.
        let inner_ref = outer.find_group_mut(inner_id).unwrap();
        transform_subtree(inner_ref, translation(1.0, 0.0, 0.0), &world_bounds(), false)
            .unwrap();

        let inner_ref = outer.find_group(inner_id).unwrap();
        let result = update_linked_groups(inner_ref, &mut links, &world_bounds(), |id| {
            (id == inner_clone_id).then_some(&inner_clone)
        })
        .unwrap();

        assert_eq!(result.len(), 1);
        let (_, replacement) = &result[0];
        // Only the inner-level delta applies: (0,2,0) ∘ (1,0,0)⁻¹ moves the
        // entity from (1,0,0) to (0,2,0).
        assert_eq!(
            replacement.children()[0].as_entity().unwrap().origin(),
            DVec3::new(0.0, 2.0, 0.0)
        );
        // The outer group is untouched.
        assert_eq!(
            outer.as_group().unwrap().group().transformation(),
            DMat4::IDENTITY
        );
    }

    #[test]
    fn fully_linked_hierarchy_updates_only_the_inner_level() {
        let mut links = LinkRegistry::new();

        let mut outer = Node::new_group(Group::new("outer"), &mut links);
        let mut inner = Node::new_group(Group::new("inner"), &mut links);
        inner.add_child(Node::new_brush(Brush::cuboid(Bounds3::from_half_size(8.0))));
        let inner_id = inner.as_group().unwrap().id();
        outer.add_child(inner);

        let mut outer_clone = create_linked_duplicate(&outer, &mut links);

        // The deep clone's inner group starts as a singleton; link the two
        // inner groups into their own set so both levels are linked.
        let inner_ref = outer.find_group(inner_id).unwrap();
        inner_ref.add_to_link_set(outer_clone.child_mut(0));
        links.link(inner_ref);
        links.link(&outer_clone.children()[0]);
        let inner_clone_id = outer_clone.children()[0].as_group().unwrap().id();

        // Translate the inner group through the live tree, then propagate
        // from it.
        let inner_mut = outer.find_group_mut(inner_id).unwrap();
        transform_subtree(inner_mut, translation(16.0, 0.0, 0.0), &world_bounds(), false)
            .unwrap();

        let inner_ref = outer.find_group(inner_id).unwrap();
        let result = update_linked_groups(inner_ref, &mut links, &world_bounds(), |id| {
            outer_clone.find_group(id)
        })
        .unwrap();

        assert_eq!(result.len(), 1);
        let (old_id, replacement) = &result[0];
        assert_eq!(*old_id, inner_clone_id);
        // Only the inner-level relative delta applies: the brush lands back
        // in the clone's own frame.
        assert_eq!(
            replacement.children()[0].as_brush().unwrap().bounds(),
            Bounds3::from_half_size(8.0)
        );
        // Outer-level transformations are untouched on both sides.
        assert_eq!(
            outer.as_group().unwrap().group().transformation(),
            DMat4::IDENTITY
        );
        assert_eq!(
            outer_clone.as_group().unwrap().group().transformation(),
            DMat4::IDENTITY
        );
    }

    #[test]
    fn update_propagates_whole_subtrees() {
        let mut links = LinkRegistry::new();

        let mut outer = Node::new_group(Group::new("outer"), &mut links);
        let mut inner = Node::new_group(Group::new("inner"), &mut links);
        inner.add_child(Node::new_entity(Entity::new()));
        outer.add_child(inner);
        links.link(&outer);

        let outer_clone = create_linked_duplicate(&outer, &mut links);
        let outer_clone_id = outer_clone.as_group().unwrap().id();

        let result = update_linked_groups(&outer, &mut links, &world_bounds(), |id| {
            (id == outer_clone_id).then_some(&outer_clone)
        })
        .unwrap();

        assert_eq!(result.len(), 1);
        let (_, replacement) = &result[0];
        let new_inner = &replacement.children()[0];
        assert_eq!(
            new_inner.as_group().unwrap().group(),
            outer.children()[0].as_group().unwrap().group()
        );
        assert_eq!(new_inner.children().len(), 1);
        assert_eq!(
            new_inner.children()[0].as_entity().unwrap(),
            outer.children()[0].children()[0].as_entity().unwrap()
        );
    }

    #[test]
    fn non_invertible_transformation_aborts_before_any_member() {
        let mut links = LinkRegistry::new();
        let mut group = linked_group_with_entity(&mut links);
        let clone = create_linked_duplicate(&group, &mut links);
        let clone_id = clone.as_group().unwrap().id();

        let group_node = group.as_group_mut().unwrap();
        let mut value = group_node.group().clone();
        value.transform(DMat4::from_scale(DVec3::new(1.0, 1.0, 0.0)));
        group_node.set_group(value);

        let result = update_linked_groups(&group, &mut links, &world_bounds(), |id| {
            (id == clone_id).then_some(&clone)
        });
        assert_eq!(result.unwrap_err(), UpdateLinkedGroupsError::NotInvertible);
    }

    #[test]
    fn world_bounds_violations_abort_the_whole_update() {
        let mut links = LinkRegistry::new();
        let mut group = linked_group_with_entity(&mut links);

        let mut clone = create_linked_duplicate(&group, &mut links);
        transform_subtree(
            &mut clone,
            translation(8192.0 - 8.0, 0.0, 0.0),
            &world_bounds(),
            false,
        )
        .unwrap();

        // Nudge the source entity; in the clone's frame the content now
        // pokes out of the world.
        transform_subtree(
            group.child_mut(0),
            translation(1.0, 0.0, 0.0),
            &world_bounds(),
            false,
        )
        .unwrap();

        let clone_id = clone.as_group().unwrap().id();
        let result = update_linked_groups(&group, &mut links, &world_bounds(), |id| {
            (id == clone_id).then_some(&clone)
        });
        assert_eq!(result.unwrap_err(), UpdateLinkedGroupsError::WorldBoundsExceeded);
    }

    #[test]
    fn one_failing_member_discards_all_replacements() {
        let mut links = LinkRegistry::new();
        let mut group = linked_group_with_entity(&mut links);

        let near_clone = create_linked_duplicate(&group, &mut links);
        let near_id = near_clone.as_group().unwrap().id();
        let mut far_clone = create_linked_duplicate(&group, &mut links);
        let far_id = far_clone.as_group().unwrap().id();
        transform_subtree(
            &mut far_clone,
            translation(8192.0 - 8.0, 0.0, 0.0),
            &world_bounds(),
            false,
        )
        .unwrap();

        transform_subtree(
            group.child_mut(0),
            translation(1.0, 0.0, 0.0),
            &world_bounds(),
            false,
        )
        .unwrap();

        // The first member would succeed; the second fails, and the whole
        // call reports only the error.
        let result = update_linked_groups(&group, &mut links, &world_bounds(), |id| {
            if id == near_id {
                Some(&near_clone)
            } else if id == far_id {
                Some(&far_clone)
            } else {
                None
            }
        });
        assert_eq!(result.unwrap_err(), UpdateLinkedGroupsError::WorldBoundsExceeded);
    }

    #[test]
    fn brush_content_propagates_like_entities() {
        let mut links = LinkRegistry::new();
        let mut group = Node::new_group(Group::new("name"), &mut links);
        group.add_child(Node::new_brush(Brush::cuboid(Bounds3::from_half_size(16.0))));
        links.link(&group);

        let mut clone = create_linked_duplicate(&group, &mut links);
        transform_subtree(&mut clone, translation(64.0, 0.0, 0.0), &world_bounds(), false)
            .unwrap();

        let clone_id = clone.as_group().unwrap().id();
        let result = update_linked_groups(&group, &mut links, &world_bounds(), |id| {
            (id == clone_id).then_some(&clone)
        })
        .unwrap();

        let (_, replacement) = &result[0];
        assert_eq!(
            replacement.children()[0].as_brush().unwrap().bounds(),
            Bounds3::from_half_size(16.0).translated(DVec3::new(64.0, 0.0, 0.0))
        );
    }

    #[test]
    fn preservation_grid() {
        type Case = (
            &'static [&'static str],          // preserved on source
            &'static [&'static str],          // preserved on target
            &'static [(&'static str, &'static str)], // source properties
            &'static [(&'static str, &'static str)], // target properties
            &'static [(&'static str, &'static str)], // expected on replacement
        );
        let cases: &[Case] = &[
            // properties remain unchanged
            (&[], &[], &[("some_key", "some_value")], &[("some_key", "some_value")], &[("some_key", "some_value")]),
            (&[], &["some_key"], &[("some_key", "some_value")], &[("some_key", "some_value")], &[("some_key", "some_value")]),
            (&["some_key"], &[], &[("some_key", "some_value")], &[("some_key", "some_value")], &[("some_key", "some_value")]),
            (&["some_key"], &["some_key"], &[("some_key", "some_value")], &[("some_key", "some_value")], &[("some_key", "some_value")]),
            // property was added to source
            (&[], &[], &[("some_key", "some_value")], &[], &[("some_key", "some_value")]),
            (&[], &["some_key"], &[("some_key", "some_value")], &[], &[]),
            (&["some_key"], &[], &[("some_key", "some_value")], &[], &[]),
            (&["some_key"], &["some_key"], &[("some_key", "some_value")], &[], &[]),
            // property was changed in source
            (&[], &[], &[("some_key", "other_value")], &[("some_key", "some_value")], &[("some_key", "other_value")]),
            (&["some_key"], &[], &[("some_key", "other_value")], &[("some_key", "some_value")], &[("some_key", "some_value")]),
            (&[], &["some_key"], &[("some_key", "other_value")], &[("some_key", "some_value")], &[("some_key", "some_value")]),
            (&["some_key"], &["some_key"], &[("some_key", "other_value")], &[("some_key", "some_value")], &[("some_key", "some_value")]),
            // property was removed in source
            (&[], &[], &[], &[("some_key", "some_value")], &[]),
            (&["some_key"], &[], &[], &[("some_key", "some_value")], &[("some_key", "some_value")]),
            (&[], &["some_key"], &[], &[("some_key", "some_value")], &[("some_key", "some_value")]),
            (&["some_key"], &["some_key"], &[], &[("some_key", "some_value")], &[("some_key", "some_value")]),
            // numbered property was added to source
            (&[], &[], &[("some_key1", "some_value1"), ("some_key2", "some_value2")], &[("some_key1", "some_value1")], &[("some_key1", "some_value1"), ("some_key2", "some_value2")]),
            (&[], &["some_key"], &[("some_key1", "some_value1"), ("some_key2", "some_value2")], &[("some_key1", "some_value1")], &[("some_key1", "some_value1")]),
            (&["some_key"], &[], &[("some_key1", "some_value1"), ("some_key2", "some_value2")], &[("some_key1", "some_value1")], &[("some_key1", "some_value1")]),
            (&["some_key"], &["some_key"], &[("some_key1", "some_value1"), ("some_key2", "some_value2")], &[("some_key1", "some_value1")], &[("some_key1", "some_value1")]),
            // numbered property was changed in source
            (&[], &[], &[("some_key1", "other_value")], &[("some_key1", "some_value")], &[("some_key1", "other_value")]),
            (&["some_key"], &[], &[("some_key1", "other_value")], &[("some_key1", "some_value")], &[("some_key1", "some_value")]),
            (&[], &["some_key"], &[("some_key1", "other_value")], &[("some_key1", "some_value")], &[("some_key1", "some_value")]),
            (&["some_key"], &["some_key"], &[("some_key1", "other_value")], &[("some_key1", "some_value")], &[("some_key1", "some_value")]),
            // numbered property was removed in source
            (&[], &[], &[("some_key2", "some_value2")], &[("some_key1", "some_value1"), ("some_key2", "some_value2")], &[("some_key2", "some_value2")]),
            (&["some_key"], &[], &[("some_key2", "some_value2")], &[("some_key1", "some_value1"), ("some_key2", "some_value2")], &[("some_key1", "some_value1"), ("some_key2", "some_value2")]),
            (&[], &["some_key"], &[("some_key2", "some_value2")], &[("some_key1", "some_value1"), ("some_key2", "some_value2")], &[("some_key1", "some_value1"), ("some_key2", "some_value2")]),
            (&["some_key"], &["some_key"], &[("some_key2", "some_value2")], &[("some_key1", "some_value1"), ("some_key2", "some_value2")], &[("some_key1", "some_value1"), ("some_key2", "some_value2")]),
        ];

        for (index, (source_preserved, target_preserved, source_properties, target_properties, expected)) in
            cases.iter().enumerate()
        {
            let mut links = LinkRegistry::new();
            let mut group = linked_group_with_entity(&mut links);
            let mut clone = create_linked_duplicate(&group, &mut links);

            {
                let entity = group.child_mut(0).as_entity_mut().unwrap();
                entity.set_properties(
                    source_properties
                        .iter()
                        .map(|(k, v)| EntityProperty::new(*k, *v))
                        .collect(),
                );
                entity.set_preserved_properties(
                    source_preserved.iter().map(|k| (*k).to_owned()).collect(),
                );
            }
            {
                let entity = clone.child_mut(0).as_entity_mut().unwrap();
                entity.set_properties(
                    target_properties
                        .iter()
                        .map(|(k, v)| EntityProperty::new(*k, *v))
                        .collect(),
                );
                entity.set_preserved_properties(
                    target_preserved.iter().map(|k| (*k).to_owned()).collect(),
                );
            }

            let clone_id = clone.as_group().unwrap().id();
            let result = update_linked_groups(&group, &mut links, &world_bounds(), |id| {
                (id == clone_id).then_some(&clone)
            })
            .unwrap();
            assert_eq!(result.len(), 1, "case {index}");

            let new_entity = result[0].1.children()[0].as_entity().unwrap();

            let mut actual: Vec<(String, String)> = new_entity
                .properties()
                .iter()
                .map(|p| (p.key.clone(), p.value.clone()))
                .collect();
            actual.sort();
            let mut wanted: Vec<(String, String)> = expected
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect();
            wanted.sort();
            assert_eq!(actual, wanted, "case {index}");

            let mut actual_preserved = new_entity.preserved_properties().to_vec();
            actual_preserved.sort();
            let mut wanted_preserved: Vec<String> =
                target_preserved.iter().map(|k| (*k).to_owned()).collect();
            wanted_preserved.sort();
            assert_eq!(actual_preserved, wanted_preserved, "case {index}");
        }
    }

    #[test]
    fn create_linked_duplicate_links_both_sides() {
        let mut links = LinkRegistry::new();
        let mut group = Node::new_group(Group::new("name"), &mut links);
        group.add_child(Node::new_entity(Entity::new()));

        let duplicate = create_linked_duplicate(&group, &mut links);
        assert!(group.in_link_set_with(&duplicate));
        assert!(links.is_linked(&group));
        assert!(links.is_linked(&duplicate));
        assert_eq!(links.linked_groups(&group).len(), 2);
        assert_eq!(duplicate.children().len(), 1);
    }

    #[test]
    #[should_panic(expected = "requires a linked group")]
    fn update_of_an_unlinked_group_panics() {
        let mut links = LinkRegistry::new();
        let group = Node::new_group(Group::new("name"), &mut links);
        let _ = update_linked_groups(&group, &mut links, &world_bounds(), |_| None);
    }

    #[test]
    #[should_panic(expected = "expected a group node")]
    fn update_of_a_non_group_panics() {
        let mut links = LinkRegistry::new();
        let node = Node::new_entity(Entity::new());
        let _ = update_linked_groups(&node, &mut links, &world_bounds(), |_| None);
    }

    #[test]
    #[should_panic(expected = "linked member is not resolvable")]
    fn unresolvable_member_panics() {
        let mut links = LinkRegistry::new();
        let group = linked_group_with_entity(&mut links);
        let _clone = create_linked_duplicate(&group, &mut links);

        // The resolver has lost track of the clone.
        let _ = update_linked_groups(&group, &mut links, &world_bounds(), |_| None);
    }
}
