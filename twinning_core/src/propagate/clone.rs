// Copyright 2026 the Twinning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive clone-and-transform of a group's content.

use glam::DMat4;

use crate::bounds::Bounds3;
use crate::link::LinkRegistry;
use crate::node::{Node, NodeContent};

use super::UpdateLinkedGroupsError;

/// Clones the children of `node`, applying `transformation` to every cloned
/// node and validating each against `world_bounds`.
///
/// Dispatch is by kind: world and layer nodes are invalid inside a group's
/// content and abort with a structural violation; cloned groups compose the
/// transformation onto their group value and start as fresh singletons;
/// entities move their placement; brushes transform their solid, which can
/// itself fail. Every freshly produced node must stay inside `world_bounds`.
///
/// The first failure anywhere in the subtree aborts the whole clone; no
/// partial subtree is ever returned.
pub(super) fn clone_and_transform_children(
    node: &Node,
    world_bounds: &Bounds3,
    transformation: DMat4,
    links: &mut LinkRegistry,
) -> Result<Vec<Node>, UpdateLinkedGroupsError> {
    let mut result = Vec::with_capacity(node.children().len());

    for child in node.children() {
        let mut new_child = match child.content() {
            NodeContent::World | NodeContent::Layer(_) => {
                return Err(UpdateLinkedGroupsError::StructuralViolation(child.kind()));
            }
            NodeContent::Group(group_node) => {
                let mut group = group_node.group().clone();
                group.transform(transformation);
                Node::new_group(group, links)
            }
            NodeContent::Entity(entity) => {
                let mut entity = entity.clone();
                entity.transform(transformation);
                Node::new_entity(entity)
            }
            NodeContent::Brush(brush) => {
                let mut brush = brush.clone();
                brush.transform(world_bounds, transformation, true)?;
                Node::new_brush(brush)
            }
        };

        if !world_bounds.contains(&new_child.logical_bounds()) {
            return Err(UpdateLinkedGroupsError::WorldBoundsExceeded);
        }

        let new_children =
            clone_and_transform_children(child, world_bounds, transformation, links)?;
        new_child.append_children(new_children);
        result.push(new_child);
    }

    Ok(result)
}
