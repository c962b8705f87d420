// Copyright 2026 the Twinning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity-property preservation between a cloned subtree and the subtree it
//! replaces.

use crate::node::{Entity, Node};

/// Walks `cloned` and `corresponding` in lockstep by child position and
/// re-applies locally pinned entity properties to the clones.
///
/// The two lists are assumed structurally equal; a positional counterpart
/// of an unexpected kind is silently skipped. Group pairs recurse, entity
/// pairs merge, all other pairs carry no property semantics.
pub(super) fn preserve_entity_properties(cloned: &mut [Node], corresponding: &[Node]) {
    for (cloned_node, corresponding_node) in cloned.iter_mut().zip(corresponding) {
        if cloned_node.as_group().is_some() && corresponding_node.as_group().is_some() {
            preserve_entity_properties(cloned_node.children_mut(), corresponding_node.children());
        } else if let Some(corresponding_entity) = corresponding_node.as_entity() {
            if let Some(cloned_entity) = cloned_node.as_entity_mut() {
                preserve_properties(cloned_entity, corresponding_entity);
            }
        }
    }
}

/// Applies the preservation rule to one entity pair.
///
/// The sorted, deduplicated union of both sides' preserved keys decides
/// which keys are re-applied from `corresponding`; the cloned entity's own
/// declaration is set to `corresponding`'s list, not the union. For every
/// key in the union, the cloned entity drops the key and all its numbered
/// variants, then takes back whatever `corresponding` stores under the
/// literal key and its numbered variants. Everything outside the union
/// keeps the propagated (source) value.
fn preserve_properties(cloned: &mut Entity, corresponding: &Entity) {
    if cloned.preserved_properties().is_empty() && corresponding.preserved_properties().is_empty()
    {
        return;
    }

    let mut all_preserved = cloned.preserved_properties().to_vec();
    all_preserved.extend_from_slice(corresponding.preserved_properties());
    all_preserved.sort();
    all_preserved.dedup();

    cloned.set_preserved_properties(corresponding.preserved_properties().to_vec());

    for key in &all_preserved {
        // Re-adding a key can change the property order.
        cloned.remove_property(key);
        if let Some(value) = corresponding.property(key) {
            cloned.add_or_update_property(key, value);
        }

        cloned.remove_numbered_properties(key);
        for numbered in corresponding.numbered_properties(key) {
            cloned.add_or_update_property(&numbered.key, &numbered.value);
        }
    }
}
