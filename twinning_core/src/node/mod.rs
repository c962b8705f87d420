// Copyright 2026 the Twinning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene-tree data model.
//!
//! A *node* is one element of the scene tree. Each node has:
//!
//! - A content payload — one of the closed kind set {world, layer, group,
//!   entity, brush}, modelled as the [`NodeContent`] sum type so that every
//!   dispatch site is an exhaustive `match`.
//! - An owned, ordered child list. Trees are built by moving nodes into
//!   their parents; there is no shared ownership anywhere in the tree. The
//!   only shared state is the link-set record a group node names by id (see
//!   [`link`](crate::link)).
//! - A lazily revalidated bounds pair: *logical* bounds (definition boxes
//!   for entities) and *physical* bounds (what is actually occupied). Both
//!   are cached behind a validity flag and recomputed on read; any mutation
//!   reached through the tree clears the caches along the access path.
//!
//! Kind rules restrict what a node may contain: the world holds layers,
//! layers and groups hold groups/entities/brushes, entities hold brushes,
//! brushes are leaves. [`Node::add_child`] enforces this.

mod brush;
mod entity;
mod group;

use core::fmt;
use std::cell::Cell;

use glam::{DMat4, DVec3};

pub use brush::{Brush, BrushError};
pub use entity::{Entity, EntityProperty};
pub use group::{EditState, Group, GroupNode};

use crate::bounds::Bounds3;
use crate::link::{GroupId, LinkRegistry};

/// The closed set of node kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The world root.
    World,
    /// A layer partitioning the world.
    Layer,
    /// A group of nodes edited as one.
    Group,
    /// A point of interest with keyed properties.
    Entity,
    /// A convex solid.
    Brush,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::World => "world",
            Self::Layer => "layer",
            Self::Group => "group",
            Self::Entity => "entity",
            Self::Brush => "brush",
        })
    }
}

/// The value payload of a layer node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    name: String,
}

impl Layer {
    /// Creates a layer value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name of the layer.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The kind-specific payload of a [`Node`].
#[derive(Debug)]
pub enum NodeContent {
    /// The world root. Carries no payload of its own.
    World,
    /// A layer.
    Layer(Layer),
    /// A group, including its link-set identities and edit state.
    Group(GroupNode),
    /// An entity.
    Entity(Entity),
    /// A brush.
    Brush(Brush),
}

/// The cached bounds pair of a node.
#[derive(Clone, Copy, Debug)]
struct CachedBounds {
    logical: Bounds3,
    physical: Bounds3,
}

/// One node of the scene tree: a content payload plus owned children.
#[derive(Debug)]
pub struct Node {
    content: NodeContent,
    children: Vec<Node>,
    cached_bounds: Cell<Option<CachedBounds>>,
}

impl Node {
    fn with_content(content: NodeContent) -> Self {
        Self {
            content,
            children: Vec::new(),
            cached_bounds: Cell::new(None),
        }
    }

    /// Creates a world root node.
    #[must_use]
    pub fn new_world() -> Self {
        Self::with_content(NodeContent::World)
    }

    /// Creates a layer node.
    #[must_use]
    pub fn new_layer(name: impl Into<String>) -> Self {
        Self::with_content(NodeContent::Layer(Layer::new(name)))
    }

    /// Creates a group node.
    ///
    /// The registry allocates the node's [`GroupId`] and a fresh link-set
    /// record private to this node, so every new group starts as a
    /// singleton.
    #[must_use]
    pub fn new_group(group: Group, links: &mut LinkRegistry) -> Self {
        let link_set = links.create_set();
        let id = links.allocate_group_id();
        Self::with_content(NodeContent::Group(GroupNode::new(group, link_set, id)))
    }

    /// Creates an entity node.
    #[must_use]
    pub fn new_entity(entity: Entity) -> Self {
        Self::with_content(NodeContent::Entity(entity))
    }

    /// Creates a brush node.
    #[must_use]
    pub fn new_brush(brush: Brush) -> Self {
        Self::with_content(NodeContent::Brush(brush))
    }

    /// Returns the kind of this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match &self.content {
            NodeContent::World => NodeKind::World,
            NodeContent::Layer(_) => NodeKind::Layer,
            NodeContent::Group(_) => NodeKind::Group,
            NodeContent::Entity(_) => NodeKind::Entity,
            NodeContent::Brush(_) => NodeKind::Brush,
        }
    }

    /// Returns the content payload for exhaustive dispatch.
    #[must_use]
    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    /// Returns the layer payload, if this is a layer node.
    #[must_use]
    pub fn as_layer(&self) -> Option<&Layer> {
        match &self.content {
            NodeContent::Layer(layer) => Some(layer),
            _ => None,
        }
    }

    /// Returns the group payload, if this is a group node.
    #[must_use]
    pub fn as_group(&self) -> Option<&GroupNode> {
        match &self.content {
            NodeContent::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Returns the mutable group payload, if this is a group node.
    #[must_use]
    pub fn as_group_mut(&mut self) -> Option<&mut GroupNode> {
        match &mut self.content {
            NodeContent::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Returns the entity payload, if this is an entity node.
    #[must_use]
    pub fn as_entity(&self) -> Option<&Entity> {
        match &self.content {
            NodeContent::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    /// Returns the mutable entity payload, if this is an entity node.
    ///
    /// Mutation may move the entity, so the node's bounds cache is cleared.
    #[must_use]
    pub fn as_entity_mut(&mut self) -> Option<&mut Entity> {
        match &mut self.content {
            NodeContent::Entity(entity) => {
                self.cached_bounds.set(None);
                Some(entity)
            }
            _ => None,
        }
    }

    /// Returns the brush payload, if this is a brush node.
    #[must_use]
    pub fn as_brush(&self) -> Option<&Brush> {
        match &self.content {
            NodeContent::Brush(brush) => Some(brush),
            _ => None,
        }
    }

    /// Returns the mutable brush payload, if this is a brush node.
    ///
    /// Mutation may move the solid, so the node's bounds cache is cleared.
    #[must_use]
    pub fn as_brush_mut(&mut self) -> Option<&mut Brush> {
        match &mut self.content {
            NodeContent::Brush(brush) => {
                self.cached_bounds.set(None);
                Some(brush)
            }
            _ => None,
        }
    }

    /// Replaces the entity payload, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if this is not an entity node.
    pub fn set_entity(&mut self, entity: Entity) -> Entity {
        match &mut self.content {
            NodeContent::Entity(current) => {
                self.cached_bounds.set(None);
                core::mem::replace(current, entity)
            }
            _ => panic!("expected an entity node, found a {} node", self.kind()),
        }
    }

    /// Replaces the brush payload, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if this is not a brush node.
    pub fn set_brush(&mut self, brush: Brush) -> Brush {
        match &mut self.content {
            NodeContent::Brush(current) => {
                self.cached_bounds.set(None);
                core::mem::replace(current, brush)
            }
            _ => panic!("expected a brush node, found a {} node", self.kind()),
        }
    }

    /// Returns the group payload, panicking for other kinds.
    pub(crate) fn expect_group(&self) -> &GroupNode {
        match &self.content {
            NodeContent::Group(group) => group,
            _ => panic!("expected a group node, found a {} node", self.kind()),
        }
    }

    /// Returns the mutable group payload, panicking for other kinds.
    pub(crate) fn expect_group_mut(&mut self) -> &mut GroupNode {
        let kind = self.kind();
        match &mut self.content {
            NodeContent::Group(group) => group,
            _ => panic!("expected a group node, found a {kind} node"),
        }
    }

    // -- Children --

    /// Returns the children in order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Returns a mutable borrow of the child at `index`, clearing this
    /// node's bounds cache (the borrow is presumed to mutate). Chaining
    /// `child_mut` calls therefore invalidates every node along the path.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn child_mut(&mut self, index: usize) -> &mut Node {
        self.cached_bounds.set(None);
        &mut self.children[index]
    }

    /// Mutable access to all children for in-crate co-walks.
    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        self.cached_bounds.set(None);
        &mut self.children
    }

    /// Returns whether `child` may become a child of this node under the
    /// kind rules.
    #[must_use]
    pub fn can_add_child(&self, child: &Self) -> bool {
        match self.kind() {
            NodeKind::World => child.kind() == NodeKind::Layer,
            NodeKind::Layer | NodeKind::Group => matches!(
                child.kind(),
                NodeKind::Group | NodeKind::Entity | NodeKind::Brush
            ),
            NodeKind::Entity => child.kind() == NodeKind::Brush,
            NodeKind::Brush => false,
        }
    }

    /// Appends `child`.
    ///
    /// # Panics
    ///
    /// Panics if the kind rules forbid the containment.
    pub fn add_child(&mut self, child: Self) {
        assert!(
            self.can_add_child(&child),
            "a {} node cannot contain a {} node",
            self.kind(),
            child.kind()
        );
        self.cached_bounds.set(None);
        self.children.push(child);
    }

    /// Appends all of `children` in order.
    ///
    /// # Panics
    ///
    /// Panics if the kind rules forbid any of the containments.
    pub fn append_children(&mut self, children: Vec<Self>) {
        for child in children {
            self.add_child(child);
        }
    }

    /// Replaces the child at `index`, returning the old child. This is the
    /// splice operation used when applying a replacement plan.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the kind rules forbid the
    /// containment.
    pub fn replace_child(&mut self, index: usize, child: Self) -> Self {
        assert!(
            self.can_add_child(&child),
            "a {} node cannot contain a {} node",
            self.kind(),
            child.kind()
        );
        self.cached_bounds.set(None);
        core::mem::replace(&mut self.children[index], child)
    }

    // -- Bounds --

    /// Returns the logical bounds: definition boxes for entities, vertex
    /// bounds for brushes, the union of child logical bounds for containers
    /// (the point box at the origin when there are no children).
    #[must_use]
    pub fn logical_bounds(&self) -> Bounds3 {
        self.validated_bounds().logical
    }

    /// Returns the physical bounds: the space actually occupied. Differs
    /// from the logical bounds only through children (an entity's own box
    /// is its definition box either way).
    #[must_use]
    pub fn physical_bounds(&self) -> Bounds3 {
        self.validated_bounds().physical
    }

    fn validated_bounds(&self) -> CachedBounds {
        if let Some(cached) = self.cached_bounds.get() {
            return cached;
        }
        let computed = self.compute_bounds();
        self.cached_bounds.set(Some(computed));
        computed
    }

    fn compute_bounds(&self) -> CachedBounds {
        match &self.content {
            NodeContent::Entity(entity) if self.children.is_empty() => {
                let bounds = entity.definition_bounds();
                CachedBounds {
                    logical: bounds,
                    physical: bounds,
                }
            }
            NodeContent::Brush(brush) => {
                let bounds = brush.bounds();
                CachedBounds {
                    logical: bounds,
                    physical: bounds,
                }
            }
            _ => {
                let mut logical: Option<Bounds3> = None;
                let mut physical: Option<Bounds3> = None;
                for child in &self.children {
                    let child_bounds = child.validated_bounds();
                    logical = Some(match logical {
                        Some(bounds) => bounds.union(&child_bounds.logical),
                        None => child_bounds.logical,
                    });
                    physical = Some(match physical {
                        Some(bounds) => bounds.union(&child_bounds.physical),
                        None => child_bounds.physical,
                    });
                }
                CachedBounds {
                    logical: logical.unwrap_or(Bounds3::ZERO),
                    physical: physical.unwrap_or(Bounds3::ZERO),
                }
            }
        }
    }

    /// Returns whether `other`'s logical bounds lie entirely inside this
    /// node's logical bounds.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.logical_bounds().contains(&other.logical_bounds())
    }

    /// Returns whether this node's logical bounds overlap `other`'s.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.logical_bounds().intersects(&other.logical_bounds())
    }

    /// Collects every node in this subtree whose logical bounds contain
    /// `point`, in depth-first pre-order.
    pub fn find_nodes_containing<'a>(&'a self, point: DVec3, result: &mut Vec<&'a Self>) {
        if self.logical_bounds().contains_point(point) {
            result.push(self);
        }
        for child in &self.children {
            child.find_nodes_containing(point, result);
        }
    }

    // -- Cloning --

    /// Clones this node without its children.
    ///
    /// A cloned group keeps its [`Group`] value but receives a fresh
    /// [`GroupId`] and a fresh private link-set record — clones start as
    /// singletons and never inherit a persistent id or edit state.
    #[must_use]
    pub fn clone_node(&self, links: &mut LinkRegistry) -> Self {
        let content = match &self.content {
            NodeContent::World => NodeContent::World,
            NodeContent::Layer(layer) => NodeContent::Layer(layer.clone()),
            NodeContent::Group(group) => {
                let link_set = links.create_set();
                let id = links.allocate_group_id();
                NodeContent::Group(GroupNode::new(group.group().clone(), link_set, id))
            }
            NodeContent::Entity(entity) => NodeContent::Entity(entity.clone()),
            NodeContent::Brush(brush) => NodeContent::Brush(brush.clone()),
        };
        Self::with_content(content)
    }

    /// Clones this node and its whole subtree. Every cloned group starts as
    /// a singleton, like [`clone_node`](Self::clone_node).
    #[must_use]
    pub fn clone_recursively(&self, links: &mut LinkRegistry) -> Self {
        let mut clone = self.clone_node(links);
        clone.children = self
            .children
            .iter()
            .map(|child| child.clone_recursively(links))
            .collect();
        clone
    }

    // -- Group lookup and link-set surface --

    /// Finds the group node with the given id in this subtree.
    #[must_use]
    pub fn find_group(&self, id: GroupId) -> Option<&Self> {
        if matches!(&self.content, NodeContent::Group(group) if group.id() == id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_group(id))
    }

    /// Finds the group node with the given id in this subtree, clearing the
    /// bounds caches along the path (the borrow is presumed to mutate).
    #[must_use]
    pub fn find_group_mut(&mut self, id: GroupId) -> Option<&mut Self> {
        if matches!(&self.content, NodeContent::Group(group) if group.id() == id) {
            self.cached_bounds.set(None);
            return Some(self);
        }
        for child in &mut self.children {
            if child.find_group(id).is_some() {
                self.cached_bounds.set(None);
                return child.find_group_mut(id);
            }
        }
        None
    }

    /// Returns whether this node and `other` are group nodes sharing the
    /// same link-set record. A group node is always in its own link set
    /// with itself; for non-group nodes this is `false`.
    #[must_use]
    pub fn in_link_set_with(&self, other: &Self) -> bool {
        match (&self.content, &other.content) {
            (NodeContent::Group(a), NodeContent::Group(b)) => a.link_set() == b.link_set(),
            _ => false,
        }
    }

    /// Makes `other` adopt this group's link-set record.
    ///
    /// Membership lists are untouched: `other` joins as *linkable*, not
    /// linked. **Sharp edge:** if `other` was linked under its previous
    /// record, its id silently stays in that record's member list — the old
    /// set's members still name it, while `other` itself now answers for
    /// the new set. Callers moving a linked group between sets must
    /// [`unlink`](crate::link::LinkRegistry::unlink) it first.
    ///
    /// # Panics
    ///
    /// Panics if either node is not a group.
    pub fn add_to_link_set(&self, other: &mut Self) {
        let link_set = self.expect_group().link_set();
        other.expect_group_mut().set_link_set(link_set);
    }
}

/// Applies `transformation` to a whole subtree in place: group
/// transformations are composed, entity placements moved, brushes
/// transformed with the given alignment lock. Bounds caches are cleared
/// along the way.
///
/// Fails fast on the first brush whose geometry cannot be transformed; the
/// subtree may then be partially transformed, so callers treat a failure as
/// aborting the surrounding edit.
pub fn transform_subtree(
    node: &mut Node,
    transformation: DMat4,
    world_bounds: &Bounds3,
    lock_alignment: bool,
) -> Result<(), BrushError> {
    node.cached_bounds.set(None);
    match &mut node.content {
        NodeContent::World | NodeContent::Layer(_) => {}
        NodeContent::Group(group) => group.group_mut().transform(transformation),
        NodeContent::Entity(entity) => entity.transform(transformation),
        NodeContent::Brush(brush) => {
            brush.transform(world_bounds, transformation, lock_alignment)?;
        }
    }
    for child in &mut node.children {
        transform_subtree(child, transformation, world_bounds, lock_alignment)?;
    }
    Ok(())
}
