// Copyright 2026 the Twinning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linked-group synchronization core for scene-graph editors.
//!
//! `twinning_core` keeps structurally identical subtrees — *linked groups* —
//! in sync under independent local edits. Each linked group carries its own
//! accumulated transformation; editing one member's content and then
//! propagating rewrites every other member's content in that member's own
//! frame, while per-property override declarations keep locally pinned
//! entity values in place.
//!
//! # Architecture
//!
//! The crate is organized around a pure replacement-plan builder:
//!
//! ```text
//!   editor command mutates a group's content or transform
//!       │
//!       ▼
//!   update_linked_groups(source) ──► per linked member M:
//!       relative = M.transformation ∘ source.transformation⁻¹
//!       clone-and-transform source content ──► preserve M's pinned
//!       entity properties ──► replacement node for M
//!       │
//!       ▼
//!   caller splices replacements into the tree and re-keys membership
//! ```
//!
//! **[`node`]** — The owned scene tree: a closed kind set (world, layer,
//! group, entity, brush) as a sum type with exhaustive dispatch, ordered
//! child ownership, and lazily revalidated cached bounds.
//!
//! **[`link`]** — The link-set registry: central membership records
//! addressed by plain id handles, so group nodes share membership without
//! shared ownership.
//!
//! **[`propagate`]** — The update propagator with its recursive
//! clone-and-transform and property-preservation passes. All-or-nothing:
//! any failure aborts the entire update with no effect on the live tree.
//!
//! **[`bounds`]** — The axis-aligned box used for world-bounds validation
//! and node bounds.
//!
//! Everything runs synchronously on the caller's thread; the library
//! installs no logging subscriber and reads no configuration. Precondition
//! violations (linking a linked group, propagating from an unlinked one,
//! stale handles) are panics, not recoverable errors.

pub mod bounds;
pub mod link;
pub mod node;
pub mod propagate;
