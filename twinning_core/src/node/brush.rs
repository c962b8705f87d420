// Copyright 2026 the Twinning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brush payload: a convex solid with a fallible geometric transform.

use glam::{DMat4, DVec3};
use thiserror::Error;

use crate::bounds::Bounds3;

/// An error produced when transforming or constructing a brush.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BrushError {
    /// Fewer vertices than the smallest solid requires.
    #[error("brush has too few vertices to form a solid")]
    TooFewVertices,
    /// A vertex coordinate became infinite or NaN.
    #[error("brush geometry is not finite")]
    NonFiniteGeometry,
    /// The solid collapsed to zero extent on at least one axis.
    #[error("brush geometry is degenerate")]
    DegenerateGeometry,
}

/// The value payload of a brush node: a convex solid given by its vertex
/// set, plus an alignment anchor for surface data.
///
/// The anchor is the auxiliary datum governed by the *lock* flag of
/// [`transform`](Self::transform): when locked, it follows the geometry;
/// when unlocked, it stays where it is (surface data keeps its world
/// position, the way texture alignment behaves in the editor).
#[derive(Clone, Debug, PartialEq)]
pub struct Brush {
    vertices: Vec<DVec3>,
    alignment: DVec3,
}

impl Brush {
    /// Creates an axis-aligned cuboid brush spanning `bounds`, with the
    /// alignment anchor at the minimum corner.
    #[must_use]
    pub fn cuboid(bounds: Bounds3) -> Self {
        let (lo, hi) = (bounds.min, bounds.max);
        let vertices = vec![
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
            DVec3::new(hi.x, hi.y, hi.z),
        ];
        Self {
            vertices,
            alignment: lo,
        }
    }

    /// Creates a brush from an arbitrary convex vertex set.
    ///
    /// The alignment anchor starts at the minimum corner of the vertex
    /// bounds. Fails if the set has fewer than four vertices or does not
    /// enclose a volume.
    pub fn from_vertices(vertices: Vec<DVec3>) -> Result<Self, BrushError> {
        if vertices.len() < 4 {
            return Err(BrushError::TooFewVertices);
        }
        let bounds = validate(&vertices)?;
        Ok(Self {
            vertices,
            alignment: bounds.min,
        })
    }

    /// Returns the vertices of the solid.
    #[must_use]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the alignment anchor.
    #[inline]
    #[must_use]
    pub fn alignment(&self) -> DVec3 {
        self.alignment
    }

    /// Returns the vertex bounds of the solid.
    #[must_use]
    pub fn bounds(&self) -> Bounds3 {
        Bounds3::from_points(&self.vertices).expect("brush has no vertices")
    }

    /// Applies `transformation` to the solid.
    ///
    /// Fails without modifying the brush if the transformed geometry is not
    /// finite or collapses to zero extent. The alignment anchor follows the
    /// geometry only when `lock_alignment` is set.
    ///
    /// `world_bounds` is part of the transform contract shared with the
    /// node-tree collaborators; this vertex representation never needs it,
    /// and containment is validated separately by the caller.
    pub fn transform(
        &mut self,
        _world_bounds: &Bounds3,
        transformation: DMat4,
        lock_alignment: bool,
    ) -> Result<(), BrushError> {
        let vertices: Vec<DVec3> = self
            .vertices
            .iter()
            .map(|v| transformation.transform_point3(*v))
            .collect();
        validate(&vertices)?;

        self.vertices = vertices;
        if lock_alignment {
            self.alignment = transformation.transform_point3(self.alignment);
        }
        Ok(())
    }
}

/// Checks that a vertex set is finite and encloses a volume, returning its
/// bounds.
fn validate(vertices: &[DVec3]) -> Result<Bounds3, BrushError> {
    if !vertices.iter().all(|v| v.is_finite()) {
        return Err(BrushError::NonFiniteGeometry);
    }
    let bounds = Bounds3::from_points(vertices).ok_or(BrushError::TooFewVertices)?;
    if bounds.size().min_element() <= 0.0 {
        return Err(BrushError::DegenerateGeometry);
    }
    Ok(bounds)
}
