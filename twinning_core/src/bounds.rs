// Copyright 2026 the Twinning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned 3-D bounding box.
//!
//! This type covers the subset of box algebra that `twinning_core` actually
//! needs (union, containment, intersection, translation) without pulling in a
//! collision or spatial-index crate. Coordinates are `f64`, matching the
//! editor's model space.

use glam::DVec3;

/// An axis-aligned bounding box with inclusive faces.
///
/// A box is valid when `min <= max` on every axis. A box whose `min` equals
/// its `max` is a point; such boxes arise as the bounds of empty container
/// nodes and still participate in union and containment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3 {
    /// The corner with the smallest coordinates.
    pub min: DVec3,
    /// The corner with the largest coordinates.
    pub max: DVec3,
}

impl Bounds3 {
    /// The point box at the origin.
    pub const ZERO: Self = Self {
        min: DVec3::ZERO,
        max: DVec3::ZERO,
    };

    /// Creates a box from its extreme corners.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` on any axis.
    #[must_use]
    pub fn new(min: DVec3, max: DVec3) -> Self {
        assert!(
            min.cmple(max).all(),
            "invalid bounds: min {min:?} exceeds max {max:?}"
        );
        Self { min, max }
    }

    /// Creates a box centred at the origin extending `half_size` in every
    /// direction.
    ///
    /// # Panics
    ///
    /// Panics if `half_size` is negative.
    #[must_use]
    pub fn from_half_size(half_size: f64) -> Self {
        assert!(half_size >= 0.0, "negative half size: {half_size}");
        Self {
            min: DVec3::splat(-half_size),
            max: DVec3::splat(half_size),
        }
    }

    /// Returns the smallest box containing all the given points, or `None`
    /// if the slice is empty.
    #[must_use]
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min = min.min(*p);
            max = max.max(*p);
        }
        Some(Self { min, max })
    }

    /// Returns the centre of the box.
    #[inline]
    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the edge lengths of the box.
    #[inline]
    #[must_use]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the smallest box containing both `self` and `other`.
    #[inline]
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns whether `point` lies inside the box (faces inclusive).
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: DVec3) -> bool {
        self.min.cmple(point).all() && point.cmple(self.max).all()
    }

    /// Returns whether `other` lies entirely inside the box (faces
    /// inclusive).
    #[inline]
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.min.cmple(other.min).all() && other.max.cmple(self.max).all()
    }

    /// Returns whether the boxes overlap (shared faces count).
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.cmple(other.max).all() && other.min.cmple(self.max).all()
    }

    /// Returns the box moved by `offset`.
    #[inline]
    #[must_use]
    pub fn translated(&self, offset: DVec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Is every coordinate of this box [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl Default for Bounds3 {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}
