// Copyright 2026 the Twinning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity payload: placement, keyed properties, and preservation markers.

use glam::{DMat4, DVec3};

use crate::bounds::Bounds3;

/// Half edge length of the definition box used for the bounds of an entity
/// without children.
const DEFINITION_HALF_SIZE: f64 = 8.0;

/// One key/value pair of an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityProperty {
    /// Property key.
    pub key: String,
    /// Property value.
    pub value: String,
}

impl EntityProperty {
    /// Creates a property from a key and a value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The value payload of an entity node.
///
/// An entity is a point of interest with a placement and an ordered list of
/// keyed properties. Keys declared *preserved* are pinned to their local
/// values during linked-group updates; preservation extends to *numbered*
/// variants of a key, i.e. the key followed by decimal digits (`target2` is
/// a numbered variant of `target`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entity {
    origin: DVec3,
    properties: Vec<EntityProperty>,
    preserved_properties: Vec<String>,
}

impl Entity {
    /// Creates an entity at the origin with no properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the placement of the entity.
    #[inline]
    #[must_use]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Sets the placement of the entity.
    pub fn set_origin(&mut self, origin: DVec3) {
        self.origin = origin;
    }

    /// Applies `transformation` to the placement.
    pub fn transform(&mut self, transformation: DMat4) {
        self.origin = transformation.transform_point3(self.origin);
    }

    /// Returns the properties in their stored order.
    #[must_use]
    pub fn properties(&self) -> &[EntityProperty] {
        &self.properties
    }

    /// Replaces all properties.
    pub fn set_properties(&mut self, properties: Vec<EntityProperty>) {
        self.properties = properties;
    }

    /// Returns the value stored under exactly `key`, if any.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Sets the value of `key`, appending the property if it is not present.
    pub fn add_or_update_property(&mut self, key: &str, value: &str) {
        match self.properties.iter_mut().find(|p| p.key == key) {
            Some(property) => value.clone_into(&mut property.value),
            None => self.properties.push(EntityProperty::new(key, value)),
        }
    }

    /// Removes the property stored under exactly `key`, if present.
    ///
    /// This can change the order of the remaining properties relative to a
    /// later re-add of the same key.
    pub fn remove_property(&mut self, key: &str) {
        self.properties.retain(|p| p.key != key);
    }

    /// Returns copies of all properties whose key is a numbered variant of
    /// `base`, in stored order.
    #[must_use]
    pub fn numbered_properties(&self, base: &str) -> Vec<EntityProperty> {
        self.properties
            .iter()
            .filter(|p| is_numbered_variant(&p.key, base))
            .cloned()
            .collect()
    }

    /// Removes all properties whose key is a numbered variant of `base`.
    pub fn remove_numbered_properties(&mut self, base: &str) {
        self.properties.retain(|p| !is_numbered_variant(&p.key, base));
    }

    /// Returns the keys declared as preserved on this entity.
    #[must_use]
    pub fn preserved_properties(&self) -> &[String] {
        &self.preserved_properties
    }

    /// Replaces the declared preserved keys.
    pub fn set_preserved_properties(&mut self, keys: Vec<String>) {
        self.preserved_properties = keys;
    }

    /// Returns the definition box of the entity: a fixed-size cube centred
    /// on the placement. Entities with children derive their bounds from the
    /// children instead.
    #[must_use]
    pub fn definition_bounds(&self) -> Bounds3 {
        Bounds3::new(
            self.origin - DVec3::splat(DEFINITION_HALF_SIZE),
            self.origin + DVec3::splat(DEFINITION_HALF_SIZE),
        )
    }
}

/// Returns whether `key` is `base` followed by one or more decimal digits.
fn is_numbered_variant(key: &str, base: &str) -> bool {
    key.strip_prefix(base)
        .is_some_and(|suffix| !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()))
}
