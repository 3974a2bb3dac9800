// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Relation metadata derived from an entity's fields.
//!
//! # Relation scalars
//!
//! A relation scalar is a local field named in some relation's
//! `relation_from_fields`:
//!
//! ```text
//! model Post {
//!   authorId Int                                                // relation scalar
//!   author   User @relation(fields: [authorId], references: [id])
//! }
//! ```
//!
//! Relation scalars never surface on create or update inputs (the relation
//! carries the write) and take their nullability on the entity from the
//! relations they back.

use std::collections::HashMap;

use crate::{
    error::{Error, Result},
    schema::{Entity, Field, Schema}
};

/// Map from relation scalar name to the relation fields it backs.
///
/// A scalar backs more than one relation only in degenerate schemas, so the
/// values are usually single-element lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationScalars {
    backs: HashMap<String, Vec<String>>
}

impl RelationScalars {
    /// Build the map for an entity's fields.
    #[must_use]
    pub fn build(fields: &[Field]) -> Self {
        let mut backs: HashMap<String, Vec<String>> = HashMap::new();
        for relation in fields.iter().filter(|f| !f.relation_from_fields.is_empty()) {
            for scalar in &relation.relation_from_fields {
                let relations = backs.entry(scalar.clone()).or_default();
                if !relations.contains(&relation.name) {
                    relations.push(relation.name.clone());
                }
            }
        }
        Self { backs }
    }

    /// Build the map for an entity.
    #[must_use]
    pub fn of(entity: &Entity) -> Self {
        Self::build(&entity.fields)
    }

    /// Check whether the named field backs at least one relation.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.backs.contains_key(name)
    }

    /// Relation field names backed by the scalar, in declared order.
    #[must_use]
    pub fn relations(&self, name: &str) -> &[String] {
        self.backs.get(name).map_or(&[], Vec::as_slice)
    }

    /// Number of relation scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backs.len()
    }

    /// Check whether the entity has no relation scalars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backs.is_empty()
    }
}

/// Fields of the related entity a nested connect can identify a record by.
///
/// Returns, deduplicated and in this order: the target fields named by
/// `relation_to_fields`, the target's id fields, the target's unique fields.
///
/// # Errors
///
/// - [`Error::NotARelation`] when `field` is not a relation
/// - [`Error::RelatedEntityNotFound`] when the target entity is unknown or ignored
/// - [`Error::MissingForeignKeys`] when `relation_to_fields` is empty
/// - [`Error::ForeignKeyNotFound`] when a referenced key is not on the target
pub fn connect_input_fields<'s>(
    entity: &Entity,
    field: &Field,
    schema: &'s Schema
) -> Result<Vec<&'s Field>> {
    if !field.is_relation() {
        return Err(Error::NotARelation {
            field: field.name.clone()
        });
    }

    let related = schema
        .generatable_entity(&field.type_name)
        .map_err(|unresolved| unresolved.at(entity, field))?;

    if field.relation_to_fields.is_empty() {
        return Err(Error::MissingForeignKeys {
            field: field.name.clone()
        });
    }

    let mut fields: Vec<&Field> = Vec::new();
    for key in &field.relation_to_fields {
        let key_field = related.field(key).ok_or_else(|| Error::ForeignKeyNotFound {
            entity: related.name.clone(),
            field:  key.clone()
        })?;
        push_unique(&mut fields, key_field);
    }
    for id in related.fields.iter().filter(|f| f.is_id()) {
        push_unique(&mut fields, id);
    }
    for unique in related.fields.iter().filter(|f| f.is_unique()) {
        push_unique(&mut fields, unique);
    }

    Ok(fields)
}

fn push_unique<'s>(fields: &mut Vec<&'s Field>, field: &'s Field) {
    if !fields.iter().any(|f| f.name == field.name) {
        fields.push(field);
    }
}
