// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field definitions.
//!
//! A [`Field`] mirrors one field of the data-model document: structural
//! metadata from the schema plus the directives parsed from its
//! documentation. Classifier predicates live in [`classify`].
//!
//! # Relations
//!
//! A relation field references another entity and is backed by zero or more
//! local scalar fields:
//!
//! ```text
//! model Post {
//!   authorId Int
//!   author   User @relation(fields: [authorId], references: [id])
//! }
//! ```
//!
//! Here `author` has `relation_from_fields = ["authorId"]` and
//! `relation_to_fields = ["id"]`; `authorId` is a relation scalar.

mod classify;

use serde::Deserialize;

use super::{DefaultValue, nullable_list};
use crate::annotation::{self, Annotations, Directive};

/// Kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Built-in scalar (`String`, `Int`, ...).
    Scalar,
    /// Relation to another entity.
    Object,
    /// Enum declared in the schema.
    Enum,
    /// Database type the schema language does not model.
    Unsupported
}

/// Field definition with schema metadata and parsed directives.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name (e.g., `authorId`).
    pub name: String,

    /// Scalar, enum or relation.
    pub kind: FieldKind,

    /// Declared type: scalar name, enum name or related entity name.
    #[serde(rename = "type")]
    pub type_name: String,

    /// List-valued field.
    #[serde(default)]
    pub is_list: bool,

    /// Schema-level required (not nullable).
    #[serde(default)]
    pub is_required: bool,

    /// Unique constraint on this field alone.
    #[serde(default)]
    pub is_unique: bool,

    /// Primary key field.
    #[serde(default)]
    pub is_id: bool,

    /// Field maintained by the database, never writable.
    #[serde(default)]
    pub is_read_only: bool,

    /// Timestamp refreshed on every update (`@updatedAt`).
    #[serde(default)]
    pub is_updated_at: bool,

    /// Schema declares a default even if the value is not carried.
    #[serde(default)]
    pub has_default_value: bool,

    /// Declared default value.
    #[serde(default)]
    pub default: Option<DefaultValue>,

    /// Name of the relation this field takes part in.
    #[serde(default)]
    pub relation_name: Option<String>,

    /// Local scalar fields backing this relation.
    #[serde(default, deserialize_with = "nullable_list")]
    pub relation_from_fields: Vec<String>,

    /// Fields on the related entity referenced by the backing scalars.
    #[serde(default, deserialize_with = "nullable_list")]
    pub relation_to_fields: Vec<String>,

    /// Directives parsed from the field documentation.
    #[serde(default, rename = "documentation", deserialize_with = "annotation::deserialize")]
    pub annotations: Annotations
}

impl Field {
    fn new(name: impl Into<String>, kind: FieldKind, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            type_name: type_name.into(),
            is_list: false,
            is_required: false,
            is_unique: false,
            is_id: false,
            is_read_only: false,
            is_updated_at: false,
            has_default_value: false,
            default: None,
            relation_name: None,
            relation_from_fields: Vec::new(),
            relation_to_fields: Vec::new(),
            annotations: Annotations::default()
        }
    }

    /// Optional scalar field.
    #[must_use]
    pub fn scalar(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Scalar, type_name)
    }

    /// Optional enum field.
    #[must_use]
    pub fn enumeration(name: impl Into<String>, enum_name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Enum, enum_name)
    }

    /// Optional relation field.
    #[must_use]
    pub fn relation(name: impl Into<String>, entity_name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Object, entity_name)
    }

    /// Mark as schema-required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Mark as list-valued.
    #[must_use]
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self
    }

    /// Mark as primary key.
    #[must_use]
    pub fn id(mut self) -> Self {
        self.is_id = true;
        self
    }

    /// Mark as unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.is_unique = true;
        self
    }

    /// Mark as read-only in the schema.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.is_read_only = true;
        self
    }

    /// Mark as `@updatedAt` timestamp.
    #[must_use]
    pub fn updated_at(mut self) -> Self {
        self.is_updated_at = true;
        self
    }

    /// Set the schema default.
    #[must_use]
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.has_default_value = true;
        self.default = Some(default);
        self
    }

    /// Set the backing scalars and the referenced key fields.
    #[must_use]
    pub fn references<F, T>(mut self, from: F, to: T) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>
    {
        self.relation_from_fields = from.into_iter().map(Into::into).collect();
        self.relation_to_fields = to.into_iter().map(Into::into).collect();
        self
    }

    /// Add a directive.
    #[must_use]
    pub fn annotated(mut self, directive: Directive) -> Self {
        self.annotations.insert(directive, None);
        self
    }

    /// Add a directive with a value.
    #[must_use]
    pub fn annotated_with(mut self, directive: Directive, value: impl Into<String>) -> Self {
        self.annotations.insert(directive, Some(value.into()));
        self
    }
}
