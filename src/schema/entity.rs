// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity definitions.

use serde::Deserialize;

use super::Field;
use crate::annotation::{self, Annotations, Directive};

/// Where an entity's generated files are placed.
///
/// Only used to compute relative import sources between generated files;
/// the directories are chosen by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutputLocation {
    /// Directory of the connect, create and update DTO files.
    #[serde(default)]
    pub dto: String,

    /// Directory of the entity file.
    #[serde(default)]
    pub entity: String
}

impl OutputLocation {
    /// Location with separate DTO and entity directories.
    #[must_use]
    pub fn new(dto: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            dto:    dto.into(),
            entity: entity.into()
        }
    }
}

/// Entity (data-model definition) with its ordered fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Entity name (e.g., `Post`).
    pub name: String,

    /// Storage name when mapped (`@@map`).
    #[serde(default)]
    pub db_name: Option<String>,

    /// Fields in declared order.
    ///
    /// The order is preserved into every generated field set.
    #[serde(default)]
    pub fields: Vec<Field>,

    /// Entity-level directives parsed from the model documentation.
    #[serde(default, rename = "documentation", deserialize_with = "annotation::deserialize")]
    pub annotations: Annotations,

    /// Output directories for generated files.
    #[serde(default)]
    pub output: OutputLocation
}

impl Entity {
    /// Create an entity without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a field.
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Set the output directories.
    #[must_use]
    pub fn with_output(mut self, output: OutputLocation) -> Self {
        self.output = output;
        self
    }

    /// Add an entity-level directive.
    #[must_use]
    pub fn annotated(mut self, directive: Directive) -> Self {
        self.annotations.insert(directive, None);
        self
    }

    /// Find a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check whether generation is skipped for this entity.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.annotations.has(Directive::IgnoreModel)
    }

    /// Relation fields in declared order.
    pub fn relation_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_relation())
    }
}
