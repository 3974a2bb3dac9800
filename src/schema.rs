// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema universe consumed by the field-set computers.
//!
//! The universe holds every entity and enum of one generation run. It is
//! built once, never mutated while field sets are computed, and shared by
//! reference between all computers.
//!
//! # Module Structure
//!
//! ```text
//! schema/
//! ├── entity.rs      — Entity and its output location
//! ├── enumeration.rs — Enum and enum values
//! ├── field.rs       — Field, FieldKind and builders
//! │   └── classify.rs — Field classifier predicates
//! ├── default.rs     — Schema default-value descriptor
//! └── scalar.rs      — Known scalar types
//! ```
//!
//! # Ingestion
//!
//! A schema is either assembled with the builder methods or deserialized
//! from the JSON data-model document emitted by the schema toolchain:
//!
//! ```rust
//! use entity_dto::schema::Schema;
//!
//! let schema = Schema::from_json(
//!     r#"{
//!         "models": [{
//!             "name": "User",
//!             "fields": [
//!                 { "name": "id", "kind": "scalar", "type": "Int", "isId": true }
//!             ]
//!         }],
//!         "enums": []
//!     }"#
//! )
//! .unwrap();
//! assert!(schema.entity("User").is_ok());
//! ```

mod default;
mod entity;
mod enumeration;
mod field;
mod scalar;

pub use default::DefaultValue;
pub use entity::{Entity, OutputLocation};
pub use enumeration::{Enum, EnumValue};
pub use field::{Field, FieldKind};
pub use scalar::ScalarType;
use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// All entities and enums of one generation run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// Entities in declared order.
    #[serde(default, rename = "models")]
    pub entities: Vec<Entity>,

    /// Enums in declared order.
    #[serde(default)]
    pub enums: Vec<Enum>
}

/// Wrapper accepting both the full document and a bare data model.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Wrapped { datamodel: Schema },
    Bare(Schema)
}

impl Schema {
    /// Create a universe from entities and enums.
    #[must_use]
    pub fn new(entities: Vec<Entity>, enums: Vec<Enum>) -> Self {
        Self { entities, enums }
    }

    /// Parse a JSON data-model document.
    ///
    /// Accepts either `{"datamodel": {"models": [...], "enums": [...]}}` or
    /// the inner `{"models": [...], "enums": [...]}` object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Document`] when the text is not a valid document.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: Document = serde_json::from_str(json)?;
        Ok(match document {
            Document::Wrapped { datamodel } => datamodel,
            Document::Bare(schema) => schema
        })
    }

    /// Find an entity by name.
    ///
    /// # Errors
    ///
    /// Returns [`Unresolved::Entity`] when no entity has this name.
    pub fn entity(&self, name: &str) -> std::result::Result<&Entity, Unresolved> {
        self.entities
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| Unresolved::Entity(name.to_string()))
    }

    /// Find an enum by name.
    ///
    /// # Errors
    ///
    /// Returns [`Unresolved::Enum`] when no enum has this name.
    pub fn enumeration(&self, name: &str) -> std::result::Result<&Enum, Unresolved> {
        self.enums
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| Unresolved::Enum(name.to_string()))
    }

    /// Entities that are not annotated with `@DtoIgnoreModel`.
    pub fn generatable_entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| !e.is_ignored())
    }

    /// Find an entity files are generated for.
    ///
    /// Relation targets resolve here: an ignored entity has no create,
    /// connect or entity file to import from.
    ///
    /// # Errors
    ///
    /// Returns [`Unresolved::Entity`] when no entity has this name or it is
    /// annotated with `@DtoIgnoreModel`.
    pub fn generatable_entity(&self, name: &str) -> std::result::Result<&Entity, Unresolved> {
        self.generatable_entities()
            .find(|e| e.name == name)
            .ok_or_else(|| Unresolved::Entity(name.to_string()))
    }
}

/// Typed not-found outcome of a universe lookup.
///
/// Converted into the fatal [`Error`] at the component boundary with
/// [`Unresolved::at`], which attaches the referencing entity and field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    /// No entity with this name.
    Entity(String),
    /// No enum with this name.
    Enum(String)
}

impl Unresolved {
    /// Convert into the fatal error for a reference from `entity.field`.
    #[must_use]
    pub fn at(self, entity: &Entity, field: &Field) -> Error {
        match self {
            Self::Entity(target) => Error::RelatedEntityNotFound {
                entity: entity.name.clone(),
                field: field.name.clone(),
                target
            },
            Self::Enum(target) => Error::RelatedEnumNotFound {
                entity: entity.name.clone(),
                field: field.name.clone(),
                target
            }
        }
    }
}

/// Deserialize a list that may be `null` in the document.
pub(crate) fn nullable_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::annotation::Directive;

    fn blog() -> Schema {
        let document = json!({
            "datamodel": {
                "models": [
                    {
                        "name": "User",
                        "fields": [
                            {
                                "name": "id", "kind": "scalar", "type": "Int",
                                "isId": true, "isRequired": true, "hasDefaultValue": true,
                                "default": { "name": "autoincrement", "args": [] }
                            },
                            {
                                "name": "posts", "kind": "object", "type": "Post",
                                "isList": true, "relationName": "PostToUser",
                                "relationFromFields": [], "relationToFields": []
                            }
                        ]
                    },
                    {
                        "name": "Audit",
                        "documentation": "@DtoIgnoreModel",
                        "fields": []
                    }
                ],
                "enums": [
                    { "name": "Role", "values": [{ "name": "USER", "dbName": null }] }
                ]
            }
        });
        Schema::from_json(&document.to_string()).unwrap()
    }

    #[test]
    fn parses_wrapped_document() {
        let schema = blog();
        assert_eq!(schema.entities.len(), 2);
        assert_eq!(schema.enums.len(), 1);
        let user = schema.entity("User").unwrap();
        assert!(user.fields[0].is_id());
        assert!(user.fields[1].is_relation());
    }

    #[test]
    fn parses_bare_document() {
        let schema = Schema::from_json(r#"{"models": [], "enums": []}"#).unwrap();
        assert!(schema.entities.is_empty());
    }

    #[test]
    fn null_relation_lists_become_empty() {
        let schema = Schema::from_json(
            r#"{"models": [{"name": "A", "fields": [
                {"name": "b", "kind": "object", "type": "B",
                 "relationFromFields": null, "relationToFields": null}
            ]}]}"#
        )
        .unwrap();
        let field = &schema.entities[0].fields[0];
        assert!(field.relation_from_fields.is_empty());
        assert!(field.relation_to_fields.is_empty());
    }

    #[test]
    fn invalid_document_is_an_error() {
        let err = Schema::from_json("{\"models\": 3}").unwrap_err();
        assert!(matches!(err, Error::Document(_)));
    }

    #[test]
    fn lookup_reports_typed_not_found() {
        let schema = blog();
        assert_eq!(
            schema.entity("Comment").unwrap_err(),
            Unresolved::Entity("Comment".to_string())
        );
        assert_eq!(
            schema.enumeration("Status").unwrap_err(),
            Unresolved::Enum("Status".to_string())
        );
        assert!(schema.enumeration("Role").is_ok());
    }

    #[test]
    fn unresolved_carries_reference_context() {
        let schema = blog();
        let user = schema.entity("User").unwrap();
        let err = Unresolved::Entity("Post".to_string()).at(user, &user.fields[1]);
        assert_eq!(err.to_string(), "related model 'Post' for 'User.posts' not found");
    }

    #[test]
    fn ignored_entities_are_not_generatable() {
        let schema = blog();
        let names: Vec<_> = schema.generatable_entities().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["User"]);
        assert!(schema.entity("Audit").unwrap().annotations.has(Directive::IgnoreModel));
    }

    #[test]
    fn ignored_entities_do_not_resolve_as_targets() {
        let schema = blog();
        assert!(schema.generatable_entity("User").is_ok());
        assert_eq!(
            schema.generatable_entity("Audit").unwrap_err(),
            Unresolved::Entity("Audit".to_string())
        );
    }
}
