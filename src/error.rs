// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Fatal conditions raised while computing field sets.
//!
//! Every variant describes a defect in the schema or in the generator
//! configuration. Nothing here is retried or recovered from: the first error
//! aborts the computation for the entity being processed.
//!
//! Non-fatal rule outcomes (a field dropped from a surface, a flag forced to
//! a different value) never produce an [`Error`].

use thiserror::Error as ThisError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal generator error.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A relation field points at an entity missing from the universe.
    #[error("related model '{target}' for '{entity}.{field}' not found")]
    RelatedEntityNotFound {
        /// Entity owning the relation field.
        entity: String,
        /// Relation field name.
        field:  String,
        /// Referenced entity name.
        target: String
    },

    /// An enum field points at an enum missing from the universe.
    #[error("related enum '{target}' for '{entity}.{field}' not found")]
    RelatedEnumNotFound {
        /// Entity owning the enum field.
        entity: String,
        /// Enum field name.
        field:  String,
        /// Referenced enum name.
        target: String
    },

    /// A relation input was requested for a field without any nested-write
    /// directive.
    #[error("can not find relation input props for '{entity}.{field}'")]
    MissingRelationModifier {
        /// Entity owning the relation field.
        entity: String,
        /// Relation field name.
        field:  String
    },

    /// Two import requirements for the same module declare different default
    /// imports.
    #[error(
        "can not merge import statements from '{module}'; both set a default import ('{first}' and '{second}')"
    )]
    ImportConflict {
        /// Source module of both requirements.
        module: String,
        /// Default import of the first requirement.
        first:  String,
        /// Default import of the second requirement.
        second: String
    },

    /// Two import requirements from different modules were merged directly.
    #[error("can not merge import statements; '{first}' and '{second}' are different modules")]
    ImportSourceMismatch {
        /// Source module of the first requirement.
        first:  String,
        /// Source module of the second requirement.
        second: String
    },

    /// Connect-by fields were requested for a non-relation field.
    #[error("can not resolve relation connect input fields for field '{field}'; not a relation field")]
    NotARelation {
        /// Field name.
        field: String
    },

    /// Connect-by fields were requested for a relation without key fields.
    #[error(
        "can not resolve relation connect input fields for field '{field}'; foreign keys are unknown"
    )]
    MissingForeignKeys {
        /// Relation field name.
        field: String
    },

    /// A key named in `relationToFields` does not exist on the target.
    #[error("can not find foreign key field '{field}' on model '{entity}'")]
    ForeignKeyNotFound {
        /// Target entity name.
        entity: String,
        /// Missing key field name.
        field:  String
    },

    /// A scalar field declares a type the generator does not know.
    #[error("unrecognized scalar type: {0}")]
    UnknownScalar(String),

    /// Schema or configuration document could not be parsed.
    #[error("invalid schema document: {0}")]
    Document(#[from] serde_json::Error)
}
