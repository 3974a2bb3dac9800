// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field classifier predicates.
//!
//! Pure yes/no queries over a field's schema metadata and directives. The
//! field-set computers are written entirely in terms of these predicates.
//!
//! | Predicate | Source |
//! |-----------|--------|
//! | [`is_relation`](Field::is_relation) | `kind == object` |
//! | [`is_enum`](Field::is_enum) | `kind == enum` |
//! | [`is_id`](Field::is_id) | `isId` |
//! | [`is_unique`](Field::is_unique) | `isUnique` |
//! | [`is_read_only`](Field::is_read_only) | `isReadOnly` or `@DtoReadOnly` |
//! | [`has_default`](Field::has_default) | `hasDefaultValue` or `default` |
//! | [`is_updated_at`](Field::is_updated_at) | `isUpdatedAt` |
//! | [`is_required_with_default_value`](Field::is_required_with_default_value) | required and defaulted |

use super::{Field, FieldKind};
use crate::annotation::Directive;

impl Field {
    /// Check if the field references another entity.
    #[must_use]
    pub fn is_relation(&self) -> bool {
        self.kind == FieldKind::Object
    }

    /// Check if the field holds an enum value.
    #[must_use]
    pub fn is_enum(&self) -> bool {
        self.kind == FieldKind::Enum
    }

    /// Check if the field holds a built-in scalar.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.kind == FieldKind::Scalar
    }

    /// Check if this is a primary key field.
    #[must_use]
    pub fn is_id(&self) -> bool {
        self.is_id
    }

    /// Check if the field carries a single-field unique constraint.
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.is_unique
    }

    /// Check if the field is schema-required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.is_required
    }

    /// Check if the field can never be written by a client.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.is_read_only || self.annotations.has(Directive::ReadOnly)
    }

    /// Check if the schema declares a default.
    #[must_use]
    pub fn has_default(&self) -> bool {
        self.has_default_value || self.default.is_some()
    }

    /// Check if this is an `@updatedAt` timestamp.
    #[must_use]
    pub fn is_updated_at(&self) -> bool {
        self.is_updated_at
    }

    /// Primary key with a generated value.
    #[must_use]
    pub fn is_id_with_default_value(&self) -> bool {
        self.is_id() && self.has_default()
    }

    /// Required field whose value the server computes when omitted.
    #[must_use]
    pub fn is_required_with_default_value(&self) -> bool {
        self.is_required() && self.has_default()
    }

    /// Check if the directive is attached.
    #[must_use]
    pub fn is_annotated_with(&self, directive: Directive) -> bool {
        self.annotations.has(directive)
    }

    /// Check if any of the directives is attached.
    #[must_use]
    pub fn is_annotated_with_any(&self, directives: &[Directive]) -> bool {
        self.annotations.has_any(directives)
    }

    /// Value of an attached directive.
    #[must_use]
    pub fn annotation_value(&self, directive: Directive) -> Option<&str> {
        self.annotations.value(directive)
    }
}
