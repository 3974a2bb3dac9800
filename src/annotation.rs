// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Annotation directives attached to schema fields and entities.
//!
//! Directives live in the documentation comment of a field or model, one per
//! line:
//!
//! ```text
//! /// @DtoCreateOptional
//! /// @DtoRelationCanConnectOnCreate
//! /// @DtoDefaultValue(guest)
//! role Role @default(USER)
//! ```
//!
//! The comment is parsed once when the schema is ingested. Every rule in the
//! field-set computers queries the resulting [`Annotations`] set instead of
//! re-scanning the raw text.
//!
//! # Recognized directives
//!
//! | Marker | Directive |
//! |--------|-----------|
//! | `@DtoReadOnly` | [`Directive::ReadOnly`] |
//! | `@DtoEntityHidden` | [`Directive::EntityHidden`] |
//! | `@DtoCreateOptional` | [`Directive::CreateOptional`] |
//! | `@DtoUpdateOptional` | [`Directive::UpdateOptional`] |
//! | `@DtoRelationRequired` | [`Directive::RelationRequired`] |
//! | `@DtoRelationCanCreateOnCreate` | [`Directive::RelationCanCreateOnCreate`] |
//! | `@DtoRelationCanConnectOnCreate` | [`Directive::RelationCanConnectOnCreate`] |
//! | `@DtoRelationCanCreateOnUpdate` | [`Directive::RelationCanCreateOnUpdate`] |
//! | `@DtoRelationCanConnectOnUpdate` | [`Directive::RelationCanConnectOnUpdate`] |
//! | `@DtoIgnoreModel` | [`Directive::IgnoreModel`] |
//! | `@DtoDefaultValue(value)` | [`Directive::DefaultValue`] |

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Directive recognized in a documentation comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Field is never writable through create or update inputs.
    ReadOnly,
    /// Field is omitted from the entity read model.
    EntityHidden,
    /// Field stays on the create input but is optional there.
    CreateOptional,
    /// Field stays on the update input even if it would be dropped.
    UpdateOptional,
    /// Relation is treated as required regardless of the schema.
    RelationRequired,
    /// Create input may create the related record inline.
    RelationCanCreateOnCreate,
    /// Create input may connect an existing related record.
    RelationCanConnectOnCreate,
    /// Update input may create the related record inline.
    RelationCanCreateOnUpdate,
    /// Update input may connect an existing related record.
    RelationCanConnectOnUpdate,
    /// Entity-level: no field sets are generated for this entity.
    IgnoreModel,
    /// Default value to present, overriding the schema default.
    DefaultValue
}

impl Directive {
    /// All directives, in marker-table order.
    pub const ALL: [Self; 11] = [
        Self::ReadOnly,
        Self::EntityHidden,
        Self::CreateOptional,
        Self::UpdateOptional,
        Self::RelationRequired,
        Self::RelationCanCreateOnCreate,
        Self::RelationCanConnectOnCreate,
        Self::RelationCanCreateOnUpdate,
        Self::RelationCanConnectOnUpdate,
        Self::IgnoreModel,
        Self::DefaultValue
    ];

    /// Nested-write directives honoured by the create input.
    pub const CREATE_MODIFIERS: [Self; 2] =
        [Self::RelationCanCreateOnCreate, Self::RelationCanConnectOnCreate];

    /// Nested-write directives honoured by the update input.
    pub const UPDATE_MODIFIERS: [Self; 2] =
        [Self::RelationCanCreateOnUpdate, Self::RelationCanConnectOnUpdate];

    /// Marker text as written in the schema.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::ReadOnly => "@DtoReadOnly",
            Self::EntityHidden => "@DtoEntityHidden",
            Self::CreateOptional => "@DtoCreateOptional",
            Self::UpdateOptional => "@DtoUpdateOptional",
            Self::RelationRequired => "@DtoRelationRequired",
            Self::RelationCanCreateOnCreate => "@DtoRelationCanCreateOnCreate",
            Self::RelationCanConnectOnCreate => "@DtoRelationCanConnectOnCreate",
            Self::RelationCanCreateOnUpdate => "@DtoRelationCanCreateOnUpdate",
            Self::RelationCanConnectOnUpdate => "@DtoRelationCanConnectOnUpdate",
            Self::IgnoreModel => "@DtoIgnoreModel",
            Self::DefaultValue => "@DtoDefaultValue"
        }
    }

    /// Look up a directive by its marker.
    #[must_use]
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.marker() == marker)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Directives resolved from one documentation comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    entries: Vec<(Directive, Option<String>)>
}

impl Annotations {
    /// Parse a documentation comment.
    ///
    /// Each line is trimmed; a line whose first token is a known marker
    /// yields that directive. A value may follow in parentheses
    /// (`@DtoDefaultValue(draft)`) or after whitespace
    /// (`@DtoDefaultValue draft`). Prose and unknown markers are ignored.
    #[must_use]
    pub fn parse(documentation: &str) -> Self {
        let mut annotations = Self::default();
        for line in documentation.lines() {
            if let Some((directive, value)) = parse_line(line.trim()) {
                annotations.insert(directive, value);
            }
        }
        annotations
    }

    /// Add a directive. A repeated directive keeps its first value.
    pub fn insert(&mut self, directive: Directive, value: Option<String>) {
        if !self.has(directive) {
            self.entries.push((directive, value));
        }
    }

    /// Builder-style [`insert`](Self::insert) without a value.
    #[must_use]
    pub fn with(mut self, directive: Directive) -> Self {
        self.insert(directive, None);
        self
    }

    /// Builder-style [`insert`](Self::insert) with a value.
    #[must_use]
    pub fn with_value(mut self, directive: Directive, value: impl Into<String>) -> Self {
        self.insert(directive, Some(value.into()));
        self
    }

    /// Check whether the directive is present.
    #[must_use]
    pub fn has(&self, directive: Directive) -> bool {
        self.entries.iter().any(|(d, _)| *d == directive)
    }

    /// Check whether any of the directives is present.
    #[must_use]
    pub fn has_any(&self, directives: &[Directive]) -> bool {
        directives.iter().any(|d| self.has(*d))
    }

    /// Value attached to the directive, if present and non-empty.
    #[must_use]
    pub fn value(&self, directive: Directive) -> Option<&str> {
        self.entries
            .iter()
            .find(|(d, _)| *d == directive)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Check whether no directive was recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over recognized directives in source order.
    pub fn iter(&self) -> impl Iterator<Item = Directive> + '_ {
        self.entries.iter().map(|(d, _)| *d)
    }
}

/// Split a trimmed line into directive and optional value.
fn parse_line(line: &str) -> Option<(Directive, Option<String>)> {
    if !line.starts_with('@') {
        return None;
    }

    let end = line
        .find(|c: char| c == '(' || c.is_whitespace())
        .unwrap_or(line.len());
    let directive = Directive::from_marker(&line[..end])?;
    let rest = line[end..].trim();

    let value = if let Some(inner) = rest.strip_prefix('(') {
        inner.strip_suffix(')').unwrap_or(inner).trim()
    } else {
        rest
    };

    let value = (!value.is_empty()).then(|| value.to_string());
    Some((directive, value))
}

/// Deserialize an optional documentation string into [`Annotations`].
///
/// Used as `deserialize_with` on the `documentation` key of fields and
/// models, so directives are resolved once at ingestion.
pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Annotations, D::Error>
where
    D: Deserializer<'de>
{
    let documentation = Option::<String>::deserialize(deserializer)?;
    Ok(documentation
        .as_deref()
        .map(Annotations::parse)
        .unwrap_or_default())
}
