// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Import requirements and their aggregation.
//!
//! Field-set computers collect one [`ImportRequirement`] per cross-file
//! reference they encounter. [`ImportSet`] folds them into the minimal list
//! a generated file needs: one requirement per source module, ordered by
//! first appearance of the module. Both levels are insertion-ordered
//! [`IndexMap`]/[`IndexSet`] collections.
//!
//! # Merge rules
//!
//! | Situation | Result |
//! |-----------|--------|
//! | same module, named `{A}` and `{B}` | one requirement, named `{A, B}` |
//! | same named import twice | kept once |
//! | `A as X` and `A as Y` | both aliases kept |
//! | one default import | kept |
//! | equal default imports | kept once |
//! | different default imports | [`Error::ImportConflict`] |


use std::fmt;

use indexmap::{IndexMap, IndexSet, map::Entry};

use crate::error::{Error, Result};

/// Default (or namespace) import of a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DefaultImport {
    /// `import Name from '...'`
    Name(String),
    /// `import * as Name from '...'`
    Namespace(String)
}

impl fmt::Display for DefaultImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Namespace(name) => write!(f, "* as {name}")
        }
    }
}

/// One named import.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NamedImport {
    /// `{ Name }`
    Name(String),
    /// `{ Name as Alias }`
    Alias {
        /// Exported name.
        name:  String,
        /// Local binding.
        alias: String
    }
}

impl NamedImport {
    /// Local binding introduced by this import.
    #[must_use]
    pub fn local(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Alias { alias, .. } => alias
        }
    }
}

impl fmt::Display for NamedImport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Alias { name, alias } => write!(f, "{name} as {alias}")
        }
    }
}

/// Imports a generated file needs from one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequirement {
    /// Source module identifier.
    pub from:    String,
    /// Default or namespace import.
    pub default: Option<DefaultImport>,
    /// Named imports in encounter order, without duplicates.
    pub named:   IndexSet<NamedImport>
}

impl ImportRequirement {
    /// Requirement with named imports.
    #[must_use]
    pub fn named<I, S>(from: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            from:    from.into(),
            default: None,
            named:   names.into_iter().map(|n| NamedImport::Name(n.into())).collect()
        }
    }

    /// Requirement with a default import only.
    #[must_use]
    pub fn default_import(from: impl Into<String>, default: DefaultImport) -> Self {
        Self {
            from:    from.into(),
            default: Some(default),
            named:   IndexSet::new()
        }
    }

    /// Add an aliased named import.
    #[must_use]
    pub fn with_alias(mut self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.named.insert(NamedImport::Alias {
            name:  name.into(),
            alias: alias.into()
        });
        self
    }

    /// Check whether a binding with this local name is imported.
    #[must_use]
    pub fn imports(&self, local: &str) -> bool {
        self.named.iter().any(|n| n.local() == local)
            || self.default.as_ref().is_some_and(|d| match d {
                DefaultImport::Name(name) | DefaultImport::Namespace(name) => name == local
            })
    }

    /// Merge another requirement for the same module into this one.
    ///
    /// # Errors
    ///
    /// - [`Error::ImportSourceMismatch`] when the modules differ
    /// - [`Error::ImportConflict`] when both carry different default imports
    pub fn merge(mut self, other: Self) -> Result<Self> {
        self.absorb(other)?;
        Ok(self)
    }

    /// In-place form of [`merge`](Self::merge); `self` is untouched on error.
    fn absorb(&mut self, other: Self) -> Result<()> {
        if self.from != other.from {
            return Err(Error::ImportSourceMismatch {
                first:  self.from.clone(),
                second: other.from
            });
        }

        if let (Some(first), Some(second)) = (&self.default, &other.default)
            && first != second
        {
            return Err(Error::ImportConflict {
                module: self.from.clone(),
                first:  first.to_string(),
                second: second.to_string()
            });
        }
        if self.default.is_none() {
            self.default = other.default;
        }

        self.named.extend(other.named);
        Ok(())
    }
}

/// Ordered set of import requirements keyed by source module.
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    entries: IndexMap<String, ImportRequirement>
}

impl ImportSet {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a requirement, merging it into an existing one for its module.
    ///
    /// A new module is appended; a known module keeps its position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ImportConflict`] on conflicting default imports.
    pub fn insert(&mut self, requirement: ImportRequirement) -> Result<()> {
        match self.entries.entry(requirement.from.clone()) {
            Entry::Occupied(mut existing) => existing.get_mut().absorb(requirement),
            Entry::Vacant(slot) => {
                slot.insert(requirement);
                Ok(())
            }
        }
    }

    /// Add every requirement in order.
    ///
    /// # Errors
    ///
    /// Returns the first merge error.
    pub fn extend<I>(&mut self, requirements: I) -> Result<()>
    where
        I: IntoIterator<Item = ImportRequirement>
    {
        for requirement in requirements {
            self.insert(requirement)?;
        }
        Ok(())
    }

    /// Requirement for a module, if any.
    #[must_use]
    pub fn get(&self, from: &str) -> Option<&ImportRequirement> {
        self.entries.get(from)
    }

    /// Number of distinct modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no requirement was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Requirements in module first-appearance order.
    #[must_use]
    pub fn into_vec(self) -> Vec<ImportRequirement> {
        self.entries.into_values().collect()
    }
}

/// Merge a list of requirements into one requirement per module.
///
/// # Errors
///
/// Returns [`Error::ImportConflict`] on conflicting default imports.
///
/// # Example
///
/// ```rust
/// use entity_dto::imports::{ImportRequirement, zip};
///
/// let merged = zip([
///     ImportRequirement::named("./user.entity", ["User"]),
///     ImportRequirement::named("./role.enum", ["Role"]),
///     ImportRequirement::named("./user.entity", ["UserStatus"])
/// ])
/// .unwrap();
///
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0].named.len(), 2);
/// ```
pub fn zip<I>(requirements: I) -> Result<Vec<ImportRequirement>>
where
    I: IntoIterator<Item = ImportRequirement>
{
    let mut set = ImportSet::new();
    set.extend(requirements)?;
    Ok(set.into_vec())
}
