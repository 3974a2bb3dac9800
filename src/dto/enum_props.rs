// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Enum presentation metadata.

use super::{Generator, unresolved};
use crate::{
    error::Result,
    imports::ImportRequirement,
    schema::{Entity, Field}
};

/// Resolved enum reference of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumProperties {
    /// Generated enum type name.
    pub type_name:      String,
    /// Presented values, storage names preferred; `None` for an empty enum.
    pub enum_values:    Option<Vec<String>>,
    /// Presented enum name, storage name preferred.
    pub presented_type: String,
    /// Import of the generated enum.
    pub import:         ImportRequirement
}

/// Resolve the enum referenced by `entity.field`.
///
/// `from_dir` is the directory of the file being generated; the import
/// source is relative to it.
///
/// # Errors
///
/// Returns [`Error::RelatedEnumNotFound`](crate::Error::RelatedEnumNotFound)
/// when the enum is not in the universe.
pub fn resolve(
    generator: &Generator<'_>,
    entity: &Entity,
    field: &Field,
    from_dir: &str
) -> Result<EnumProperties> {
    let naming = generator.naming();
    let target = generator
        .schema()
        .enumeration(&field.type_name)
        .map_err(unresolved(entity, field))?;

    let type_name = naming.enum_name(&target.name);
    let from = generator
        .paths()
        .import_source(from_dir, &target.output, &naming.enum_filename(&target.name));

    Ok(EnumProperties {
        enum_values: target.presented_values(),
        presented_type: target.presented_name().to_string(),
        import: ImportRequirement::named(from, [type_name.clone()]),
        type_name
    })
}
