// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Nested-write input synthesis.
//!
//! A relation opened for nested writes becomes a small auxiliary type on the
//! create or update input:
//!
//! ```text
//! /// @DtoRelationCanCreateOnCreate
//! /// @DtoRelationCanConnectOnCreate
//! author User?
//!
//! class CreatePostAuthorRelationInputDto {
//!   create?: CreateUserDto;
//!   connect?: ConnectUserDto;
//! }
//! ```
//!
//! With a single enabled action its property is required.

use super::{GeneratedType, Generator, RelationInputAction, RelationInputProperty, unresolved};
use crate::{
    annotation::Directive,
    error::{Error, Result},
    imports::ImportRequirement,
    naming::Naming,
    relation::connect_input_fields,
    schema::{Entity, Field}
};

/// Input surface a relation input is synthesized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputVariant {
    /// Create input.
    Create,
    /// Update input.
    Update
}

impl InputVariant {
    /// Directives that open a relation for nested writes on this surface.
    #[must_use]
    pub const fn modifiers(self) -> [Directive; 2] {
        match self {
            Self::Create => Directive::CREATE_MODIFIERS,
            Self::Update => Directive::UPDATE_MODIFIERS
        }
    }

    /// Directive enabling the nested `create` property.
    #[must_use]
    pub const fn can_create(self) -> Directive {
        match self {
            Self::Create => Directive::RelationCanCreateOnCreate,
            Self::Update => Directive::RelationCanCreateOnUpdate
        }
    }

    /// Directive enabling the nested `connect` property.
    #[must_use]
    pub const fn can_connect(self) -> Directive {
        match self {
            Self::Create => Directive::RelationCanConnectOnCreate,
            Self::Update => Directive::RelationCanConnectOnUpdate
        }
    }

    /// Wrap a base name in this surface's prefix and suffix.
    #[must_use]
    pub fn dto_name(self, naming: &dyn Naming, name: &str) -> String {
        match self {
            Self::Create => naming.create_dto_name(name),
            Self::Update => naming.update_dto_name(name)
        }
    }
}

/// Result of synthesizing one relation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationInput {
    /// Name of the synthesized type.
    pub type_name:    String,
    /// Body of the synthesized type.
    pub generated:    GeneratedType,
    /// Imports of the target create/connect inputs.
    pub imports:      Vec<ImportRequirement>,
    /// Types to register for documentation, possibly repeated across fields.
    pub extra_models: Vec<String>
}

/// Synthesize the nested-write input for `entity.field`.
///
/// # Errors
///
/// - [`Error::MissingRelationModifier`] when neither directive of `variant`
///   is attached
/// - [`Error::RelatedEntityNotFound`] when the target entity is unknown or ignored
/// - connect-by field errors from [`connect_input_fields`] when the relation
///   declares target keys that do not resolve
pub fn synthesize(
    generator: &Generator<'_>,
    entity: &Entity,
    field: &Field,
    variant: InputVariant
) -> Result<RelationInput> {
    let can_create = field.is_annotated_with(variant.can_create());
    let can_connect = field.is_annotated_with(variant.can_connect());
    if !can_create && !can_connect {
        return Err(Error::MissingRelationModifier {
            entity: entity.name.clone(),
            field:  field.name.clone()
        });
    }

    let schema = generator.schema();
    let naming = generator.naming();
    let paths = generator.paths();
    let target = schema.generatable_entity(&field.type_name).map_err(unresolved(entity, field))?;

    let mut actions = Vec::with_capacity(2);
    let mut imports = Vec::new();
    let mut extra_models = Vec::new();

    if can_create {
        let name = naming.create_dto_name(&target.name);
        let writes_into_itself = variant == InputVariant::Create && target.name == entity.name;
        if !writes_into_itself {
            let from = paths.import_source(
                &entity.output.dto,
                &target.output.dto,
                &naming.create_dto_filename(&target.name)
            );
            imports.push(ImportRequirement::named(from, [name.clone()]));
        }
        extra_models.push(name.clone());
        actions.push((RelationInputAction::Create, name));
    }

    if can_connect {
        if !field.relation_to_fields.is_empty() {
            connect_input_fields(entity, field, schema)?;
        }
        let name = naming.connect_dto_name(&target.name);
        let from = paths.import_source(
            &entity.output.dto,
            &target.output.dto,
            &naming.connect_dto_filename(&target.name)
        );
        imports.push(ImportRequirement::named(from, [name.clone()]));
        extra_models.push(name.clone());
        actions.push((RelationInputAction::Connect, name));
    }

    let base = format!(
        "{}{}RelationInput",
        naming.class_name_case(&entity.name),
        naming.class_name_case(&field.name)
    );
    let type_name = variant.dto_name(naming, &base);
    let single_choice = actions.len() == 1;

    let properties = actions
        .into_iter()
        .map(|(action, type_name)| RelationInputProperty {
            action,
            type_name,
            is_required: single_choice,
            is_list: field.is_list
        })
        .collect();

    extra_models.push(type_name.clone());

    Ok(RelationInput {
        generated: GeneratedType {
            name: type_name.clone(),
            properties
        },
        type_name,
        imports,
        extra_models
    })
}
