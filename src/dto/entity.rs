// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Read model rules.
//!
//! Every field is present (unless `@DtoEntityHidden`) and required; the
//! schema's optionality becomes nullability. Relations are the exception:
//! they are only present when selected, so they are optional.
//!
//! | Field | Required | Nullable |
//! |-------|----------|----------|
//! | scalar / enum | yes | schema optional |
//! | list relation | no | no |
//! | required relation | no | no |
//! | optional relation | no | unless `@DtoRelationRequired` |
//! | relation scalar | yes | unless a backed relation is required |

use super::{
    Accumulator, ApiProperty, DescriptorKind, FieldDescriptor, FieldSet, Generator,
    PresentedDefault, dropped, enum_props, unresolved
};
use crate::{
    annotation::Directive,
    error::Result,
    imports::ImportRequirement,
    relation::RelationScalars,
    schema::{Entity, Field, FieldKind}
};

const SURFACE: &str = "entity";

pub(super) fn compute(generator: &Generator<'_>, entity: &Entity) -> Result<FieldSet> {
    let naming = generator.naming();
    let scalars = RelationScalars::of(entity);
    let mut acc = Accumulator::default();

    for field in &entity.fields {
        if field.kind == FieldKind::Unsupported {
            dropped(entity, field, SURFACE, "unsupported type");
            continue;
        }
        if field.is_annotated_with(Directive::EntityHidden) {
            dropped(entity, field, SURFACE, "hidden");
            continue;
        }

        let mut descriptor = FieldDescriptor {
            is_required: true,
            is_nullable: !field.is_required(),
            ..FieldDescriptor::from_field(field)
        };
        let mut api = ApiProperty {
            default: PresentedDefault::resolve(field),
            ..ApiProperty::default()
        };

        if field.is_relation() {
            let target = generator
                .schema()
                .generatable_entity(&field.type_name)
                .map_err(unresolved(entity, field))?;

            descriptor.is_required = false;
            descriptor.is_nullable = relation_is_nullable(field);
            descriptor.kind = DescriptorKind::Relation;
            descriptor.ty = naming.entity_name(&target.name);
            api.type_name = Some(descriptor.ty.clone());

            if target.name != entity.name {
                let from = generator.paths().import_source(
                    &entity.output.entity,
                    &target.output.entity,
                    &naming.entity_filename(&target.name)
                );
                acc.imports.push(ImportRequirement::named(from, [descriptor.ty.clone()]));
            }
        }

        if scalars.contains(&field.name) {
            let backs_required = scalars
                .relations(&field.name)
                .iter()
                .filter_map(|name| entity.field(name))
                .any(|relation| {
                    relation.is_required() || relation.is_annotated_with(Directive::RelationRequired)
                });
            descriptor.is_required = true;
            descriptor.is_nullable = !backs_required;
        }

        if field.is_enum() {
            let props = enum_props::resolve(generator, entity, field, &entity.output.entity)?;
            acc.absorb_enum(&mut descriptor, &mut api, props);
        }

        api.is_array = descriptor.is_list;
        descriptor.api_property = api.into_option();
        acc.fields.push(descriptor);
    }

    acc.finish(generator, entity)
}

/// Lists and required relations are never null.
fn relation_is_nullable(field: &Field) -> bool {
    if field.is_list || field.is_required() {
        return false;
    }
    !field.is_annotated_with(Directive::RelationRequired)
}
