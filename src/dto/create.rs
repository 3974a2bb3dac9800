// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Create input rules.
//!
//! | Field | Outcome |
//! |-------|---------|
//! | read-only | dropped |
//! | relation without create modifiers | dropped |
//! | relation with create modifiers | relation input, never a list |
//! | relation scalar | dropped |
//! | id with default, `@updatedAt`, required with default | dropped unless `@DtoCreateOptional` |
//! | `@DtoCreateOptional` | kept, optional |

use super::{
    Accumulator, ApiProperty, DescriptorKind, FieldDescriptor, FieldSet, Generator,
    InputVariant, PresentedDefault, dropped, enum_props, relation_input
};
use crate::{
    annotation::Directive,
    error::Result,
    relation::RelationScalars,
    schema::{Entity, FieldKind}
};

const SURFACE: &str = "create";

pub(super) fn compute(generator: &Generator<'_>, entity: &Entity) -> Result<FieldSet> {
    let scalars = RelationScalars::of(entity);
    let mut acc = Accumulator::default();

    for field in &entity.fields {
        if field.kind == FieldKind::Unsupported {
            dropped(entity, field, SURFACE, "unsupported type");
            continue;
        }

        let mut api = ApiProperty {
            default: PresentedDefault::resolve(field),
            ..ApiProperty::default()
        };

        if field.is_read_only() {
            dropped(entity, field, SURFACE, "read-only");
            continue;
        }

        let mut descriptor = FieldDescriptor::from_field(field);

        if field.is_relation() {
            let variant = InputVariant::Create;
            if !field.is_annotated_with_any(&variant.modifiers()) {
                dropped(entity, field, SURFACE, "relation without nested-write directive");
                continue;
            }
            let input = relation_input::synthesize(generator, entity, field, variant)?;

            if field.is_annotated_with(Directive::RelationRequired) {
                descriptor.is_required = true;
            }
            if field.is_list {
                descriptor.is_required = false;
            }
            descriptor.ty = input.type_name.clone();
            descriptor.kind = DescriptorKind::RelationInput;
            descriptor.is_list = false;
            acc.absorb_relation_input(input);
        }

        if scalars.contains(&field.name) {
            dropped(entity, field, SURFACE, "relation scalar");
            continue;
        }

        if field.is_annotated_with(Directive::CreateOptional) {
            descriptor.is_required = false;
        } else if field.is_id_with_default_value() {
            dropped(entity, field, SURFACE, "generated id");
            continue;
        } else if field.is_updated_at() {
            dropped(entity, field, SURFACE, "updated-at timestamp");
            continue;
        } else if field.is_required_with_default_value() {
            dropped(entity, field, SURFACE, "server default");
            continue;
        }

        if field.is_enum() {
            let props = enum_props::resolve(generator, entity, field, &entity.output.dto)?;
            acc.absorb_enum(&mut descriptor, &mut api, props);
        }

        api.is_array = descriptor.is_list;
        descriptor.api_property = api.into_option();
        acc.fields.push(descriptor);
    }

    acc.finish(generator, entity)
}
