// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Update input rules.
//!
//! Same filtering as the create input with partial-update semantics: every
//! descriptor is optional, relations open with the update modifiers and ids
//! never surface unless annotated `@DtoUpdateOptional`.

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

const SURFACE: &str = "update";

pub(super) fn compute(generator: &Generator<'_>, entity: &Entity) -> Result<FieldSet> {
    let scalars = RelationScalars::of(entity);
    let mut acc = Accumulator::default();

    for field in &entity.fields {
        if field.kind == FieldKind::Unsupported {
            dropped(entity, field, SURFACE, "unsupported type");
            continue;
        }

        let mut descriptor = FieldDescriptor {
            is_required: false,
            ..FieldDescriptor::from_field(field)
        };
        let mut api = ApiProperty {
            default: PresentedDefault::resolve(field),
            ..ApiProperty::default()
        };

        if field.is_read_only() {
            dropped(entity, field, SURFACE, "read-only");
            continue;
        }

        if field.is_relation() {
            let variant = InputVariant::Update;
            if !field.is_annotated_with_any(&variant.modifiers()) {
                dropped(entity, field, SURFACE, "relation without nested-write directive");
                continue;
            }
            let input = relation_input::synthesize(generator, entity, field, variant)?;

            descriptor.ty = input.type_name.clone();
            descriptor.kind = DescriptorKind::RelationInput;
            descriptor.is_list = false;
            api.type_name = Some(input.type_name.clone());
            acc.absorb_relation_input(input);
        }

        if scalars.contains(&field.name) {
            dropped(entity, field, SURFACE, "relation scalar");
            continue;
        }

        if !field.is_annotated_with(Directive::UpdateOptional) {
            let reason = if field.is_id() {
                Some("id")
            } else if field.is_updated_at() {
                Some("updated-at timestamp")
            } else if field.is_required_with_default_value() {
                Some("server default")
            } else {
                None
            };
            if let Some(reason) = reason {
                dropped(entity, field, SURFACE, reason);
                continue;
            }
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
