// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Connect input rules.
//!
//! The connect input identifies an existing record: id fields first, then
//! unique fields. With more than one candidate any single field suffices,
//! so all of them become optional.

use super::{Accumulator, ApiProperty, FieldDescriptor, FieldSet, Generator, enum_props};
use crate::{
    error::Result,
    schema::{Entity, Field, FieldKind}
};

pub(super) fn compute(generator: &Generator<'_>, entity: &Entity) -> Result<FieldSet> {
    let mut keys: Vec<&Field> = Vec::new();
    let candidates = entity
        .fields
        .iter()
        .filter(|f| f.is_id())
        .chain(entity.fields.iter().filter(|f| f.is_unique()))
        .filter(|f| f.kind != FieldKind::Unsupported && !f.is_relation());
    for field in candidates {
        if !keys.iter().any(|k| k.name == field.name) {
            keys.push(field);
        }
    }

    let single = keys.len() == 1;
    let mut acc = Accumulator::default();

    for field in keys {
        let mut descriptor = FieldDescriptor::from_field(field);
        descriptor.is_required = single && field.is_required();

        if field.is_enum() {
            let mut api = ApiProperty::default();
            let props = enum_props::resolve(generator, entity, field, &entity.output.dto)?;
            acc.absorb_enum(&mut descriptor, &mut api, props);
            api.is_array = descriptor.is_list;
            descriptor.api_property = api.into_option();
        }

        acc.fields.push(descriptor);
    }

    acc.finish(generator, entity)
}
