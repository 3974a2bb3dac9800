// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_dto::{
    Generator,
    annotation::Directive,
    naming::NamingConvention,
    paths::RelativePaths,
    schema::{DefaultValue, Entity, Field, Schema}
};
use proptest::prelude::*;

/// Flags of one generated scalar field.
#[derive(Debug, Clone)]
struct ScalarSpec {
    required:     bool,
    with_default: bool,
    unique:       bool,
    directive:    Option<Directive>
}

/// Flags of one generated relation to `Target`.
#[derive(Debug, Clone)]
struct RelationSpec {
    required:  bool,
    modifiers: Vec<Directive>
}

fn scalar_spec() -> impl Strategy<Value = ScalarSpec> {
    let directive = prop::option::of(prop::sample::select(vec![
        Directive::CreateOptional,
        Directive::UpdateOptional,
        Directive::EntityHidden,
        Directive::ReadOnly
    ]));
    (any::<bool>(), any::<bool>(), any::<bool>(), directive).prop_map(
        |(required, with_default, unique, directive)| ScalarSpec {
            required,
            with_default,
            unique,
            directive
        }
    )
}

fn relation_spec() -> impl Strategy<Value = RelationSpec> {
    let modifiers = prop::sample::subsequence(
        vec![
            Directive::RelationCanCreateOnCreate,
            Directive::RelationCanConnectOnCreate,
            Directive::RelationCanCreateOnUpdate,
            Directive::RelationCanConnectOnUpdate,
            Directive::RelationRequired
        ],
        0..=5
    );
    (any::<bool>(), modifiers).prop_map(|(required, modifiers)| RelationSpec {
        required,
        modifiers
    })
}

fn target() -> Entity {
    Entity::new("Target")
        .with_field(
            Field::scalar("id", "Int")
                .id()
                .required()
                .with_default(DefaultValue::generator("autoincrement"))
        )
        .with_field(Field::scalar("code", "String").required().unique())
}

fn build(scalars: &[ScalarSpec], relations: &[RelationSpec]) -> Schema {
    let mut entity = Entity::new("Subject").with_field(
        Field::scalar("id", "Int")
            .id()
            .required()
            .with_default(DefaultValue::generator("autoincrement"))
    );

    for (index, spec) in scalars.iter().enumerate() {
        let mut field = Field::scalar(format!("value{index}"), "String");
        if spec.required {
            field = field.required();
        }
        if spec.with_default {
            field = field.with_default(DefaultValue::literal("x"));
        }
        if spec.unique {
            field = field.unique();
        }
        if let Some(directive) = spec.directive {
            field = field.annotated(directive);
        }
        entity = entity.with_field(field);
    }

    for (index, spec) in relations.iter().enumerate() {
        let mut key = Field::scalar(format!("target{index}Id"), "Int");
        let mut relation = Field::relation(format!("target{index}"), "Target")
            .references([format!("target{index}Id")], ["id"]);
        if spec.required {
            key = key.required();
            relation = relation.required();
        }
        for directive in &spec.modifiers {
            relation = relation.annotated(*directive);
        }
        entity = entity.with_field(key).with_field(relation);
    }

    Schema::new(vec![entity, target()], Vec::new())
}

proptest! {
    #[test]
    fn relation_scalars_never_surface_on_inputs(
        scalars in prop::collection::vec(scalar_spec(), 0..6),
        relations in prop::collection::vec(relation_spec(), 1..4)
    ) {
        let schema = build(&scalars, &relations);
        let naming = NamingConvention::default();
        let generator = Generator::new(&schema, &naming, &RelativePaths);
        let subject = schema.entity("Subject").unwrap();

        let params = generator.model(subject).unwrap();
        for index in 0..relations.len() {
            let key = format!("target{index}Id");
            prop_assert!(params.create.field(&key).is_none());
            prop_assert!(params.update.field(&key).is_none());

            let on_entity = params.entity.field(&key);
            prop_assert!(on_entity.is_some());
            let on_entity = on_entity.unwrap();
            prop_assert!(on_entity.is_required);
            prop_assert_eq!(
                on_entity.is_nullable,
                !(relations[index].required
                    || relations[index].modifiers.contains(&Directive::RelationRequired))
            );
        }
    }

    #[test]
    fn update_descriptors_are_never_required(
        scalars in prop::collection::vec(scalar_spec(), 0..6),
        relations in prop::collection::vec(relation_spec(), 0..4)
    ) {
        let schema = build(&scalars, &relations);
        let naming = NamingConvention::default();
        let generator = Generator::new(&schema, &naming, &RelativePaths);

        let update = generator.update(schema.entity("Subject").unwrap()).unwrap();
        prop_assert!(update.fields.iter().all(|f| !f.is_required));
    }

    #[test]
    fn field_order_is_preserved(
        scalars in prop::collection::vec(scalar_spec(), 0..6),
        relations in prop::collection::vec(relation_spec(), 0..4)
    ) {
        let schema = build(&scalars, &relations);
        let naming = NamingConvention::default();
        let generator = Generator::new(&schema, &naming, &RelativePaths);
        let subject = schema.entity("Subject").unwrap();
        let declared: Vec<&str> = subject.fields.iter().map(|f| f.name.as_str()).collect();

        let params = generator.model(subject).unwrap();
        for set in [&params.create, &params.update, &params.entity] {
            let positions: Vec<usize> = set
                .field_names()
                .map(|name| declared.iter().position(|d| *d == name).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn relation_inputs_are_never_lists(
        relations in prop::collection::vec(relation_spec(), 1..4)
    ) {
        let schema = build(&[], &relations);
        let naming = NamingConvention::default();
        let generator = Generator::new(&schema, &naming, &RelativePaths);

        let subject = schema.entity("Subject").unwrap();
        for set in [generator.create(subject).unwrap(), generator.update(subject).unwrap()] {
            for input in &set.extra_types {
                let single = input.properties.len() == 1;
                prop_assert!(input.properties.iter().all(|p| p.is_required == single));
            }
            prop_assert!(set.fields.iter().all(|f| !f.is_list));
        }
    }
}
