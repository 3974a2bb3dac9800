// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-set computation for generated DTOs and entities.
//!
//! For every entity the [`Generator`] derives four field sets:
//!
//! | Field set | Surface |
//! |-----------|---------|
//! | [`Generator::create`] | create input (`CreatePostDto`) |
//! | [`Generator::update`] | partial update input (`UpdatePostDto`) |
//! | [`Generator::entity`] | read model (`Post`) |
//! | [`Generator::connect`] | connect-by-key input (`ConnectPostDto`) |
//!
//! Each [`FieldSet`] carries the ordered field descriptors, the merged
//! import list and any auxiliary relation-input types. Turning a field set
//! into source text is left to a renderer.
//!
//! # Architecture
//!
//! ```text
//! dto.rs (Generator, shared post-pass)
//! │
//! ├── descriptor.rs     → FieldDescriptor, FieldSet, GeneratedType
//! ├── relation_input.rs → nested create/connect input synthesis
//! ├── enum_props.rs     → enum presentation metadata and import
//! │
//! ├── create.rs         → create input rules
//! ├── update.rs         → update input rules
//! ├── entity.rs         → read model rules
//! └── connect.rs        → connect input rules
//! ```
//!
//! # Example
//!
//! ```rust
//! use entity_dto::{
//!     Generator,
//!     naming::NamingConvention,
//!     paths::RelativePaths,
//!     schema::{DefaultValue, Entity, Field, Schema}
//! };
//!
//! let schema = Schema::new(
//!     vec![
//!         Entity::new("Post")
//!             .with_field(
//!                 Field::scalar("id", "Int")
//!                     .id()
//!                     .required()
//!                     .with_default(DefaultValue::generator("autoincrement"))
//!             )
//!             .with_field(Field::scalar("title", "String").required())
//!     ],
//!     Vec::new()
//! );
//! let naming = NamingConvention::default();
//! let generator = Generator::new(&schema, &naming, &RelativePaths);
//!
//! let create = generator.create(schema.entity("Post").unwrap()).unwrap();
//! let names: Vec<_> = create.fields.iter().map(|f| f.name.as_str()).collect();
//! assert_eq!(names, ["title"]);
//! ```

mod connect;
mod create;
mod descriptor;
mod entity;
pub mod enum_props;
pub mod relation_input;
mod update;

pub use descriptor::{
    ApiProperty, DescriptorKind, FieldDescriptor, FieldSet, GeneratedType, ModelParams,
    PresentedDefault, RelationInputAction, RelationInputProperty
};
pub use enum_props::EnumProperties;
pub use relation_input::{InputVariant, RelationInput};
use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::{
    config::ImportModules,
    error::{Error, Result},
    imports::{ImportRequirement, zip},
    naming::Naming,
    paths::PathResolver,
    schema::{Entity, Field, ScalarType, Schema}
};

/// Computes field sets against one immutable schema universe.
///
/// Holds only shared references, so one generator can serve every entity
/// of a run, including from several threads.
#[derive(Clone)]
pub struct Generator<'a> {
    schema:  &'a Schema,
    naming:  &'a (dyn Naming + Sync),
    paths:   &'a (dyn PathResolver + Sync),
    modules: ImportModules
}

impl<'a> Generator<'a> {
    /// Create a generator with the default import modules.
    #[must_use]
    pub fn new(
        schema: &'a Schema,
        naming: &'a (dyn Naming + Sync),
        paths: &'a (dyn PathResolver + Sync)
    ) -> Self {
        Self {
            schema,
            naming,
            paths,
            modules: ImportModules::default()
        }
    }

    /// Use different modules for the decorator and client imports.
    #[must_use]
    pub fn with_import_modules(mut self, modules: ImportModules) -> Self {
        self.modules = modules;
        self
    }

    /// Schema universe.
    #[must_use]
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Naming convention.
    #[must_use]
    pub fn naming(&self) -> &'a (dyn Naming + Sync) {
        self.naming
    }

    /// Path resolver.
    #[must_use]
    pub fn paths(&self) -> &'a (dyn PathResolver + Sync) {
        self.paths
    }

    /// Create input field set.
    ///
    /// # Errors
    ///
    /// Fails on unresolved relation or enum targets, relation inputs without
    /// a usable target key, unknown scalars and import conflicts.
    pub fn create(&self, entity: &Entity) -> Result<FieldSet> {
        let set = create::compute(self, entity)?;
        log_computed(&set, "create");
        Ok(set)
    }

    /// Update input field set.
    ///
    /// # Errors
    ///
    /// Same conditions as [`create`](Self::create).
    pub fn update(&self, entity: &Entity) -> Result<FieldSet> {
        let set = update::compute(self, entity)?;
        log_computed(&set, "update");
        Ok(set)
    }

    /// Read model field set.
    ///
    /// # Errors
    ///
    /// Fails on unresolved relation or enum targets, unknown scalars and
    /// import conflicts.
    pub fn entity(&self, entity: &Entity) -> Result<FieldSet> {
        let set = entity::compute(self, entity)?;
        log_computed(&set, "entity");
        Ok(set)
    }

    /// Connect input field set.
    ///
    /// # Errors
    ///
    /// Fails on unresolved enum targets, unknown scalars and import
    /// conflicts.
    pub fn connect(&self, entity: &Entity) -> Result<FieldSet> {
        let set = connect::compute(self, entity)?;
        log_computed(&set, "connect");
        Ok(set)
    }

    /// All four field sets of one entity.
    ///
    /// # Errors
    ///
    /// Returns the first error of any field set; no partial output is
    /// produced for the entity.
    pub fn model(&self, entity: &Entity) -> Result<ModelParams> {
        debug!(entity = %entity.name, "computing model params");
        Ok(ModelParams {
            connect: self.connect(entity)?,
            create:  self.create(entity)?,
            update:  self.update(entity)?,
            entity:  self.entity(entity)?
        })
    }
}

fn log_computed(set: &FieldSet, surface: &str) {
    debug!(
        entity = %set.entity,
        surface,
        fields = set.fields.len(),
        imports = set.imports.len(),
        extra_types = set.extra_types.len(),
        "computed field set"
    );
}

/// Record why a field was left out of a surface.
fn dropped(entity: &Entity, field: &Field, surface: &str, reason: &str) {
    trace!(entity = %entity.name, field = %field.name, surface, reason, "field dropped");
}

/// Per-computation accumulator.
///
/// Each rule step returns its own value ([`RelationInput`],
/// [`EnumProperties`]) which is absorbed here in encounter order.
#[derive(Debug, Default)]
struct Accumulator {
    fields:       Vec<FieldDescriptor>,
    imports:      Vec<ImportRequirement>,
    extra_types:  Vec<GeneratedType>,
    extra_models: IndexSet<String>
}

impl Accumulator {
    fn absorb_relation_input(&mut self, input: RelationInput) {
        self.imports.extend(input.imports);
        self.extra_models.extend(input.extra_models);
        self.extra_types.push(input.generated);
    }

    fn absorb_enum(&mut self, descriptor: &mut FieldDescriptor, api: &mut ApiProperty, props: EnumProperties) {
        descriptor.ty = props.type_name;
        api.enum_values = props.enum_values;
        api.type_name = Some(props.presented_type);
        self.imports.push(props.import);
    }

    /// Post-pass shared by all surfaces.
    ///
    /// Prepends the schema client import when a scalar needs its namespace,
    /// then the decorator import when any descriptor carries presentation
    /// metadata or extra types must be registered, and merges everything
    /// into one requirement per module.
    fn finish(self, generator: &Generator<'_>, entity: &Entity) -> Result<FieldSet> {
        let modules = &generator.modules;
        let mut head = Vec::new();

        if needs_client_namespace(&self.fields)? {
            head.push(ImportRequirement::named(&modules.client, [&modules.client_namespace]));
        }

        let has_api_property = self.fields.iter().any(|f| f.api_property.is_some());
        if has_api_property || !self.extra_models.is_empty() {
            let mut names = Vec::new();
            if !self.extra_models.is_empty() {
                names.push("ApiExtraModels");
            }
            if has_api_property {
                names.push("ApiProperty");
            }
            head.push(ImportRequirement::named(&modules.decorators, names));
        }

        Ok(FieldSet {
            entity:       entity.name.clone(),
            fields:       self.fields,
            imports:      zip(head.into_iter().chain(self.imports))?,
            extra_types:  self.extra_types,
            extra_models: self.extra_models.into_iter().collect()
        })
    }
}

/// Check emitted scalar descriptors for client-namespace types.
///
/// # Errors
///
/// Returns [`Error::UnknownScalar`] for a scalar type the generator does not
/// know.
fn needs_client_namespace(fields: &[FieldDescriptor]) -> Result<bool> {
    let mut needed = false;
    for field in fields.iter().filter(|f| f.kind == DescriptorKind::Scalar) {
        let scalar: ScalarType = field.ty.parse()?;
        needed |= scalar.uses_client_namespace();
    }
    Ok(needed)
}

/// Convert a lookup failure at `entity.field` into the fatal error.
fn unresolved(entity: &Entity, field: &Field) -> impl FnOnce(crate::schema::Unresolved) -> Error {
    move |outcome| outcome.at(entity, field)
}
