// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

//! # entity-dto
//!
//! Rule engine that derives DTO field sets from a data-model schema.
//!
//! For every entity of a schema the [`Generator`] computes what a create
//! input, an update input, a connect input and a read model contain: which
//! fields survive, with which type, required-ness and nullability, plus the
//! imports and nested-write input types they need. Rendering the result into
//! source text is left to the caller.
//!
//! # Overview
//!
//! - [`schema`] — entities, fields and enums, deserializable from DMMF JSON
//! - [`annotation`] — `@Dto...` directives parsed from documentation
//! - [`dto`] — the field-set computers
//! - [`relation`] — relation scalars and connect-by fields
//! - [`imports`] — import requirements and their merging
//! - [`naming`], [`paths`] — injected naming and path capabilities
//! - [`config`] — generator options
//!
//! # Quick Start
//!
//! ```rust
//! use entity_dto::{Generator, config::GeneratorConfig, paths::RelativePaths, schema::Schema};
//!
//! let schema = Schema::from_json(
//!     r#"{
//!         "models": [{
//!             "name": "User",
//!             "fields": [
//!                 { "name": "id", "kind": "scalar", "type": "Int", "isId": true,
//!                   "isRequired": true, "hasDefaultValue": true,
//!                   "default": { "name": "autoincrement", "args": [] } },
//!                 { "name": "email", "kind": "scalar", "type": "String",
//!                   "isRequired": true, "isUnique": true },
//!                 { "name": "password", "kind": "scalar", "type": "String",
//!                   "isRequired": true, "documentation": "@DtoEntityHidden" }
//!             ]
//!         }],
//!         "enums": []
//!     }"#
//! )?;
//!
//! let naming = GeneratorConfig::default().naming();
//! let generator = Generator::new(&schema, &naming, &RelativePaths);
//!
//! for entity in schema.generatable_entities() {
//!     let params = generator.model(entity)?;
//!     assert_eq!(params.create.field_names().collect::<Vec<_>>(), ["email", "password"]);
//!     assert_eq!(params.entity.field_names().collect::<Vec<_>>(), ["id", "email"]);
//! }
//! # Ok::<(), entity_dto::Error>(())
//! ```

pub mod annotation;
pub mod config;
pub mod dto;
pub mod error;
pub mod imports;
pub mod naming;
pub mod paths;
pub mod relation;
pub mod schema;

pub use dto::Generator;
pub use error::{Error, Result};
