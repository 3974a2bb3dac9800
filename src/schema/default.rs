// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema-level default values.

use serde::Deserialize;
use serde_json::Value;

/// Default value declared on a field in the schema.
///
/// Either a literal (`@default("draft")`, `@default(0)`) or a named
/// generator evaluated by the database or the client (`@default(now())`,
/// `@default(dbgenerated("gen_random_uuid()"))`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Named generator with its arguments.
    Generator {
        /// Generator name (`now`, `autoincrement`, `uuid`, `dbgenerated`).
        name: String,
        /// Generator arguments as written in the schema.
        #[serde(default)]
        args: Vec<Value>
    },

    /// Literal value.
    Literal(Value)
}

impl DefaultValue {
    /// Literal default.
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal(value.into())
    }

    /// Generator default without arguments.
    #[must_use]
    pub fn generator(name: impl Into<String>) -> Self {
        Self::Generator {
            name: name.into(),
            args: Vec::new()
        }
    }

    /// Generator default with arguments.
    #[must_use]
    pub fn generator_with(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self::Generator {
            name: name.into(),
            args
        }
    }
}
