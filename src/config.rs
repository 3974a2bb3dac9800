// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! Options are read from the generator block of the schema, every key
//! optional:
//!
//! ```text
//! generator dto {
//!   provider         = "entity-dto"
//!   createDtoPrefix  = "Create"
//!   dtoSuffix        = "Dto"
//!   fileNamingStyle  = "kebab"
//! }
//! ```
//!
//! # Defaults
//!
//! | Key | Default |
//! |-----|---------|
//! | `connectDtoPrefix` | `Connect` |
//! | `createDtoPrefix` | `Create` |
//! | `updateDtoPrefix` | `Update` |
//! | `dtoSuffix` | `Dto` |
//! | `entityPrefix` / `entitySuffix` | empty |
//! | `enumPrefix` / `enumSuffix` | empty |
//! | `fileNamingStyle` | `camel` |
//! | `decoratorModule` | `@nestjs/swagger` |
//! | `clientModule` | `@prisma/client` |
//! | `clientNamespace` | `Prisma` |

use convert_case::{Case, Casing};
use serde::Deserialize;

use crate::{error::Result, naming::NamingConvention};

/// Case applied to generated file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileNamingStyle {
    /// `createUser.dto`
    #[default]
    Camel,
    /// `create-user.dto`
    Kebab,
    /// `CreateUser.dto`
    Pascal,
    /// `create_user.dto`
    Snake
}

impl FileNamingStyle {
    /// Convert a name to this case.
    #[must_use]
    pub fn apply(self, name: &str) -> String {
        match self {
            Self::Camel => name.to_case(Case::Camel),
            Self::Kebab => name.to_case(Case::Kebab),
            Self::Pascal => name.to_case(Case::Pascal),
            Self::Snake => name.to_case(Case::Snake)
        }
    }
}

/// Modules the post-pass imports are taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportModules {
    /// Module exporting the presentation decorators (`ApiProperty`,
    /// `ApiExtraModels`).
    pub decorators: String,

    /// Module exporting the schema client.
    pub client: String,

    /// Auxiliary namespace of the schema client (`Decimal`, `JsonValue`).
    pub client_namespace: String
}

impl Default for ImportModules {
    fn default() -> Self {
        Self {
            decorators:       "@nestjs/swagger".to_string(),
            client:           "@prisma/client".to_string(),
            client_namespace: "Prisma".to_string()
        }
    }
}

/// Generator options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Prefix of connect DTO names.
    pub connect_dto_prefix: String,
    /// Prefix of create DTO names.
    pub create_dto_prefix:  String,
    /// Prefix of update DTO names.
    pub update_dto_prefix:  String,
    /// Suffix of every DTO name.
    pub dto_suffix:         String,
    /// Prefix of entity names.
    pub entity_prefix:      String,
    /// Suffix of entity names.
    pub entity_suffix:      String,
    /// Prefix of enum names.
    pub enum_prefix:        String,
    /// Suffix of enum names.
    pub enum_suffix:        String,
    /// Case of generated file names.
    pub file_naming_style:  FileNamingStyle,
    /// Module of the presentation decorators.
    pub decorator_module:   String,
    /// Module of the schema client.
    pub client_module:      String,
    /// Auxiliary namespace of the schema client.
    pub client_namespace:   String
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let modules = ImportModules::default();
        Self {
            connect_dto_prefix: "Connect".to_string(),
            create_dto_prefix:  "Create".to_string(),
            update_dto_prefix:  "Update".to_string(),
            dto_suffix:         "Dto".to_string(),
            entity_prefix:      String::new(),
            entity_suffix:      String::new(),
            enum_prefix:        String::new(),
            enum_suffix:        String::new(),
            file_naming_style:  FileNamingStyle::default(),
            decorator_module:   modules.decorators,
            client_module:      modules.client,
            client_namespace:   modules.client_namespace
        }
    }
}

impl GeneratorConfig {
    /// Parse options from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Document`](crate::Error::Document) on malformed
    /// input or an unknown file naming style.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Naming convention described by these options.
    #[must_use]
    pub fn naming(&self) -> NamingConvention {
        NamingConvention::from_config(self)
    }

    /// Modules used by the post-pass imports.
    #[must_use]
    pub fn import_modules(&self) -> ImportModules {
        ImportModules {
            decorators:       self.decorator_module.clone(),
            client:           self.client_module.clone(),
            client_namespace: self.client_namespace.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.dto_suffix, "Dto");
        assert_eq!(config.file_naming_style, FileNamingStyle::Camel);
    }

    #[test]
    fn partial_override() {
        let config =
            GeneratorConfig::from_json(r#"{"dtoSuffix": "Input", "fileNamingStyle": "kebab"}"#)
                .unwrap();
        assert_eq!(config.dto_suffix, "Input");
        assert_eq!(config.create_dto_prefix, "Create");
        assert_eq!(config.file_naming_style, FileNamingStyle::Kebab);
    }

    #[test]
    fn unknown_style_is_rejected() {
        assert!(GeneratorConfig::from_json(r#"{"fileNamingStyle": "title"}"#).is_err());
    }

    #[test]
    fn file_naming_styles() {
        assert_eq!(FileNamingStyle::Camel.apply("BlogPost"), "blogPost");
        assert_eq!(FileNamingStyle::Kebab.apply("BlogPost"), "blog-post");
        assert_eq!(FileNamingStyle::Pascal.apply("blogPost"), "BlogPost");
        assert_eq!(FileNamingStyle::Snake.apply("BlogPost"), "blog_post");
    }

    #[test]
    fn import_modules_follow_config() {
        let config = GeneratorConfig {
            client_module: "@db/client".to_string(),
            ..GeneratorConfig::default()
        };
        let modules = config.import_modules();
        assert_eq!(modules.client, "@db/client");
        assert_eq!(modules.decorators, "@nestjs/swagger");
    }
}
