// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Naming conventions for generated types and files.
//!
//! The field-set computers never build a type or file name themselves; they
//! ask a [`Naming`] implementation. [`NamingConvention`] is the configurable
//! default.
//!
//! # Examples
//!
//! For entity `User` with default options:
//!
//! | Method | Result |
//! |--------|--------|
//! | `create_dto_name` | `CreateUserDto` |
//! | `update_dto_name` | `UpdateUserDto` |
//! | `connect_dto_name` | `ConnectUserDto` |
//! | `entity_name` | `User` |
//! | `create_dto_filename` | `create-user.dto` |
//! | `entity_filename` | `user.entity` |

use convert_case::{Case, Casing};

use crate::config::{FileNamingStyle, GeneratorConfig};

/// Name derivation for each generated output kind.
pub trait Naming {
    /// Case transform applied to class names before prefixing.
    fn class_name_case(&self, name: &str) -> String;

    /// Name of the entity (read model) class.
    fn entity_name(&self, name: &str) -> String;

    /// Name of the enum.
    fn enum_name(&self, name: &str) -> String;

    /// Name of the connect input.
    fn connect_dto_name(&self, name: &str) -> String;

    /// Name of the create input.
    fn create_dto_name(&self, name: &str) -> String;

    /// Name of the update input.
    fn update_dto_name(&self, name: &str) -> String;

    /// File name (without extension) of the connect input.
    fn connect_dto_filename(&self, name: &str) -> String;

    /// File name (without extension) of the create input.
    fn create_dto_filename(&self, name: &str) -> String;

    /// File name (without extension) of the update input.
    fn update_dto_filename(&self, name: &str) -> String;

    /// File name (without extension) of the entity.
    fn entity_filename(&self, name: &str) -> String;

    /// File name (without extension) of the enum.
    fn enum_filename(&self, name: &str) -> String;
}

/// Prefix/suffix naming with pascal-cased class names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    connect_dto_prefix: String,
    create_dto_prefix:  String,
    update_dto_prefix:  String,
    dto_suffix:         String,
    entity_prefix:      String,
    entity_suffix:      String,
    enum_prefix:        String,
    enum_suffix:        String,
    file_style:         FileNamingStyle
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }
}

impl NamingConvention {
    /// Build from generator options.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            connect_dto_prefix: config.connect_dto_prefix.clone(),
            create_dto_prefix:  config.create_dto_prefix.clone(),
            update_dto_prefix:  config.update_dto_prefix.clone(),
            dto_suffix:         config.dto_suffix.clone(),
            entity_prefix:      config.entity_prefix.clone(),
            entity_suffix:      config.entity_suffix.clone(),
            enum_prefix:        config.enum_prefix.clone(),
            enum_suffix:        config.enum_suffix.clone(),
            file_style:         config.file_naming_style
        }
    }

    fn class_name(&self, name: &str, prefix: &str, suffix: &str) -> String {
        format!("{prefix}{}{suffix}", self.class_name_case(name))
    }

    fn file_name(&self, name: &str, prefix: &str, suffix: &str) -> String {
        format!("{prefix}{}{suffix}", self.file_style.apply(name))
    }
}

impl Naming for NamingConvention {
    fn class_name_case(&self, name: &str) -> String {
        name.to_case(Case::Pascal)
    }

    fn entity_name(&self, name: &str) -> String {
        self.class_name(name, &self.entity_prefix, &self.entity_suffix)
    }

    fn enum_name(&self, name: &str) -> String {
        self.class_name(name, &self.enum_prefix, &self.enum_suffix)
    }

    fn connect_dto_name(&self, name: &str) -> String {
        self.class_name(name, &self.connect_dto_prefix, &self.dto_suffix)
    }

    fn create_dto_name(&self, name: &str) -> String {
        self.class_name(name, &self.create_dto_prefix, &self.dto_suffix)
    }

    fn update_dto_name(&self, name: &str) -> String {
        self.class_name(name, &self.update_dto_prefix, &self.dto_suffix)
    }

    fn connect_dto_filename(&self, name: &str) -> String {
        self.file_name(name, "connect-", ".dto")
    }

    fn create_dto_filename(&self, name: &str) -> String {
        self.file_name(name, "create-", ".dto")
    }

    fn update_dto_filename(&self, name: &str) -> String {
        self.file_name(name, "update-", ".dto")
    }

    fn entity_filename(&self, name: &str) -> String {
        self.file_name(name, "", ".entity")
    }

    fn enum_filename(&self, name: &str) -> String {
        self.file_name(name, "", ".enum")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_class_names() {
        let naming = NamingConvention::default();
        assert_eq!(naming.create_dto_name("User"), "CreateUserDto");
        assert_eq!(naming.update_dto_name("User"), "UpdateUserDto");
        assert_eq!(naming.connect_dto_name("User"), "ConnectUserDto");
        assert_eq!(naming.entity_name("User"), "User");
        assert_eq!(naming.enum_name("Role"), "Role");
    }

    #[test]
    fn class_names_are_pascal_cased() {
        let naming = NamingConvention::default();
        assert_eq!(naming.entity_name("blogPost"), "BlogPost");
        assert_eq!(
            naming.create_dto_name("PostAuthorRelationInput"),
            "CreatePostAuthorRelationInputDto"
        );
    }

    #[test]
    fn configured_affixes() {
        let config = GeneratorConfig {
            entity_suffix: "Entity".to_string(),
            enum_prefix: "E".to_string(),
            dto_suffix: "Input".to_string(),
            ..GeneratorConfig::default()
        };
        let naming = config.naming();
        assert_eq!(naming.entity_name("User"), "UserEntity");
        assert_eq!(naming.enum_name("Role"), "ERole");
        assert_eq!(naming.create_dto_name("User"), "CreateUserInput");
    }

    #[test]
    fn file_names_follow_style() {
        let camel = NamingConvention::default();
        assert_eq!(camel.create_dto_filename("BlogPost"), "create-blogPost.dto");
        assert_eq!(camel.entity_filename("BlogPost"), "blogPost.entity");

        let kebab = GeneratorConfig {
            file_naming_style: FileNamingStyle::Kebab,
            ..GeneratorConfig::default()
        }
        .naming();
        assert_eq!(kebab.update_dto_filename("BlogPost"), "update-blog-post.dto");
        assert_eq!(kebab.connect_dto_filename("BlogPost"), "connect-blog-post.dto");
        assert_eq!(kebab.enum_filename("PostStatus"), "post-status.enum");
    }
}
