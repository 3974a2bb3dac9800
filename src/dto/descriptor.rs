// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Output units of the field-set computers.
//!
//! A [`FieldDescriptor`] describes one field on one generated surface. Its
//! flags are the flags of the *surface*, which differ from the schema flags
//! whenever a rule overrides them:
//!
//! | Schema field | Create | Update | Entity |
//! |--------------|--------|--------|--------|
//! | `title String` | required | optional | required |
//! | `bio String?` | optional | optional | required, nullable |
//! | `author User?` (nested write) | relation input | relation input | optional, nullable |

use serde_json::Value;

use crate::{
    annotation::Directive,
    imports::ImportRequirement,
    schema::{DefaultValue, Field, FieldKind}
};

/// What a descriptor's resolved type refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    /// Schema scalar (`String`, `Int`, `Decimal`, ...).
    Scalar,
    /// Generated enum.
    Enum,
    /// Synthesized nested-write input type.
    RelationInput,
    /// Related entity class on the read model.
    Relation
}

/// Default value shown in presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentedDefault {
    /// Literal text.
    Literal(String),
    /// Current timestamp (`now()`).
    Now,
    /// Database expression (`dbgenerated("...")`).
    DbGenerated(String),
    /// Any other generator, by name (`autoincrement`, `uuid`, `cuid`).
    Generator(String)
}

impl PresentedDefault {
    /// Resolve the default to present for a field.
    ///
    /// A `@DtoDefaultValue` directive wins over the schema default.
    #[must_use]
    pub fn resolve(field: &Field) -> Option<Self> {
        if let Some(value) = field.annotation_value(Directive::DefaultValue) {
            return Some(Self::Literal(value.to_string()));
        }
        field.default.as_ref().map(Self::from_schema)
    }

    fn from_schema(default: &DefaultValue) -> Self {
        match default {
            DefaultValue::Literal(value) => Self::Literal(literal_text(value)),
            DefaultValue::Generator { name, .. } if name == "now" => Self::Now,
            DefaultValue::Generator { name, args } if name == "dbgenerated" => {
                Self::DbGenerated(args.first().map(literal_text).unwrap_or_default())
            }
            DefaultValue::Generator { name, .. } => Self::Generator(name.clone())
        }
    }
}

fn literal_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string()
    }
}

/// Presentation metadata attached to a descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiProperty {
    /// Default value to show.
    pub default:     Option<PresentedDefault>,
    /// Whether the presented type is a list.
    pub is_array:    bool,
    /// Allowed enum values.
    pub enum_values: Option<Vec<String>>,
    /// Presented type name.
    pub type_name:   Option<String>
}

impl ApiProperty {
    /// Check whether there is anything to present.
    ///
    /// `is_array` alone does not count; it only qualifies the other entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.enum_values.is_none() && self.type_name.is_none()
    }

    pub(super) fn into_option(self) -> Option<Self> {
        (!self.is_empty()).then_some(self)
    }
}

/// One field on one generated surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name:         String,
    /// Resolved output type name.
    pub ty:           String,
    /// What `ty` refers to.
    pub kind:         DescriptorKind,
    /// Whether the surface requires the field.
    pub is_required:  bool,
    /// Whether the surface allows `null`.
    pub is_nullable:  bool,
    /// Whether the surface type is a list.
    pub is_list:      bool,
    /// Presentation metadata, if any.
    pub api_property: Option<ApiProperty>
}

impl FieldDescriptor {
    /// Descriptor carrying the schema flags unchanged.
    #[must_use]
    pub fn from_field(field: &Field) -> Self {
        let kind = match field.kind {
            FieldKind::Enum => DescriptorKind::Enum,
            FieldKind::Object => DescriptorKind::Relation,
            FieldKind::Scalar | FieldKind::Unsupported => DescriptorKind::Scalar
        };
        Self {
            name: field.name.clone(),
            ty: field.type_name.clone(),
            kind,
            is_required: field.is_required(),
            is_nullable: false,
            is_list: field.is_list,
            api_property: None
        }
    }
}

/// Property of a synthesized relation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationInputAction {
    /// Create the related record inline.
    Create,
    /// Attach an existing related record.
    Connect
}

impl RelationInputAction {
    /// Property name on the generated type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Connect => "connect"
        }
    }
}

/// `create` or `connect` property of a synthesized relation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationInputProperty {
    /// Which nested write this property performs.
    pub action:      RelationInputAction,
    /// Target input type (`CreateUserDto`, `ConnectUserDto`).
    pub type_name:   String,
    /// Required only when it is the single property of the input.
    pub is_required: bool,
    /// Mirrors the list-ness of the relation.
    pub is_list:     bool
}

/// Auxiliary type body ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedType {
    /// Type name.
    pub name:       String,
    /// Properties in declaration order.
    pub properties: Vec<RelationInputProperty>
}

/// Everything a renderer needs for one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    /// Entity the set was computed for.
    pub entity:       String,
    /// Descriptors in declared field order.
    pub fields:       Vec<FieldDescriptor>,
    /// One requirement per source module, in first-seen order.
    pub imports:      Vec<ImportRequirement>,
    /// Synthesized relation-input types.
    pub extra_types:  Vec<GeneratedType>,
    /// Type names to register for documentation, without duplicates.
    pub extra_models: Vec<String>
}

impl FieldSet {
    /// Descriptor by field name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names in output order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// All field sets of one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelParams {
    /// Connect input.
    pub connect: FieldSet,
    /// Create input.
    pub create:  FieldSet,
    /// Update input.
    pub update:  FieldSet,
    /// Read model.
    pub entity:  FieldSet
}
