// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Enum definitions.

use serde::Deserialize;

/// Enum declared in the schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enum {
    /// Enum name (e.g., `Role`).
    pub name: String,

    /// Storage name when mapped (`@@map`).
    #[serde(default)]
    pub db_name: Option<String>,

    /// Values in declared order.
    #[serde(default)]
    pub values: Vec<EnumValue>,

    /// Directory the enum file is placed in.
    #[serde(default)]
    pub output: String
}

/// One enum value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    /// Canonical value name.
    pub name: String,

    /// Storage name when mapped (`@map`).
    #[serde(default)]
    pub db_name: Option<String>
}

impl Enum {
    /// Create an enum from canonical value names.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            name:    name.into(),
            db_name: None,
            values:  values
                .into_iter()
                .map(|v| EnumValue {
                    name:    v.into(),
                    db_name: None
                })
                .collect(),
            output:  String::new()
        }
    }

    /// Set the output directory.
    #[must_use]
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Name used for presentation: storage name if mapped.
    #[must_use]
    pub fn presented_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }

    /// Value names used for presentation, `None` when the enum is empty.
    #[must_use]
    pub fn presented_values(&self) -> Option<Vec<String>> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().map(|v| v.presented_name().to_string()).collect())
    }
}

impl EnumValue {
    /// Storage name if mapped, canonical name otherwise.
    #[must_use]
    pub fn presented_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }
}
