// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Scalar types known to the generator.

use std::str::FromStr;

use crate::error::Error;

/// Built-in scalar type of the schema language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// Text.
    String,
    /// Boolean.
    Boolean,
    /// 32-bit integer.
    Int,
    /// 64-bit integer.
    BigInt,
    /// Floating point number.
    Float,
    /// Arbitrary precision decimal.
    Decimal,
    /// Timestamp.
    DateTime,
    /// JSON document.
    Json,
    /// Binary blob.
    Bytes
}

impl ScalarType {
    /// Whether the output representation lives in the schema client's
    /// auxiliary namespace (`Prisma.Decimal`, `Prisma.JsonValue`).
    #[must_use]
    pub const fn uses_client_namespace(self) -> bool {
        matches!(self, Self::Decimal | Self::Json)
    }
}

impl FromStr for ScalarType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "String" => Ok(Self::String),
            "Boolean" => Ok(Self::Boolean),
            "Int" => Ok(Self::Int),
            "BigInt" => Ok(Self::BigInt),
            "Float" => Ok(Self::Float),
            "Decimal" => Ok(Self::Decimal),
            "DateTime" => Ok(Self::DateTime),
            "Json" => Ok(Self::Json),
            "Bytes" => Ok(Self::Bytes),
            other => Err(Error::UnknownScalar(other.to_string()))
        }
    }
}
