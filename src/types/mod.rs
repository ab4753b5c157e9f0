//! Primitive value type names

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Names of the primitive value types a decoded document can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeName {
    Null,
    Bool,
    Int,
    Float,
    String,
    Array,
    Object,
}

impl TypeName {
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeName::Null => "null",
            TypeName::Bool => "bool",
            TypeName::Int => "int",
            TypeName::Float => "float",
            TypeName::String => "string",
            TypeName::Array => "array",
            TypeName::Object => "object",
        }
    }

    /// All type names.
    pub const fn all() -> &'static [TypeName] {
        &[
            TypeName::Null,
            TypeName::Bool,
            TypeName::Int,
            TypeName::Float,
            TypeName::String,
            TypeName::Array,
            TypeName::Object,
        ]
    }

    /// Scalar type names.
    pub const fn scalars() -> &'static [TypeName] {
        &[
            TypeName::Bool,
            TypeName::Int,
            TypeName::Float,
            TypeName::String,
        ]
    }

    /// Container type names.
    pub const fn complexes() -> &'static [TypeName] {
        &[TypeName::Array, TypeName::Object]
    }

    /// Classify a decoded JSON value.
    pub fn of(value: &Value) -> TypeName {
        match value {
            Value::Null => TypeName::Null,
            Value::Bool(_) => TypeName::Bool,
            Value::Number(n) if n.is_f64() => TypeName::Float,
            Value::Number(_) => TypeName::Int,
            Value::String(_) => TypeName::String,
            Value::Array(_) => TypeName::Array,
            Value::Object(_) => TypeName::Object,
        }
    }

    pub fn is_scalar(self) -> bool {
        Self::scalars().contains(&self)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
