use std::fmt;

use crate::handle::Handle;

/// A dynamically-typed value crossing the host boundary.
///
/// Hosts convert their own values into `Object`s before calling into the binding surface
/// and convert the results back. Host values that have no native counterpart become
/// [`Object::Opaque`], which keeps only the host's name for the type so that a
/// type-mismatch error can say what was passed.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Bytes(Vec<u8>),
    /// A native value owned by the host.
    Handle(Handle),
    /// A host value the binding surface cannot represent.
    Opaque {
        type_name: String,
    },
}

impl Object {
    /// The name used for this value in type-mismatch errors.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::None => "none",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Handle(handle) => handle.type_name(),
            Self::Opaque { type_name } => type_name,
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub fn as_handle(&self) -> Option<&Handle> {
        match self {
            Self::Handle(handle) => Some(handle),
            _ => None,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
            Self::Bytes(bytes) => bytes.iter().try_for_each(|byte| write!(f, "{byte:02x}")),
            Self::Handle(handle) => write!(f, "{handle}"),
            Self::Opaque { type_name } => write!(f, "<{type_name}>"),
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<u8>> for Object {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Handle> for Object {
    fn from(value: Handle) -> Self {
        Self::Handle(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{registry::init, uuid::Uuid};

    #[test]
    fn type_names() {
        assert_eq!(Object::None.type_name(), "none");
        assert_eq!(Object::from("x").type_name(), "string");
        assert_eq!(Object::from(vec![1u8]).type_name(), "bytes");
        let opaque = Object::Opaque {
            type_name: "dict".to_owned(),
        };
        assert_eq!(opaque.type_name(), "dict");
        let handle = Object::from(crate::handle::Handle::new_uuid(init(), Uuid::nil()));
        assert_eq!(handle.type_name(), "axcell.uuid.uuid");
    }

    #[test]
    fn display_renders_bytes_as_hex() {
        assert_eq!(Object::Bytes(vec![0x00, 0xab, 0x10]).to_string(), "00ab10");
        assert_eq!(Object::Bool(true).to_string(), "true");
    }
}
