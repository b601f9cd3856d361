//! Process-wide type descriptors for host-visible handles.
//!
//! Each handle kind has one [`TypeDescriptor`] naming it and listing the functions and
//! methods a host may call on it, plus the comparison used when the host applies its own
//! equality operator to two handles. Descriptors live in a [`TypeRegistry`] that is built
//! exactly once by [`init`] and never mutated afterwards.

use std::{cmp::Ordering, sync::OnceLock};

use strum::VariantNames;

use crate::{
    error::{Error, Result},
    handle::HandleData,
    module::{UuidFunctions, UuidMethods},
};

/// Name under which UUID handles are registered.
pub const UUID_TYPE_NAME: &str = "axcell.uuid.uuid";

static REGISTRY: OnceLock<TypeRegistry> = OnceLock::new();

/// Describes one kind of handle to the host.
///
/// Descriptors are compared by identity: a handle belongs to a type if it carries a
/// pointer to that type's registered descriptor.
#[derive(Debug)]
pub struct TypeDescriptor {
    pub name: &'static str,
    /// Free functions that construct handles of this type.
    pub functions: &'static [&'static str],
    /// Methods callable on a handle of this type.
    pub methods: &'static [&'static str],
    /// The host's equality operator.
    pub eq: fn(&HandleData, &HandleData) -> bool,
    /// The host's ordering operators.
    pub cmp: fn(&HandleData, &HandleData) -> Ordering,
}

impl TypeDescriptor {
    /// Identity comparison; two descriptors are the same type only if they are the same registration.
    #[must_use]
    pub fn is(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }

    #[must_use]
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains(&name)
    }

    #[must_use]
    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains(&name)
    }
}

/// Every type descriptor known to the binding surface.
#[derive(Debug)]
pub struct TypeRegistry {
    uuid: TypeDescriptor,
}

impl TypeRegistry {
    fn new() -> Self {
        Self {
            uuid: TypeDescriptor {
                name: UUID_TYPE_NAME,
                functions: UuidFunctions::VARIANTS,
                methods: UuidMethods::VARIANTS,
                eq: uuid_eq,
                cmp: uuid_cmp,
            },
        }
    }

    /// The descriptor for UUID handles.
    #[must_use]
    pub fn uuid(&self) -> &TypeDescriptor {
        &self.uuid
    }

    /// Looks a descriptor up by its registered name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
        self.descriptors().find(|descriptor| descriptor.name == name)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &TypeDescriptor> {
        std::iter::once(&self.uuid)
    }
}

/// Registers every type descriptor, returning the registry.
///
/// Hosts call this from their module entry point before handing out any handle. Calling
/// it again is harmless and returns the same registry.
pub fn init() -> &'static TypeRegistry {
    REGISTRY.get_or_init(|| {
        let registry = TypeRegistry::new();
        for descriptor in registry.descriptors() {
            tracing::debug!(
                name = descriptor.name,
                functions = ?descriptor.functions,
                methods = ?descriptor.methods,
                "registered handle type"
            );
        }
        registry
    })
}

/// Returns the registry built by [`init`].
pub fn registry() -> Result<&'static TypeRegistry> {
    REGISTRY.get().ok_or(Error::NotInitialized)
}

fn uuid_eq(lhs: &HandleData, rhs: &HandleData) -> bool {
    uuid_cmp(lhs, rhs) == Ordering::Equal
}

fn uuid_cmp(lhs: &HandleData, rhs: &HandleData) -> Ordering {
    match (lhs, rhs) {
        (HandleData::Uuid(lhs), HandleData::Uuid(rhs)) => lhs.compare(rhs),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let first = init();
        let second = init();
        assert!(std::ptr::eq(first, second));
        assert!(first.uuid().is(second.uuid()));
        assert!(std::ptr::eq(registry().unwrap(), first));
    }

    #[test]
    fn uuid_descriptor_lists_operations() {
        let uuid = init().uuid();
        assert_eq!(uuid.name, UUID_TYPE_NAME);
        for function in ["generate", "parse", "from_bytes", "nil"] {
            assert!(uuid.has_function(function), "missing function {function}");
        }
        for method in ["clone", "unparse", "clear", "is_null", "compare", "cmp", "bytes", "version"] {
            assert!(uuid.has_method(method), "missing method {method}");
        }
        assert!(!uuid.has_method("parse"));
    }

    #[test]
    fn lookup_by_name() {
        let registry = init();
        assert!(registry.lookup(UUID_TYPE_NAME).unwrap().is(registry.uuid()));
        assert!(registry.lookup("axcell.mqtt.Token").is_none());
    }
}
