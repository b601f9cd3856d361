use std::{cmp::Ordering, fmt};

use crate::{
    registry::{TypeDescriptor, TypeRegistry},
    uuid::Uuid,
};

/// A native value as the host sees it: a payload tagged with its type descriptor.
///
/// Handles are `Copy`, so every clone is an independent byte copy and mutating one never
/// shows through another. Whoever holds a handle owns it; dropping it is all the cleanup
/// a handle needs.
#[derive(Debug, Clone, Copy)]
pub struct Handle {
    descriptor: &'static TypeDescriptor,
    data: HandleData,
}

/// The payload embedded in a [`Handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleData {
    Uuid(Uuid),
}

impl Handle {
    /// Wraps a UUID in a handle tagged with the registry's UUID descriptor.
    #[must_use]
    pub fn new_uuid(registry: &'static TypeRegistry, value: Uuid) -> Self {
        Self {
            descriptor: registry.uuid(),
            data: HandleData::Uuid(value),
        }
    }

    #[must_use]
    pub fn descriptor(&self) -> &'static TypeDescriptor {
        self.descriptor
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Whether this handle is tagged with `descriptor`.
    #[must_use]
    pub fn is_a(&self, descriptor: &TypeDescriptor) -> bool {
        self.descriptor.is(descriptor)
    }

    #[must_use]
    pub fn uuid(&self) -> Uuid {
        match self.data {
            HandleData::Uuid(value) => value,
        }
    }

    pub fn uuid_mut(&mut self) -> &mut Uuid {
        match &mut self.data {
            HandleData::Uuid(value) => value,
        }
    }

    /// Orders two handles with their descriptor's comparison, or `None` if they differ in type.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        self.is_a(other.descriptor)
            .then(|| (self.descriptor.cmp)(&self.data, &other.data))
    }
}

/// The equality operator: dispatched through the descriptor, never equal across types.
impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.is_a(other.descriptor) && (self.descriptor.eq)(&self.data, &other.data)
    }
}

impl Eq for Handle {}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            HandleData::Uuid(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::init;

    #[test]
    fn copies_are_independent() {
        let registry = init();
        let original = Handle::new_uuid(registry, Uuid::generate().unwrap());
        let mut copy = original;
        assert_eq!(original, copy);

        copy.uuid_mut().clear();
        assert!(copy.uuid().is_null());
        assert!(!original.uuid().is_null());
        assert_ne!(original, copy);
    }

    #[test]
    fn compare_follows_bytes() {
        let registry = init();
        let low = Handle::new_uuid(registry, Uuid::from_bytes([0; 16]));
        let high = Handle::new_uuid(registry, Uuid::from_bytes([1; 16]));
        assert_eq!(low.compare(&high), Some(Ordering::Less));
        assert_eq!(high.compare(&low), Some(Ordering::Greater));
        assert_eq!(low.compare(&low), Some(Ordering::Equal));
    }

    #[test]
    fn tagged_with_uuid_descriptor() {
        let registry = init();
        let handle = Handle::new_uuid(registry, Uuid::nil());
        assert!(handle.is_a(registry.uuid()));
        assert_eq!(handle.type_name(), "axcell.uuid.uuid");
        assert_eq!(handle.to_string(), "00000000-0000-0000-0000-000000000000");
    }
}
