//! The `axcell.uuid` binding surface.
//!
//! Hosts reach the UUID engine through two entry points: [`call_function`] for the free
//! functions that build new handles, and [`call_method`] for operations on a receiver
//! handle. Both take host values as [`Object`]s, validate them against the registered
//! type descriptor, run the engine operation and wrap the result back into an `Object`.
//! The host's own equality operator is routed through [`equals`].

use std::cmp::Ordering;

use crate::{
    args::{ArgValues, expect_bytes, expect_handle, expect_handle_mut, expect_str},
    error::{Error, Result},
    handle::Handle,
    object::Object,
    registry::{TypeRegistry, UUID_TYPE_NAME},
    uuid::{UnparseFormat, Uuid, ordering_to_int},
};

/// Free functions of the uuid module; each returns a new handle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantNames,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum UuidFunctions {
    /// A new random (version 4) UUID.
    Generate,
    /// Decode the canonical string form.
    Parse,
    /// Build from exactly sixteen bytes.
    FromBytes,
    /// The all-zero UUID.
    Nil,
}

/// Methods callable on a UUID handle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantNames,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum UuidMethods {
    /// A new handle holding a copy of the receiver's bytes.
    Clone,
    /// The canonical string, with an optional `"upper"`/`"lower"` format.
    Unparse,
    /// Zero the receiver in place and return it.
    Clear,
    IsNull,
    /// Equality with another UUID handle, as a boolean.
    Compare,
    /// Byte-wise ordering against another UUID handle, as `-1`, `0` or `1`.
    Cmp,
    Bytes,
    Version,
}

/// Outcome of a method call.
#[derive(Debug, Clone, PartialEq)]
pub enum CallResult {
    /// A freshly produced value.
    Value(Object),
    /// The receiver itself, so calls can be chained.
    Receiver,
}

impl CallResult {
    /// Resolves `Receiver` against the object the method was called on.
    #[must_use]
    pub fn into_object(self, receiver: &Object) -> Object {
        match self {
            Self::Value(value) => value,
            Self::Receiver => receiver.clone(),
        }
    }
}

/// Dispatches a call to a uuid module function.
pub fn call_function(registry: &'static TypeRegistry, function: UuidFunctions, args: ArgValues) -> Result<Object> {
    tracing::trace!(%function, args = args.count(), "uuid function call");
    let name: &'static str = function.into();
    let value = match function {
        UuidFunctions::Generate => {
            args.check_zero_args(name)?;
            Uuid::generate().map_err(|source| Error::ResourceExhaustion { function: name, source })?
        }
        UuidFunctions::Parse => {
            let arg = args.get_one_arg(name)?;
            let text = expect_str(&arg, name, 1)?;
            Uuid::parse(text).map_err(|source| Error::MalformedInput { function: name, source })?
        }
        UuidFunctions::FromBytes => {
            let arg = args.get_one_arg(name)?;
            let bytes = expect_bytes(&arg, name, 1)?;
            Uuid::from_slice(bytes).map_err(|source| Error::MalformedInput { function: name, source })?
        }
        UuidFunctions::Nil => {
            args.check_zero_args(name)?;
            Uuid::nil()
        }
    };
    Ok(Object::Handle(Handle::new_uuid(registry, value)))
}

/// Dispatches a method call on `receiver`, which must be a UUID handle.
///
/// Only [`UuidMethods::Clear`] mutates the receiver; every other method leaves it untouched.
pub fn call_method(
    registry: &'static TypeRegistry,
    receiver: &mut Object,
    method: UuidMethods,
    args: ArgValues,
) -> Result<CallResult> {
    tracing::trace!(%method, args = args.count(), "uuid method call");
    let name: &'static str = method.into();
    let descriptor = registry.uuid();
    let handle = expect_handle_mut(receiver, descriptor, name, 0)?;

    let value = match method {
        UuidMethods::Clone => {
            args.check_zero_args(name)?;
            Object::Handle(Handle::new_uuid(registry, handle.uuid()))
        }
        UuidMethods::Unparse => {
            let format = format_option(args.get_zero_one_arg(name)?.as_ref());
            Object::String(handle.uuid().unparse(format))
        }
        UuidMethods::Clear => {
            args.check_zero_args(name)?;
            handle.uuid_mut().clear();
            return Ok(CallResult::Receiver);
        }
        UuidMethods::IsNull => {
            args.check_zero_args(name)?;
            Object::Bool(handle.uuid().is_null())
        }
        UuidMethods::Compare => {
            let arg = args.get_one_arg(name)?;
            let other = expect_handle(&arg, descriptor, name, 1)?;
            Object::Bool(*handle == *other)
        }
        UuidMethods::Cmp => {
            let arg = args.get_one_arg(name)?;
            let other = expect_handle(&arg, descriptor, name, 1)?;
            Object::Int(ordering_to_int(handle.uuid().compare(&other.uuid())))
        }
        UuidMethods::Bytes => {
            args.check_zero_args(name)?;
            Object::Bytes(handle.uuid().as_bytes().to_vec())
        }
        UuidMethods::Version => {
            args.check_zero_args(name)?;
            handle.uuid().version().map_or(Object::None, |version| Object::Int(i64::from(version)))
        }
    };
    Ok(CallResult::Value(value))
}

/// The host equality operator.
///
/// Returns `None` unless both sides are handles of the same type, in which case the
/// host should fall back to its default comparison.
#[must_use]
pub fn equals(lhs: &Object, rhs: &Object) -> Option<bool> {
    match (lhs, rhs) {
        (Object::Handle(lhs), Object::Handle(rhs)) if lhs.is_a(rhs.descriptor()) => Some(lhs == rhs),
        _ => None,
    }
}

/// The host ordering operators, with the same `None` convention as [`equals`].
#[must_use]
pub fn compare(lhs: &Object, rhs: &Object) -> Option<Ordering> {
    match (lhs, rhs) {
        (Object::Handle(lhs), Object::Handle(rhs)) => lhs.compare(rhs),
        _ => None,
    }
}

/// Resolves a function by the name a host uses for it.
pub fn lookup_function(name: &str) -> Result<UuidFunctions> {
    name.parse().map_err(|_| Error::UnknownMethod {
        type_name: UUID_TYPE_NAME,
        name: name.to_owned(),
    })
}

/// Resolves a method by the name a host uses for it.
pub fn lookup_method(name: &str) -> Result<UuidMethods> {
    name.parse().map_err(|_| Error::UnknownMethod {
        type_name: UUID_TYPE_NAME,
        name: name.to_owned(),
    })
}

fn format_option(arg: Option<&Object>) -> UnparseFormat {
    match arg {
        Some(Object::String(name)) => UnparseFormat::from_option(Some(name)),
        Some(other) if !other.is_none() => {
            tracing::debug!(found = other.type_name(), "non-string unparse format, using default");
            UnparseFormat::Default
        }
        _ => UnparseFormat::Default,
    }
}
