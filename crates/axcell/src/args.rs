use std::vec::IntoIter;

use crate::{
    error::{Error, Result},
    handle::Handle,
    object::Object,
    registry::TypeDescriptor,
};

/// Positional arguments passed to a function or method.
///
/// Uses specific variants for the common cases (zero to two arguments), which is all the
/// UUID surface ever takes; longer argument lists only exist to be rejected.
#[derive(Debug, Clone, Default)]
pub enum ArgValues {
    #[default]
    Empty,
    One(Object),
    Two(Object, Object),
    Many(Vec<Object>),
}

impl ArgValues {
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Two(..) => 2,
            Self::Many(args) => args.len(),
        }
    }

    /// Checks that zero arguments were passed.
    pub fn check_zero_args(self, name: &'static str) -> Result<()> {
        match self {
            Self::Empty => Ok(()),
            other => Err(arg_count(name, "no", &other)),
        }
    }

    /// Checks that exactly one positional argument was passed, returning it.
    pub fn get_one_arg(self, name: &'static str) -> Result<Object> {
        match self {
            Self::One(arg) => Ok(arg),
            other => Err(arg_count(name, "exactly one", &other)),
        }
    }

    /// Checks that at most one positional argument was passed, returning it if present.
    pub fn get_zero_one_arg(self, name: &'static str) -> Result<Option<Object>> {
        match self {
            Self::Empty => Ok(None),
            Self::One(arg) => Ok(Some(arg)),
            other => Err(arg_count(name, "at most one", &other)),
        }
    }
}

impl From<Vec<Object>> for ArgValues {
    fn from(args: Vec<Object>) -> Self {
        let mut iter = args.into_iter();
        match (iter.next(), iter.next(), iter.next()) {
            (None, _, _) => Self::Empty,
            (Some(a), None, _) => Self::One(a),
            (Some(a), Some(b), None) => Self::Two(a, b),
            (Some(a), Some(b), Some(c)) => Self::Many([a, b, c].into_iter().chain(iter).collect()),
        }
    }
}

impl IntoIterator for ArgValues {
    type Item = Object;
    type IntoIter = IntoIter<Object>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Empty => Vec::new(),
            Self::One(a) => vec![a],
            Self::Two(a, b) => vec![a, b],
            Self::Many(args) => args,
        }
        .into_iter()
    }
}

fn arg_count(function: &'static str, expected: &'static str, args: &ArgValues) -> Error {
    Error::ArgumentCount {
        function,
        expected,
        found: args.count(),
    }
}

/// Extracts a string argument.
pub fn expect_str<'a>(arg: &'a Object, function: &'static str, position: usize) -> Result<&'a str> {
    match arg {
        Object::String(text) => Ok(text),
        other => Err(mismatch(function, position, "string", other)),
    }
}

/// Extracts a bytes argument.
pub fn expect_bytes<'a>(arg: &'a Object, function: &'static str, position: usize) -> Result<&'a [u8]> {
    match arg {
        Object::Bytes(bytes) => Ok(bytes),
        other => Err(mismatch(function, position, "bytes", other)),
    }
}

/// Extracts a handle tagged with `descriptor`.
pub fn expect_handle<'a>(
    arg: &'a Object,
    descriptor: &'static TypeDescriptor,
    function: &'static str,
    position: usize,
) -> Result<&'a Handle> {
    match arg {
        Object::Handle(handle) if handle.is_a(descriptor) => Ok(handle),
        other => Err(mismatch(function, position, descriptor.name, other)),
    }
}

/// Mutable variant of [`expect_handle`], used for method receivers.
pub fn expect_handle_mut<'a>(
    arg: &'a mut Object,
    descriptor: &'static TypeDescriptor,
    function: &'static str,
    position: usize,
) -> Result<&'a mut Handle> {
    if !matches!(arg, Object::Handle(handle) if handle.is_a(descriptor)) {
        return Err(mismatch(function, position, descriptor.name, arg));
    }
    match arg {
        Object::Handle(handle) => Ok(handle),
        other => Err(mismatch(function, position, descriptor.name, other)),
    }
}

fn mismatch(function: &'static str, position: usize, expected: &'static str, found: &Object) -> Error {
    Error::TypeMismatch {
        function,
        position,
        expected,
        found: found.type_name().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_vec_picks_smallest_variant() {
        assert!(matches!(ArgValues::from(Vec::<Object>::new()), ArgValues::Empty));
        assert!(matches!(ArgValues::from(vec![Object::None]), ArgValues::One(_)));
        assert!(matches!(
            ArgValues::from(vec![Object::None, Object::None]),
            ArgValues::Two(..)
        ));
        let many = ArgValues::from(vec![Object::Int(1), Object::Int(2), Object::Int(3), Object::Int(4)]);
        assert_eq!(many.count(), 4);
        assert_eq!(
            many.into_iter().collect::<Vec<_>>(),
            vec![Object::Int(1), Object::Int(2), Object::Int(3), Object::Int(4)]
        );
    }

    #[test]
    fn arity_errors() {
        assert_eq!(
            ArgValues::One(Object::None).check_zero_args("generate"),
            Err(Error::ArgumentCount {
                function: "generate",
                expected: "no",
                found: 1
            })
        );
        assert_eq!(
            ArgValues::Empty.get_one_arg("parse"),
            Err(Error::ArgumentCount {
                function: "parse",
                expected: "exactly one",
                found: 0
            })
        );
        assert_eq!(
            ArgValues::Two(Object::None, Object::None).get_zero_one_arg("unparse"),
            Err(Error::ArgumentCount {
                function: "unparse",
                expected: "at most one",
                found: 2
            })
        );
        assert_eq!(ArgValues::Empty.get_zero_one_arg("unparse"), Ok(None));
    }

    #[test]
    fn expect_handle_mut_yields_writable_receiver() {
        let registry = crate::registry::init();
        let mut receiver = Object::Handle(Handle::new_uuid(registry, crate::uuid::Uuid::from_bytes([7; 16])));
        expect_handle_mut(&mut receiver, registry.uuid(), "clear", 0)
            .unwrap()
            .uuid_mut()
            .clear();
        assert!(receiver.as_handle().unwrap().uuid().is_null());

        let mut wrong = Object::Bytes(vec![0; 16]);
        assert_eq!(
            expect_handle_mut(&mut wrong, registry.uuid(), "clear", 0),
            Err(Error::TypeMismatch {
                function: "clear",
                position: 0,
                expected: crate::registry::UUID_TYPE_NAME,
                found: "bytes".to_owned()
            })
        );
    }

    #[test]
    fn expect_str_reports_found_type() {
        assert_eq!(expect_str(&Object::from("abc"), "parse", 1), Ok("abc"));
        assert_eq!(
            expect_str(&Object::Int(7), "parse", 1),
            Err(Error::TypeMismatch {
                function: "parse",
                position: 1,
                expected: "string",
                found: "int".to_owned()
            })
        );
    }
}
