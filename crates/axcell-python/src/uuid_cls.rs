//! The `UUID` Python class and the module-level constructors.
//!
//! Each `UUID` instance owns one axcell [`Handle`]; Python's garbage collector decides its
//! lifetime. Method bodies convert their arguments to `Object`s and run through the
//! binding surface, so argument checking and error reporting match every other host.

use std::cmp::Ordering;

use ::axcell::{
    ArgValues, Handle, Object, TypeRegistry, UnparseFormat, UuidFunctions, UuidMethods, call_function, call_method,
    compare, equals,
};
use pyo3::{exceptions::PyTypeError, prelude::*, pyclass::CompareOp};

use crate::{
    convert::{object_to_py, py_to_object},
    exceptions::to_py_err,
};

fn registry() -> PyResult<&'static TypeRegistry> {
    ::axcell::registry().map_err(to_py_err)
}

/// A 128-bit universally unique identifier.
///
/// Create one with `generate()`, `parse(text)`, `from_bytes(data)` or `nil()`.
/// Two `UUID`s compare equal with `==` when their sixteen bytes match. `clear()` mutates
/// in place, so instances are unhashable.
#[pyclass(name = "UUID", module = "axcell")]
#[derive(Clone)]
pub struct PyUuid {
    handle: Handle,
}

impl From<Handle> for PyUuid {
    fn from(handle: Handle) -> Self {
        Self { handle }
    }
}

impl PyUuid {
    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// Runs a non-mutating method with this instance as the receiver.
    fn call(&self, py: Python<'_>, method: UuidMethods, args: ArgValues) -> PyResult<Py<PyAny>> {
        let mut receiver = Object::Handle(self.handle);
        let result = call_method(registry()?, &mut receiver, method, args).map_err(to_py_err)?;
        object_to_py(py, result.into_object(&receiver))
    }
}

#[pymethods]
impl PyUuid {
    /// Returns a new, independent `UUID` with the same bytes.
    #[pyo3(name = "clone")]
    fn clone_uuid(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        self.call(py, UuidMethods::Clone, ArgValues::Empty)
    }

    /// Returns the canonical hyphenated string.
    ///
    /// Args:
    ///     format: 'upper' for uppercase hex, 'lower' for lowercase;
    ///             anything else (or nothing) gives the default lowercase form
    #[pyo3(signature = (format = None))]
    fn unparse(&self, py: Python<'_>, format: Option<&Bound<'_, PyAny>>) -> PyResult<Py<PyAny>> {
        let args = match format {
            Some(format) => ArgValues::One(py_to_object(format)?),
            None => ArgValues::Empty,
        };
        self.call(py, UuidMethods::Unparse, args)
    }

    /// Zeroes this `UUID` in place and returns it.
    fn clear(mut slf: PyRefMut<'_, Self>) -> PyResult<Py<Self>> {
        let mut receiver = Object::Handle(slf.handle);
        call_method(registry()?, &mut receiver, UuidMethods::Clear, ArgValues::Empty).map_err(to_py_err)?;
        if let Some(handle) = receiver.as_handle() {
            slf.handle = *handle;
        }
        Ok(slf.into())
    }

    fn is_null(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        self.call(py, UuidMethods::IsNull, ArgValues::Empty)
    }

    /// Returns whether `other` holds the same bytes; raises `TypeMismatchError` if it is not a `UUID`.
    fn compare(&self, py: Python<'_>, other: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        self.call(py, UuidMethods::Compare, ArgValues::One(py_to_object(other)?))
    }

    /// Returns -1, 0 or 1 by byte-wise comparison with `other`.
    fn cmp(&self, py: Python<'_>, other: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        self.call(py, UuidMethods::Cmp, ArgValues::One(py_to_object(other)?))
    }

    fn bytes(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        self.call(py, UuidMethods::Bytes, ArgValues::Empty)
    }

    /// Returns the version number, or `None` for the nil UUID.
    fn version(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        self.call(py, UuidMethods::Version, ArgValues::Empty)
    }

    #[expect(clippy::needless_pass_by_value, reason = "required by macro")]
    fn __richcmp__(&self, other: PyRef<'_, Self>, op: CompareOp) -> bool {
        let lhs = Object::Handle(self.handle);
        let rhs = Object::Handle(other.handle);
        match op {
            CompareOp::Eq => equals(&lhs, &rhs) == Some(true),
            CompareOp::Ne => equals(&lhs, &rhs) != Some(true),
            _ => compare(&lhs, &rhs).is_some_and(|ordering: Ordering| op.matches(ordering)),
        }
    }

    fn __str__(&self) -> String {
        self.handle.uuid().unparse(UnparseFormat::Default)
    }

    fn __repr__(&self) -> String {
        format!("UUID('{}')", self.handle.uuid())
    }

    fn __copy__(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        self.call(py, UuidMethods::Clone, ArgValues::Empty)
    }

    fn __deepcopy__(&self, py: Python<'_>, _memo: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
        self.call(py, UuidMethods::Clone, ArgValues::Empty)
    }
}

fn call(py: Python<'_>, function: UuidFunctions, args: ArgValues) -> PyResult<Py<PyAny>> {
    let result = call_function(registry()?, function, args).map_err(to_py_err)?;
    if !matches!(result, Object::Handle(_)) {
        return Err(PyTypeError::new_err(format!(
            "{function}() returned {} instead of a UUID",
            result.type_name()
        )));
    }
    object_to_py(py, result)
}

/// Generates a new random (version 4) `UUID`.
#[pyfunction]
pub fn generate(py: Python<'_>) -> PyResult<Py<PyAny>> {
    call(py, UuidFunctions::Generate, ArgValues::Empty)
}

/// Parses the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form (any letter case).
///
/// Raises `MalformedInputError` if `text` is not a canonical UUID string.
#[pyfunction]
pub fn parse(py: Python<'_>, text: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
    call(py, UuidFunctions::Parse, ArgValues::One(py_to_object(text)?))
}

/// Builds a `UUID` from exactly sixteen bytes.
#[pyfunction]
pub fn from_bytes(py: Python<'_>, data: &Bound<'_, PyAny>) -> PyResult<Py<PyAny>> {
    call(py, UuidFunctions::FromBytes, ArgValues::One(py_to_object(data)?))
}

/// Returns the all-zero `UUID`.
#[pyfunction]
pub fn nil(py: Python<'_>) -> PyResult<Py<PyAny>> {
    call(py, UuidFunctions::Nil, ArgValues::Empty)
}
