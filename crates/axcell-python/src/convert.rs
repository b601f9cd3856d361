//! Type conversion between axcell's `Object` and PyO3 Python objects.
//!
//! This module provides bidirectional conversion:
//! - `py_to_object`: Convert Python objects to `Object` for arguments
//! - `object_to_py`: Convert `Object` results back to Python objects

use ::axcell::Object;
use pyo3::{
    exceptions::PyTypeError,
    prelude::*,
    types::{PyBool, PyBytes, PyFloat, PyInt, PyString},
};

use crate::uuid_cls::PyUuid;

/// Converts a Python object to axcell's `Object` representation.
///
/// Never fails on an unsupported type: anything without a native mapping becomes
/// `Object::Opaque` carrying the Python type name, and the binding surface decides
/// whether that is a type mismatch.
///
/// # Important
/// Checks `bool` before `int` since `bool` is a subclass of `int` in Python.
pub fn py_to_object(obj: &Bound<'_, PyAny>) -> PyResult<Object> {
    if obj.is_none() {
        Ok(Object::None)
    } else if let Ok(uuid) = obj.cast::<PyUuid>() {
        Ok(Object::Handle(uuid.try_borrow()?.handle()))
    } else if let Ok(bool) = obj.cast::<PyBool>() {
        // Check bool BEFORE int since bool is a subclass of int in Python
        Ok(Object::Bool(bool.is_true()))
    } else if let Ok(int) = obj.cast::<PyInt>() {
        match int.extract::<i64>() {
            Ok(i) => Ok(Object::Int(i)),
            Err(_) => opaque(obj),
        }
    } else if let Ok(float) = obj.cast::<PyFloat>() {
        Ok(Object::Float(float.value()))
    } else if let Ok(string) = obj.cast::<PyString>() {
        Ok(Object::String(string.extract()?))
    } else if let Ok(bytes) = obj.cast::<PyBytes>() {
        Ok(Object::Bytes(bytes.as_bytes().to_vec()))
    } else {
        opaque(obj)
    }
}

fn opaque(obj: &Bound<'_, PyAny>) -> PyResult<Object> {
    Ok(Object::Opaque {
        type_name: obj.get_type().name()?.to_string(),
    })
}

/// Converts axcell's `Object` to a native Python object.
///
/// Handles become new `UUID` instances.
pub fn object_to_py(py: Python<'_>, obj: Object) -> PyResult<Py<PyAny>> {
    match obj {
        Object::None => Ok(py.None()),
        Object::Bool(b) => Ok(PyBool::new(py, b).to_owned().into_any().unbind()),
        Object::Int(i) => Ok(i.into_pyobject(py)?.into_any().unbind()),
        Object::Float(f) => Ok(PyFloat::new(py, f).into_any().unbind()),
        Object::String(s) => Ok(PyString::new(py, &s).into_any().unbind()),
        Object::Bytes(b) => Ok(PyBytes::new(py, &b).into_any().unbind()),
        Object::Handle(handle) => Ok(Py::new(py, PyUuid::from(handle))?.into_any()),
        Object::Opaque { type_name } => Err(PyTypeError::new_err(format!(
            "Cannot convert {type_name} to a Python value"
        ))),
    }
}
