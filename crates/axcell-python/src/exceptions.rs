//! Exception types raised by the `axcell` Python module.
//!
//! ## Exception Hierarchy
//!
//! ```text
//! UuidError(Exception)          # Base class for all axcell errors
//! ├── MalformedInputError       # parse/from_bytes given input that does not decode
//! ├── TypeMismatchError         # a receiver or argument that is not a UUID, or wrong arity
//! └── ResourceExhaustionError   # the OS randomness source failed during generate()
//! ```

use ::axcell::{Error, ErrorKind};
use pyo3::{create_exception, exceptions::PyException, exceptions::PyRuntimeError, prelude::*};

create_exception!(axcell, UuidError, PyException, "Base class for all axcell errors.");
create_exception!(
    axcell,
    MalformedInputError,
    UuidError,
    "Raised when a string or byte sequence is not a valid UUID."
);
create_exception!(
    axcell,
    TypeMismatchError,
    UuidError,
    "Raised when a UUID method receives a value that is not a UUID."
);
create_exception!(
    axcell,
    ResourceExhaustionError,
    UuidError,
    "Raised when the randomness source is unavailable. Not recoverable."
);

/// Converts a binding-surface error to the matching Python exception.
pub fn to_py_err(err: Error) -> PyErr {
    let message = err.to_string();
    match err.kind() {
        ErrorKind::MalformedInput => MalformedInputError::new_err(message),
        ErrorKind::TypeMismatch => TypeMismatchError::new_err(message),
        ErrorKind::ResourceExhaustion => ResourceExhaustionError::new_err(message),
        // the module init registers the types, so this means a bug in the binding
        ErrorKind::NotInitialized => PyRuntimeError::new_err(message),
    }
}

/// Adds the exception classes to the module namespace.
pub fn add_exceptions(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add("UuidError", py.get_type::<UuidError>())?;
    m.add("MalformedInputError", py.get_type::<MalformedInputError>())?;
    m.add("TypeMismatchError", py.get_type::<TypeMismatchError>())?;
    m.add("ResourceExhaustionError", py.get_type::<ResourceExhaustionError>())?;
    Ok(())
}
