//! Python bindings for axcell UUID values.
//!
//! Exposes the `UUID` class with native byte-wise equality and ordering, the
//! `generate`/`parse`/`from_bytes`/`nil` constructors, and the exception hierarchy
//! that reports malformed input and type mismatches.

mod convert;
mod exceptions;
mod uuid_cls;

use std::sync::OnceLock;

pub use exceptions::{MalformedInputError, ResourceExhaustionError, TypeMismatchError, UuidError};
use pyo3::prelude::*;
pub use uuid_cls::{PyUuid, from_bytes, generate, nil, parse};

/// Returns the package version, converting Cargo's format to Python's PEP 440.
fn get_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();

    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        // cargo uses "1.0-alpha1" etc. while python uses "1.0.0a1", this is not full compatibility,
        // but it's good enough for now
        version.replace("-alpha", "a").replace("-beta", "b")
    })
}

/// axcell - UUID values with native equality.
#[pymodule]
mod _axcell {
    use pyo3::prelude::*;

    #[pymodule_export]
    use super::PyUuid;
    #[pymodule_export]
    use super::from_bytes;
    #[pymodule_export]
    use super::generate;
    #[pymodule_export]
    use super::nil;
    #[pymodule_export]
    use super::parse;
    use super::get_version;

    #[pymodule_init]
    fn init(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // type descriptors must be registered before any handle is created
        ::axcell::init();
        super::exceptions::add_exceptions(m)?;
        m.add("__version__", get_version())?;
        Ok(())
    }
}
