//! UUID values for embedded scripting hosts.
//!
//! The crate has two layers:
//!
//! - the value engine ([`Uuid`]): generate, parse, unparse, compare, clear and null-check
//!   sixteen-byte UUIDs, with no knowledge of any host;
//! - the binding surface: type descriptors registered once by [`init`], [`Handle`]s that
//!   tag a native value with its descriptor, the host-neutral [`Object`] value model and
//!   the [`call_function`] / [`call_method`] dispatchers that validate host arguments and
//!   run the engine.
//!
//! A host binding (the Python module, the CLI) converts its own values into [`Object`]s,
//! dispatches, and converts the results back. Equality between two handles goes through
//! [`equals`], which calls the comparison registered on the handles' type descriptor.

mod args;
mod error;
mod handle;
mod module;
mod object;
mod registry;
mod uuid;

pub use crate::{
    args::ArgValues,
    error::{EntropyError, Error, ErrorKind, ParseUuidError, Result},
    handle::{Handle, HandleData},
    module::{
        CallResult, UuidFunctions, UuidMethods, call_function, call_method, compare, equals, lookup_function,
        lookup_method,
    },
    object::Object,
    registry::{TypeDescriptor, TypeRegistry, UUID_TYPE_NAME, init, registry},
    uuid::{BYTE_LEN, CANONICAL_LEN, UnparseFormat, Uuid, ordering_to_int},
};
