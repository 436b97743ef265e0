// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the core types and resolution logic.
//!
//! Nothing here performs I/O. Mappings are built elsewhere and only read by
//! the resolver functions.

pub mod errors;
pub mod lookup_path;
pub mod mapping;
pub mod raw_enum;
pub mod resolution;
pub mod resolver;
pub mod scalar_value;

// Re-export commonly used types
pub use errors::{ResolveError, Result};
pub use lookup_path::{IntoLookupPath, LookupPath};
pub use mapping::{Mapping, Node};
pub use raw_enum::{RawEnum, RawValue, VariantTable};
pub use resolution::ResolutionResult;
pub use resolver::{
    decode_enum, resolve, resolve_all, resolve_first, resolve_parsed, resolve_with_default,
    Resolve,
};
pub use scalar_value::ScalarValue;
