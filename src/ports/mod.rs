// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! These traits are the seams between the resolver and the outside world:
//! how documents become mappings, and how mappings are supplied to the
//! layered service. Adapters implement them.

pub mod parser;
pub mod source;

// Re-export commonly used types
pub use parser::MappingParser;
pub use source::MappingSource;
