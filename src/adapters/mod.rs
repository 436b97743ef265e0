// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! Each adapter implements [`MappingSource`](crate::ports::MappingSource),
//! [`MappingParser`](crate::ports::MappingParser), or both, for one concrete
//! origin of mappings.

pub mod memory;
#[cfg(feature = "yaml")]
pub mod yaml_file;

pub use memory::InMemorySource;
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlParser, YamlSource};
