// SPDX-License-Identifier: MIT OR Apache-2.0

//! Safe resolution of lookup paths through nested mappings.
//!
//! This crate walks chains of lookups that may come up empty (nested map
//! access, fallbacks between keys, enum construction from raw values) and
//! returns either a value or an explicit absence, never a panic and never an
//! error for a key that is merely missing.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: core types (`LookupPath`, `Mapping`, `ResolutionResult`,
//!   `VariantTable`) and the pure resolution functions
//! - **Ports**: trait definitions at the seams (`MappingParser`, `MappingSource`)
//! - **Adapters**: in-memory and YAML implementations of the ports
//! - **Service**: `LayeredResolver`, which resolves across prioritized sources
//!
//! # Feature Flags
//!
//! - `yaml`: Enable the YAML parser and source (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use optchain::prelude::*;
//!
//! # fn main() -> optchain::domain::Result<()> {
//! let forecast = Mapping::new().with("daily", Mapping::new().with("temp", "22.3"));
//!
//! // A path that exists
//! let temp = resolve(&forecast, ["daily", "temp"])?;
//! assert_eq!(temp.map(|v| v.as_str()), ResolutionResult::Present("22.3"));
//!
//! // A path that does not
//! assert!(resolve(&forecast, ["weekly", "temp"])?.is_absent());
//!
//! // Coalescing to a default
//! assert_eq!(resolve_with_default(&forecast, ["missing"], "0"), "0");
//!
//! // An empty path is the only error
//! assert!(resolve(&forecast, Vec::<&str>::new()).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! # Raw-value enums
//!
//! ```rust
//! use optchain::prelude::*;
//!
//! optchain::raw_enum! {
//!     pub enum Coin: f64 {
//!         Penny = 0.01,
//!         Nickel = 0.05,
//!         Dime = 0.10,
//!         Quarter = 0.25,
//!     }
//! }
//!
//! assert_eq!(Coin::from_raw(0.10), ResolutionResult::Present(Coin::Dime));
//!
//! let table = Coin::variant_table().unwrap();
//! assert_eq!(decode_enum(0.50, &table), ResolutionResult::Absent);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
mod macros;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        decode_enum, resolve, resolve_all, resolve_first, resolve_parsed, resolve_with_default,
        IntoLookupPath, LookupPath, Mapping, Node, RawEnum, RawValue, ResolutionResult, Resolve,
        ResolveError, Result, ScalarValue, VariantTable,
    };
    pub use crate::ports::{MappingParser, MappingSource};
    pub use crate::service::{LayeredResolver, LayeredResolverBuilder};

    pub use crate::adapters::InMemorySource;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::{YamlParser, YamlSource};
}
