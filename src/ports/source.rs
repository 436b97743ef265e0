// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping source trait definition.
//!
//! This module defines the `MappingSource` trait, the port for anything that
//! supplies a [`Mapping`] to a
//! [`LayeredResolver`](crate::service::LayeredResolver).

use crate::domain::{Mapping, Result};

/// A named, prioritized supplier of a mapping.
///
/// # Priority
///
/// When several sources are layered, higher priority values are consulted
/// first and the first source holding a value for a path wins. Sources with
/// equal priority keep the order in which they were added.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`.
///
/// # Examples
///
/// ```rust
/// use optchain::domain::{Mapping, Result};
/// use optchain::ports::MappingSource;
///
/// struct Defaults(Mapping);
///
/// impl MappingSource for Defaults {
///     fn name(&self) -> &str {
///         "defaults"
///     }
///
///     fn priority(&self) -> u8 {
///         0
///     }
///
///     fn mapping(&self) -> &Mapping {
///         &self.0
///     }
/// }
///
/// let source = Defaults(Mapping::new().with("username", "guest"));
/// assert_eq!(source.name(), "defaults");
/// assert!(source.mapping().contains_key("username"));
/// ```
pub trait MappingSource: Send + Sync {
    /// Short identifier used in logs and errors, like `"yaml-file"`.
    fn name(&self) -> &str;

    /// Precedence of this source; higher wins.
    fn priority(&self) -> u8;

    /// The mapping this source currently holds.
    fn mapping(&self) -> &Mapping;

    /// Refreshes the mapping from wherever it came from.
    ///
    /// Sources with nothing to refresh keep the default no-op.
    fn reload(&mut self) -> Result<()> {
        Ok(())
    }
}
