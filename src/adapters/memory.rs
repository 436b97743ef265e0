// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory mapping source.

use crate::domain::Mapping;
use crate::ports::MappingSource;

/// A source wrapping a mapping the caller built.
///
/// Useful for defaults and for values computed at runtime. The priority
/// defaults to 1.
///
/// # Examples
///
/// ```rust
/// use optchain::adapters::InMemorySource;
/// use optchain::domain::Mapping;
/// use optchain::ports::MappingSource;
///
/// let defaults = InMemorySource::new("defaults", Mapping::new().with("username", "guest"))
///     .with_priority(0);
/// assert_eq!(defaults.priority(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct InMemorySource {
    name: String,
    priority: u8,
    mapping: Mapping,
}

impl InMemorySource {
    /// Creates a source named `name` holding `mapping`.
    pub fn new(name: impl Into<String>, mapping: Mapping) -> Self {
        Self {
            name: name.into(),
            priority: 1,
            mapping,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// Replaces the held mapping.
    pub fn replace(&mut self, mapping: Mapping) -> Mapping {
        std::mem::replace(&mut self.mapping, mapping)
    }
}

impl MappingSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn mapping(&self) -> &Mapping {
        &self.mapping
    }
}
