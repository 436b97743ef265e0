// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered resolution across several mapping sources.
//!
//! This module provides [`LayeredResolver`], which stacks
//! [`MappingSource`]s by priority and resolves a path against each in turn
//! until one of them has a value.

use crate::domain::{
    resolve, resolve_all, resolve_with_default, IntoLookupPath, LookupPath, ResolutionResult,
    Resolve, Result, ScalarValue,
};
use crate::ports::MappingSource;

/// Resolver over a priority-ordered stack of mapping sources.
///
/// Sources with higher priority values are consulted first; the first source
/// in which the path resolves to a value wins. A source where the path is
/// missing, or where it runs into a scalar midway, simply falls through to
/// the next one.
///
/// `LayeredResolver` implements [`Resolve`], so every domain operation
/// (`resolve`, `resolve_first`, `resolve_parsed`, ...) works on it as well as
/// on a single mapping.
///
/// # Examples
///
/// ```rust
/// use optchain::adapters::InMemorySource;
/// use optchain::domain::Mapping;
/// use optchain::service::LayeredResolver;
///
/// # fn main() -> optchain::domain::Result<()> {
/// let resolver = LayeredResolver::builder()
///     .with_source(Box::new(
///         InMemorySource::new("defaults", Mapping::new().with("username", "guest"))
///             .with_priority(0),
///     ))
///     .with_source(Box::new(InMemorySource::new(
///         "profile",
///         Mapping::new().with("username", "rob"),
///     )))
///     .build();
///
/// assert_eq!(resolver.resolve_with_default("username", "anonymous"), "rob");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct LayeredResolver {
    /// Sources in query order (highest priority first)
    sources: Vec<Box<dyn MappingSource>>,
}

impl LayeredResolver {
    /// Creates a resolver with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder.
    pub fn builder() -> LayeredResolverBuilder {
        LayeredResolverBuilder::new()
    }

    /// Adds a source, keeping the stack ordered by priority.
    ///
    /// The sort is stable, so sources sharing a priority are queried in the
    /// order they were added.
    pub fn add_source(&mut self, source: Box<dyn MappingSource>) {
        self.sources.push(source);
        self.sources
            .sort_by_key(|source| std::cmp::Reverse(source.priority()));
    }

    /// Names of the sources, in query order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` if there are no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Resolves `path` across the sources.
    pub fn resolve<P: IntoLookupPath>(&self, path: P) -> Result<ResolutionResult<&ScalarValue>> {
        resolve(self, path)
    }

    /// Resolves `path`, falling back to `default`.
    pub fn resolve_with_default<P, D>(&self, path: P, default: D) -> ScalarValue
    where
        P: IntoLookupPath,
        D: Into<ScalarValue>,
    {
        resolve_with_default(self, path, default)
    }

    /// Resolves each path independently, preserving order.
    pub fn resolve_all<I, P>(&self, paths: I) -> Vec<Result<ResolutionResult<&ScalarValue>>>
    where
        I: IntoIterator<Item = P>,
        P: IntoLookupPath,
    {
        resolve_all(self, paths)
    }

    /// Reloads every source.
    ///
    /// A failing source is logged and keeps its previous mapping; the other
    /// sources are still reloaded.
    pub fn reload(&mut self) -> Result<()> {
        for source in &mut self.sources {
            if let Err(e) = source.reload() {
                tracing::warn!("Failed to reload source '{}': {}", source.name(), e);
            }
        }
        Ok(())
    }
}

impl Resolve for LayeredResolver {
    fn resolve_path(&self, path: &LookupPath) -> ResolutionResult<&ScalarValue> {
        for source in &self.sources {
            if let ResolutionResult::Present(value) = source.mapping().resolve_path(path) {
                tracing::debug!("Resolved '{}' from source '{}'", path, source.name());
                return ResolutionResult::Present(value);
            }
        }
        ResolutionResult::Absent
    }
}

/// Builder for a [`LayeredResolver`].
///
/// # Examples
///
/// ```rust
/// use optchain::adapters::InMemorySource;
/// use optchain::domain::Mapping;
/// use optchain::service::LayeredResolverBuilder;
///
/// let resolver = LayeredResolverBuilder::new()
///     .with_source(Box::new(InMemorySource::new("memory", Mapping::new())))
///     .build();
/// assert_eq!(resolver.len(), 1);
/// ```
#[derive(Default)]
pub struct LayeredResolverBuilder {
    sources: Vec<Box<dyn MappingSource>>,
}

impl LayeredResolverBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source.
    pub fn with_source(mut self, source: Box<dyn MappingSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Adds a YAML document held in memory.
    #[cfg(feature = "yaml")]
    pub fn with_yaml_str(self, content: &str) -> Result<Self> {
        let source = crate::adapters::YamlSource::from_str(content)?;
        Ok(self.with_source(Box::new(source)))
    }

    /// Adds a YAML file.
    #[cfg(feature = "yaml")]
    pub fn with_yaml_file<P: AsRef<std::path::Path>>(self, path: P) -> Result<Self> {
        let source = crate::adapters::YamlSource::from_file(path)?;
        Ok(self.with_source(Box::new(source)))
    }

    /// Builds the resolver.
    pub fn build(self) -> LayeredResolver {
        let mut resolver = LayeredResolver::new();
        for source in self.sources {
            resolver.add_source(source);
        }
        resolver
    }
}
