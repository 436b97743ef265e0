// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping parser trait definition.
//!
//! This module defines the `MappingParser` trait, the seam through which
//! documents in some text format are turned into [`Mapping`]s.

use crate::domain::{Mapping, Result};

/// A trait for parsing documents into nested mappings.
///
/// Unlike a flattening parser, implementations keep the nesting: a document
///
/// ```yaml
/// daily:
///   temp: 22.3
/// ```
///
/// becomes a mapping whose `daily` key holds a nested mapping with a `temp`
/// scalar, so it can be walked with the path `["daily", "temp"]`.
///
/// # Examples
///
/// ```rust
/// use optchain::domain::{Mapping, Result};
/// use optchain::ports::MappingParser;
///
/// struct KeyEqualsValue;
///
/// impl MappingParser for KeyEqualsValue {
///     fn parse(&self, content: &str) -> Result<Mapping> {
///         Ok(content
///             .lines()
///             .filter_map(|line| line.split_once('='))
///             .map(|(k, v)| (k.trim(), v.trim()))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["properties"]
///     }
/// }
///
/// let mapping = KeyEqualsValue.parse("name = Rob").unwrap();
/// assert!(mapping.contains_key("name"));
/// ```
pub trait MappingParser {
    /// Parses document content into a mapping.
    ///
    /// # Returns
    ///
    /// * `Ok(Mapping)` - The parsed document
    /// * `Err(ResolveError::ParseError)` - The content is malformed or its root
    ///   is not a mapping
    fn parse(&self, content: &str) -> Result<Mapping>;

    /// Returns the file extensions (without the leading dot) this parser handles.
    fn supported_extensions(&self) -> &[&str];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{resolve, ResolutionResult};

    struct FixedParser;

    impl MappingParser for FixedParser {
        fn parse(&self, _content: &str) -> Result<Mapping> {
            Ok(Mapping::new().with("app", Mapping::new().with("name", "Smoothie")))
        }

        fn supported_extensions(&self) -> &[&str] {
            &["test", "tst"]
        }
    }

    #[test]
    fn test_parser_parse() {
        let mapping = FixedParser.parse("ignored").unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(
            resolve(&mapping, "app.name").unwrap().map(|v| v.as_str()),
            ResolutionResult::Present("Smoothie")
        );
    }

    #[test]
    fn test_parser_supported_extensions() {
        assert_eq!(FixedParser.supported_extensions(), &["test", "tst"]);
    }
}
