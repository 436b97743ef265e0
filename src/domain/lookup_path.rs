// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lookup paths into nested mappings.
//!
//! A [`LookupPath`] is an ordered, non-empty list of non-empty key segments.
//! The invariant is checked once, when the path is built, so the resolver can
//! walk it without re-validating.

use crate::domain::errors::{ResolveError, Result};
use std::fmt;
use std::str::FromStr;

/// Separator used by the dotted notation (`"daily.temp"`).
pub const SEGMENT_SEPARATOR: char = '.';

/// A validated path through nested mappings.
///
/// # Examples
///
/// ```
/// use optchain::domain::LookupPath;
///
/// let path: LookupPath = "daily.temp".parse().unwrap();
/// assert_eq!(path.segments(), &["daily".to_string(), "temp".to_string()]);
/// assert_eq!(path.to_string(), "daily.temp");
///
/// assert!(LookupPath::new(Vec::<String>::new()).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LookupPath(Vec<String>);

impl LookupPath {
    /// Builds a path from its segments.
    ///
    /// Fails with [`ResolveError::InvalidPath`] when there are no segments or
    /// when any segment is the empty string.
    pub fn new<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();

        if segments.is_empty() {
            return Err(ResolveError::invalid_path(
                "",
                "path must contain at least one segment",
            ));
        }

        if let Some(index) = segments.iter().position(String::is_empty) {
            return Err(ResolveError::invalid_path(
                segments.join("."),
                format!("segment {} is empty", index + 1),
            ));
        }

        Ok(LookupPath(segments))
    }

    /// Parses a dotted path such as `"app.database.host"`.
    pub fn parse_dotted(path: &str) -> Result<Self> {
        if path.is_empty() {
            return Self::new(Vec::<String>::new());
        }
        Self::new(path.split(SEGMENT_SEPARATOR))
    }

    /// Returns the segments in walk order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of segments. Always at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Splits the path into its final segment and the segments leading to it.
    pub fn split_last(&self) -> (&str, &[String]) {
        match self.0.split_last() {
            Some((last, parents)) => (last.as_str(), parents),
            // Unreachable: non-empty by construction.
            None => ("", &self.0[..]),
        }
    }

    /// Returns a new path with `segment` appended.
    pub fn child(&self, segment: impl Into<String>) -> Result<Self> {
        let mut segments = self.0.clone();
        segments.push(segment.into());
        Self::new(segments)
    }

    /// Consumes the path, returning its segments.
    pub fn into_segments(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for LookupPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl FromStr for LookupPath {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_dotted(s)
    }
}

impl AsRef<[String]> for LookupPath {
    fn as_ref(&self) -> &[String] {
        &self.0
    }
}

/// Conversion into a validated [`LookupPath`].
///
/// Every resolver operation accepts any `IntoLookupPath`, so callers can pass
/// a dotted string, a slice or vector of segments, or an existing path. The
/// conversion is where an empty path is rejected.
pub trait IntoLookupPath {
    /// Performs the conversion, validating the path.
    fn into_lookup_path(self) -> Result<LookupPath>;
}

impl IntoLookupPath for LookupPath {
    fn into_lookup_path(self) -> Result<LookupPath> {
        Ok(self)
    }
}

impl IntoLookupPath for &LookupPath {
    fn into_lookup_path(self) -> Result<LookupPath> {
        Ok(self.clone())
    }
}

impl IntoLookupPath for &str {
    fn into_lookup_path(self) -> Result<LookupPath> {
        LookupPath::parse_dotted(self)
    }
}

impl IntoLookupPath for String {
    fn into_lookup_path(self) -> Result<LookupPath> {
        LookupPath::parse_dotted(&self)
    }
}

impl IntoLookupPath for &String {
    fn into_lookup_path(self) -> Result<LookupPath> {
        LookupPath::parse_dotted(self)
    }
}

impl<S: AsRef<str>> IntoLookupPath for &[S] {
    fn into_lookup_path(self) -> Result<LookupPath> {
        LookupPath::new(self.iter().map(|s| s.as_ref().to_string()))
    }
}

impl<S: AsRef<str>> IntoLookupPath for Vec<S> {
    fn into_lookup_path(self) -> Result<LookupPath> {
        self.as_slice().into_lookup_path()
    }
}

impl<S: AsRef<str>> IntoLookupPath for &Vec<S> {
    fn into_lookup_path(self) -> Result<LookupPath> {
        self.as_slice().into_lookup_path()
    }
}

impl<S: AsRef<str>, const N: usize> IntoLookupPath for [S; N] {
    fn into_lookup_path(self) -> Result<LookupPath> {
        self.as_slice().into_lookup_path()
    }
}

impl<S: AsRef<str>, const N: usize> IntoLookupPath for &[S; N] {
    fn into_lookup_path(self) -> Result<LookupPath> {
        self.as_slice().into_lookup_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_segments() {
        let path = LookupPath::new(["daily", "temp"]).unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.segments()[0], "daily");
        assert_eq!(path.segments()[1], "temp");
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = LookupPath::new(Vec::<&str>::new()).unwrap_err();
        assert!(err.is_invalid_path());
    }

    #[test]
    fn test_empty_segment_rejected() {
        let err = LookupPath::new(["daily", "", "temp"]).unwrap_err();
        assert!(err.to_string().contains("segment 2 is empty"));
    }

    #[test]
    fn test_parse_dotted() {
        let path: LookupPath = "app.database.host".parse().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.to_string(), "app.database.host");
    }

    #[test]
    fn test_parse_dotted_rejects_malformed() {
        assert!("".parse::<LookupPath>().is_err());
        assert!("a..b".parse::<LookupPath>().is_err());
        assert!(".a".parse::<LookupPath>().is_err());
        assert!("a.".parse::<LookupPath>().is_err());
    }

    #[test]
    fn test_split_last() {
        let path = LookupPath::new(["a", "b", "c"]).unwrap();
        let (last, parents) = path.split_last();
        assert_eq!(last, "c");
        assert_eq!(parents, &["a".to_string(), "b".to_string()]);

        let single = LookupPath::new(["only"]).unwrap();
        let (last, parents) = single.split_last();
        assert_eq!(last, "only");
        assert!(parents.is_empty());
    }

    #[test]
    fn test_child() {
        let path = LookupPath::new(["daily"]).unwrap();
        let child = path.child("temp").unwrap();
        assert_eq!(child.to_string(), "daily.temp");
        assert!(path.child("").is_err());
    }

    #[test]
    fn test_into_lookup_path_variants() {
        let expected = LookupPath::new(["a", "b"]).unwrap();

        assert_eq!("a.b".into_lookup_path().unwrap(), expected);
        assert_eq!("a.b".to_string().into_lookup_path().unwrap(), expected);
        assert_eq!(["a", "b"].into_lookup_path().unwrap(), expected);
        assert_eq!(vec!["a", "b"].into_lookup_path().unwrap(), expected);
        assert_eq!(
            vec!["a".to_string(), "b".to_string()]
                .into_lookup_path()
                .unwrap(),
            expected
        );
        assert_eq!((&expected).into_lookup_path().unwrap(), expected);
    }

    #[test]
    fn test_slice_keeps_dots_inside_segments() {
        let path = ["version.major"].into_lookup_path().unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.segments()[0], "version.major");
    }

    #[test]
    fn test_hash_and_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(LookupPath::new(["a", "b"]).unwrap());
        assert!(set.contains(&"a.b".parse::<LookupPath>().unwrap()));
        assert!(!set.contains(&"a.c".parse::<LookupPath>().unwrap()));
    }
}
