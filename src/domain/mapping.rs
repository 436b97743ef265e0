// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nested key-value mappings.
//!
//! A [`Mapping`] maps string keys to [`Node`]s, and a node is either a scalar
//! leaf or another mapping. Keys are unique per level and carry no order.

use crate::domain::scalar_value::ScalarValue;
use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;

/// A single entry in a [`Mapping`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// A leaf value.
    Scalar(ScalarValue),
    /// A nested level.
    Nested(Mapping),
}

impl Node {
    /// Returns the scalar if this node is a leaf.
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Node::Scalar(value) => Some(value),
            Node::Nested(_) => None,
        }
    }

    /// Returns the nested mapping if this node is a level.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Node::Nested(mapping) => Some(mapping),
            Node::Scalar(_) => None,
        }
    }

    /// Returns `true` if this node is a leaf.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }
}

impl From<ScalarValue> for Node {
    fn from(value: ScalarValue) -> Self {
        Node::Scalar(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(ScalarValue::from(value))
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(ScalarValue::from(value))
    }
}

impl From<Mapping> for Node {
    fn from(mapping: Mapping) -> Self {
        Node::Nested(mapping)
    }
}

/// A nested mapping from string keys to [`Node`]s.
///
/// Mappings are built by the caller (by hand, or through a
/// [`MappingParser`](crate::ports::MappingParser)) and only read by the
/// resolver.
///
/// # Examples
///
/// ```
/// use optchain::domain::{Mapping, Node};
///
/// let forecast = Mapping::new()
///     .with("daily", Mapping::new().with("temp", "22.3"));
///
/// let daily = forecast.get("daily").and_then(Node::as_mapping).unwrap();
/// assert_eq!(daily.get("temp").and_then(Node::as_scalar).unwrap(), "22.3");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping(HashMap<String, Node>);

impl Mapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, returning the mapping.
    pub fn with(mut self, key: impl Into<String>, node: impl Into<Node>) -> Self {
        self.insert(key, node);
        self
    }

    /// Inserts a node, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, node: impl Into<Node>) -> Option<Node> {
        self.0.insert(key.into(), node.into())
    }

    /// Looks up a key on this level only.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.0.get(key)
    }

    /// Returns `true` if this level has `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys on this level.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if this level has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the keys on this level, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates the entries on this level, in no particular order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, Node> {
        self.0.iter()
    }

    /// Removes a key from this level.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        self.0.remove(key)
    }
}

impl<K: Into<String>, N: Into<Node>> FromIterator<(K, N)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, N)>>(iter: I) -> Self {
        Mapping(
            iter.into_iter()
                .map(|(key, node)| (key.into(), node.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a String, &'a Node);
    type IntoIter = hash_map::Iter<'a, String, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
