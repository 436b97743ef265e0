// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML mapping parser and source adapter.
//!
//! This module turns YAML documents into nested [`Mapping`]s, either from a
//! string or from a file on disk.

use crate::domain::{Mapping, Node, ResolveError, Result, ScalarValue};
use crate::ports::{MappingParser, MappingSource};
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size for YAML files (10MB)
const MAX_YAML_FILE_SIZE: u64 = 10 * 1024 * 1024;

const SOURCE_NAME: &str = "yaml-file";

/// YAML parser implementation.
///
/// Nesting is preserved:
///
/// - mappings become nested levels
/// - sequences become nested levels keyed by index (`"0"`, `"1"`, ...)
/// - strings, numbers and booleans become scalars in their textual form
/// - `null` becomes the empty scalar
///
/// Numeric and boolean keys are used in their textual form; other non-string
/// keys are skipped. When two keys share a textual form (`1` and `"1"`), the
/// later entry wins and the collision is logged at warn level. The document
/// root must be a mapping.
///
/// # Examples
///
/// ```rust
/// use optchain::adapters::YamlParser;
/// use optchain::domain::resolve_with_default;
/// use optchain::ports::MappingParser;
///
/// let mapping = YamlParser::new().parse("daily:\n  temp: 22.3").unwrap();
/// assert_eq!(resolve_with_default(&mapping, "daily.temp", "0"), "22.3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }

    fn key_text(key: &serde_yaml::Value) -> Option<String> {
        match key {
            serde_yaml::Value::String(s) => Some(s.clone()),
            serde_yaml::Value::Number(n) => Some(n.to_string()),
            serde_yaml::Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn to_node(value: &serde_yaml::Value) -> Node {
        match value {
            serde_yaml::Value::Mapping(map) => Node::Nested(Self::to_mapping(map)),
            serde_yaml::Value::Sequence(seq) => Node::Nested(
                seq.iter()
                    .enumerate()
                    .map(|(i, item)| (i.to_string(), Self::to_node(item)))
                    .collect(),
            ),
            serde_yaml::Value::String(s) => Node::Scalar(ScalarValue::from(s.as_str())),
            serde_yaml::Value::Number(n) => Node::Scalar(ScalarValue::from(n.to_string())),
            serde_yaml::Value::Bool(b) => Node::Scalar(ScalarValue::from(b.to_string())),
            serde_yaml::Value::Null => Node::Scalar(ScalarValue::default()),
            serde_yaml::Value::Tagged(tagged) => Self::to_node(&tagged.value),
        }
    }

    fn to_mapping(map: &serde_yaml::Mapping) -> Mapping {
        let mut mapping = Mapping::new();
        for (key, value) in map {
            match Self::key_text(key) {
                Some(key) => {
                    if mapping.insert(key.as_str(), Self::to_node(value)).is_some() {
                        tracing::warn!(
                            "YAML key '{}' appears more than once after conversion to text; keeping the last entry",
                            key
                        );
                    }
                }
                None => tracing::debug!("Skipping YAML entry with a non-scalar key"),
            }
        }
        mapping
    }
}

impl MappingParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Mapping> {
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| ResolveError::ParseError {
                message: format!("Failed to parse YAML: {}", e),
                source: Some(Box::new(e)),
            })?;

        match value {
            serde_yaml::Value::Mapping(map) => Ok(Self::to_mapping(&map)),
            serde_yaml::Value::Null => Ok(Mapping::new()),
            other => Err(ResolveError::ParseError {
                message: format!(
                    "YAML document root must be a mapping, found {}",
                    describe(&other)
                ),
                source: None,
            }),
        }
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

fn describe(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

fn file_label(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

fn read_limited(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| ResolveError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to read file metadata: {}", file_label(path)),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_YAML_FILE_SIZE {
        return Err(ResolveError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!(
                "File too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_YAML_FILE_SIZE
            ),
            source: None,
        });
    }

    fs::read_to_string(path).map_err(|e| ResolveError::SourceError {
        source_name: SOURCE_NAME.to_string(),
        message: format!("Failed to read file: {}", file_label(path)),
        source: Some(Box::new(e)),
    })
}

/// Mapping source backed by a YAML document.
///
/// Built from a string it is fixed; built from a file, [`reload`] re-reads
/// the file.
///
/// [`reload`]: MappingSource::reload
///
/// # Examples
///
/// ```rust
/// use optchain::adapters::YamlSource;
/// use optchain::ports::MappingSource;
///
/// let source = YamlSource::from_str("wallet:\n  - 0.25\n  - 0.10").unwrap();
/// assert_eq!(source.priority(), 1);
/// assert!(source.file_path().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct YamlSource {
    file_path: Option<PathBuf>,
    mapping: Mapping,
    priority: u8,
    parser: YamlParser,
}

impl YamlSource {
    /// Parses a YAML document held in memory.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let parser = YamlParser::new();
        let mapping = parser.parse(content)?;
        Ok(Self {
            file_path: None,
            mapping,
            priority: 1,
            parser,
        })
    }

    /// Loads a YAML file.
    ///
    /// The path is canonicalized and files over 10MB are rejected.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let canonical_path = path.canonicalize().map_err(|e| ResolveError::SourceError {
            source_name: SOURCE_NAME.to_string(),
            message: format!("Invalid or inaccessible path: {}", file_label(path)),
            source: Some(Box::new(e)),
        })?;

        let parser = YamlParser::new();
        let mapping = parser.parse(&read_limited(&canonical_path)?)?;

        Ok(Self {
            file_path: Some(canonical_path),
            mapping,
            priority: 1,
            parser,
        })
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    /// The canonical path of the backing file, if any.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }
}

impl MappingSource for YamlSource {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    fn reload(&mut self) -> Result<()> {
        if let Some(path) = &self.file_path {
            self.mapping = self.parser.parse(&read_limited(path)?)?;
        }
        Ok(())
    }
}
