// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scalar leaf values and their typed coercions.

use crate::domain::errors::{ResolveError, Result};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A scalar stored at a leaf of a [`Mapping`](crate::domain::Mapping).
///
/// Values are kept in their textual form. Typed accessors coerce on demand and
/// report failures as [`ResolveError::TypeConversionError`], tagged with the
/// path the caller resolved so the message points at the offending entry.
///
/// # Examples
///
/// ```
/// use optchain::domain::ScalarValue;
///
/// let value = ScalarValue::from("22.3");
/// assert_eq!(value.as_str(), "22.3");
/// assert_eq!(value.as_f64("daily.temp").unwrap(), 22.3);
/// assert!(value.as_i64("daily.temp").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ScalarValue(String);

impl ScalarValue {
    /// Creates a new value from a `String`.
    pub fn new(value: String) -> Self {
        ScalarValue(value)
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the empty scalar (how a YAML `null` is stored).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the value, returning the inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Converts the value to a boolean.
    ///
    /// Accepts `true`/`false` and `yes`/`no`, ignoring ASCII case.
    ///
    /// ```
    /// use optchain::domain::ScalarValue;
    ///
    /// assert!(ScalarValue::from("Yes").as_bool("flags.beta").unwrap());
    /// assert!(!ScalarValue::from("FALSE").as_bool("flags.beta").unwrap());
    /// ```
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        match self.0.to_ascii_lowercase().as_str() {
            "true" | "yes" => Ok(true),
            "false" | "no" => Ok(false),
            _ => self
                .0
                .parse::<bool>()
                .map_err(|e| ResolveError::TypeConversionError {
                    key: key.to_string(),
                    target_type: "boolean".to_string(),
                    source: Box::new(e),
                }),
        }
    }

    /// Converts the value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.0
            .parse::<i64>()
            .map_err(|e| ResolveError::from_parse_int_error(key, e))
    }

    /// Converts the value to a `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        self.0
            .parse::<u64>()
            .map_err(|e| ResolveError::from_parse_int_error(key, e))
    }

    /// Converts the value to an `f64`.
    pub fn as_f64(&self, key: &str) -> Result<f64> {
        self.0
            .parse::<f64>()
            .map_err(|e| ResolveError::from_parse_float_error(key, e))
    }

    /// Parses the value into any type that implements `FromStr`.
    ///
    /// ```
    /// use optchain::domain::ScalarValue;
    /// use std::net::IpAddr;
    ///
    /// let value = ScalarValue::from("127.0.0.1");
    /// let ip: IpAddr = value.parse("server.bind").unwrap();
    /// assert!(ip.is_loopback());
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.0
            .parse::<T>()
            .map_err(|e| ResolveError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue(s)
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue(s.to_string())
    }
}

impl From<&ScalarValue> for ScalarValue {
    fn from(value: &ScalarValue) -> Self {
        value.clone()
    }
}

impl From<ScalarValue> for String {
    fn from(value: ScalarValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ScalarValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ScalarValue {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ScalarValue {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Accepts strings, numbers, booleans and null, keeping their textual form
/// (null becomes the empty scalar), the same way the YAML parser stores them.
impl<'de> Deserialize<'de> for ScalarValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = ScalarValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<ScalarValue, E> {
        Ok(ScalarValue::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<ScalarValue, E> {
        Ok(ScalarValue(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<ScalarValue, E> {
        Ok(ScalarValue(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<ScalarValue, E> {
        Ok(ScalarValue(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<ScalarValue, E> {
        Ok(ScalarValue(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<ScalarValue, E> {
        // `{:?}` keeps the fractional part of whole floats (`1.0`, not `1`)
        Ok(ScalarValue(format!("{:?}", v)))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<ScalarValue, E> {
        Ok(ScalarValue::default())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<ScalarValue, E> {
        Ok(ScalarValue::default())
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_and_as_str() {
        assert_eq!(ScalarValue::from("hello").as_str(), "hello");
        assert_eq!(ScalarValue::from("hello".to_string()).as_str(), "hello");
        assert_eq!(ScalarValue::new("x".to_string()).into_string(), "x");
    }

    #[test]
    fn test_compare_with_str() {
        let value = ScalarValue::from("Dime");
        assert_eq!(value, "Dime");
        assert!(value != "Penny");
    }

    #[test]
    fn test_as_bool() {
        for input in ["true", "TRUE", "yes", "Yes"] {
            assert!(ScalarValue::from(input).as_bool("k").unwrap(), "{}", input);
        }
        for input in ["false", "False", "no", "NO"] {
            assert!(!ScalarValue::from(input).as_bool("k").unwrap(), "{}", input);
        }
    }

    #[test]
    fn test_as_bool_invalid() {
        let err = ScalarValue::from("maybe").as_bool("flags.beta").unwrap_err();
        assert!(err.to_string().contains("flags.beta"));
        assert!(err.to_string().contains("boolean"));
    }

    #[test]
    fn test_numeric_conversions() {
        assert_eq!(ScalarValue::from("-42").as_i64("k").unwrap(), -42);
        assert_eq!(ScalarValue::from("42").as_u64("k").unwrap(), 42);
        assert!(ScalarValue::from("-42").as_u64("k").is_err());
        assert!((ScalarValue::from("0.25").as_f64("k").unwrap() - 0.25).abs() < f64::EPSILON);
        assert!(ScalarValue::from("quarter").as_f64("k").is_err());
    }

    #[test]
    fn test_parse_reports_type_name() {
        let err = ScalarValue::from("abc").parse::<u8>("wallet.count").unwrap_err();
        assert!(matches!(err, ResolveError::TypeConversionError { .. }));
        assert!(err.to_string().contains("u8"));
    }

    #[test]
    fn test_empty_scalar() {
        let value = ScalarValue::default();
        assert!(value.is_empty());
        assert_eq!(value.to_string(), "");
    }
}
