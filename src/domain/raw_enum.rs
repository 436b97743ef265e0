// SPDX-License-Identifier: MIT OR Apache-2.0

//! Closed variant sets keyed by raw scalar values.
//!
//! A [`VariantTable`] is the runtime form: a closed list of variant names,
//! each with a unique [`RawValue`]. The [`RawEnum`] trait is the compile-time
//! form, usually declared with the [`raw_enum!`](crate::raw_enum) macro.
//! Decoding from a raw value is an exact reverse lookup that either finds a
//! variant or comes up [`Absent`](ResolutionResult::Absent).

use crate::domain::errors::{ResolveError, Result};
use crate::domain::resolution::ResolutionResult;
use std::fmt;

/// A raw scalar attached to an enum variant.
///
/// Equality is exact and never crosses kinds: `Int(1)` and `Float(1.0)` are
/// different raw values.
///
/// Every integer type up to `u32` converts into `Int(i64)`, so integer width
/// is not part of a raw value: `1u8` and `1i32` are the same raw value. This
/// happens once, on conversion; decoding itself compares values exactly.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue {
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Text(String),
    /// A boolean.
    Bool(bool),
}

impl RawValue {
    /// Short name of the kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RawValue::Int(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::Text(_) => "text",
            RawValue::Bool(_) => "boolean",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Int(n) => write!(f, "{}", n),
            RawValue::Float(n) => write!(f, "{}", n),
            RawValue::Text(s) => write!(f, "{:?}", s),
            RawValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

macro_rules! raw_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawValue {
                fn from(n: $t) -> Self {
                    RawValue::Int(i64::from(n))
                }
            }
        )*
    };
}

raw_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Float(n)
    }
}

impl From<f32> for RawValue {
    fn from(n: f32) -> Self {
        RawValue::Float(f64::from(n))
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

/// A closed mapping from raw values to variant names.
///
/// # Examples
///
/// ```
/// use optchain::domain::{ResolutionResult, VariantTable};
///
/// let coins = VariantTable::new([
///     (0.01, "Penny"),
///     (0.05, "Nickel"),
///     (0.10, "Dime"),
///     (0.25, "Quarter"),
/// ])
/// .unwrap();
///
/// assert_eq!(coins.decode(0.10), ResolutionResult::Present("Dime"));
/// assert_eq!(coins.decode(0.50), ResolutionResult::Absent);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct VariantTable {
    entries: Vec<(RawValue, String)>,
}

impl VariantTable {
    /// Builds a table, checking that raw values are unique, names are not
    /// empty, and no raw value is `NaN`.
    pub fn new<I, R, N>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (R, N)>,
        R: Into<RawValue>,
        N: Into<String>,
    {
        let mut table = VariantTable {
            entries: Vec::new(),
        };

        for (raw, name) in entries {
            let raw = raw.into();
            let name = name.into();

            if name.is_empty() {
                return Err(ResolveError::InvalidVariantTable {
                    message: format!("variant with raw value {} has an empty name", raw),
                });
            }
            if matches!(raw, RawValue::Float(n) if n.is_nan()) {
                return Err(ResolveError::InvalidVariantTable {
                    message: format!("variant '{}' has a NaN raw value", name),
                });
            }
            if let Some((_, existing)) = table.entries.iter().find(|(r, _)| *r == raw) {
                return Err(ResolveError::InvalidVariantTable {
                    message: format!(
                        "raw value {} is shared by '{}' and '{}'",
                        raw, existing, name
                    ),
                });
            }

            table.entries.push((raw, name));
        }

        Ok(table)
    }

    /// Finds the variant whose raw value equals `raw` exactly.
    pub fn decode(&self, raw: impl Into<RawValue>) -> ResolutionResult<&str> {
        let raw = raw.into();
        self.entries
            .iter()
            .find(|(candidate, _)| *candidate == raw)
            .map(|(_, name)| name.as_str())
            .into()
    }

    /// Finds the raw value of the variant called `name`.
    pub fn raw_value_of(&self, name: &str) -> ResolutionResult<&RawValue> {
        self.entries
            .iter()
            .find(|(_, candidate)| candidate == name)
            .map(|(raw, _)| raw)
            .into()
    }

    /// Iterates `(raw value, name)` pairs in declaration order.
    pub fn variants(&self) -> impl Iterator<Item = (&RawValue, &str)> {
        self.entries.iter().map(|(raw, name)| (raw, name.as_str()))
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no variants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An enum whose variants each carry a unique raw value.
///
/// Implement it with the [`raw_enum!`](crate::raw_enum) macro rather than by
/// hand.
pub trait RawEnum: Sized + Copy + 'static {
    /// Type of the raw values.
    type Raw: Into<RawValue> + PartialEq + Copy;

    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    /// Raw value of this variant.
    fn raw_value(&self) -> Self::Raw;

    /// Name of this variant as declared.
    fn name(&self) -> &'static str;

    /// Failable construction from a raw value.
    ///
    /// A raw value shared by more than one variant never decodes: it comes
    /// back [`Absent`](ResolutionResult::Absent) and the clash is logged at
    /// warn level. [`variant_table`](Self::variant_table) reports the same
    /// declaration as an error.
    fn from_raw(raw: Self::Raw) -> ResolutionResult<Self> {
        let mut matches = Self::VARIANTS
            .iter()
            .copied()
            .filter(|variant| variant.raw_value() == raw);

        match (matches.next(), matches.next()) {
            (Some(variant), None) => ResolutionResult::Present(variant),
            (Some(first), Some(second)) => {
                let shared: RawValue = raw.into();
                tracing::warn!(
                    "Raw value {} is shared by '{}' and '{}'",
                    shared,
                    first.name(),
                    second.name()
                );
                ResolutionResult::Absent
            }
            (None, _) => ResolutionResult::Absent,
        }
    }

    /// Builds the runtime table for this enum.
    fn variant_table() -> Result<VariantTable> {
        VariantTable::new(
            Self::VARIANTS
                .iter()
                .map(|variant| (variant.raw_value(), variant.name())),
        )
    }
}
