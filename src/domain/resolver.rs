// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolution operations.
//!
//! These are pure functions over anything implementing [`Resolve`]: a single
//! [`Mapping`], or a [`LayeredResolver`](crate::service::LayeredResolver)
//! stacking several sources. Missing keys and shape mismatches come back as
//! [`ResolutionResult::Absent`]; only a malformed path is an error.

use crate::domain::errors::Result;
use crate::domain::lookup_path::{IntoLookupPath, LookupPath};
use crate::domain::mapping::{Mapping, Node};
use crate::domain::raw_enum::{RawValue, VariantTable};
use crate::domain::resolution::ResolutionResult;
use crate::domain::scalar_value::ScalarValue;
use std::str::FromStr;

/// Something a validated [`LookupPath`] can be resolved against.
pub trait Resolve {
    /// Walks `path`, returning the scalar it lands on or `Absent`.
    fn resolve_path(&self, path: &LookupPath) -> ResolutionResult<&ScalarValue>;
}

impl Resolve for Mapping {
    fn resolve_path(&self, path: &LookupPath) -> ResolutionResult<&ScalarValue> {
        let (last, parents) = path.split_last();

        let mut level = self;
        for segment in parents {
            match level.get(segment) {
                Some(Node::Nested(next)) => level = next,
                // Missing key, or a scalar where a level was needed.
                _ => return ResolutionResult::Absent,
            }
        }

        level.get(last).and_then(Node::as_scalar).into()
    }
}

impl<R: Resolve + ?Sized> Resolve for &R {
    fn resolve_path(&self, path: &LookupPath) -> ResolutionResult<&ScalarValue> {
        (**self).resolve_path(path)
    }
}

/// Resolves `path` against `target`.
///
/// Fails only when the path is empty or has an empty segment.
///
/// # Examples
///
/// ```
/// use optchain::domain::{resolve, Mapping, ResolutionResult};
///
/// let forecast = Mapping::new().with("daily", Mapping::new().with("temp", "22.3"));
///
/// let temp = resolve(&forecast, ["daily", "temp"]).unwrap();
/// assert_eq!(temp.map(|v| v.as_str()), ResolutionResult::Present("22.3"));
///
/// assert!(resolve(&forecast, "weekly.temp").unwrap().is_absent());
/// assert!(resolve(&forecast, Vec::<&str>::new()).is_err());
/// ```
pub fn resolve<R, P>(target: &R, path: P) -> Result<ResolutionResult<&ScalarValue>>
where
    R: Resolve + ?Sized,
    P: IntoLookupPath,
{
    let path = path.into_lookup_path()?;
    Ok(target.resolve_path(&path))
}

/// Resolves `path`, falling back to `default` when nothing is found.
///
/// Never fails: a malformed path also yields `default`.
///
/// ```
/// use optchain::domain::{resolve_with_default, Mapping};
///
/// let mapping = Mapping::new().with("daily", Mapping::new().with("temp", "22.3"));
/// assert_eq!(resolve_with_default(&mapping, ["missing"], "0"), "0");
/// assert_eq!(resolve_with_default(&mapping, "daily.temp", "0"), "22.3");
/// ```
pub fn resolve_with_default<R, P, D>(target: &R, path: P, default: D) -> ScalarValue
where
    R: Resolve + ?Sized,
    P: IntoLookupPath,
    D: Into<ScalarValue>,
{
    match resolve(target, path) {
        Ok(ResolutionResult::Present(value)) => value.clone(),
        Ok(ResolutionResult::Absent) => default.into(),
        Err(e) => {
            tracing::debug!("Falling back to default value: {}", e);
            default.into()
        }
    }
}

/// Resolves each path independently, preserving input order.
///
/// A malformed path produces an `Err` in its own slot and does not affect
/// the others.
pub fn resolve_all<'t, R, I, P>(
    target: &'t R,
    paths: I,
) -> Vec<Result<ResolutionResult<&'t ScalarValue>>>
where
    R: Resolve + ?Sized,
    I: IntoIterator<Item = P>,
    P: IntoLookupPath,
{
    paths
        .into_iter()
        .map(|path| resolve(target, path))
        .collect()
}

/// Tries each path in order and returns the first present value.
///
/// Any malformed path is reported, even if an earlier one resolved, so a
/// fallback rule is validated as a whole.
///
/// ```
/// use optchain::domain::{resolve_first, Mapping};
///
/// let user = Mapping::new().with("username", "rob");
/// let display = resolve_first(&user, ["first_name", "username"]).unwrap();
/// assert_eq!(display.map(|v| v.as_str()).unwrap_or("anonymous"), "rob");
/// ```
pub fn resolve_first<'t, R, I, P>(target: &'t R, paths: I) -> Result<ResolutionResult<&'t ScalarValue>>
where
    R: Resolve + ?Sized,
    I: IntoIterator<Item = P>,
    P: IntoLookupPath,
{
    let paths = paths
        .into_iter()
        .map(IntoLookupPath::into_lookup_path)
        .collect::<Result<Vec<LookupPath>>>()?;

    Ok(paths
        .iter()
        .map(|path| target.resolve_path(path))
        .find(ResolutionResult::is_present)
        .unwrap_or(ResolutionResult::Absent))
}

/// Resolves `path` and parses the value into `T`.
///
/// Absence stays `Absent`. A value that is present but does not parse is a
/// [`TypeConversionError`](crate::domain::ResolveError::TypeConversionError).
///
/// ```
/// use optchain::domain::{resolve_parsed, Mapping, ResolutionResult};
///
/// let forecast = Mapping::new().with("daily", Mapping::new().with("temp", "22.3"));
/// let temp: ResolutionResult<f64> = resolve_parsed(&forecast, "daily.temp").unwrap();
/// assert_eq!(temp, ResolutionResult::Present(22.3));
/// ```
pub fn resolve_parsed<T, R, P>(target: &R, path: P) -> Result<ResolutionResult<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    R: Resolve + ?Sized,
    P: IntoLookupPath,
{
    let path = path.into_lookup_path()?;
    match target.resolve_path(&path) {
        ResolutionResult::Present(value) => value
            .parse::<T>(&path.to_string())
            .map(ResolutionResult::Present),
        ResolutionResult::Absent => Ok(ResolutionResult::Absent),
    }
}

/// Decodes a raw value to the name of the matching variant.
///
/// Matching is exact; there is no coercion between numeric kinds.
pub fn decode_enum(raw: impl Into<RawValue>, table: &VariantTable) -> ResolutionResult<&str> {
    table.decode(raw)
}
