// SPDX-License-Identifier: MIT OR Apache-2.0

//! The outcome of a resolution: a value, or an explicit absence.

/// Result of resolving a lookup.
///
/// Absence is an ordinary, expected outcome rather than an error, so callers
/// branch on it (or coalesce it away with [`unwrap_or`](Self::unwrap_or))
/// instead of unwrapping nested options.
///
/// # Examples
///
/// ```
/// use optchain::domain::ResolutionResult;
///
/// let first_name: ResolutionResult<&str> = ResolutionResult::Absent;
/// let display_name = first_name.unwrap_or("rob");
/// assert_eq!(display_name, "rob");
///
/// let found = ResolutionResult::Present(3).map(|n| n * 2);
/// assert_eq!(found, ResolutionResult::Present(6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub enum ResolutionResult<T> {
    /// The lookup produced a value.
    Present(T),
    /// The lookup produced nothing.
    Absent,
}

use self::ResolutionResult::{Absent, Present};

impl<T> ResolutionResult<T> {
    /// Returns `true` if a value is present.
    pub fn is_present(&self) -> bool {
        matches!(self, Present(_))
    }

    /// Returns `true` if no value is present.
    pub fn is_absent(&self) -> bool {
        matches!(self, Absent)
    }

    /// Converts into an `Option`.
    pub fn present(self) -> Option<T> {
        match self {
            Present(value) => Some(value),
            Absent => None,
        }
    }

    /// Borrows the contained value.
    pub fn as_ref(&self) -> ResolutionResult<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Transforms a present value, leaving absence untouched.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ResolutionResult<U> {
        match self {
            Present(value) => Present(f(value)),
            Absent => Absent,
        }
    }

    /// Chains another lookup that may itself come up empty.
    pub fn and_then<U, F: FnOnce(T) -> ResolutionResult<U>>(self, f: F) -> ResolutionResult<U> {
        match self {
            Present(value) => f(value),
            Absent => Absent,
        }
    }

    /// Returns `self` if present, otherwise `other`.
    pub fn or(self, other: ResolutionResult<T>) -> ResolutionResult<T> {
        match self {
            Present(value) => Present(value),
            Absent => other,
        }
    }

    /// Returns `self` if present, otherwise the result of `f`.
    pub fn or_else<F: FnOnce() -> ResolutionResult<T>>(self, f: F) -> ResolutionResult<T> {
        match self {
            Present(value) => Present(value),
            Absent => f(),
        }
    }

    /// Returns the value, or `default` when absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Present(value) => value,
            Absent => default,
        }
    }

    /// Returns the value, or computes one when absent.
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Present(value) => value,
            Absent => f(),
        }
    }
}

impl<T: Default> ResolutionResult<T> {
    /// Returns the value, or `T::default()` when absent.
    pub fn unwrap_or_default(self) -> T {
        self.unwrap_or_else(T::default)
    }
}

impl<T: Clone> ResolutionResult<&T> {
    /// Clones a borrowed present value.
    pub fn cloned(self) -> ResolutionResult<T> {
        self.map(T::clone)
    }
}

impl<T> Default for ResolutionResult<T> {
    fn default() -> Self {
        Absent
    }
}

impl<T> From<Option<T>> for ResolutionResult<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Present(value),
            None => Absent,
        }
    }
}

impl<T> From<ResolutionResult<T>> for Option<T> {
    fn from(result: ResolutionResult<T>) -> Self {
        result.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Present(1).is_present());
        assert!(!Present(1).is_absent());
        assert!(ResolutionResult::<i32>::Absent.is_absent());
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(ResolutionResult::from(Some(5)), Present(5));
        assert_eq!(ResolutionResult::<i32>::from(None), Absent);

        let option: Option<i32> = Present(7).into();
        assert_eq!(option, Some(7));
        assert_eq!(ResolutionResult::<i32>::Absent.present(), None);
    }

    #[test]
    fn test_and_then_short_circuits() {
        let mut called = false;
        let result: ResolutionResult<i32> = Absent.and_then(|n: i32| {
            called = true;
            Present(n + 1)
        });
        assert_eq!(result, Absent);
        assert!(!called);

        assert_eq!(Present(1).and_then(|n| Present(n + 1)), Present(2));
        assert_eq!(Present(1).and_then(|_| ResolutionResult::<i32>::Absent), Absent);
    }

    #[test]
    fn test_coalescing() {
        assert_eq!(Present("Rob").unwrap_or("rob99"), "Rob");
        assert_eq!(Absent.unwrap_or("rob99"), "rob99");
        assert_eq!(ResolutionResult::<String>::Absent.unwrap_or_default(), "");
        assert_eq!(Absent.unwrap_or_else(|| 4), 4);
    }

    #[test]
    fn test_or_prefers_first_present() {
        assert_eq!(Present(1).or(Present(2)), Present(1));
        assert_eq!(Absent.or(Present(2)), Present(2));
        assert_eq!(Absent.or_else(|| Present(3)), Present(3));
        assert_eq!(ResolutionResult::<i32>::Absent.or(Absent), Absent);
    }

    #[test]
    fn test_cloned_and_as_ref() {
        let owned = Present(String::from("Nickel"));
        let borrowed = owned.as_ref();
        assert_eq!(borrowed.cloned(), Present(String::from("Nickel")));
    }

    #[test]
    fn test_default_is_absent() {
        assert_eq!(ResolutionResult::<u8>::default(), Absent);
    }
}
