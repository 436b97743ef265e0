// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative macros.

/// Declares an enum whose variants carry raw values, and implements
/// [`RawEnum`](crate::domain::RawEnum) for it.
///
/// The generated enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq` and
/// `Hash`; attributes written above the enum are kept, so do not derive those
/// traits again.
///
/// Raw values must be unique. A value given to two variants decodes to
/// neither of them, and [`variant_table`](crate::domain::RawEnum::variant_table)
/// fails for the enum.
///
/// # Examples
///
/// ```
/// use optchain::domain::{RawEnum, ResolutionResult};
///
/// optchain::raw_enum! {
///     /// US coins by face value.
///     pub enum Coin: f64 {
///         Penny = 0.01,
///         Nickel = 0.05,
///         Dime = 0.10,
///         Quarter = 0.25,
///     }
/// }
///
/// assert_eq!(Coin::from_raw(0.10), ResolutionResult::Present(Coin::Dime));
/// assert_eq!(Coin::from_raw(0.50), ResolutionResult::Absent);
/// assert_eq!(Coin::Quarter.raw_value(), 0.25);
/// assert_eq!(Coin::Nickel.name(), "Nickel");
/// ```
#[macro_export]
macro_rules! raw_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $raw:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::domain::RawEnum for $name {
            type Raw = $raw;

            const VARIANTS: &'static [Self] = &[$($name::$variant),+];

            fn raw_value(&self) -> $raw {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::ResolutionResult::{Absent, Present};
    use crate::domain::{RawEnum, RawValue};

    crate::raw_enum! {
        enum Coin: f64 {
            Penny = 0.01,
            Nickel = 0.05,
            Dime = 0.10,
            Quarter = 0.25,
        }
    }

    crate::raw_enum! {
        /// Who an employee reports to.
        enum EmployeeType: &'static str {
            Manager = "manager",
            NotManager = "staff"
        }
    }

    crate::raw_enum! {
        enum Clashing: i32 {
            First = 1,
            Second = 1,
            Third = 3,
        }
    }

    #[test]
    fn test_shared_raw_value_is_rejected() {
        assert_eq!(Clashing::from_raw(Clashing::Second.raw_value()), Absent);
        assert_eq!(Clashing::from_raw(Clashing::First.raw_value()), Absent);
        assert_eq!(Clashing::from_raw(3), Present(Clashing::Third));
        assert!(Clashing::variant_table().is_err());
    }

    #[test]
    fn test_from_raw_round_trips_every_variant() {
        for coin in Coin::VARIANTS {
            assert_eq!(Coin::from_raw(coin.raw_value()), Present(*coin));
        }
    }

    #[test]
    fn test_from_raw_unknown_value() {
        assert_eq!(Coin::from_raw(0.50), Absent);
        assert_eq!(EmployeeType::from_raw("contractor"), Absent);
    }

    #[test]
    fn test_variant_table_matches_enum() {
        let table = Coin::variant_table().unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.decode(0.25), Present("Quarter"));
        assert_eq!(
            table.raw_value_of("Penny"),
            Present(&RawValue::Float(0.01))
        );
    }

    #[test]
    fn test_text_raw_values() {
        assert_eq!(EmployeeType::from_raw("manager"), Present(EmployeeType::Manager));
        assert_eq!(EmployeeType::NotManager.name(), "NotManager");
        assert_eq!(EmployeeType::NotManager.raw_value(), "staff");
    }

    #[test]
    fn test_wallet_count() {
        let wallet = [
            Coin::Penny,
            Coin::Nickel,
            Coin::Dime,
            Coin::Dime,
            Coin::Quarter,
            Coin::Quarter,
            Coin::Quarter,
        ];
        let quarters = wallet.iter().filter(|c| matches!(c, Coin::Quarter)).count();
        let total: f64 = wallet.iter().map(|c| c.raw_value()).sum();

        assert_eq!(quarters, 3);
        assert!((total - 1.01).abs() < 1e-9);
    }
}
