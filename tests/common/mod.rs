// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use optchain::domain::{Mapping, ResolutionResult, Result, ScalarValue, VariantTable};

/// The forecast document used across scenarios.
#[allow(dead_code)]
pub fn forecast() -> Mapping {
    Mapping::new()
        .with(
            "daily",
            Mapping::new()
                .with("temp", "22.3")
                .with("summary", "Partly cloudy"),
        )
        .with(
            "hourly",
            Mapping::new().with("0", Mapping::new().with("temp", "19.8")),
        )
        .with("units", "si")
}

/// The coin table, keyed by face value.
#[allow(dead_code)]
pub fn coin_table() -> Result<VariantTable> {
    VariantTable::new([
        (0.01, "Penny"),
        (0.05, "Nickel"),
        (0.10, "Dime"),
        (0.25, "Quarter"),
    ])
}

/// Borrows a resolved scalar as text.
#[allow(dead_code)]
pub fn text(result: ResolutionResult<&ScalarValue>) -> ResolutionResult<&str> {
    result.map(ScalarValue::as_str)
}
