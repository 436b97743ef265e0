// SPDX-License-Identifier: MIT OR Apache-2.0

//! Walkthrough of the resolver on a small wallet document.
//!
//! This demo shows:
//! - Resolving nested values that may be missing
//! - Falling back between keys and to defaults
//! - Decoding coins from their face value
//!
//! To run it:
//! ```bash
//! cargo run --example coin_purse
//! ```

use optchain::prelude::*;

optchain::raw_enum! {
    /// US coins by face value.
    enum Coin: f64 {
        Penny = 0.01,
        Nickel = 0.05,
        Dime = 0.10,
        Quarter = 0.25,
    }
}

const WALLET: &str = r#"
owner:
  username: rob99
  last_name: Andrews
coins:
  - 0.01
  - 0.05
  - 0.10
  - 0.10
  - 0.25
  - 0.25
  - 0.25
  - 0.50
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let resolver = LayeredResolver::builder()
        .with_yaml_str(WALLET)?
        .with_source(Box::new(
            InMemorySource::new("defaults", Mapping::new().with("currency", "USD"))
                .with_priority(0),
        ))
        .build();

    println!("=== Coin purse ===\n");

    // The owner has no first name, so the username is shown instead.
    let display = resolve_first(&resolver, ["owner.first_name", "owner.username"])?;
    println!(
        "Owner: {}",
        display.map(ScalarValue::as_str).unwrap_or("anonymous")
    );
    println!(
        "Currency: {}",
        resolver.resolve_with_default("currency", "???")
    );

    let mut total = 0.0;
    let mut quarters = 0;
    for index in 0.. {
        let path = format!("coins.{}", index);
        let raw = match resolve_parsed::<f64, _, _>(&resolver, path.as_str())? {
            ResolutionResult::Present(raw) => raw,
            ResolutionResult::Absent => break,
        };

        match Coin::from_raw(raw) {
            ResolutionResult::Present(coin) => {
                if coin == Coin::Quarter {
                    quarters += 1;
                }
                total += coin.raw_value();
                println!("  {:<8} {:.2}", coin.name(), coin.raw_value());
            }
            ResolutionResult::Absent => println!("  unknown coin worth {:.2}", raw),
        }
    }

    println!("\nQuarters: {}", quarters);
    println!("Total: {:.2}", total);

    Ok(())
}
