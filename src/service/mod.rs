// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer.
//!
//! This module contains [`LayeredResolver`], which resolves lookup paths
//! across several prioritized mapping sources.

pub mod layered;

// Re-export commonly used types
pub use layered::{LayeredResolver, LayeredResolverBuilder};
