//! Tourism core: data model, the built-in dataset, and the shared error type.
//!
//! This crate defines the JSON-facing records served by the API and the
//! process-wide constants they are read from. It carries no transport or
//! runtime dependencies so the dataset can be reused outside the HTTP service.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod dataset;
pub mod error;
pub mod model;

/// Shared result type.
pub use error::{Result, TourismError};
