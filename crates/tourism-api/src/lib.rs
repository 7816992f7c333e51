//! Tourism API library entry.
//!
//! Wires config, shared state, the data routes, and the operational endpoints
//! into one axum `Router`. Consumed by the binary (`main.rs`) and by the
//! integration tests, which drive the router in-process.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
