//! Top-level facade crate for the tourism API.
//!
//! Re-exports the core dataset types and the HTTP service library so users can
//! depend on a single crate.

pub mod core {
    pub use tourism_core::*;
}

pub mod api {
    pub use tourism_api::*;
}
