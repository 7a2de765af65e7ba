//! Shared rules and formatting for the page helpers.
//!
//! Nothing in this crate touches the browser, so every rule here can be
//! exercised with plain `cargo test`.

pub mod shared;
