//! Implementation of the `#[derive(Record)]` macro.
//!
//! This module generates the per-type attribute table and field reader that
//! replace runtime introspection.

mod attrs;
mod derive;

pub use derive::record_derive_impl;
