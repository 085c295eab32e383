//! Implementation of the `#[derive(Introspect)]` macro.
//!
//! This module turns struct fields and their `#[opt(...)]` annotations into
//! the declared record a gyudon command tree derives field specs from.

mod attrs;
mod derive;

pub use derive::introspect_derive_impl;
