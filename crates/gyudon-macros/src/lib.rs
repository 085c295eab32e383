//! Proc macros for gyudon.
//!
//! # Available Macros
//!
//! - [`Introspect`] - Declare a commander's record from its struct fields
//!
//! For working examples, see `gyudon/tests/introspect_derive.rs`.

mod introspect;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `gyudon::Introspect` for a struct.
///
/// The generated `shape()` returns a record named after the struct, with one
/// field declaration per field in declaration order. A field counts as
/// exported when it is declared `pub`; the command tree only derives specs
/// for exported fields.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `help = "..."` | Help text for the field |
/// | `default = "..."` | Default value, carried as text and never applied |
///
/// # Supported Shapes
///
/// - Structs with named fields
/// - Unit structs (no fields)
///
/// Tuple structs, enums and unions are rejected at compile time.
///
/// # Example
///
/// ```ignore
/// use gyudon::Introspect;
///
/// #[derive(Introspect)]
/// struct Hoge {
///     #[opt(help = "fugafuga", default = "fuga")]
///     pub fuga: String,
///
///     // Not exported: no spec.
///     calls: u32,
/// }
/// ```
#[proc_macro_derive(Introspect, attributes(opt))]
pub fn introspect_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    introspect::introspect_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
