// rusty-forms Procedural Macros

use proc_macro::TokenStream;

use syn::{parse_macro_input, DeriveInput};

mod record;

/// Derive macro for the `Record` trait
///
/// Generates the static field descriptor table of a form struct from its
/// field attributes, plus accessors the validator uses to read field values.
///
/// # Example
///
/// ```ignore
/// use rusty_forms::Record;
///
/// #[derive(Record)]
/// struct LogInForm {
///     #[form("username")]
///     #[binding("Required;MaxSize(35)")]
///     user_name: String,
///
///     #[form("passwd")]
///     #[binding("Required;MinSize(6);MaxSize(30)")]
///     password: String,
///
///     #[form("remember")]
///     remember: bool,
///
///     #[form("-")]
///     csrf_checked: bool,
/// }
/// ```
///
/// # Field Attributes
///
/// - `#[form("name")]` - wire name used for binding and context keys
/// - `#[form("-")]` - exclude the field from echo and error matching
/// - `#[binding("Rule;Rule(n)")]` - declared rules, checked at compile time
///
/// Fields without `#[form]` bind under their Rust name. The field identity
/// is the UpperCamelCase form of the Rust name (`user_name` -> `UserName`).
#[proc_macro_derive(Record, attributes(form, binding))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::impl_record(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
