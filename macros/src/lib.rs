extern crate proc_macro;

macro_rules! bail {
    ($item:expr, $fmt:literal $($tts:tt)*) => {
        return Err(Error::new_spanned(
            &$item,
            format!(concat!("projemo: ", $fmt) $($tts)*)
        ))
    }
}

mod compare;

use proc_macro::TokenStream;
use syn::{Error, Result};

/// Derive the parameter comparison for a projection kind.
///
/// Generates a `ParamOrd` implementation that compares the fields in
/// declaration order with short-circuit chaining, so a base projection
/// dependency should be declared first. Mark result-payload fields with
/// `#[compare(skip)]`: they are populated by `project` and must not take
/// part in the comparison.
///
/// ```ignore
/// #[derive(Clone, Debug, Compare)]
/// struct IsolatedMuons {
///     cfs: ChargedFinalState,
///     cone: f64,
///     #[compare(skip)]
///     muons: Vec<Particle>,
/// }
/// ```
///
/// The kind's `cmp_same_kind` then simply forwards to
/// `projemo::cmp::by_params`.
#[proc_macro_derive(Compare, attributes(compare))]
pub fn derive_compare(stream: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(stream as syn::DeriveInput);
    compare::expand(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
