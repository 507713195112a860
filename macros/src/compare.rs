use proc_macro2::TokenStream;
use quote::quote;

use super::*;

/// Expand the `Compare` derive.
pub fn expand(input: syn::DeriveInput) -> Result<TokenStream> {
    let syn::Data::Struct(data) = &input.data else {
        bail!(input, "only structs can derive `Compare`");
    };

    let syn::Fields::Named(fields) = &data.fields else {
        bail!(input, "only structs with named fields are supported");
    };

    let mut compared = vec![];
    for field in &fields.named {
        if !skipped(field)? {
            compared.extend(field.ident.clone());
        }
    }

    // Chain the fields in declaration order, stopping at the first
    // discriminating one.
    let mut compared = compared.into_iter();
    let chain = match compared.next() {
        None => quote! { ::core::cmp::Ordering::Equal },
        Some(first) => {
            let rest = compared.map(|name| {
                quote! {
                    .then_with(|| ::projemo::cmp::ParamOrd::param_cmp(
                        &self.#name,
                        &other.#name,
                    ))
                }
            });
            quote! {
                ::projemo::cmp::ParamOrd::param_cmp(&self.#first, &other.#first)
                #(#rest)*
            }
        }
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::projemo::cmp::ParamOrd for #ident #ty_generics #where_clause {
            fn param_cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                #chain
            }
        }
    })
}

/// Whether a field carries `#[compare(skip)]`.
fn skipped(field: &syn::Field) -> Result<bool> {
    let mut skip = false;
    for attr in &field.attrs {
        if attr.path().is_ident("compare") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else {
                    Err(meta.error("projemo: unknown `compare` option"))
                }
            })?;
        }
    }
    Ok(skip)
}
