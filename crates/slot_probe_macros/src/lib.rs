use std::collections::HashSet;

use proc_macro::TokenStream;
use quote::quote;
use syn::Data;
use syn::DeriveInput;
use syn::Expr;
use syn::ExprLit;
use syn::Fields;
use syn::Lit;
use syn::Meta;
use syn::parse_macro_input;

/// Derives `ExitStatus` for an error enum, mapping each variant to the process exit status declared with `#[exit_code = N]`.
///
/// Codes must fit in a `u8`, must not be `0` (reserved for success) and must be unique across variants.
#[proc_macro_derive(ExitCode, attributes(exit_code))]
pub fn derive_exit_code(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_exit_code_impl(input).into()
}

fn derive_exit_code_impl(input: DeriveInput) -> proc_macro2::TokenStream {
    let name = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        panic!("ExitCode can only be derived for enums");
    };

    let mut match_arms = Vec::new();
    let mut reverse_match_arms = Vec::new();
    let mut seen_codes = HashSet::new();

    for variant in &data_enum.variants {
        let variant_name = &variant.ident;

        let exit_code = variant
            .attrs
            .iter()
            .find(|attr| attr.path().is_ident("exit_code"))
            .and_then(|attr| {
                let Meta::NameValue(meta) = &attr.meta else { return None };
                let Expr::Lit(ExprLit { lit: Lit::Int(lit_int), .. }) = &meta.value else {
                    return None;
                };
                lit_int.base10_parse::<u8>().ok()
            })
            .unwrap_or_else(|| panic!("Missing or invalid exit_code attribute for variant {}", variant_name));

        if exit_code == 0 {
            panic!("exit_code 0 is reserved for success (variant {})", variant_name);
        }
        if !seen_codes.insert(exit_code) {
            panic!("Duplicate exit_code {} for variant {}", exit_code, variant_name);
        }

        match &variant.fields {
            Fields::Named(_) => {
                match_arms.push(quote! {
                    #name::#variant_name { .. } => #exit_code
                });
            }
            Fields::Unnamed(_) => {
                match_arms.push(quote! {
                    #name::#variant_name(..) => #exit_code
                });
            }
            Fields::Unit => {
                match_arms.push(quote! {
                    #name::#variant_name => #exit_code
                });
            }
        }

        reverse_match_arms.push(quote! {
            #exit_code => stringify!(#variant_name)
        });
    }

    quote! {
        impl ExitStatus for #name {
            fn exit_code(&self) -> u8 {
                match self {
                    #(#match_arms),*
                }
            }

            fn kind_from_exit_code(code: u8) -> &'static str {
                match code {
                    #(#reverse_match_arms),*,
                    _ => "Unknown"
                }
            }
        }
    }
}
