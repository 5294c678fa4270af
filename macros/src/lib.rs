use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::quote;
use syn::parse::Parser;

/// Turn a struct of named color channels into a per-space value record.
///
/// The struct gets an `alpha` channel appended, public channels, the usual
/// value derives and the constructors/accessors every record shares.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !(3..=4).contains(&input.fields.len()) {
        return quote! {
            compile_error!("Models must have 3 or 4 channel fields, alpha is added automatically.");
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    if field_names.len() != input.fields.len() {
        return quote! {
            compile_error!("Model channels must be named fields.");
        }
        .into();
    }

    // Make sure the channels are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    input
        .attrs
        .push(syn::parse_quote!(#[derive(Clone, Copy, Debug, PartialEq)]));

    if let syn::Fields::Named(ref mut named) = input.fields {
        named.named.push(
            syn::Field::parse_named
                .parse2(quote! {
                    /// The alpha channel of the color, in `0..=1`.
                    pub alpha: crate::color::Component
                })
                .unwrap(),
        );
    }

    // Records with an `a` channel (Lab) can't use `a` as the alpha key.
    let alpha_key = if field_names.iter().any(|f| f == "a") {
        "alpha"
    } else {
        "a"
    };
    let keys = field_names.iter().map(|f| f.to_string()).collect::<Vec<_>>();
    let count = Literal::usize_unsuffixed(field_names.len());

    let struct_name = input.ident.clone();

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new, fully opaque record from its channels.
            pub fn new(#(#field_names: crate::color::Component),*) -> Self {
                Self {
                    #(#field_names,)*
                    alpha: 1.0,
                }
            }

            /// Return the same record with the alpha channel replaced.
            pub fn with_alpha(self, alpha: crate::color::Component) -> Self {
                Self { alpha, ..self }
            }

            /// The color channels in declaration order, without alpha.
            pub fn channels(&self) -> [crate::color::Component; #count] {
                [#(self.#field_names),*]
            }

            /// Round every channel, alpha included, to `precision` decimal
            /// digits. A negative precision leaves the values untouched.
            pub fn round(&self, precision: i32) -> Self {
                Self {
                    #(#field_names: crate::math::round(self.#field_names, precision),)*
                    alpha: crate::math::round(self.alpha, precision),
                }
            }

            /// Describe this record as structured fields keyed by channel
            /// name.
            pub fn to_fields(&self) -> crate::parse::Fields {
                crate::parse::Fields::new()
                    #(.with(#keys, self.#field_names))*
                    .with(#alpha_key, self.alpha)
            }
        }

        impl From<#struct_name> for crate::parse::Input {
            fn from(value: #struct_name) -> Self {
                crate::parse::Input::Object(value.to_fields())
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
