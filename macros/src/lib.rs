use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;

/// Declare an integer color model.
///
/// The struct must have three or four named fields, one for each component of
/// the color, and a `#[readout = "..."]` attribute with the template used for
/// its `Display` implementation. Every field has to be referenced by name in
/// the template, e.g. `#[readout = "R: {red} G: {green} B: {blue}"]`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !(3..=4).contains(&input.fields.len()) {
        return syn::Error::new(
            Span::call_site(),
            "Models must have three or four fields, one for each component of the color.",
        )
        .to_compile_error()
        .into();
    }

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "Models can not be generic.")
            .to_compile_error()
            .into();
    }

    let readout = match take_readout(&mut input) {
        Ok(readout) => readout,
        Err(err) => return err.to_compile_error().into(),
    };

    let syn::Fields::Named(named) = &mut input.fields else {
        return syn::Error::new(Span::call_site(), "Model fields must be named.")
            .to_compile_error()
            .into();
    };

    // Components are plain data, so they are always public.
    named.named.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let names = named
        .named
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let types = named.named.iter().map(|f| f.ty.clone()).collect::<Vec<_>>();

    input.attrs.push(syn::parse_quote! {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ::serde::Serialize)]
    });

    let struct_name = input.ident.clone();

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color from its components.
            pub const fn new(#(#names: #types),*) -> Self {
                Self { #(#names),* }
            }
        }

        impl ::core::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, #readout, #(#names = self.#names),*)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}

/// Remove the `#[readout = "..."]` attribute from the struct and return its
/// template.
fn take_readout(input: &mut syn::ItemStruct) -> syn::Result<syn::LitStr> {
    let position = input
        .attrs
        .iter()
        .position(|attr| attr.path().is_ident("readout"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "Models need a #[readout = \"...\"] attribute.",
            )
        })?;

    let meta = match input.attrs.remove(position).meta {
        syn::Meta::NameValue(meta) => meta,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "Expected #[readout = \"...\"].",
            ))
        }
    };

    match meta.value {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(template),
            ..
        }) => Ok(template),
        other => Err(syn::Error::new_spanned(
            other,
            "The readout template must be a string literal.",
        )),
    }
}
