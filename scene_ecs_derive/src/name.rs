use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, LitStr, Meta, MetaNameValue};

/// Reads `#[name = "..."]`, falling back to the type identifier.
pub fn lookup_name(ast: &DeriveInput) -> syn::Result<LitStr> {
    for attr in &ast.attrs {
        if !attr.path.is_ident("name") {
            continue;
        }

        return match attr.parse_meta()? {
            Meta::NameValue(MetaNameValue { lit: Lit::Str(lit), .. }) => Ok(lit),
            meta => Err(syn::Error::new_spanned(meta, "expected #[name = \"...\"]")),
        };
    }

    Ok(LitStr::new(&ast.ident.to_string(), ast.ident.span()))
}

pub fn impl_named(ast: &DeriveInput, lit: &LitStr) -> TokenStream {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();

    quote! {
        impl #impl_generics scene_ecs::components::Named for #name #ty_generics #where_clause {
            const NAME: &'static str = #lit;
        }
    }
}
