use crate::name::{impl_named, lookup_name};
use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

pub fn impl_component(ast: &DeriveInput) -> TokenStream {
    let lit = match lookup_name(ast) {
        Ok(lit) => lit,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    let named = impl_named(ast, &lit);

    let gen = quote! {
        #named

        impl #impl_generics scene_ecs::components::Component for #name #ty_generics #where_clause {
            #[inline(always)]
            fn name(&self) -> &str {
                <Self as scene_ecs::components::Named>::NAME
            }
        }
    };
    gen.into()
}
