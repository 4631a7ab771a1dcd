mod component;
mod message;
mod name;

use proc_macro::TokenStream;
use syn::DeriveInput;

#[proc_macro_derive(Component, attributes(name))]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = syn::parse_macro_input!(input);
    component::impl_component(&ast)
}

#[proc_macro_derive(Message, attributes(name))]
pub fn derive_message(input: TokenStream) -> TokenStream {
    let ast: DeriveInput = syn::parse_macro_input!(input);
    message::impl_message(&ast)
}
