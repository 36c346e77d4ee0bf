extern crate proc_macro;

use case_paths_derive_toolkit::{CasePathableAttribute, DeriveCasePathable};
use proc_macro::TokenStream;
use syn::parse_macro_input;

/// Generates a case path for every case of an enum.
///
/// See the `case_paths` crate for the generated API and the accepted options.
#[proc_macro_attribute]
pub fn case_pathable(args: TokenStream, item: TokenStream) -> TokenStream {
    let item = proc_macro2::TokenStream::from(item);
    let mut attribute = CasePathableAttribute::default();
    match attribute.emit(args.into(), item.clone()) {
        Ok(tokens) => tokens.into(),
        Err(e) => attribute.recover(item, e).into(),
    }
}

/// Marks an enum that also carries `#[case_pathable]` as `CasePathable`.
///
/// The impl itself comes from `#[case_pathable]`; this derive emits nothing
/// and only rejects structs and unions.
#[proc_macro_derive(CasePathable, attributes(case_paths))]
pub fn derive_case_pathable(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as syn::DeriveInput);
    match DeriveCasePathable::default().emit(&ast) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.write_errors().into(),
    }
}
