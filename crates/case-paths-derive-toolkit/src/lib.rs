//! Expansion logic behind `#[case_pathable]` and `#[derive(CasePathable)]`.
//!
//! The attribute macro runs four stages over the annotated enum:
//!
//! 1. [`validate`] rejects anything that is not an enum, cases whose accessor
//!    names collide, and payload fields under `#[cfg]`.
//! 2. [`enumerate`] walks the region tree and describes each case.
//! 3. [`synthesize`] builds the embed and extract closures for each case.
//! 4. [`assemble`] emits the container type, its accessors and the
//!    `CasePathable` impl.

pub mod assemble;
mod dbg;
pub mod enumerate;
pub mod error;
pub mod ir;
pub mod misc;
pub mod options;
pub mod scan;
pub mod self_type;
pub mod synthesize;
pub mod validate;

#[cfg(test)]
mod test_util;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use crate::{
    assemble::Assembly,
    enumerate::enumerate,
    error::Invocation,
    options::{CasePathsOptions, is_helper},
    synthesize::{SynthesisContext, synthesize},
    validate::{ValidatedDeclaration, require_union, require_union_input, validate},
};

/// `#[case_pathable]`: re-emits the enum followed by its case paths.
#[derive(Debug, Default)]
pub struct CasePathableAttribute;

impl CasePathableAttribute {
    pub fn emit(&mut self, args: TokenStream, item: TokenStream) -> darling::Result<TokenStream> {
        let item: syn::Item = syn::parse2(item)?;
        let item_enum = require_union(&item, Invocation::Attribute)?;
        let options = CasePathsOptions::from_invocation(args, &item_enum.attrs)?;
        let validated = validate(&item, Invocation::Attribute)?;

        let generated = self.generate(&validated, &options)?;
        if options.dbg {
            dbg::dump(&validated.declaration.ident, &generated);
        }

        let item = strip_helpers(item_enum.clone());
        Ok(quote! {
            #item
            #generated
        })
    }

    fn generate(
        &self,
        validated: &ValidatedDeclaration,
        options: &CasePathsOptions,
    ) -> darling::Result<TokenStream> {
        let declaration = &validated.declaration;
        let ctx = SynthesisContext::new(declaration, options);
        let accessors: Vec<_> = enumerate(validated)?
            .into_iter()
            .map(|(path, descriptor)| (path, synthesize(&descriptor, &ctx)))
            .collect();
        let assembly = Assembly {
            declaration,
            container: options.container_ident(&declaration.ident)?,
            crate_path: ctx.crate_path.clone(),
        };
        Ok(assembly.emit(&accessors))
    }

    /// What to emit in place of the item when expansion fails, so that the
    /// enum itself stays usable and only the errors are reported.
    pub fn recover(&self, item: TokenStream, error: darling::Error) -> TokenStream {
        let mut tokens = match syn::parse2::<syn::Item>(item.clone()) {
            Ok(syn::Item::Enum(item_enum)) => strip_helpers(item_enum).into_token_stream(),
            _ => item,
        };
        tokens.extend(error.write_errors());
        tokens
    }
}

/// `#[derive(CasePathable)]`: spells out the conformance on an enum that also
/// carries `#[case_pathable]`, in either order.
///
/// The attribute emits the impl itself, so the derive only checks that it is
/// applied to an enum and emits nothing.
#[derive(Debug, Default)]
pub struct DeriveCasePathable;

impl DeriveCasePathable {
    pub fn emit(&mut self, input: &syn::DeriveInput) -> darling::Result<TokenStream> {
        require_union_input(input, Invocation::Derive)?;
        Ok(TokenStream::new())
    }
}

fn strip_helpers(mut item: syn::ItemEnum) -> syn::ItemEnum {
    item.attrs.retain(|attr| !is_helper(attr));
    item
}
