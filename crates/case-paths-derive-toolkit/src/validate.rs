use crate::{
    error::{Diagnostic, Invocation},
    ir::{RawCase, RegionPath, UnionDeclaration},
    misc::accessor_ident,
    scan::Scan,
};
use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::ext::IdentExt;

/// A declaration that passed every precondition.
#[derive(Debug, Clone)]
pub struct ValidatedDeclaration {
    pub declaration: UnionDeclaration,
}

/// Returns the enum inside `item`, or rejects any other kind of item.
pub fn require_union(item: &syn::Item, invocation: Invocation) -> darling::Result<&syn::ItemEnum> {
    let (category, keyword, ident): (&'static str, TokenStream, Option<&syn::Ident>) = match item {
        syn::Item::Enum(item) => return Ok(item),
        syn::Item::Struct(item) => ("struct type", item.struct_token.to_token_stream(), Some(&item.ident)),
        syn::Item::Union(item) => ("union type", item.union_token.to_token_stream(), Some(&item.ident)),
        syn::Item::Trait(item) => ("trait", item.trait_token.to_token_stream(), Some(&item.ident)),
        syn::Item::TraitAlias(item) => {
            ("trait alias", item.trait_token.to_token_stream(), Some(&item.ident))
        }
        syn::Item::Type(item) => ("type alias", item.type_token.to_token_stream(), Some(&item.ident)),
        syn::Item::Fn(item) => ("function", item.sig.fn_token.to_token_stream(), Some(&item.sig.ident)),
        syn::Item::Mod(item) => ("module", item.mod_token.to_token_stream(), Some(&item.ident)),
        syn::Item::Const(item) => ("constant", item.const_token.to_token_stream(), Some(&item.ident)),
        syn::Item::Static(item) => ("static", item.static_token.to_token_stream(), Some(&item.ident)),
        syn::Item::Impl(item) => ("impl block", item.impl_token.to_token_stream(), None),
        other => ("item", other.to_token_stream(), None),
    };
    Err(not_a_union_type(invocation, category, keyword, ident).into())
}

/// Rejects a derive input that is not an enum.
pub fn require_union_input(input: &syn::DeriveInput, invocation: Invocation) -> darling::Result<()> {
    let (category, keyword) = match &input.data {
        syn::Data::Enum(_) => return Ok(()),
        syn::Data::Struct(data) => ("struct type", data.struct_token.to_token_stream()),
        syn::Data::Union(data) => ("union type", data.union_token.to_token_stream()),
    };
    Err(not_a_union_type(invocation, category, keyword, Some(&input.ident)).into())
}

fn not_a_union_type(
    invocation: Invocation,
    category: &'static str,
    mut anchor: TokenStream,
    ident: Option<&syn::Ident>,
) -> Diagnostic {
    if let Some(ident) = ident {
        ident.to_tokens(&mut anchor);
    }
    Diagnostic::NotAUnionType {
        invocation,
        category,
        name: ident.map(|ident| ident.unraw().to_string()),
        anchor,
    }
}

/// Checks every precondition on `item` and builds its region tree.
///
/// All case-level problems are reported together; a non-enum item yields a
/// single diagnostic.
pub fn validate(item: &syn::Item, invocation: Invocation) -> darling::Result<ValidatedDeclaration> {
    let item = require_union(item, invocation)?;
    let declaration = UnionDeclaration::from_item_enum(item)?;

    let diagnostics = check_cases(&declaration, invocation)?;
    if !diagnostics.is_empty() {
        let mut errors = darling::Error::accumulator();
        for diagnostic in diagnostics {
            errors.push(diagnostic.into());
        }
        errors.finish()?;
    }
    Ok(ValidatedDeclaration { declaration })
}

/// Case-level diagnostics in declaration order.
pub fn check_cases(
    declaration: &UnionDeclaration,
    invocation: Invocation,
) -> darling::Result<Vec<Diagnostic>> {
    let mut checker = CaseChecker {
        invocation,
        position: 0,
        seen: Vec::new(),
        diagnostics: Vec::new(),
    };
    checker.scan_declaration(declaration)?;
    Ok(checker.diagnostics)
}

struct SeenCase {
    name: String,
    accessor: String,
    path: RegionPath,
}

struct CaseChecker {
    invocation: Invocation,
    position: usize,
    seen: Vec<SeenCase>,
    diagnostics: Vec<Diagnostic>,
}

impl<'ir> Scan<'ir> for CaseChecker {
    fn scan_case(&mut self, case: &'ir RawCase, path: &RegionPath) -> darling::Result<()> {
        let position = self.position;
        self.position += 1;
        let name = case.ident.unraw().to_string();

        if case.parameters.iter().any(|parameter| parameter.is_conditional()) {
            self.diagnostics.push(Diagnostic::ConditionalPayloadField {
                invocation: self.invocation,
                case: name.clone(),
                span: case.ident.span(),
            });
        }

        // Cases on branches of one block never coexist, so they may share a
        // name.
        let accessor = accessor_ident(&case.ident).unraw().to_string();
        if let Some(previous) = self
            .seen
            .iter()
            .find(|seen| seen.accessor == accessor && seen.path.shares_lineage(path))
        {
            self.diagnostics.push(Diagnostic::OverloadedCaseName {
                invocation: self.invocation,
                name: name.clone(),
                previous: previous.name.clone(),
                accessor: accessor.clone(),
                position,
                span: case.ident.span(),
            });
        }

        self.seen.push(SeenCase {
            name,
            accessor,
            path: path.clone(),
        });
        Ok(())
    }
}
