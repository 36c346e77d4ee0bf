//! Options for `#[case_pathable(...)]` and the `#[case_paths(...)]` helper
//! attribute.
//!
//! Both spellings accept the same keys. A key given in both places is an
//! error rather than one silently overriding the other.

use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::TokenStream;

pub const HELPER_ATTRIBUTE: &str = "case_paths";

/// # Attributes
///
/// - `crate = <Path>`: path of the runtime crate (default `::case_paths`).
/// - `container = <Ident>`: name of the generated container
///   (default `<Enum>CasePaths`).
/// - `dbg`: print the expansion to stderr at compile time.
#[derive(Debug, Clone, Default, FromMeta)]
pub struct CasePathsOptions {
    #[darling(rename = "crate")]
    pub crate_path: Option<syn::Path>,
    pub container: Option<syn::Path>,
    #[darling(default)]
    pub dbg: bool,
}

impl CasePathsOptions {
    /// Parses the attribute arguments and merges in any helper attributes
    /// found on the item.
    pub fn from_invocation(args: TokenStream, attrs: &[syn::Attribute]) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();
        let mut options = if args.is_empty() {
            Self::default()
        } else {
            errors
                .handle(Self::from_tokens(args))
                .unwrap_or_default()
        };
        if let Some(helper) = errors.handle(Self::from_attributes(attrs)) {
            errors.handle(options.merge(helper));
        }
        errors.finish_with(options)
    }

    /// Options from `#[case_paths(...)]` attributes alone.
    pub fn from_attributes(attrs: &[syn::Attribute]) -> darling::Result<Self> {
        let mut options = Self::default();
        for attr in attrs.iter().filter(|attr| is_helper(attr)) {
            let list = attr.meta.require_list()?;
            let parsed = Self::from_tokens(list.tokens.clone())?;
            options.merge(parsed)?;
        }
        Ok(options)
    }

    fn from_tokens(tokens: TokenStream) -> darling::Result<Self> {
        let items = NestedMeta::parse_meta_list(tokens)?;
        Self::from_list(&items)
    }

    fn merge(&mut self, other: Self) -> darling::Result<()> {
        let mut errors = darling::Error::accumulator();
        merge_field(&mut self.crate_path, other.crate_path, "crate", &mut errors);
        merge_field(&mut self.container, other.container, "container", &mut errors);
        if other.dbg {
            if self.dbg {
                errors.push(darling::Error::duplicate_field("dbg"));
            }
            self.dbg = true;
        }
        errors.finish()
    }

    pub fn crate_path(&self) -> syn::Path {
        self.crate_path
            .clone()
            .unwrap_or_else(|| syn::parse_quote!(::case_paths))
    }

    pub fn container_ident(&self, enum_ident: &syn::Ident) -> darling::Result<syn::Ident> {
        match &self.container {
            None => Ok(crate::misc::default_container_ident(enum_ident)),
            Some(path) => path.get_ident().cloned().ok_or_else(|| {
                darling::Error::custom("expected a plain identifier")
                    .with_span(path)
                    .at("container")
            }),
        }
    }
}

pub fn is_helper(attr: &syn::Attribute) -> bool {
    attr.path().is_ident(HELPER_ATTRIBUTE)
}

fn merge_field<T>(
    slot: &mut Option<T>,
    value: Option<T>,
    name: &str,
    errors: &mut darling::error::Accumulator,
) {
    let Some(value) = value else {
        return;
    };
    if slot.is_some() {
        errors.push(darling::Error::duplicate_field(name));
    } else {
        *slot = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn enum_attrs(item: syn::ItemEnum) -> Vec<syn::Attribute> {
        item.attrs
    }

    #[test]
    fn test_defaults() {
        let options = CasePathsOptions::from_invocation(TokenStream::new(), &[]).unwrap();
        let crate_path = options.crate_path();
        assert_eq!(
            quote!(#crate_path).to_string(),
            quote!(::case_paths).to_string()
        );
        let ident: syn::Ident = syn::parse_quote!(Foo);
        assert_eq!(options.container_ident(&ident).unwrap().to_string(), "FooCasePaths");
        assert!(!options.dbg);
    }

    #[test]
    fn test_arguments_and_helper_attribute_merge() {
        let attrs = enum_attrs(syn::parse_quote! {
            #[case_paths(container = FooPaths)]
            enum Foo {}
        });
        let options =
            CasePathsOptions::from_invocation(quote!(crate = crate::reexport, dbg), &attrs).unwrap();
        let crate_path = options.crate_path();
        assert_eq!(
            quote!(#crate_path).to_string(),
            quote!(crate::reexport).to_string()
        );
        let ident: syn::Ident = syn::parse_quote!(Foo);
        assert_eq!(options.container_ident(&ident).unwrap().to_string(), "FooPaths");
        assert!(options.dbg);
    }

    #[test]
    fn test_duplicate_key_is_an_error() {
        let attrs = enum_attrs(syn::parse_quote! {
            #[case_paths(container = FooPaths)]
            enum Foo {}
        });
        let result = CasePathsOptions::from_invocation(quote!(container = Other), &attrs);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let result = CasePathsOptions::from_invocation(quote!(prefix = "x"), &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_container_must_be_an_ident() {
        let options = CasePathsOptions::from_invocation(quote!(container = a::B), &[]).unwrap();
        let ident: syn::Ident = syn::parse_quote!(Foo);
        assert!(options.container_ident(&ident).is_err());
    }
}
