use crate::{
    ir::{CaseDescriptor, CaseStyle, PayloadShape, UnionDeclaration},
    options::CasePathsOptions,
};
use proc_macro2::TokenStream;
use quote::quote;

/// The pieces of one generated accessor.
#[derive(Debug, Clone)]
pub struct AccessorSpec {
    pub variant: syn::Ident,
    pub accessor: syn::Ident,
    pub value: syn::Type,
    pub embed: TokenStream,
    pub extract: TokenStream,
    pub attrs: Vec<syn::Attribute>,
}

/// What every accessor of one enum has in common.
pub struct SynthesisContext {
    pub enum_ident: syn::Ident,
    pub self_ty: syn::Type,
    pub crate_path: syn::Path,
}

impl SynthesisContext {
    pub fn new(declaration: &UnionDeclaration, options: &CasePathsOptions) -> Self {
        Self {
            enum_ident: declaration.ident.clone(),
            self_ty: declaration.self_ty(),
            crate_path: options.crate_path(),
        }
    }
}

pub fn synthesize(descriptor: &CaseDescriptor, ctx: &SynthesisContext) -> AccessorSpec {
    let value = descriptor.shape.value_type();
    let construct = construct_case(descriptor, ctx);
    let payload = payload_tuple(descriptor);
    let self_ty = &ctx.self_ty;

    let embed = match &descriptor.shape {
        PayloadShape::Empty => quote! { |(): ()| #construct },
        PayloadShape::Single(_) if descriptor.style == CaseStyle::Tuple => {
            let enum_ident = &ctx.enum_ident;
            let variant = &descriptor.ident;
            quote! { #enum_ident::#variant }
        }
        PayloadShape::Single(_) | PayloadShape::Tuple(_) => {
            quote! { |#payload: #value| #construct }
        }
    };

    let extract = quote! {
        |root: #self_ty| match root {
            #construct => ::core::option::Option::Some(#payload),
            _ => ::core::option::Option::None,
        }
    };

    AccessorSpec {
        variant: descriptor.ident.clone(),
        accessor: descriptor.accessor.clone(),
        value,
        embed,
        extract,
        attrs: descriptor.attrs.clone(),
    }
}

/// `Foo::Bar`, `Foo::Bar(v0, v1)` or `Foo::Bar { x: v0 }`; valid both as an
/// expression and as a pattern.
fn construct_case(descriptor: &CaseDescriptor, ctx: &SynthesisContext) -> TokenStream {
    let enum_ident = &ctx.enum_ident;
    let variant = &descriptor.ident;
    let bindings = &descriptor.bindings;
    match descriptor.style {
        CaseStyle::Unit => quote! { #enum_ident::#variant },
        CaseStyle::Tuple => quote! { #enum_ident::#variant(#(#bindings),*) },
        CaseStyle::Struct => {
            let labels = descriptor.shape.labels().flatten();
            quote! { #enum_ident::#variant { #(#labels: #bindings),* } }
        }
    }
}

/// The payload as a value: `()`, `v0`, `(v0,)` or `(v0, v1)`.
fn payload_tuple(descriptor: &CaseDescriptor) -> TokenStream {
    let bindings = &descriptor.bindings;
    match &descriptor.shape {
        PayloadShape::Empty => quote! { () },
        PayloadShape::Single(_) => quote! { #(#bindings)* },
        PayloadShape::Tuple(_) if bindings.len() == 1 => quote! { (#(#bindings,)*) },
        PayloadShape::Tuple(_) => quote! { (#(#bindings),*) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_tokens_eq;
    use crate::{
        enumerate::enumerate, error::Invocation, options::CasePathsOptions, validate::validate,
    };

    fn accessors(item: syn::Item) -> Vec<AccessorSpec> {
        let options = CasePathsOptions::default();
        let validated = validate(&item, Invocation::Attribute).unwrap();
        let ctx = SynthesisContext::new(&validated.declaration, &options);
        enumerate(&validated)
            .unwrap()
            .iter()
            .map(|(_, descriptor)| synthesize(descriptor, &ctx))
            .collect()
    }

    #[test]
    fn test_unit_case() {
        let specs = accessors(syn::parse_quote! { enum Foo { Bar } });
        assert_tokens_eq(&specs[0].embed, quote! { |(): ()| Foo::Bar });
        assert_tokens_eq(
            &specs[0].extract,
            quote! {
                |root: Foo| match root {
                    Foo::Bar => ::core::option::Option::Some(()),
                    _ => ::core::option::Option::None,
                }
            },
        );
        let value = &specs[0].value;
        assert_tokens_eq(&quote!(#value), quote!(()));
    }

    #[test]
    fn test_single_unnamed_payload_embeds_with_constructor() {
        let specs = accessors(syn::parse_quote! { enum Foo { Baz(i32) } });
        assert_tokens_eq(&specs[0].embed, quote! { Foo::Baz });
        assert_tokens_eq(
            &specs[0].extract,
            quote! {
                |root: Foo| match root {
                    Foo::Baz(v0) => ::core::option::Option::Some(v0),
                    _ => ::core::option::Option::None,
                }
            },
        );
    }

    #[test]
    fn test_tuple_payload() {
        let specs = accessors(syn::parse_quote! { enum Foo { Bar(i32, bool) } });
        assert_tokens_eq(
            &specs[0].embed,
            quote! { |(v0, v1): (i32, bool)| Foo::Bar(v0, v1) },
        );
        assert_tokens_eq(
            &specs[0].extract,
            quote! {
                |root: Foo| match root {
                    Foo::Bar(v0, v1) => ::core::option::Option::Some((v0, v1)),
                    _ => ::core::option::Option::None,
                }
            },
        );
    }

    #[test]
    fn test_labeled_payload() {
        let specs = accessors(syn::parse_quote! { enum Foo { Bar { int: i32, flag: bool } } });
        assert_tokens_eq(
            &specs[0].embed,
            quote! { |(v0, v1): (i32, bool)| Foo::Bar { int: v0, flag: v1 } },
        );
        assert_tokens_eq(
            &specs[0].extract,
            quote! {
                |root: Foo| match root {
                    Foo::Bar { int: v0, flag: v1 } => ::core::option::Option::Some((v0, v1)),
                    _ => ::core::option::Option::None,
                }
            },
        );
    }

    #[test]
    fn test_single_labeled_payload_is_a_one_tuple() {
        let specs = accessors(syn::parse_quote! { enum Foo { Bar { int: i32 } } });
        assert_tokens_eq(&specs[0].embed, quote! { |(v0,): (i32,)| Foo::Bar { int: v0 } });
        let value = &specs[0].value;
        assert_tokens_eq(&quote!(#value), quote!((i32,)));
    }

    #[test]
    fn test_empty_parens_and_braces() {
        let specs = accessors(syn::parse_quote! { enum Foo { Bar(), Baz {} } });
        assert_tokens_eq(&specs[0].embed, quote! { |(): ()| Foo::Bar() });
        assert_tokens_eq(&specs[1].embed, quote! { |(): ()| Foo::Baz {} });
    }

    #[test]
    fn test_generic_root_type() {
        let specs = accessors(syn::parse_quote! {
            enum Foo<'a, T> where T: Clone {
                Bar(&'a T),
                Baz(Box<Self>),
            }
        });
        assert_tokens_eq(&specs[0].embed, quote! { Foo::Bar });
        assert_tokens_eq(
            &specs[1].extract,
            quote! {
                |root: Foo<'a, T>| match root {
                    Foo::Baz(v0) => ::core::option::Option::Some(v0),
                    _ => ::core::option::Option::None,
                }
            },
        );
        let value = &specs[1].value;
        assert_tokens_eq(&quote!(#value), quote!(Box<Foo<'a, T>>));
    }
}
