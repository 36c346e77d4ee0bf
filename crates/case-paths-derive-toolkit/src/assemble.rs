use crate::{
    ir::{RegionPath, UnionDeclaration},
    synthesize::AccessorSpec,
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

/// Names shared by every generated item of one enum.
pub struct Assembly<'a> {
    pub declaration: &'a UnionDeclaration,
    pub container: syn::Ident,
    pub crate_path: syn::Path,
}

impl Assembly<'_> {
    /// Container type, its accessor methods, the inherent `all_case_paths`
    /// and the trait impl, in that order.
    pub fn emit(&self, accessors: &[(RegionPath, AccessorSpec)]) -> TokenStream {
        let container = self.container_struct();
        let methods = self.container_methods(accessors);
        let traits = self.container_traits();
        let entry = self.static_accessor();
        let conformance = self.conformance_impl();
        quote! {
            #container
            #methods
            #traits
            #entry
            #conformance
        }
    }

    fn container_struct(&self) -> TokenStream {
        let vis = &self.declaration.vis;
        let container = &self.container;
        let generics = &self.declaration.generics;
        let where_clause = &generics.where_clause;
        let self_ty = self.declaration.self_ty();
        let doc = format!(
            " Case paths for every case of [`{}`].",
            self.declaration.ident.unraw()
        );
        quote! {
            #[doc = #doc]
            #[allow(dead_code)]
            #vis struct #container #generics (::core::marker::PhantomData<fn() -> #self_ty>) #where_clause;
        }
    }

    fn container_methods(&self, accessors: &[(RegionPath, AccessorSpec)]) -> TokenStream {
        let container = &self.container;
        let (impl_generics, ty_generics, where_clause) = self.declaration.generics.split_for_impl();
        let mut methods = TokenStream::new();
        let mut cfgs = Vec::new();
        self.emit_level(accessors, 0, &mut cfgs, &mut methods);
        quote! {
            #[allow(dead_code)]
            impl #impl_generics #container #ty_generics #where_clause {
                #methods
            }
        }
    }

    /// Emits accessors grouped by the branch they sit in at `depth`, so each
    /// method carries the `#[cfg]` attributes of every enclosing branch.
    fn emit_level<'s>(
        &self,
        accessors: &'s [(RegionPath, AccessorSpec)],
        depth: usize,
        cfgs: &mut Vec<&'s syn::Attribute>,
        out: &mut TokenStream,
    ) {
        let mut index = 0;
        while index < accessors.len() {
            let (path, spec) = &accessors[index];
            let Some(step) = path.steps().get(depth) else {
                out.extend(self.accessor_method(spec, cfgs));
                index += 1;
                continue;
            };
            let len = accessors[index..]
                .iter()
                .take_while(|(other, _)| {
                    other
                        .steps()
                        .get(depth)
                        .is_some_and(|other| other.same_position(step))
                })
                .count();
            cfgs.push(&step.cfg);
            self.emit_level(&accessors[index..index + len], depth + 1, cfgs, out);
            cfgs.pop();
            index += len;
        }
    }

    fn accessor_method(&self, spec: &AccessorSpec, cfgs: &[&syn::Attribute]) -> TokenStream {
        let vis = &self.declaration.vis;
        let crate_path = &self.crate_path;
        let self_ty = self.declaration.self_ty();
        let AccessorSpec {
            variant,
            accessor,
            value,
            embed,
            extract,
            attrs,
        } = spec;
        let doc = if attrs.iter().any(|attr| attr.path().is_ident("doc")) {
            TokenStream::new()
        } else {
            let doc = format!(
                " Case path for [`{}::{}`].",
                self.declaration.ident.unraw(),
                variant.unraw()
            );
            quote! { #[doc = #doc] }
        };
        quote! {
            #(#cfgs)*
            #doc
            #(#attrs)*
            #[allow(unreachable_patterns, deprecated)]
            #vis fn #accessor(&self) -> #crate_path::AnyCasePath<#self_ty, #value> {
                #crate_path::AnyCasePath::new(#embed, #extract)
            }
        }
    }

    fn container_traits(&self) -> TokenStream {
        let container = &self.container;
        let name = container.unraw().to_string();
        let (impl_generics, ty_generics, where_clause) = self.declaration.generics.split_for_impl();
        quote! {
            #[automatically_derived]
            impl #impl_generics ::core::clone::Clone for #container #ty_generics #where_clause {
                fn clone(&self) -> Self {
                    *self
                }
            }

            #[automatically_derived]
            impl #impl_generics ::core::marker::Copy for #container #ty_generics #where_clause {}

            #[automatically_derived]
            impl #impl_generics ::core::default::Default for #container #ty_generics #where_clause {
                fn default() -> Self {
                    Self(::core::marker::PhantomData)
                }
            }

            #[automatically_derived]
            impl #impl_generics ::core::fmt::Debug for #container #ty_generics #where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.write_str(#name)
                }
            }
        }
    }

    fn static_accessor(&self) -> TokenStream {
        let vis = &self.declaration.vis;
        let ident = &self.declaration.ident;
        let container = &self.container;
        let (impl_generics, ty_generics, where_clause) = self.declaration.generics.split_for_impl();
        quote! {
            #[allow(dead_code)]
            impl #impl_generics #ident #ty_generics #where_clause {
                /// Case paths for every case of this enum.
                #vis const fn all_case_paths() -> #container #ty_generics {
                    #container(::core::marker::PhantomData)
                }
            }
        }
    }

    fn conformance_impl(&self) -> TokenStream {
        let ident = &self.declaration.ident;
        let container = &self.container;
        let crate_path = &self.crate_path;
        let (impl_generics, ty_generics, where_clause) = self.declaration.generics.split_for_impl();
        quote! {
            #[automatically_derived]
            impl #impl_generics #crate_path::CasePathable for #ident #ty_generics #where_clause {
                type AllCasePaths = #container #ty_generics;

                fn all_case_paths() -> Self::AllCasePaths {
                    #container(::core::marker::PhantomData)
                }
            }
        }
    }
}
