use super::region::{Conditioned, Region, build_regions, cfg_predicates, is_cfg};

/// The enum a macro is attached to, with its variants grouped into regions.
#[derive(Debug, Clone)]
pub struct UnionDeclaration {
    pub attrs: Vec<syn::Attribute>,
    pub vis: syn::Visibility,
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub regions: Vec<Region>,
}

impl UnionDeclaration {
    pub fn from_item_enum(item: &syn::ItemEnum) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();
        let mut conditioned = Vec::with_capacity(item.variants.len());
        for variant in &item.variants {
            if let Some(cfgs) = errors.handle(cfg_predicates(&variant.attrs)) {
                conditioned.push(Conditioned {
                    cfgs,
                    case: RawCase::from_variant(variant),
                });
            }
        }
        errors.finish()?;

        Ok(Self {
            attrs: item.attrs.clone(),
            vis: item.vis.clone(),
            ident: item.ident.clone(),
            generics: item.generics.clone(),
            regions: build_regions(conditioned, 0),
        })
    }

    /// The enum type with its generic arguments, e.g. `Foo<'a, T>`.
    pub fn self_ty(&self) -> syn::Type {
        let ident = &self.ident;
        let (_, ty_generics, _) = self.generics.split_for_impl();
        syn::parse_quote!(#ident #ty_generics)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    /// `Bar`
    Unit,
    /// `Bar(..)`
    Tuple,
    /// `Bar { .. }`
    Struct,
}

/// One variant as written.
#[derive(Debug, Clone)]
pub struct RawCase {
    pub ident: syn::Ident,
    /// Variant attributes other than `#[cfg]`.
    pub attrs: Vec<syn::Attribute>,
    pub style: CaseStyle,
    pub parameters: Vec<ParameterSpec>,
    /// Explicit discriminant; never part of a generated signature.
    pub discriminant: Option<syn::Expr>,
}

impl RawCase {
    pub fn from_variant(variant: &syn::Variant) -> Self {
        let style = match &variant.fields {
            syn::Fields::Unit => CaseStyle::Unit,
            syn::Fields::Unnamed(_) => CaseStyle::Tuple,
            syn::Fields::Named(_) => CaseStyle::Struct,
        };
        Self {
            ident: variant.ident.clone(),
            attrs: variant
                .attrs
                .iter()
                .filter(|attr| !is_cfg(attr))
                .cloned()
                .collect(),
            style,
            parameters: variant.fields.iter().map(ParameterSpec::from_field).collect(),
            discriminant: variant.discriminant.as_ref().map(|(_, expr)| expr.clone()),
        }
    }
}

/// A payload slot of a case.
#[derive(Debug, Clone)]
pub struct ParameterSpec {
    /// Field name of a struct-style variant; `None` for tuple fields.
    pub label: Option<syn::Ident>,
    pub ty: syn::Type,
    pub attrs: Vec<syn::Attribute>,
}

impl ParameterSpec {
    fn from_field(field: &syn::Field) -> Self {
        Self {
            label: field.ident.clone(),
            ty: field.ty.clone(),
            attrs: field.attrs.clone(),
        }
    }

    /// A tuple-variant field, addressed only by position.
    pub fn is_unlabeled(&self) -> bool {
        self.label.is_none()
    }

    pub fn is_conditional(&self) -> bool {
        self.attrs.iter().any(is_cfg)
    }
}
