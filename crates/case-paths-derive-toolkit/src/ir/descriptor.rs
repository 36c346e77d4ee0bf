use super::declaration::{CaseStyle, ParameterSpec};

/// The value type a case path embeds and extracts.
#[derive(Debug, Clone)]
pub enum PayloadShape {
    /// No payload; the value is `()`.
    Empty,
    /// Exactly one unnamed field; the value is that field's type.
    Single(syn::Type),
    /// Several fields, or any named field; the value is a tuple.
    Tuple(Vec<TupleElement>),
}

#[derive(Debug, Clone)]
pub struct TupleElement {
    pub label: Option<syn::Ident>,
    pub ty: syn::Type,
}

impl PayloadShape {
    pub fn from_parameters(
        parameters: &[ParameterSpec],
        mut rewrite: impl FnMut(syn::Type) -> syn::Type,
    ) -> Self {
        match parameters {
            [] => Self::Empty,
            [single] if single.is_unlabeled() => Self::Single(rewrite(single.ty.clone())),
            _ => Self::Tuple(
                parameters
                    .iter()
                    .map(|parameter| TupleElement {
                        label: parameter.label.clone(),
                        ty: rewrite(parameter.ty.clone()),
                    })
                    .collect(),
            ),
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(_) => 1,
            Self::Tuple(elements) => elements.len(),
        }
    }

    pub fn value_type(&self) -> syn::Type {
        match self {
            Self::Empty => syn::parse_quote!(()),
            Self::Single(ty) => ty.clone(),
            Self::Tuple(elements) => {
                let tys = elements.iter().map(|element| &element.ty);
                if elements.len() == 1 {
                    syn::parse_quote!((#(#tys,)*))
                } else {
                    syn::parse_quote!((#(#tys),*))
                }
            }
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = Option<&syn::Ident>> {
        let elements: &[TupleElement] = match self {
            Self::Tuple(elements) => elements.as_slice(),
            Self::Empty | Self::Single(_) => &[],
        };
        elements.iter().map(|element| element.label.as_ref())
    }
}

/// Everything the synthesizer needs to know about one case.
#[derive(Debug, Clone)]
pub struct CaseDescriptor {
    pub ident: syn::Ident,
    /// Name of the generated accessor method.
    pub accessor: syn::Ident,
    pub style: CaseStyle,
    pub shape: PayloadShape,
    /// `v0`, `v1`, .. one per payload slot.
    pub bindings: Vec<syn::Ident>,
    /// Attributes carried over to the accessor (`#[doc]`, `#[deprecated]`).
    pub attrs: Vec<syn::Attribute>,
}

impl CaseDescriptor {
    pub fn arity(&self) -> usize {
        self.bindings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    fn parameters(variant: syn::Variant) -> Vec<ParameterSpec> {
        crate::ir::RawCase::from_variant(&variant).parameters
    }

    fn value_type(variant: syn::Variant) -> String {
        let ty = PayloadShape::from_parameters(&parameters(variant), |ty| ty).value_type();
        quote!(#ty).to_string()
    }

    #[test]
    fn test_value_types() {
        assert_eq!(value_type(syn::parse_quote!(Bar)), quote!(()).to_string());
        assert_eq!(value_type(syn::parse_quote!(Bar())), quote!(()).to_string());
        assert_eq!(value_type(syn::parse_quote!(Bar {})), quote!(()).to_string());
        assert_eq!(
            value_type(syn::parse_quote!(Baz(i32))),
            quote!(i32).to_string()
        );
        assert_eq!(
            value_type(syn::parse_quote!(Baz(i32, bool))),
            quote!((i32, bool)).to_string()
        );
        assert_eq!(
            value_type(syn::parse_quote!(Baz { int: i32 })),
            quote!((i32,)).to_string()
        );
        assert_eq!(
            value_type(syn::parse_quote!(Baz { int: i32, flag: bool })),
            quote!((i32, bool)).to_string()
        );
    }

    #[test]
    fn test_labels_and_arity() {
        let shape = PayloadShape::from_parameters(
            &parameters(syn::parse_quote!(Baz { int: i32, flag: bool })),
            |ty| ty,
        );
        assert_eq!(shape.arity(), 2);
        let labels: Vec<String> = shape
            .labels()
            .map(|label| label.map(ToString::to_string).unwrap_or_default())
            .collect();
        assert_eq!(labels, vec!["int", "flag"]);

        let single = PayloadShape::from_parameters(&parameters(syn::parse_quote!(Baz(u8))), |ty| ty);
        assert_eq!(single.arity(), 1);
        assert_eq!(single.labels().count(), 0);
    }

    #[test]
    fn test_rewrite_applies_to_every_slot() {
        let mut seen = 0;
        let shape = PayloadShape::from_parameters(
            &parameters(syn::parse_quote!(Baz(i32, bool, char))),
            |ty| {
                seen += 1;
                ty
            },
        );
        assert_eq!(seen, 3);
        assert_eq!(shape.arity(), 3);
    }
}
