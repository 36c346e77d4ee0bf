use syn::fold::{self, Fold};
use syn::{Token, punctuated::Punctuated};

/// Replaces `Self` with the concrete enum type.
///
/// The container is a different type, so `Self` inside a payload type would
/// name the container there. Bare `Self` becomes the enum type itself and
/// `Self::Assoc` becomes `<Foo<..>>::Assoc`, in types as well as in
/// expression positions such as array lengths.
pub struct ReplaceSelf<'a> {
    self_ty: &'a syn::Type,
}

impl<'a> ReplaceSelf<'a> {
    pub fn new(self_ty: &'a syn::Type) -> Self {
        Self { self_ty }
    }

    pub fn rewrite(&mut self, ty: syn::Type) -> syn::Type {
        self.fold_type(ty)
    }

    fn qualify(&self, path: &syn::Path) -> Option<syn::Type> {
        let rest = self_suffix(path)?;
        let self_ty = self.self_ty;
        Some(syn::parse_quote!(<#self_ty>::#rest))
    }

    fn qualify_expr(&self, path: &syn::Path) -> Option<syn::Expr> {
        let rest = self_suffix(path)?;
        let self_ty = self.self_ty;
        Some(syn::parse_quote!(<#self_ty>::#rest))
    }
}

/// `A::B` for a path written `Self::A::B`.
fn self_suffix(path: &syn::Path) -> Option<Punctuated<syn::PathSegment, Token![::]>> {
    if path.leading_colon.is_some() || path.segments.len() < 2 {
        return None;
    }
    let first = path.segments.first()?;
    if first.ident != "Self" || !first.arguments.is_none() {
        return None;
    }
    Some(path.segments.iter().skip(1).cloned().collect())
}

impl Fold for ReplaceSelf<'_> {
    fn fold_type(&mut self, ty: syn::Type) -> syn::Type {
        if let syn::Type::Path(type_path) = &ty {
            if type_path.qself.is_none() && type_path.path.is_ident("Self") {
                return self.self_ty.clone();
            }
        }
        fold::fold_type(self, ty)
    }

    fn fold_type_path(&mut self, type_path: syn::TypePath) -> syn::TypePath {
        let type_path = fold::fold_type_path(self, type_path);
        if type_path.qself.is_some() {
            return type_path;
        }
        match self.qualify(&type_path.path) {
            Some(syn::Type::Path(qualified)) => qualified,
            _ => type_path,
        }
    }

    fn fold_expr_path(&mut self, expr: syn::ExprPath) -> syn::ExprPath {
        let expr = fold::fold_expr_path(self, expr);
        if expr.qself.is_some() {
            return expr;
        }
        match self.qualify_expr(&expr.path) {
            Some(syn::Expr::Path(qualified)) => syn::ExprPath {
                attrs: expr.attrs,
                ..qualified
            },
            _ => expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rewrite(self_ty: syn::Type, ty: syn::Type) -> syn::Type {
        ReplaceSelf::new(&self_ty).rewrite(ty)
    }

    fn ty(ty: syn::Type) -> syn::Type {
        ty
    }

    #[test]
    fn test_bare_self() {
        assert_eq!(
            rewrite(syn::parse_quote!(Foo), syn::parse_quote!(Self)),
            ty(syn::parse_quote!(Foo))
        );
        assert_eq!(
            rewrite(syn::parse_quote!(Foo<'a, T>), syn::parse_quote!(Box<Self>)),
            ty(syn::parse_quote!(Box<Foo<'a, T>>))
        );
    }

    #[test]
    fn test_self_inside_compound_types() {
        assert_eq!(
            rewrite(
                syn::parse_quote!(Foo),
                syn::parse_quote!((Self, &'a [Self], fn(Self) -> Self))
            ),
            ty(syn::parse_quote!((Foo, &'a [Foo], fn(Foo) -> Foo)))
        );
    }

    #[test]
    fn test_self_associated_path() {
        assert_eq!(
            rewrite(syn::parse_quote!(Foo<T>), syn::parse_quote!(Self::Output)),
            ty(syn::parse_quote!(<Foo<T>>::Output))
        );
    }

    #[test]
    fn test_self_in_array_length() {
        assert_eq!(
            rewrite(syn::parse_quote!(Foo), syn::parse_quote!([u8; Self::LEN])),
            ty(syn::parse_quote!([u8; <Foo>::LEN]))
        );
    }

    #[test]
    fn test_other_types_untouched() {
        assert_eq!(
            rewrite(syn::parse_quote!(Foo), syn::parse_quote!(Vec<SelfRef>)),
            ty(syn::parse_quote!(Vec<SelfRef>))
        );
        assert_eq!(
            rewrite(
                syn::parse_quote!(Foo),
                syn::parse_quote!(<Self as Iterator>::Item)
            ),
            ty(syn::parse_quote!(<Foo as Iterator>::Item))
        );
    }
}
