use proc_macro2::{Span, TokenStream};
use std::fmt;

/// How the macro was invoked; diagnostics name the invocation they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Attribute,
    Derive,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invocation::Attribute => f.write_str("`#[case_pathable]`"),
            Invocation::Derive => f.write_str("`#[derive(CasePathable)]`"),
        }
    }
}

/// Rejections reported against the user's declaration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Diagnostic {
    #[error("{invocation} cannot be applied to {}", describe(.category, .name.as_deref()))]
    NotAUnionType {
        invocation: Invocation,
        category: &'static str,
        name: Option<String>,
        /// Introducing keyword followed by the name.
        anchor: TokenStream,
    },
    #[error(
        "{invocation} cannot be applied to overloaded case name `{name}`{}",
        collision_note(.name, .previous, .accessor)
    )]
    OverloadedCaseName {
        invocation: Invocation,
        name: String,
        previous: String,
        accessor: String,
        /// Declaration-order index of the offending case.
        position: usize,
        span: Span,
    },
    #[error(
        "{invocation} cannot be applied to case `{case}` with a conditionally compiled payload field"
    )]
    ConditionalPayloadField {
        invocation: Invocation,
        case: String,
        span: Span,
    },
}

fn describe(category: &str, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{category} `{name}`"),
        None => category.to_string(),
    }
}

fn collision_note(name: &str, previous: &str, accessor: &str) -> String {
    if name == previous {
        String::new()
    } else {
        format!(" (collides with `{previous}` as accessor `{accessor}`)")
    }
}

impl From<Diagnostic> for darling::Error {
    fn from(diagnostic: Diagnostic) -> Self {
        let message = diagnostic.to_string();
        match diagnostic {
            Diagnostic::NotAUnionType { anchor, .. } => {
                darling::Error::custom(message).with_span(&anchor)
            }
            Diagnostic::OverloadedCaseName { span, .. }
            | Diagnostic::ConditionalPayloadField { span, .. } => {
                syn::Error::new(span, message).into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn test_not_a_union_type_message() {
        let diagnostic = Diagnostic::NotAUnionType {
            invocation: Invocation::Attribute,
            category: "struct type",
            name: Some("Foo".into()),
            anchor: quote!(struct Foo),
        };
        insta::assert_snapshot!(diagnostic.to_string(), @"`#[case_pathable]` cannot be applied to struct type `Foo`");

        let diagnostic = Diagnostic::NotAUnionType {
            invocation: Invocation::Derive,
            category: "impl block",
            name: None,
            anchor: quote!(impl),
        };
        insta::assert_snapshot!(diagnostic.to_string(), @"`#[derive(CasePathable)]` cannot be applied to impl block");
    }

    #[test]
    fn test_overloaded_case_name_message() {
        let same = Diagnostic::OverloadedCaseName {
            invocation: Invocation::Attribute,
            name: "Bar".into(),
            previous: "Bar".into(),
            accessor: "bar".into(),
            position: 1,
            span: Span::call_site(),
        };
        insta::assert_snapshot!(same.to_string(), @"`#[case_pathable]` cannot be applied to overloaded case name `Bar`");

        let normalized = Diagnostic::OverloadedCaseName {
            invocation: Invocation::Attribute,
            name: "Foo_Bar".into(),
            previous: "FooBar".into(),
            accessor: "foo_bar".into(),
            position: 1,
            span: Span::call_site(),
        };
        insta::assert_snapshot!(normalized.to_string(), @"`#[case_pathable]` cannot be applied to overloaded case name `Foo_Bar` (collides with `FooBar` as accessor `foo_bar`)");
    }

    #[test]
    fn test_into_darling_error() {
        let error: darling::Error = Diagnostic::ConditionalPayloadField {
            invocation: Invocation::Attribute,
            case: "Bar".into(),
            span: Span::call_site(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "`#[case_pathable]` cannot be applied to case `Bar` with a conditionally compiled payload field"
        );
    }
}
