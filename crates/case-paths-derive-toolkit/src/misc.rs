use proc_macro2::Span;
use quote::format_ident;
use syn::ext::IdentExt;

/// Words that cannot be plain identifiers and have to be written as `r#word`.
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that are not allowed even as raw identifiers.
const PATH_KEYWORDS: &[&str] = &["crate", "self", "super", "Self"];

/// Converts `CamelCase` to `snake_case`, keeping acronyms together
/// (`HTTPServer` becomes `http_server`).
pub fn to_snake_case(s: impl AsRef<str>) -> String {
    let chars: Vec<char> = s.as_ref().chars().collect();
    let mut result = String::with_capacity(chars.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_uppercase() {
            result.push(c);
            continue;
        }
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();
        let boundary = match prev {
            Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
            Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
            _ => false,
        };
        if boundary {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

/// Snake-case accessor name for a variant, before keyword escaping.
pub fn accessor_name(variant: &syn::Ident) -> String {
    to_snake_case(variant.unraw().to_string())
}

/// The accessor as emitted; two variants collide when these are equal.
pub fn accessor_ident(variant: &syn::Ident) -> syn::Ident {
    escape_ident(&accessor_name(variant), variant.span())
}

/// Builds an identifier for `name`, escaping keywords.
pub fn escape_ident(name: &str, span: Span) -> syn::Ident {
    if PATH_KEYWORDS.contains(&name) {
        syn::Ident::new(&format!("{name}_"), span)
    } else if RAW_KEYWORDS.contains(&name) {
        syn::Ident::new_raw(name, span)
    } else {
        syn::Ident::new(name, span)
    }
}

pub fn binding_ident(index: usize) -> syn::Ident {
    format_ident!("v{}", index)
}

pub fn default_container_ident(enum_ident: &syn::Ident) -> syn::Ident {
    format_ident!("{}CasePaths", enum_ident.unraw(), span = enum_ident.span())
}
