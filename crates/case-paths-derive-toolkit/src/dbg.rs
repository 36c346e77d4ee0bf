use proc_macro2::TokenStream;
use std::fmt::{self, Write};

/// Prints the generated tokens to stderr; enabled by the `dbg` option.
pub fn dump(ident: &syn::Ident, generated: &TokenStream) {
    if let Ok(w) = render(ident, generated) {
        eprint!("{}", w);
    }
}

fn render(ident: &syn::Ident, generated: &TokenStream) -> Result<String, fmt::Error> {
    let mut w = String::new();
    writeln!(
        w,
        "---------- case_pathable expansion for {} (start) ----------",
        ident
    )?;
    writeln!(w, "{}", generated)?;
    writeln!(
        w,
        "---------- case_pathable expansion for {} (end) ----------",
        ident
    )?;
    Ok(w)
}
