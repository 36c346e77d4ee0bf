use proc_macro2::TokenStream;
use quote::ToTokens;

/// Format source with rustfmt, falling back to the input when rustfmt is
/// unavailable or rejects it.
pub fn rustfmt(src: impl Into<String>) -> String {
    let src = src.into();
    use std::io::Write;
    use std::process::{Command, Stdio};

    if let Ok(mut child) = Command::new("rustfmt")
        .arg("--emit")
        .arg("stdout")
        .arg("--edition")
        .arg("2024")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
    {
        if let Some(stdin) = child.stdin.as_mut() {
            let _ = stdin.write_all(src.as_bytes());
        }
        if let Ok(output) = child.wait_with_output() {
            if output.status.success() {
                if let Ok(formatted) = String::from_utf8(output.stdout) {
                    return formatted;
                }
            }
        }
    }
    src
}

/// Re-prints tokens through syn so that spacing differences between two
/// streams (`>>` against `> >`) do not matter. Items are also run through
/// rustfmt for readable failure output.
pub fn normalize(tokens: &TokenStream) -> String {
    if let Ok(file) = syn::parse2::<syn::File>(tokens.clone()) {
        return rustfmt(file.to_token_stream().to_string());
    }
    if let Ok(expr) = syn::parse2::<syn::Expr>(tokens.clone()) {
        return expr.to_token_stream().to_string();
    }
    if let Ok(ty) = syn::parse2::<syn::Type>(tokens.clone()) {
        return ty.to_token_stream().to_string();
    }
    tokens.to_string()
}

#[track_caller]
pub fn assert_tokens_eq(actual: &TokenStream, expected: TokenStream) {
    let actual = normalize(actual);
    let expected = normalize(&expected);
    assert_eq!(
        actual, expected,
        "\n--- actual ---\n{actual}\n--- expected ---\n{expected}"
    );
}
