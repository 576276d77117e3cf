//! Escaping applied to every input value before it is inserted into a document.

/// Characters LaTeX would interpret as control syntax.
pub const LATEX_SPECIALS: &[char] = &['&', '%', '$', '#', '_', '{', '}', '~', '^', '\\'];

/// Collapses every run of whitespace (newlines included) to one space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Makes `text` render literally inside a LaTeX document.
///
/// Whitespace is normalised first: a blank line inside a macro argument would
/// otherwise start a new paragraph and break the argument.
pub fn escape_latex(text: &str) -> String {
    escape_latex_chars(&normalize_whitespace(text))
}

/// Character-level LaTeX escaping with whitespace left as is. Used for pieces
/// of a value that has already been normalised as a whole.
pub fn escape_latex_chars(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    for c in text.chars() {
        match c {
            '\\' => out.push_str(r"\textbackslash{}"),
            '~' => out.push_str(r"\textasciitilde{}"),
            '^' => out.push_str(r"\textasciicircum{}"),
            c if LATEX_SPECIALS.contains(&c) => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// True if `url` can go inside `\url{...}` / `\href{...}` untouched.
pub fn is_latex_safe_url(url: &str) -> bool {
    !url.is_empty()
        && url.chars().all(|c| {
            c.is_ascii_alphanumeric()
                || matches!(
                    c,
                    '-' | '.' | '_' | '/' | ':' | '?' | '=' | '+' | '@' | ',' | ';' | '!' | '*'
                        | '\'' | '(' | ')'
                )
        })
}
