//! Neutralizes markup in free text before it is sent to clients.

use regex::{Captures, Regex};
use std::sync::OnceLock;

/// An opening `<` immediately followed by a tag name, `/`, `!` or `?`, up to the next `>` if any.
fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<(/?[A-Za-z!?][^<>]*)(>?)").expect("tag pattern compiles"))
}

/// Escape tag-like sequences so they render as text: `<script>` becomes `&lt;script&gt;`.
/// Text without markup is returned unchanged, including a bare `<` such as in `1 < 2`.
pub fn sanitize_text(input: &str) -> String {
    if !input.contains('<') {
        return input.to_string();
    }
    tag_pattern()
        .replace_all(input, |caps: &Captures| {
            let mut out = String::with_capacity(caps[0].len() + 6);
            out.push_str("&lt;");
            out.push_str(&caps[1]);
            if !caps[2].is_empty() {
                out.push_str("&gt;");
            }
            out
        })
        .into_owned()
}
