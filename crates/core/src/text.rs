use std::sync::OnceLock;

use regex::Regex;

fn re_whitespace() -> &'static Regex {
    static R: OnceLock<Regex> = OnceLock::new();
    R.get_or_init(|| Regex::new(r"\s+").expect("invalid regex"))
}

fn collapse(s: &str) -> String {
    re_whitespace().replace_all(s.trim(), " ").into_owned()
}

/// Trims a header cell and collapses inner whitespace, line breaks included.
pub fn clean_header(h: &str) -> String {
    collapse(h)
}

pub fn clean_description(s: &str) -> String {
    collapse(s)
}
