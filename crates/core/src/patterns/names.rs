use regex::Regex;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[a-zA-Z_][a-zA-Z0-9_]*|\.\.\.)").unwrap());

const RESERVED: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "goto", "if",
    "in", "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

pub fn is_reserved(word: &str) -> bool {
    RESERVED.contains(&word)
}

/// Names declared by a parameter list or a comma-separated name list
///
/// `...` is consumed but never returned, and neither are reserved words.
pub fn extract_names(list: &str) -> Vec<&str> {
    NAME_RE
        .find_iter(list)
        .map(|m| m.as_str())
        .filter(|name| *name != "..." && !is_reserved(name))
        .collect()
}
