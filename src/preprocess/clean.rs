use std::sync::LazyLock;

use regex::Regex;

static NON_LETTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-ZáéíóúÁÉÍÓÚñÑüÜ\s'’]").expect("valid character class literal")
});

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace literal"));

/// Keep only letters, whitespace and apostrophes
///
/// Every other character (digits, punctuation, symbols) becomes a space,
/// then whitespace runs collapse to one space and the ends are trimmed.
/// Recognized letters are ASCII plus the Spanish accented vowels, ñ and ü.
pub fn clean_text(text: &str) -> String {
    let replaced = NON_LETTER.replace_all(text, " ");
    WHITESPACE_RUN.replace_all(&replaced, " ").trim().to_string()
}
