/// Input accepted by the tokenizer
/// A single document string, or a sequence of parts joined with a single space first.
pub trait Tokenize {
    fn tokens(&self) -> Vec<String>;
}

impl Tokenize for str {
    #[inline]
    fn tokens(&self) -> Vec<String> {
        tokenize(self)
    }
}

impl Tokenize for String {
    #[inline]
    fn tokens(&self) -> Vec<String> {
        tokenize(self)
    }
}

impl<T> Tokenize for [T]
where
    T: AsRef<str>,
{
    #[inline]
    fn tokens(&self) -> Vec<String> {
        tokenize_parts(self)
    }
}

/// Split a document into lowercase tokens
///
/// The whole input is lower-cased, split on runs of whitespace,
/// and empty pieces are dropped. Punctuation is left as is.
///
/// # Arguments
/// * `text` - document text
///
/// # Returns
/// * `Vec<String>` - tokens in document order (empty for empty input)
#[inline]
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

/// Join the parts with a single space, then [`tokenize`]
#[inline]
pub fn tokenize_parts<T>(parts: &[T]) -> Vec<String>
where
    T: AsRef<str>,
{
    let joined = parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");
    tokenize(&joined)
}
