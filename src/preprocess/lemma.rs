use indexmap::IndexMap;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Ordered word -> lemma association
///
/// Substitutions run in iteration order, so a lemma that is itself a key
/// further down the map gets substituted again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LemmaMap {
    entries: IndexMap<String, String>,
}

impl LemmaMap {
    pub fn new() -> Self {
        Self { entries: IndexMap::new() }
    }

    #[inline]
    pub fn insert(&mut self, word: impl Into<String>, lemma: impl Into<String>) -> &mut Self {
        self.entries.insert(word.into(), lemma.into());
        self
    }

    #[inline]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(w, l)| (w.as_str(), l.as_str()))
    }

    /// Parse a JSON lemma dictionary
    ///
    /// # Returns
    /// * `Ok(None)` - valid JSON of a shape that cannot be a mapping, or `null`
    /// * `Err(Error::InvalidLemmaJson)` - not JSON at all
    pub fn from_json_str(text: &str) -> Result<Option<Self>> {
        let value: Value = serde_json::from_str(text).map_err(Error::InvalidLemmaJson)?;
        Ok(Self::from_json_value(&value))
    }

    /// Normalize an external lemma dictionary
    ///
    /// Accepts an object `{"word": "lemma"}` or an array of `["word", "lemma"]` pairs.
    /// `null` yields `None`. Any other shape logs a warning and yields `None`.
    pub fn from_json_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => {
                debug!("lemma map is null, documents pass through unchanged");
                None
            }
            Value::Object(object) => {
                let mut map = LemmaMap::new();
                for (word, lemma) in object {
                    match lemma_text(lemma) {
                        Some(lemma) => {
                            map.insert(word.as_str(), lemma);
                        }
                        None => warn!(word = %word, "skipping lemma entry with non-scalar value"),
                    }
                }
                Some(map)
            }
            Value::Array(pairs) => {
                let mut map = LemmaMap::new();
                for pair in pairs {
                    match pair.as_array().map(Vec::as_slice) {
                        Some([word, lemma, ..]) => match (lemma_text(word), lemma_text(lemma)) {
                            (Some(word), Some(lemma)) => {
                                map.insert(word, lemma);
                            }
                            _ => warn!(pair = %pair, "skipping malformed lemma pair"),
                        },
                        _ => warn!(pair = %pair, "skipping malformed lemma pair"),
                    }
                }
                Some(map)
            }
            other => {
                warn!(value = %other, "unsupported lemma map format, documents pass through unchanged");
                None
            }
        }
    }
}

fn lemma_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl<W, L> FromIterator<(W, L)> for LemmaMap
where
    W: Into<String>,
    L: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (W, L)>>(iter: I) -> Self {
        let mut map = LemmaMap::new();
        for (word, lemma) in iter {
            map.insert(word, lemma);
        }
        map
    }
}

/// Compiled whole-word, case-insensitive substitution rules
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    rules: Vec<(Regex, String)>,
}

impl Lemmatizer {
    pub fn new(map: &LemmaMap) -> Self {
        let rules = map
            .iter()
            .filter_map(|(word, lemma)| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
                match Regex::new(&pattern) {
                    Ok(re) => Some((re, lemma.to_string())),
                    Err(e) => {
                        warn!(word = %word, error = %e, "skipping lemma entry");
                        None
                    }
                }
            })
            .collect();
        Self { rules }
    }

    /// Apply every rule in map order to one document
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (re, lemma) in &self.rules {
            out = re.replace_all(&out, NoExpand(lemma)).into_owned();
        }
        out
    }
}

/// Lemmatize every document
/// `None` returns the documents unchanged.
pub fn lemmatize<S>(documents: &[S], lemmas: Option<&LemmaMap>) -> Vec<String>
where
    S: AsRef<str>,
{
    let Some(lemmas) = lemmas else {
        return documents.iter().map(|d| d.as_ref().to_string()).collect();
    };
    let lemmatizer = Lemmatizer::new(lemmas);
    documents
        .iter()
        .map(|doc| lemmatizer.apply(doc.as_ref()))
        .collect()
}
