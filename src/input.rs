//! File acquisition for the binary: documents, stop words and lemma dictionaries.

use std::{fs, path::Path};

use tracing::info;

use crate::error::{Error, Result};
use crate::preprocess::{clean::clean_text, lemma::LemmaMap, stop_words::StopWords};

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read every document, in the given order
///
/// # Arguments
/// * `paths` - one file per document
/// * `clean` - apply [`clean_text`] to each file's content
pub fn read_documents<P>(paths: &[P], clean: bool) -> Result<Vec<String>>
where
    P: AsRef<Path>,
{
    if paths.is_empty() {
        return Err(Error::NoDocuments);
    }
    let docs = paths
        .iter()
        .map(|path| -> Result<String> {
            let text = read(path.as_ref())?;
            Ok(if clean { clean_text(&text) } else { text })
        })
        .collect::<Result<Vec<String>>>()?;
    info!(documents = docs.len(), "documents loaded");
    Ok(docs)
}

/// Read a stop-word file, one word per line
pub fn read_stop_words(path: &Path) -> Result<StopWords> {
    let stop_words = StopWords::from_lines(&read(path)?);
    info!(stop_words = stop_words.len(), "stop words loaded");
    Ok(stop_words)
}

/// Read a JSON lemma dictionary
///
/// `Ok(None)` when the JSON is valid but not a usable mapping.
pub fn read_lemmas(path: &Path) -> Result<Option<LemmaMap>> {
    let lemmas = LemmaMap::from_json_str(&read(path)?)?;
    if let Some(map) = &lemmas {
        info!(words = map.len(), "lemma dictionary loaded");
    }
    Ok(lemmas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn file_with(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn documents_are_cleaned_in_order() {
        let a = file_with("Hola, mundo!\n");
        let b = file_with("  42 gatos  ");
        let docs = read_documents(&[a.path(), b.path()], true).unwrap();
        assert_eq!(docs, vec!["Hola mundo", "gatos"]);
    }

    #[test]
    fn raw_documents_are_kept_when_cleaning_is_off() {
        let a = file_with("Hola, mundo!");
        let docs = read_documents(&[a.path()], false).unwrap();
        assert_eq!(docs, vec!["Hola, mundo!"]);
    }

    #[test]
    fn no_paths_is_an_error() {
        let paths: [&Path; 0] = [];
        assert!(matches!(read_documents(&paths, true), Err(Error::NoDocuments)));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = read_documents(&[Path::new("/nonexistent/doc.txt")], true).unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/doc.txt")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn stop_words_and_lemmas_from_files() {
        let stop = file_with("el\nla\n\n");
        let lemmas = file_with(r#"{"gatos": "gato"}"#);
        assert_eq!(read_stop_words(stop.path()).unwrap().len(), 2);
        let map = read_lemmas(lemmas.path()).unwrap().unwrap();
        assert_eq!(map.get("gatos"), Some("gato"));
    }

    #[test]
    fn invalid_lemma_json() {
        let lemmas = file_with("not json");
        assert!(matches!(read_lemmas(lemmas.path()), Err(Error::InvalidLemmaJson(_))));
    }
}
