//! Analysis settings.
//!
//! Defaults reproduce the canonical pipeline: smoothed IDF, tables in
//! vocabulary order, three display decimals, cleaned input.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vectorizer::report::TableOrder;

/// Decimals shown in term tables.
pub const DEFAULT_DISPLAY_DECIMALS: u32 = 3;

/// Largest number of display decimals honoured; larger requests are clamped.
///
/// `f64` carries about 15 significant decimal digits.
pub const MAX_DISPLAY_DECIMALS: u32 = 15;

/// Word delimiter used by the stop-word filter.
///
/// A single literal space: runs of spaces leave empty words behind.
pub const DEFAULT_STOP_WORD_DELIMITER: &str = " ";

/// IDF formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdfVariant {
    /// `ln(N / (1 + df))`
    #[default]
    Smoothed,
    /// `ln(N / df)`, 0 when df = 0
    Unsmoothed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub idf: IdfVariant,
    pub table_order: TableOrder,
    pub display_decimals: u32,
    /// strip non-letter characters from documents as they are read
    pub clean_input: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            idf: IdfVariant::default(),
            table_order: TableOrder::default(),
            display_decimals: DEFAULT_DISPLAY_DECIMALS,
            clean_input: true,
        }
    }
}

impl AnalysisConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| Error::InvalidConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}
