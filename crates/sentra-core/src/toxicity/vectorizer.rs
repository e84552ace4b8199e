//! TF-IDF text vectorizer.
//!
//! Mirrors a fitted word n-gram TF-IDF vectorizer exported as JSON: a fixed
//! vocabulary mapping terms to columns, one idf weight per column, and the
//! options used at fit time.

use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{SentraError, SentraResult};

/// Row normalization applied after weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    None,
}

/// A fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default = "default_true")]
    lowercase: bool,
    #[serde(default)]
    sublinear_tf: bool,
    #[serde(default)]
    norm: Norm,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_true() -> bool {
    true
}

/// Sparse feature row: (column, weight) pairs sorted by column.
pub type SparseRow = Vec<(usize, f64)>;

impl TfidfVectorizer {
    /// Number of feature columns.
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Check the internal consistency of a loaded vectorizer.
    pub fn validate(&self) -> SentraResult<()> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(SentraError::Config(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }
        if self.idf.is_empty() {
            return Err(SentraError::Config("vectorizer has no features".to_string()));
        }
        if let Some((term, index)) = self
            .vocabulary
            .iter()
            .find(|(_, &index)| index >= self.idf.len())
        {
            return Err(SentraError::Config(format!(
                "term '{}' maps to column {} but only {} columns exist",
                term,
                index,
                self.idf.len()
            )));
        }
        Ok(())
    }

    /// Transform text into a sparse TF-IDF row.
    pub fn transform(&self, text: &str) -> SparseRow {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let tokens = tokenize(&text);

        let mut counts: HashMap<usize, f64> = HashMap::new();
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                let term = window.join(" ");
                if let Some(&column) = self.vocabulary.get(&term) {
                    *counts.entry(column).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut row: SparseRow = counts
            .into_iter()
            .map(|(column, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (column, tf * self.idf[column])
            })
            .collect();
        row.sort_by_key(|(column, _)| *column);

        if self.norm == Norm::L2 {
            let norm = row.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for (_, weight) in row.iter_mut() {
                    *weight /= norm;
                }
            }
        }

        row
    }
}

/// Word tokens of two or more word characters.
fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .collect()
}
