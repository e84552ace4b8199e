//! Lexicon-based sentiment scorer.
//!
//! Each known word carries a polarity, a subjectivity and an intensity.
//! Intensifiers ("very", "extremely") scale the next sentiment word, and
//! negations ("not", "never", "don't") flip and dampen it. The final score is
//! the mean over the sentiment words found in the text.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

use super::model::SentimentScore;
use super::SentimentScorer;
use crate::error::{SentraError, SentraResult};

const EMBEDDED_LEXICON: &str = include_str!("../../../../assets/lexicon/en-sentiment.json");

/// Polarity multiplier applied to a negated sentiment word.
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, Deserialize)]
struct LexiconEntry {
    #[serde(default)]
    polarity: f64,
    #[serde(default)]
    subjectivity: f64,
    #[serde(default = "default_intensity")]
    intensity: f64,
}

fn default_intensity() -> f64 {
    1.0
}

impl LexiconEntry {
    fn is_intensifier(&self) -> bool {
        self.polarity == 0.0 && self.intensity != 1.0
    }
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    words: HashMap<String, LexiconEntry>,
    #[serde(default)]
    negations: Vec<String>,
}

#[derive(Debug, PartialEq)]
enum Token {
    Word(String),
    Break,
}

/// Sentiment scorer backed by a word lexicon.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    words: HashMap<String, LexiconEntry>,
    negations: HashSet<String>,
}

impl LexiconScorer {
    /// Load the lexicon bundled with the binary.
    pub fn embedded() -> SentraResult<Self> {
        Self::from_json(EMBEDDED_LEXICON)
    }

    /// Load the lexicon at `path`, or the embedded one when no path is set.
    pub fn load(path: Option<&Path>) -> SentraResult<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                let scorer = Self::embedded()?;
                info!(words = scorer.len(), "Using embedded sentiment lexicon");
                Ok(scorer)
            }
        }
    }

    /// Load a lexicon from a JSON file.
    pub fn from_path(path: &Path) -> SentraResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SentraError::artifact(path, e.to_string()))?;
        let scorer = Self::from_json(&content)
            .map_err(|e| SentraError::artifact(path, e.to_string()))?;
        info!(path = %path.display(), words = scorer.words.len(), "Loaded sentiment lexicon");
        Ok(scorer)
    }

    /// Parse a lexicon from its JSON representation.
    pub fn from_json(content: &str) -> SentraResult<Self> {
        let file: LexiconFile = serde_json::from_str(content)?;
        if file.words.is_empty() {
            return Err(SentraError::Config("lexicon contains no words".to_string()));
        }

        let words = file
            .words
            .into_iter()
            .map(|(word, entry)| (word.to_lowercase(), entry))
            .collect();
        let negations = file.negations.into_iter().map(|w| w.to_lowercase()).collect();

        Ok(Self { words, negations })
    }

    /// Number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScore {
        let mut polarities = Vec::new();
        let mut subjectivities = Vec::new();
        let mut intensity: Option<f64> = None;
        let mut negated = false;

        for token in tokenize(text) {
            let word = match token {
                Token::Word(word) => word,
                Token::Break => {
                    intensity = None;
                    negated = false;
                    continue;
                }
            };

            if self.is_negation(&word) {
                negated = true;
                continue;
            }

            match self.words.get(&word) {
                Some(entry) if entry.is_intensifier() => {
                    intensity = Some(intensity.unwrap_or(1.0) * entry.intensity);
                }
                Some(entry) => {
                    let factor = intensity.take().unwrap_or(1.0);
                    let mut polarity = entry.polarity * factor;
                    if negated {
                        polarity *= NEGATION_FACTOR;
                        negated = false;
                    }
                    polarities.push(polarity);
                    subjectivities.push(entry.subjectivity * factor);
                }
                // intensifiers only reach the word right after them
                None => intensity = None,
            }
        }

        if polarities.is_empty() {
            return SentimentScore::neutral();
        }

        let score = SentimentScore {
            polarity: mean(&polarities).clamp(-1.0, 1.0),
            subjectivity: mean(&subjectivities).clamp(0.0, 1.0),
        };
        debug!(
            matched = polarities.len(),
            polarity = score.polarity,
            subjectivity = score.subjectivity,
            "Scored text"
        );
        score
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Split text into lowercase words, with sentence punctuation as breaks.
fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() || c == '\'' || c == '’' {
            let c = if c == '’' { '\'' } else { c };
            current.extend(c.to_lowercase());
            continue;
        }

        if !current.is_empty() {
            tokens.push(Token::Word(std::mem::take(&mut current)));
        }
        if matches!(c, '.' | ',' | ';' | ':' | '!' | '?') {
            tokens.push(Token::Break);
        }
    }
    if !current.is_empty() {
        tokens.push(Token::Word(current));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_LEXICON: &str = r#"{
        "words": {
            "good": { "polarity": 0.7, "subjectivity": 0.6 },
            "bad": { "polarity": -0.7, "subjectivity": 0.6 },
            "great": { "polarity": 0.8, "subjectivity": 0.75 },
            "very": { "subjectivity": 0.3, "intensity": 1.3 }
        },
        "negations": ["not", "never"]
    }"#;

    fn scorer() -> LexiconScorer {
        LexiconScorer::from_json(TEST_LEXICON).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_embedded_lexicon_loads() {
        let scorer = LexiconScorer::embedded().unwrap();
        assert!(scorer.len() > 50);
    }

    #[test]
    fn test_single_word() {
        let score = scorer().score("This is good");
        assert!(approx(score.polarity, 0.7));
        assert!(approx(score.subjectivity, 0.6));
    }

    #[test]
    fn test_intensifier_scales_next_word() {
        let score = scorer().score("very good");
        assert!(approx(score.polarity, 0.91));
        assert!(approx(score.subjectivity, 0.78));
    }

    #[test]
    fn test_intensifier_does_not_skip_words() {
        let score = scorer().score("very nice and good");
        assert!(approx(score.polarity, 0.7));
    }

    #[test]
    fn test_negation_flips_and_dampens() {
        let score = scorer().score("not good");
        assert!(approx(score.polarity, -0.35));

        let score = scorer().score("It wasn't bad");
        assert!(approx(score.polarity, 0.35));
    }

    #[test]
    fn test_negation_stops_at_sentence_break() {
        let score = scorer().score("Not today. Good");
        assert!(approx(score.polarity, 0.7));
    }

    #[test]
    fn test_exclamation_ends_modifier_scope() {
        let score = scorer().score("not good!");
        assert!(approx(score.polarity, -0.35));

        let score = scorer().score("very! good");
        assert!(approx(score.polarity, 0.7));

        let score = scorer().score("Not now! Good");
        assert!(approx(score.polarity, 0.7));
    }

    #[test]
    fn test_mean_over_sentiment_words() {
        let score = scorer().score("Good, bad and GREAT!");
        assert!(approx(score.polarity, 0.8 / 3.0));
    }

    #[test]
    fn test_no_known_words_is_neutral() {
        assert_eq!(scorer().score("the cat sat"), SentimentScore::neutral());
        assert_eq!(scorer().score(""), SentimentScore::neutral());
    }

    #[test]
    fn test_empty_lexicon_rejected() {
        let err = LexiconScorer::from_json(r#"{ "words": {} }"#).unwrap_err();
        assert!(matches!(err, SentraError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_artifact_error() {
        let err = LexiconScorer::from_path(Path::new("/nonexistent/lexicon.json")).unwrap_err();
        assert!(matches!(err, SentraError::Artifact { .. }));
    }

    #[test]
    fn test_tokenize_breaks() {
        let tokens = tokenize("Hi, you're   fine!");
        assert_eq!(
            tokens,
            vec![
                Token::Word("hi".to_string()),
                Token::Break,
                Token::Word("you're".to_string()),
                Token::Word("fine".to_string()),
                Token::Break,
            ]
        );
    }
}
