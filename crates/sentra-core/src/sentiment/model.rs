//! Sentiment domain models.

use serde::{Deserialize, Serialize};

/// Raw output of a sentiment scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Polarity in [-1.0, 1.0].
    pub polarity: f64,
    /// Subjectivity in [0.0, 1.0].
    pub subjectivity: f64,
}

impl SentimentScore {
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

/// Three-way sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentClass {
    Positive,
    Negative,
    Neutral,
}

impl SentimentClass {
    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete classification derived from a polarity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub sentiment_classification: SentimentClass,
    pub positive_percentage: u8,
    pub negative_percentage: u8,
}

/// Response body of the sentiment analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub text: String,
    pub polarity: f64,
    pub subjectivity: f64,
    pub sentiment_classification: SentimentClass,
    /// Formatted as `"42%"`.
    pub positive_percentage: String,
    /// Formatted as `"42%"`.
    pub negative_percentage: String,
}

impl SentimentAnalysis {
    pub fn new(text: &str, score: SentimentScore, result: ClassificationResult) -> Self {
        Self {
            text: text.to_string(),
            polarity: score.polarity,
            subjectivity: score.subjectivity,
            sentiment_classification: result.sentiment_classification,
            positive_percentage: format!("{}%", result.positive_percentage),
            negative_percentage: format!("{}%", result.negative_percentage),
        }
    }
}
