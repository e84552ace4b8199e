//! Sentra Core Library
//!
//! Sentiment scoring, polarity classification and toxicity classification
//! behind the Sentra web API.

pub mod config;
pub mod error;
pub mod sentiment;
pub mod toxicity;

pub use config::SentraConfig;
pub use error::{SentraError, SentraResult};
pub use sentiment::{analyze_sentiment, LexiconScorer, SentimentScorer};
pub use toxicity::{analyze_toxicity, LinearToxicityClassifier, ToxicityScorer};

/// Reject text that is empty or whitespace only.
pub(crate) fn validate_text(text: &str) -> SentraResult<()> {
    if text.trim().is_empty() {
        return Err(SentraError::validation("text must not be empty"));
    }
    Ok(())
}
