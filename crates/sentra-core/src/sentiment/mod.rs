//! Sentiment analysis.

pub mod classifier;
pub mod lexicon;
pub mod model;

use crate::error::SentraResult;
use model::SentimentAnalysis;
use tracing::debug;

pub use classifier::classify;
pub use lexicon::LexiconScorer;
pub use model::{ClassificationResult, SentimentClass, SentimentScore};

/// Scores free text for polarity and subjectivity.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

/// Score and classify a piece of text.
pub fn analyze_sentiment(
    scorer: &dyn SentimentScorer,
    text: &str,
) -> SentraResult<SentimentAnalysis> {
    crate::validate_text(text)?;

    let score = scorer.score(text);
    let result = classify(score.polarity);
    debug!(
        polarity = score.polarity,
        classification = %result.sentiment_classification,
        "Sentiment analyzed"
    );

    Ok(SentimentAnalysis::new(text, score, result))
}
