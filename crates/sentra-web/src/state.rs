//! Application state.

use sentra_core::config::ModelConfig;
use sentra_core::{
    LexiconScorer, LinearToxicityClassifier, SentimentScorer, SentraResult, ToxicityScorer,
};
use std::sync::Arc;

/// Read-only analysis context shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub sentiment: Arc<dyn SentimentScorer>,
    pub toxicity: Arc<dyn ToxicityScorer>,
}

impl AppState {
    pub fn new(sentiment: Arc<dyn SentimentScorer>, toxicity: Arc<dyn ToxicityScorer>) -> Self {
        Self { sentiment, toxicity }
    }

    /// Load the lexicon and toxicity artifacts named by `models`.
    pub fn load(models: &ModelConfig) -> SentraResult<Self> {
        let sentiment = LexiconScorer::load(models.lexicon_path.as_deref())?;
        let toxicity = LinearToxicityClassifier::load(&models.vectorizer_path, &models.model_path)?;

        Ok(Self::new(Arc::new(sentiment), Arc::new(toxicity)))
    }
}
