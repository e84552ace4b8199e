//! Toxicity classification.
//!
//! A fitted TF-IDF vectorizer and a binary linear model are loaded from JSON
//! artifacts once at startup and shared read-only afterwards.

pub mod linear;
pub mod model;
pub mod vectorizer;

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{SentraError, SentraResult};
use linear::LinearModel;
use vectorizer::TfidfVectorizer;

pub use model::{ToxicityLabel, ToxicityResult};

/// Default location of the fitted vectorizer.
pub const DEFAULT_VECTORIZER_PATH: &str = "assets/models/toxicity-vectorizer.json";

/// Default location of the fitted classifier.
pub const DEFAULT_MODEL_PATH: &str = "assets/models/toxicity-model.json";

/// Labels free text as toxic or non-toxic.
pub trait ToxicityScorer: Send + Sync {
    fn classify(&self, text: &str) -> ToxicityLabel;
}

/// TF-IDF features fed into a linear model.
#[derive(Debug, Clone)]
pub struct LinearToxicityClassifier {
    vectorizer: TfidfVectorizer,
    model: LinearModel,
}

impl LinearToxicityClassifier {
    /// Load and validate both artifacts.
    ///
    /// Each artifact is checked on its own first so errors name the file at fault.
    pub fn load(vectorizer_path: &Path, model_path: &Path) -> SentraResult<Self> {
        let vectorizer: TfidfVectorizer = read_artifact(vectorizer_path)?;
        vectorizer
            .validate()
            .map_err(|e| SentraError::artifact(vectorizer_path, e.to_string()))?;

        let model: LinearModel = read_artifact(model_path)?;
        model
            .validate()
            .map_err(|e| SentraError::artifact(model_path, e.to_string()))?;

        let classifier = Self::from_parts(vectorizer, model)
            .map_err(|e| SentraError::artifact(model_path, e.to_string()))?;

        info!(
            vectorizer = %vectorizer_path.display(),
            model = %model_path.display(),
            features = classifier.vectorizer.n_features(),
            "Loaded toxicity classifier"
        );
        Ok(classifier)
    }

    /// Pair a vectorizer with a model fitted on its feature space.
    ///
    /// Both parts are validated, so a classifier that constructs never
    /// panics in `classify`.
    pub fn from_parts(vectorizer: TfidfVectorizer, model: LinearModel) -> SentraResult<Self> {
        vectorizer.validate()?;
        model.validate()?;
        if vectorizer.n_features() != model.n_features() {
            return Err(SentraError::Config(format!(
                "vectorizer produces {} features but model expects {}",
                vectorizer.n_features(),
                model.n_features()
            )));
        }
        Ok(Self { vectorizer, model })
    }

    /// Probability that the text is toxic.
    pub fn probability(&self, text: &str) -> f64 {
        self.model.probability(&self.vectorizer.transform(text))
    }
}

impl ToxicityScorer for LinearToxicityClassifier {
    fn classify(&self, text: &str) -> ToxicityLabel {
        let row = self.vectorizer.transform(text);
        let decision = self.model.decision(&row);
        debug!(features = row.len(), decision, "Toxicity decision");
        ToxicityLabel::from(decision > 0.0)
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> SentraResult<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| SentraError::artifact(path, e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| SentraError::artifact(path, e.to_string()))
}

/// Classify a piece of text.
pub fn analyze_toxicity(scorer: &dyn ToxicityScorer, text: &str) -> SentraResult<ToxicityResult> {
    crate::validate_text(text)?;

    Ok(ToxicityResult {
        text: text.to_string(),
        label: scorer.classify(text),
    })
}
