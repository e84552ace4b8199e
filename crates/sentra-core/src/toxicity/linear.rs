//! Binary linear model over sparse feature rows.

use serde::Deserialize;

use super::vectorizer::SparseRow;
use crate::error::{SentraError, SentraResult};

/// Fitted weights of a binary linear classifier (logistic regression or
/// linear SVM). Positive decisions select the toxic class.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    coef: Vec<f64>,
    #[serde(default)]
    intercept: f64,
}

impl LinearModel {
    pub fn n_features(&self) -> usize {
        self.coef.len()
    }

    pub fn validate(&self) -> SentraResult<()> {
        if self.coef.is_empty() {
            return Err(SentraError::Config("model has no coefficients".to_string()));
        }
        if self.coef.iter().any(|w| !w.is_finite()) || !self.intercept.is_finite() {
            return Err(SentraError::Config("model weights must be finite".to_string()));
        }
        Ok(())
    }

    /// Signed distance from the decision boundary.
    pub fn decision(&self, row: &SparseRow) -> f64 {
        row.iter()
            .filter_map(|&(column, value)| self.coef.get(column).map(|w| w * value))
            .sum::<f64>()
            + self.intercept
    }

    /// Logistic probability of the positive class.
    pub fn probability(&self, row: &SparseRow) -> f64 {
        1.0 / (1.0 + (-self.decision(row)).exp())
    }

    pub fn predict(&self, row: &SparseRow) -> bool {
        self.decision(row) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinearModel {
        serde_json::from_str(r#"{ "coef": [2.0, -1.0, 0.5], "intercept": -0.5 }"#).unwrap()
    }

    #[test]
    fn test_decision_is_dot_plus_intercept() {
        let row = vec![(0, 1.0), (2, 2.0)];
        assert_eq!(model().decision(&row), 2.5);
        assert!(model().predict(&row));
    }

    #[test]
    fn test_empty_row_uses_intercept() {
        let row = SparseRow::new();
        assert_eq!(model().decision(&row), -0.5);
        assert!(!model().predict(&row));
        assert!(model().probability(&row) < 0.5);
    }

    #[test]
    fn test_probability_at_boundary() {
        let m: LinearModel = serde_json::from_str(r#"{ "coef": [1.0] }"#).unwrap();
        assert_eq!(m.probability(&SparseRow::new()), 0.5);
    }

    #[test]
    fn test_validate() {
        assert!(model().validate().is_ok());
        let empty: LinearModel = serde_json::from_str(r#"{ "coef": [] }"#).unwrap();
        assert!(empty.validate().is_err());
    }
}
