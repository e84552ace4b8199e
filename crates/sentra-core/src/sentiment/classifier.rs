//! Polarity classification.
//!
//! Turns a continuous polarity score into a discrete label plus the
//! positive/negative intensity expressed as whole percentages.

use super::model::{ClassificationResult, SentimentClass};

/// Classify a polarity value in [-1.0, 1.0].
///
/// Percentages are truncated, so `|polarity| < 0.01` yields `neutral`.
/// Out-of-range input is clamped and NaN counts as zero.
pub fn classify(polarity: f64) -> ClassificationResult {
    let polarity = if polarity.is_nan() {
        0.0
    } else {
        polarity.clamp(-1.0, 1.0)
    };

    let positive_percentage = to_percentage(polarity.max(0.0));
    let negative_percentage = to_percentage((-polarity).max(0.0));

    let sentiment_classification = if positive_percentage > negative_percentage {
        SentimentClass::Positive
    } else if negative_percentage > positive_percentage {
        SentimentClass::Negative
    } else {
        SentimentClass::Neutral
    };

    ClassificationResult {
        sentiment_classification,
        positive_percentage,
        negative_percentage,
    }
}

fn to_percentage(intensity: f64) -> u8 {
    // intensity is in [0, 1] here
    (intensity * 100.0).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_positive() {
        let result = classify(0.5);
        assert_eq!(result.positive_percentage, 50);
        assert_eq!(result.negative_percentage, 0);
        assert_eq!(result.sentiment_classification, SentimentClass::Positive);
    }

    #[test]
    fn test_quarter_negative() {
        let result = classify(-0.25);
        assert_eq!(result.positive_percentage, 0);
        assert_eq!(result.negative_percentage, 25);
        assert_eq!(result.sentiment_classification, SentimentClass::Negative);
    }

    #[test]
    fn test_zero_is_neutral() {
        let result = classify(0.0);
        assert_eq!(result.positive_percentage, 0);
        assert_eq!(result.negative_percentage, 0);
        assert_eq!(result.sentiment_classification, SentimentClass::Neutral);
    }

    #[test]
    fn test_extremes() {
        let top = classify(1.0);
        assert_eq!(top.positive_percentage, 100);
        assert_eq!(top.sentiment_classification, SentimentClass::Positive);

        let bottom = classify(-1.0);
        assert_eq!(bottom.negative_percentage, 100);
        assert_eq!(bottom.sentiment_classification, SentimentClass::Negative);
    }

    #[test]
    fn test_tiny_polarity_truncates_to_neutral() {
        let result = classify(0.004);
        assert_eq!(result.positive_percentage, 0);
        assert_eq!(result.sentiment_classification, SentimentClass::Neutral);
    }

    #[test]
    fn test_out_of_range_and_nan() {
        assert_eq!(classify(3.0).positive_percentage, 100);
        assert_eq!(classify(-7.5).negative_percentage, 100);

        let nan = classify(f64::NAN);
        assert_eq!(nan.positive_percentage, 0);
        assert_eq!(nan.negative_percentage, 0);
        assert_eq!(nan.sentiment_classification, SentimentClass::Neutral);
    }

    #[test]
    fn test_sign_properties_over_sweep() {
        for step in -100..=100 {
            let polarity = step as f64 / 100.0;
            let result = classify(polarity);

            assert!(result.positive_percentage <= 100);
            assert!(result.negative_percentage <= 100);

            if step > 0 {
                assert!(result.positive_percentage > 0, "polarity {polarity}");
                assert_eq!(result.negative_percentage, 0);
                assert_eq!(result.sentiment_classification, SentimentClass::Positive);
            } else if step < 0 {
                assert!(result.negative_percentage > 0, "polarity {polarity}");
                assert_eq!(result.positive_percentage, 0);
                assert_eq!(result.sentiment_classification, SentimentClass::Negative);
            } else {
                assert_eq!(result.sentiment_classification, SentimentClass::Neutral);
            }
        }
    }

    #[test]
    fn test_monotonic_on_positive_range() {
        let mut last = 0;
        for step in 0..=1000 {
            let result = classify(step as f64 / 1000.0);
            assert!(result.positive_percentage >= last);
            last = result.positive_percentage;
        }
        assert_eq!(last, 100);
    }
}
