// traffic_classifier.rs
//
// The traffic classifier is an external collaborator: it receives an encoded
// feature vector and answers with a class and a confidence. Prediction failure
// must never block a recommendation, so every call goes through
// `classify_or_fallback`, which substitutes a conservative "high traffic"
// verdict.

use crate::error::{AdvisorError, Result};
use crate::flow_analyzer::feature_encoder::{ClassifierSchema, FeatureVector};
use crate::global_variables::{FALLBACK_CONFIDENCE, FALLBACK_TRAFFIC_CLASS};
use crate::shared_data::TrafficLabel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassPrediction {
    pub label: TrafficLabel,
    /// Probability of the predicted class.
    pub confidence: f64,
}

impl ClassPrediction {
    pub fn new(label: TrafficLabel, confidence: f64) -> Self {
        Self { label, confidence }
    }

    /// Verdict used whenever the classifier cannot be consulted.
    pub fn fallback() -> Self {
        Self::fallback_with_confidence(FALLBACK_CONFIDENCE)
    }

    pub fn fallback_with_confidence(confidence: f64) -> Self {
        let label = TrafficLabel::from_class(FALLBACK_TRAFFIC_CLASS).unwrap_or(TrafficLabel::High);
        Self { label, confidence }
    }

    fn is_well_formed(&self) -> bool {
        self.confidence.is_finite() && (0.0..=1.0).contains(&self.confidence)
    }
}

/// Binary traffic classifier consuming schema-ordered feature vectors.
pub trait TrafficClassifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<ClassPrediction>;
}

/// Calls `classifier`, replacing errors and malformed output with the
/// fallback verdict.
pub fn classify_or_fallback(
    classifier: &dyn TrafficClassifier,
    features: &FeatureVector,
    fallback_confidence: f64,
) -> ClassPrediction {
    match classifier.predict(features) {
        Ok(prediction) if prediction.is_well_formed() => prediction,
        Ok(prediction) => {
            log::error!(
                "Classifier returned malformed confidence {}; using fallback verdict",
                prediction.confidence
            );
            ClassPrediction::fallback_with_confidence(fallback_confidence)
        }
        Err(e) => {
            log::error!("Error predicting traffic: {}; using fallback verdict", e);
            ClassPrediction::fallback_with_confidence(fallback_confidence)
        }
    }
}

/// Pre-trained logistic regression over the classifier schema, read from JSON:
///
/// ```json
/// { "feature_names": ["HOUR", "VEHICLE_COUNT", "WEATHER_Clear"],
///   "coefficients": [0.02, 0.035, -0.4],
///   "intercept": -3.1 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl LogisticModel {
    pub fn new(feature_names: Vec<String>, coefficients: Vec<f64>, intercept: f64) -> Result<Self> {
        let model = Self {
            feature_names,
            coefficients,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        if self.feature_names.len() != self.coefficients.len() {
            return Err(AdvisorError::Classifier(format!(
                "model has {} feature names but {} coefficients",
                self.feature_names.len(),
                self.coefficients.len()
            )));
        }
        Ok(())
    }

    /// The input schema this model was trained on.
    pub fn schema(&self) -> Result<ClassifierSchema> {
        ClassifierSchema::new(self.feature_names.clone())
    }

    /// Probability of high traffic.
    pub fn probability_high(&self, features: &FeatureVector) -> Result<f64> {
        if features.fields() != self.feature_names.as_slice() {
            return Err(AdvisorError::Classifier(format!(
                "feature vector has {} fields that do not match the model's {} inputs",
                features.len(),
                self.feature_names.len()
            )));
        }
        let z = self.intercept
            + features
                .values()
                .iter()
                .zip(&self.coefficients)
                .map(|(x, w)| x * w)
                .sum::<f64>();
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

impl TrafficClassifier for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> Result<ClassPrediction> {
        let p = self.probability_high(features)?;
        let (label, confidence) = if p >= 0.5 {
            (TrafficLabel::High, p)
        } else {
            (TrafficLabel::Low, 1.0 - p)
        };
        Ok(ClassPrediction::new(label, confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared_data::Weather;

    struct Failing;

    impl TrafficClassifier for Failing {
        fn predict(&self, _features: &FeatureVector) -> Result<ClassPrediction> {
            Err(AdvisorError::Classifier("model unavailable".to_string()))
        }
    }

    struct Malformed(f64);

    impl TrafficClassifier for Malformed {
        fn predict(&self, _features: &FeatureVector) -> Result<ClassPrediction> {
            Ok(ClassPrediction::new(TrafficLabel::Low, self.0))
        }
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn model() -> LogisticModel {
        LogisticModel::new(
            names(&["HOUR", "VEHICLE_COUNT", "WEATHER_Rainy"]),
            vec![0.0, 0.0625, 1.0],
            -5.0,
        )
        .unwrap()
    }

    #[test]
    fn failure_yields_fallback_verdict() {
        let v = model().schema().unwrap().encode(9, 80, Weather::Clear, "X");
        let p = classify_or_fallback(&Failing, &v, 0.5);
        assert_eq!(p.label, TrafficLabel::High);
        assert_eq!(p.confidence, 0.5);
    }

    #[test]
    fn malformed_confidence_yields_fallback_verdict() {
        let v = model().schema().unwrap().encode(9, 80, Weather::Clear, "X");
        for bad in [f64::NAN, -0.1, 1.5, f64::INFINITY] {
            let p = classify_or_fallback(&Malformed(bad), &v, 0.5);
            assert_eq!(p, ClassPrediction::fallback());
        }
        let p = classify_or_fallback(&Malformed(0.9), &v, 0.5);
        assert_eq!(p, ClassPrediction::new(TrafficLabel::Low, 0.9));
    }

    #[test]
    fn logistic_model_classifies_by_probability() {
        let m = model();
        let schema = m.schema().unwrap();

        // z = -5 + 200 / 16 = 7.5 -> high
        let busy = m.predict(&schema.encode(9, 200, Weather::Clear, "X")).unwrap();
        assert_eq!(busy.label, TrafficLabel::High);
        assert!(busy.confidence > 0.99);

        // z = -5 + 20 / 16 = -3.75 -> low
        let quiet = m.predict(&schema.encode(9, 20, Weather::Clear, "X")).unwrap();
        assert_eq!(quiet.label, TrafficLabel::Low);
        assert!(quiet.confidence > 0.97);

        // z = -5 + 64 / 16 + 1 = 0 -> p = 0.5, ties go to high
        let even = m.predict(&schema.encode(9, 64, Weather::Rainy, "X")).unwrap();
        assert_eq!(even.label, TrafficLabel::High);
        assert!((even.confidence - 0.5).abs() < 1e-12);
    }

    #[test]
    fn logistic_model_rejects_foreign_vectors() {
        let other = ClassifierSchema::new(names(&["HOUR"])).unwrap();
        let v = other.encode(9, 80, Weather::Clear, "X");
        assert!(model().predict(&v).is_err());
    }

    #[test]
    fn mismatched_coefficients_are_rejected() {
        assert!(LogisticModel::new(names(&["HOUR"]), vec![], 0.0).is_err());
    }
}
