//! Toxicity domain models.

use serde::{Deserialize, Serialize};

/// Binary toxicity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToxicityLabel {
    Toxic,
    #[serde(rename = "Non-Toxic")]
    NonToxic,
}

impl ToxicityLabel {
    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Toxic => "Toxic",
            Self::NonToxic => "Non-Toxic",
        }
    }

    pub fn is_toxic(&self) -> bool {
        matches!(self, Self::Toxic)
    }
}

impl From<bool> for ToxicityLabel {
    fn from(toxic: bool) -> Self {
        if toxic {
            Self::Toxic
        } else {
            Self::NonToxic
        }
    }
}

impl std::fmt::Display for ToxicityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body of the toxicity endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToxicityResult {
    pub text: String,
    #[serde(rename = "class")]
    pub label: ToxicityLabel,
}
