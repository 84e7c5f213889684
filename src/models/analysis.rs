use serde::{Deserialize, Serialize};

/// Sentinel score when no API credential is configured.
pub const SCORE_UNCONFIGURED: &str = "N/A";

/// Sentinel score when the analysis service failed.
pub const SCORE_UNAVAILABLE: &str = "?";

/// A short AI-produced nutrition rating for one dish.
///
/// `nutri_score` is a single letter A–E, or one of the sentinels above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthAnalysis {
    #[serde(rename = "nutriScore")]
    pub nutri_score: String,

    #[serde(rename = "healthTip")]
    pub health_tip: String,
}

impl HealthAnalysis {
    pub fn new(nutri_score: impl Into<String>, health_tip: impl Into<String>) -> Self {
        Self {
            nutri_score: nutri_score.into(),
            health_tip: health_tip.into(),
        }
    }

    /// Fixed response when no API key is configured.
    pub fn unconfigured() -> Self {
        Self::new(
            SCORE_UNCONFIGURED,
            "Please configure GEMINI_API_KEY to get AI insights.",
        )
    }

    /// Fixed fallback when the service fails or returns garbage.
    pub fn unavailable() -> Self {
        Self::new(SCORE_UNAVAILABLE, "ไม่สามารถวิเคราะห์ข้อมูลได้ในขณะนี้")
    }

    /// Whether the score is a real A–E letter rather than a sentinel.
    pub fn is_scored(&self) -> bool {
        matches!(self.nutri_score.as_str(), "A" | "B" | "C" | "D" | "E")
    }
}
