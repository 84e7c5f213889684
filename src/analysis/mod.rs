mod gemini;

pub use gemini::{GeminiClient, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

use async_trait::async_trait;

use crate::models::HealthAnalysis;

/// Port for the external nutrition-rating service.
///
/// `analyze` always resolves and never errors to the caller:
/// - `Some(analysis)` with a real A–E score on success,
/// - `Some(analysis)` with a sentinel score when unconfigured or failed,
/// - `None` when the service succeeded but said nothing.
///
/// Implementations are stateless and reentrant; one-request-per-spin is
/// enforced by the game state machine, not here.
#[async_trait]
pub trait NutritionAdvisor: Send + Sync {
    async fn analyze(&self, menu_name: &str) -> Option<HealthAnalysis>;
}
