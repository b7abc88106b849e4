use crate::common::models::{BackendHealth, Recommendation};

#[derive(Debug, Clone)]
pub enum Message {
    // Input
    LocationChanged(String),
    // Dispatch
    SubmitRecommendation,
    RecommendationSettled { id: u64, outcome: Result<Recommendation, String> },
    // Result panel
    ToggleCrewLog,
    // Start-up health check, `GET /`
    HealthChecked(Result<BackendHealth, String>),
    // Notice bar
    ClearNotices,
}
