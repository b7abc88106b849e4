// Payloads exchanged with the recommendation backend
use serde::{Deserialize, Serialize};

/// Identifier sent with every request. Not user-editable.
pub const USER_ID: &str = "user_001";

/// Location the backend itself falls back to.
pub const DEFAULT_LOCATION: &str = "India";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub location: String,
    pub user_id: String,
    /// Overrides the backend's stored visit history. The GUI never sets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_history: Option<Vec<serde_json::Value>>,
}

impl RecommendationRequest {
    pub fn for_location(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            user_id: USER_ID.to_string(),
            visit_history: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub recommendations: String,
    pub crew_log: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendHealth {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body produced by the backend on non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
