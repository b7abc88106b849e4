use log::{debug, info, warn};
use reqwest::StatusCode;
use crate::common::models::{BackendHealth, ErrorBody, Recommendation, RecommendationRequest};

const RECOMMEND_PATH: &str = "/recommend";

/// Why a request to the backend did not produce a usable body.
///
/// The GUI only ever shows the `Display` text, which is never empty.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("Request failed: {}", error_chain(.0))]
    Transport(#[source] reqwest::Error),
    #[error("Request failed with status {status}{}", detail_suffix(.detail))]
    Status { status: StatusCode, detail: Option<String> },
    #[error("Request failed: unreadable response body ({})", error_chain(.0))]
    Decode(#[source] reqwest::Error),
}

/// `err` followed by each cause not already spelled out by the text before it,
/// so a refused connection reads as such instead of "error sending request".
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut text = err.to_string();
    let mut cause = err.source();
    while let Some(inner) = cause {
        let part = inner.to_string();
        if !part.is_empty() && !text.contains(&part) {
            text.push_str(": ");
            text.push_str(&part);
        }
        cause = inner.source();
    }
    text
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(": {}", d),
        None => String::new(),
    }
}

/// Client for the recommendation backend. Cheap to clone, the underlying
/// `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct RecommendService {
    client: reqwest::Client,
    base_url: String,
}

impl RecommendService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn recommend_url(&self) -> String {
        format!("{}{}", self.base_url, RECOMMEND_PATH)
    }

    /// Send one recommendation request for `location`. No retry.
    pub async fn recommend(&self, location: &str) -> Result<Recommendation, RecommendError> {
        let request = RecommendationRequest::for_location(location);
        info!("[RECOMMEND] POST {} location='{}'", self.recommend_url(), location);

        let response = self
            .client
            .post(self.recommend_url())
            .json(&request)
            .send()
            .await
            .map_err(RecommendError::Transport)?;

        let response = Self::check_status(response).await?;
        let recommendation: Recommendation = response.json().await.map_err(RecommendError::Decode)?;
        debug!(
            "[RECOMMEND] received {} bytes of recommendations, {} bytes of crew log",
            recommendation.recommendations.len(),
            recommendation.crew_log.len()
        );
        Ok(recommendation)
    }

    /// Health check, `GET /` on the backend.
    pub async fn health(&self) -> Result<BackendHealth, RecommendError> {
        let url = format!("{}/", self.base_url);
        let response = self.client.get(&url).send().await.map_err(RecommendError::Transport)?;
        let response = Self::check_status(response).await?;
        response.json().await.map_err(RecommendError::Decode)
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, RecommendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!("[RECOMMEND] backend returned {}: {}", status, body);
        Err(RecommendError::Status { status, detail: extract_detail(&body) })
    }
}

/// Pull a readable message out of an error body: the `detail` field when the
/// body is a backend error object, otherwise the trimmed text itself.
fn extract_detail(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        let detail = parsed.detail.trim();
        if !detail.is_empty() {
            return Some(detail.to_string());
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}
