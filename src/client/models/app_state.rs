use log::{error, info, warn};
use iced::Command;
use crate::client::gui::views::notice_bar::Notice;
use crate::client::models::messages::Message;
use crate::client::services::recommend_service::RecommendService;
use crate::common::models::{BackendHealth, Recommendation};

/// Phase of the latest dispatch. `Fulfilled` and `Rejected` are the only
/// phases carrying data, so a result and an error can never coexist.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dispatch {
    #[default]
    Idle,
    Pending,
    Fulfilled(Recommendation),
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online(String),
    Unreachable(String),
}

#[derive(Debug, Clone, Default)]
pub struct RecommenderState {
    pub location: String,
    pub dispatch: Dispatch,
    pub dispatch_seq: u64,
    pub crew_log_expanded: bool,
    pub backend_status: BackendStatus,
    pub notices: Vec<Notice>,
}

impl RecommenderState {
    pub fn new(default_location: impl Into<String>) -> Self {
        Self {
            location: default_location.into(),
            ..Self::default()
        }
    }

    pub fn loading(&self) -> bool {
        matches!(self.dispatch, Dispatch::Pending)
    }

    pub fn result(&self) -> Option<&Recommendation> {
        match &self.dispatch {
            Dispatch::Fulfilled(r) => Some(r),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.dispatch {
            Dispatch::Rejected(e) => Some(e.as_str()),
            _ => None,
        }
    }

    /// Enter `Pending`, dropping any previous result or error. Returns the id
    /// of the new dispatch and the location to send.
    pub fn begin_dispatch(&mut self) -> (u64, String) {
        self.dispatch_seq += 1;
        self.dispatch = Dispatch::Pending;
        self.crew_log_expanded = false;
        (self.dispatch_seq, self.location.clone())
    }

    /// Apply the outcome of dispatch `id`. Outcomes of superseded dispatches
    /// still overwrite the state: last response wins.
    pub fn settle(&mut self, id: u64, outcome: Result<Recommendation, String>) {
        if id != self.dispatch_seq {
            warn!("[DISPATCH] stale response for dispatch #{} applied while #{} is latest", id, self.dispatch_seq);
        }
        self.crew_log_expanded = false;
        self.dispatch = match outcome {
            Ok(recommendation) => {
                info!("[DISPATCH] #{} fulfilled", id);
                Dispatch::Fulfilled(recommendation)
            }
            Err(message) => {
                error!("[DISPATCH] #{} rejected: {}", id, message);
                let message = if message.trim().is_empty() { "Request failed".to_string() } else { message };
                Dispatch::Rejected(message)
            }
        };
    }

    pub fn update(&mut self, message: Message, service: &RecommendService) -> Command<Message> {
        match message {
            Message::LocationChanged(location) => {
                self.location = location;
            }
            Message::SubmitRecommendation => {
                let (id, location) = self.begin_dispatch();
                info!("[DISPATCH] #{} started for '{}'", id, location);
                let svc = service.clone();
                return Command::perform(
                    async move { svc.recommend(&location).await.map_err(|e| e.to_string()) },
                    move |outcome| Message::RecommendationSettled { id, outcome },
                );
            }
            Message::RecommendationSettled { id, outcome } => {
                self.settle(id, outcome);
            }
            Message::ToggleCrewLog => {
                if self.result().is_some() {
                    self.crew_log_expanded = !self.crew_log_expanded;
                }
            }
            Message::HealthChecked(outcome) => {
                return self.record_backend_status(outcome);
            }
            Message::ClearNotices => {
                self.notices.clear();
            }
        }
        Command::none()
    }

    fn record_backend_status(&mut self, outcome: Result<BackendHealth, String>) -> Command<Message> {
        match outcome {
            Ok(health) => {
                info!("[BACKEND] {}", health.status);
                self.notices.push(Notice::backend_online(health.status.clone()));
                if let Some(extra) = &health.message {
                    self.notices.push(Notice::backend_detail(extra.clone()));
                }
                self.backend_status = BackendStatus::Online(health.status);
                // Success notices fade out, warnings stay until the next one.
                Command::perform(
                    async move {
                        tokio::time::sleep(tokio::time::Duration::from_secs(3)).await;
                        Message::ClearNotices
                    },
                    |msg| msg,
                )
            }
            Err(e) => {
                warn!("[BACKEND] unreachable: {}", e);
                self.notices.push(Notice::backend_unreachable(&e));
                self.backend_status = BackendStatus::Unreachable(e);
                Command::none()
            }
        }
    }
}
