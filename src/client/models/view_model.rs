// What the recommend view shows, derived from the state alone
use crate::client::models::app_state::{Dispatch, RecommenderState};

pub const TRIGGER_LABEL: &str = "Get recommendations";
pub const TRIGGER_BUSY_LABEL: &str = "Finding restaurants...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel<'a> {
    None,
    Loading,
    Error(&'a str),
    Result {
        recommendations: &'a str,
        crew_log: &'a str,
        crew_log_expanded: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel<'a> {
    pub location: &'a str,
    pub trigger_label: &'static str,
    pub trigger_enabled: bool,
    pub panel: Panel<'a>,
}

impl<'a> ViewModel<'a> {
    pub fn from_state(state: &'a RecommenderState) -> Self {
        let loading = state.loading();
        let panel = match &state.dispatch {
            Dispatch::Idle => Panel::None,
            Dispatch::Pending => Panel::Loading,
            Dispatch::Rejected(message) => Panel::Error(message.as_str()),
            Dispatch::Fulfilled(r) => Panel::Result {
                recommendations: &r.recommendations,
                crew_log: &r.crew_log,
                crew_log_expanded: state.crew_log_expanded,
            },
        };
        Self {
            location: &state.location,
            trigger_label: if loading { TRIGGER_BUSY_LABEL } else { TRIGGER_LABEL },
            trigger_enabled: !loading,
            panel,
        }
    }
}
