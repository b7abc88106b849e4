mod common;

use axum::http::StatusCode;
use common::{refused_url, sample, spawn, Behaviour};
use crew_recommender::client::models::app_state::RecommenderState;
use crew_recommender::client::models::messages::Message;
use crew_recommender::client::models::view_model::{Panel, ViewModel};
use crew_recommender::client::services::recommend_service::RecommendService;
use serde_json::json;

/// Drive one dispatch the way the GUI does: submit, run the request, settle.
async fn dispatch(state: &mut RecommenderState, svc: &RecommendService) {
    let (id, location) = state.begin_dispatch();
    assert!(state.loading());
    assert!(!ViewModel::from_state(state).trigger_enabled);

    let outcome = svc.recommend(&location).await.map_err(|e| e.to_string());
    let _ = state.update(Message::RecommendationSettled { id, outcome }, svc);

    assert!(!state.loading());
    assert!(state.result().is_some() ^ state.error().is_some());
}

#[tokio::test]
async fn barcelona_scenario_shows_result_and_collapsed_log() {
    let (url, seen) = spawn(Behaviour::Recommend(sample())).await;
    let svc = RecommendService::new(url);
    let mut state = RecommenderState::new("India");
    let _ = state.update(Message::LocationChanged("Barcelona, Spain".to_string()), &svc);

    dispatch(&mut state, &svc).await;

    assert_eq!(seen.lock().await[0], json!({ "location": "Barcelona, Spain", "user_id": "user_001" }));
    let ui = ViewModel::from_state(&state);
    assert!(ui.trigger_enabled);
    assert_eq!(
        ui.panel,
        Panel::Result {
            recommendations: "Try X",
            crew_log: "agent1: ...\nagent2: ...",
            crew_log_expanded: false,
        }
    );
}

#[tokio::test]
async fn http_500_shows_error_panel_only() {
    let (url, _) = spawn(Behaviour::Status(StatusCode::INTERNAL_SERVER_ERROR, json!({ "detail": "boom" }))).await;
    let svc = RecommendService::new(url);
    let mut state = RecommenderState::new("Barcelona, Spain");

    dispatch(&mut state, &svc).await;

    assert!(state.result().is_none());
    match ViewModel::from_state(&state).panel {
        Panel::Error(message) => assert!(message.contains("500")),
        other => panic!("expected error panel, got {:?}", other),
    }
}

#[tokio::test]
async fn connection_refused_shows_error_and_clears_loading() {
    let svc = RecommendService::new(refused_url().await);
    let mut state = RecommenderState::new("Barcelona, Spain");

    dispatch(&mut state, &svc).await;

    assert!(!state.loading());
    assert!(state.error().is_some_and(|m| m.to_lowercase().contains("refused")));
}

#[tokio::test]
async fn second_dispatch_replaces_error_with_result() {
    let svc_down = RecommendService::new(refused_url().await);
    let (url, _) = spawn(Behaviour::Recommend(sample())).await;
    let svc_up = RecommendService::new(url);
    let mut state = RecommenderState::new("Delhi");

    dispatch(&mut state, &svc_down).await;
    assert!(state.error().is_some());

    dispatch(&mut state, &svc_up).await;
    assert!(state.error().is_none());
    assert_eq!(state.result(), Some(&sample()));
}

#[tokio::test]
async fn repeated_dispatch_is_idempotent() {
    let (url, seen) = spawn(Behaviour::Recommend(sample())).await;
    let svc = RecommendService::new(url);
    let mut state = RecommenderState::new("Barcelona, Spain");

    dispatch(&mut state, &svc).await;
    let first = state.result().cloned();
    dispatch(&mut state, &svc).await;

    assert_eq!(state.result().cloned(), first);
    assert_eq!(seen.lock().await.len(), 2);
}
