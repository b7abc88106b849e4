// In-process stand-in for the recommendation backend
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use crew_recommender::common::models::Recommendation;
use serde_json::{json, Value};
use tokio::sync::Mutex;

#[derive(Clone)]
pub enum Behaviour {
    Recommend(Recommendation),
    Status(StatusCode, Value),
    RawOk(&'static str),
}

#[derive(Clone)]
pub struct FakeBackend {
    pub behaviour: Behaviour,
    pub seen: Arc<Mutex<Vec<Value>>>,
}

pub fn sample() -> Recommendation {
    Recommendation {
        recommendations: "Try X".to_string(),
        crew_log: "agent1: ...\nagent2: ...".to_string(),
    }
}

async fn recommend(State(backend): State<FakeBackend>, Json(body): Json<Value>) -> Response {
    backend.seen.lock().await.push(body);
    match backend.behaviour {
        Behaviour::Recommend(r) => Json(r).into_response(),
        Behaviour::Status(status, body) => (status, Json(body)).into_response(),
        Behaviour::RawOk(text) => (StatusCode::OK, text).into_response(),
    }
}

async fn root() -> Json<Value> {
    Json(json!({ "status": "Backend is running in DEMO MODE", "message": "mock data" }))
}

/// Serve `behaviour` on an ephemeral port. Returns the base URL and the
/// request bodies received so far.
pub async fn spawn(behaviour: Behaviour) -> (String, Arc<Mutex<Vec<Value>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = FakeBackend { behaviour, seen: seen.clone() };
    let app = Router::new()
        .route("/", get(root))
        .route("/recommend", post(recommend))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), seen)
}

/// Base URL of a port nobody listens on.
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
