use std::{net::IpAddr, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use inquiry_models::submission::Submission;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

pub const INQUIRIES_ROUTE: &str = "/inquiries";
pub const FAILING_ROUTE: &str = "/failing/inquiries";
pub const GARBLED_ROUTE: &str = "/garbled/inquiries";

pub async fn start_server(host: IpAddr, port: u16, delay: Duration) -> anyhow::Result<()> {
    info!("Starting inquiries api testing server on {host}:{port}");
    info!("Inquiries endpoint: http://{host}:{port}{INQUIRIES_ROUTE}");
    info!("Endpoint that always fails: http://{host}:{port}{FAILING_ROUTE}");
    info!("Endpoint with a non-json body: http://{host}:{port}{GARBLED_ROUTE}");
    info!("Every response is delayed by {delay:?}");

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    serve(listener, delay).await
}

/// Serves the testing api on an already bound listener.
pub async fn serve(listener: TcpListener, delay: Duration) -> anyhow::Result<()> {
    axum::serve(listener, router(delay))
        .await
        .context("Failed to start HTTP server")
}

pub fn router(delay: Duration) -> Router<()> {
    Router::new()
        .route(
            INQUIRIES_ROUTE,
            routing::get(list_inquiries).post(create_inquiry),
        )
        .route(FAILING_ROUTE, routing::post(reject_inquiry))
        .route(GARBLED_ROUTE, routing::post(garble_inquiry))
        .with_state(Arc::new(StateInner {
            delay,
            inquiries: Default::default(),
        }))
}

type State = axum::extract::State<Arc<StateInner>>;
struct StateInner {
    delay: Duration,
    inquiries: RwLock<Vec<Submission>>,
}

async fn create_inquiry(state: State, Json(submission): Json<Submission>) -> Response {
    tokio::time::sleep(state.delay).await;
    info!(id = %submission.id, "received inquiry");
    state.inquiries.write().await.push(submission.clone());
    (StatusCode::CREATED, Json(submission)).into_response()
}

async fn list_inquiries(state: State) -> Response {
    Json(state.inquiries.read().await.clone()).into_response()
}

async fn reject_inquiry(state: State) -> Response {
    tokio::time::sleep(state.delay).await;
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "inquiries are not accepted here" })),
    )
        .into_response()
}

async fn garble_inquiry(state: State) -> Response {
    tokio::time::sleep(state.delay).await;
    (StatusCode::CREATED, "this is not json").into_response()
}
