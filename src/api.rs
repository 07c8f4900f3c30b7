use std::net::SocketAddr;

use axum::body::{Bytes, Full};
use axum::extract::State;
use axum::http::{header, HeaderValue, Response};
use axum::response::IntoResponse;
use axum::{Json, Router};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::log;

use crate::guess_service;
use crate::models_api::{ApiError, ApiGuessResult};
use crate::player_service::{FetchError, PlayerService};
use crate::rest_client::FootballApi;

#[derive(Clone)]
pub struct ApiState {
    pub football_api: FootballApi,
    pub league: u32,
    pub season: u32,
}

pub struct Api;
impl Api {
    pub async fn serve(port: u16, football_api: FootballApi, league: u32, season: u32) {
        let state = ApiState { football_api, league, season };
        let app = Router::new()
            .route("/start", axum::routing::get(Api::start))
            .route("/guess", axum::routing::post(Api::guess))
            .fallback(Api::not_found)
            .with_state(state)
            .layer(ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CatchPanicLayer::custom(Api::panic_rsp))
            );
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        log::info!("[API] Listening on {}", addr);
        _ = axum::Server::bind(&addr)
            .serve(app.into_make_service())
            .await;
    }

    async fn start(State(state): State<ApiState>) -> impl IntoResponse {
        match PlayerService::pick_mystery_player(&state.football_api, state.league, state.season).await {
            Ok(details) => (StatusCode::OK, Json(details)).into_response(),
            Err(FetchError::Rest(e)) => {
                log::error!("[API] Upstream failure: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ApiError::new("An error occurred while fetching data."))).into_response()
            },
            Err(e) => (StatusCode::NOT_FOUND, Json(ApiError::new(e.to_string()))).into_response(),
        }
    }

    async fn guess(Json(body): Json<GuessBody>) -> impl IntoResponse {
        match guess_service::evaluate(body.guess.as_ref(), body.playerName.as_ref()) {
            Ok(correct) => (StatusCode::OK, Json(ApiGuessResult { correct })).into_response(),
            Err(e) => (StatusCode::BAD_REQUEST, Json(ApiError::new(e.message()))).into_response(),
        }
    }

    async fn not_found() -> impl IntoResponse {
        (StatusCode::NOT_FOUND, Json(ApiError::new("Not found")))
    }

    fn panic_rsp(_err: Box<dyn std::any::Any + Send + 'static>) -> Response<Full<Bytes>> {
        let body = ApiError::new("Something went wrong on the server");
        let body = serde_json::to_string(&body).unwrap_or_default();
        let mut rsp = Response::new(Full::from(body));
        *rsp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
        rsp.headers_mut().insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        rsp
    }
}

#[derive(Deserialize)]
struct GuessBody {
    guess: Option<Value>,
    playerName: Option<Value>,
}
