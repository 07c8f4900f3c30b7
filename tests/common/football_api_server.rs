use std::{collections::HashMap, net::SocketAddr, sync::Arc, time::Duration};

use axum::{extract::{Query, State}, response::IntoResponse, Json, Router, routing::get};
use ball_knowledge_rs::models_external::{league::{LeagueEntry, LeagueInfo}, player::{PlayerRef, PlayerStatsEntry, RosterEntry}, team::{TeamEntry, TeamInfo}, transfer::TransferEntry};
use reqwest::StatusCode;
use serde_json::json;
use tokio::{sync::RwLock, task::JoinHandle};

#[derive(Default)]
pub struct AppState {
    pub leagues: Vec<LeagueEntry>,
    pub teams: Vec<TeamEntry>,
    pub roster: Vec<RosterEntry>,
    pub player_stats: HashMap<u32, PlayerStatsEntry>,
    pub transfers: HashMap<u32, TransferEntry>,
    pub fail_player_stats: bool,

    pub hits: HashMap<String, usize>,
}

impl AppState {
    fn hit(&mut self, resource: &str) {
        *self.hits.entry(resource.to_string()).or_default() += 1;
    }
}

/// In-process stand-in for the API-Football service, wrapping everything in
/// the `{"response": [...]}` envelope and counting hits per resource.
pub struct FootballApiServer {
    port: u16,
    state: Arc<RwLock<AppState>>,
    handles: Vec<JoinHandle<()>>,
}

impl Drop for FootballApiServer {
    fn drop(&mut self) {
        for e in &self.handles {
            e.abort();
        }
    }
}

impl FootballApiServer {
    pub fn new(port: u16) -> FootballApiServer {
        FootballApiServer { port, state: Arc::new(RwLock::new(AppState::default())), handles: vec![] }
    }

    pub async fn start(&mut self) {
        let app = Router::new()
            .route("/leagues", get(get_leagues))
            .route("/teams", get(get_teams))
            .route("/players", get(get_players))
            .route("/transfers", get(get_transfers))
            .with_state(self.state.clone());
        let addr = SocketAddr::from(([127, 0, 0, 1], self.port));
        let handle = tokio::spawn(async move {
            axum::Server::bind(&addr)
                .serve(app.into_make_service())
                .await
                .expect("mock should serve");
        });
        self.handles.push(handle);
        tokio::time::sleep(Duration::from_millis(200)).await; // wait for mock to start
    }

    pub fn get_url(&self) -> String {
        format!("http://localhost:{}", self.port)
    }

    pub async fn add_league(&self, id: u32, name: &str) {
        self.state.write().await.leagues.push(LeagueEntry { league: LeagueInfo { id, name: name.to_string() } });
    }

    pub async fn add_team(&self, id: u32, name: &str) {
        self.state.write().await.teams.push(TeamEntry { team: TeamInfo { id, name: name.to_string() } });
    }

    pub async fn add_roster_player(&self, id: u32, name: &str, stats: PlayerStatsEntry) {
        let mut state = self.state.write().await;
        state.roster.push(RosterEntry { player: PlayerRef { id, name: name.to_string() } });
        state.player_stats.insert(id, stats);
    }

    pub async fn set_transfers(&self, player: u32, entry: TransferEntry) {
        self.state.write().await.transfers.insert(player, entry);
    }

    pub async fn set_fail_player_stats(&self, fail: bool) {
        self.state.write().await.fail_player_stats = fail;
    }

    pub async fn hits(&self, resource: &str) -> usize {
        self.state.read().await.hits.get(resource).copied().unwrap_or_default()
    }
}

async fn get_leagues(State(state): State<Arc<RwLock<AppState>>>) -> impl IntoResponse {
    let mut state = state.write().await;
    state.hit("leagues");
    Json(json!({ "response": state.leagues }))
}

async fn get_teams(State(state): State<Arc<RwLock<AppState>>>) -> impl IntoResponse {
    let mut state = state.write().await;
    state.hit("teams");
    Json(json!({ "response": state.teams }))
}

async fn get_players(
    State(state): State<Arc<RwLock<AppState>>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    state.hit("players");
    if let Some(id) = params.get("id") {
        if state.fail_player_stats {
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "mock failure" })));
        }
        let stats: Vec<&PlayerStatsEntry> = id.parse().ok()
            .and_then(|id: u32| state.player_stats.get(&id))
            .into_iter()
            .collect();
        (StatusCode::OK, Json(json!({ "response": stats })))
    } else {
        (StatusCode::OK, Json(json!({ "response": state.roster })))
    }
}

async fn get_transfers(
    State(state): State<Arc<RwLock<AppState>>>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    state.hit("transfers");
    let entries: Vec<&TransferEntry> = params.get("player")
        .and_then(|id| id.parse().ok())
        .and_then(|id: u32| state.transfers.get(&id))
        .into_iter()
        .collect();
    Json(json!({ "response": entries }))
}
