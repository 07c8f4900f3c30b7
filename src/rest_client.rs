use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::log;

use crate::config_handler::Config;
use crate::models_external::league::LeagueEntry;
use crate::models_external::player::{PlayerStatsEntry, RosterEntry};
use crate::models_external::team::TeamEntry;
use crate::models_external::transfer::TransferEntry;
use crate::models_external::ApiFootballRsp;

/// Typed accessor for the API-Football resources. One outbound request per
/// call, no retries, failures propagate to the caller.
#[derive(Clone)]
pub struct FootballApi {
    client: reqwest::Client,
    base_url: String,
}

impl FootballApi {
    pub fn new(config: &Config) -> FootballApi {
        let mut headers = HeaderMap::new();
        if let Ok(key) = HeaderValue::from_str(&config.api_key) {
            headers.insert("X-RapidAPI-Key", key);
        }
        if let Some(host) = reqwest::Url::parse(&config.football_api_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
        {
            if let Ok(host) = HeaderValue::from_str(&host) {
                headers.insert("X-RapidAPI-Host", host);
            }
        }
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Client build");
        FootballApi {
            client,
            base_url: config.football_api_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_leagues(&self) -> Result<Vec<LeagueEntry>, reqwest::Error> {
        let url = format!("{}/leagues", self.base_url);
        self.get_list(&url).await
    }

    pub async fn get_teams(&self, league: u32, season: u32) -> Result<Vec<TeamEntry>, reqwest::Error> {
        let url = format!("{}/teams?league={league}&season={season}", self.base_url);
        self.get_list(&url).await
    }

    pub async fn get_roster(&self, team: u32, season: u32) -> Result<Vec<RosterEntry>, reqwest::Error> {
        let url = format!("{}/players?team={team}&season={season}", self.base_url);
        self.get_list(&url).await
    }

    pub async fn get_player_stats(&self, player: u32, season: u32) -> Result<Vec<PlayerStatsEntry>, reqwest::Error> {
        let url = format!("{}/players?id={player}&season={season}", self.base_url);
        self.get_list(&url).await
    }

    pub async fn get_transfers(&self, player: u32) -> Result<Vec<TransferEntry>, reqwest::Error> {
        let url = format!("{}/transfers?player={player}", self.base_url);
        self.get_list(&url).await
    }

    async fn get_list<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, reqwest::Error> {
        let before = Instant::now();
        let rsp = self.client.get(url).send().await?.error_for_status()?;
        let parsed: ApiFootballRsp<T> = rsp.json().await?;
        log::info!("[REST] Call {url} {:.2?}", before.elapsed());
        Ok(parsed.response)
    }
}
