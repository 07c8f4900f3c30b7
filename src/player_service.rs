use std::fmt::Display;

use rand::seq::SliceRandom;

use crate::models_api::ApiPlayerDetails;
use crate::models_external::player::PlayerStatsEntry;
use crate::rest_client::FootballApi;
use crate::transfer_service::TransferService;

#[derive(Debug)]
pub enum FetchError {
    NoLeagues,
    NoTeams,
    NoPlayers,
    NoCompletePlayer,
    Rest(reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> FetchError {
        FetchError::Rest(e)
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NoLeagues => write!(f, "No leagues found"),
            FetchError::NoTeams => write!(f, "No teams found for selected league"),
            FetchError::NoPlayers => write!(f, "No players found for selected team"),
            FetchError::NoCompletePlayer => write!(f, "No complete player found for selected team"),
            FetchError::Rest(e) => write!(f, "{e}"),
        }
    }
}

impl ApiPlayerDetails {
    /// The completeness check: every bio field, the team name and the first
    /// statistics entry's position must be present and non-empty.
    fn from_stats(stats: PlayerStatsEntry, team_name: &str, previous_clubs: Vec<String>) -> Option<ApiPlayerDetails> {
        let position = stats.statistics.first()?.games.position.clone().filter(|p| !p.is_empty())?;
        let bio = stats.player;
        let name = bio.name.filter(|s| !s.is_empty())?;
        let age = bio.age.filter(|a| *a > 0)?;
        let nationality = bio.nationality.filter(|s| !s.is_empty())?;
        let height = bio.height.filter(|s| !s.is_empty())?;
        let weight = bio.weight.filter(|s| !s.is_empty())?;
        if team_name.is_empty() {
            return None;
        }
        Some(ApiPlayerDetails {
            name,
            age,
            nationality,
            team: team_name.to_string(),
            height,
            weight,
            position,
            previousClubs: previous_clubs.join(", "),
        })
    }
}

pub struct PlayerService;

impl PlayerService {
    /// Assembles one complete mystery player: existence-check the leagues,
    /// pick a random team in the configured league/season, then walk a
    /// shuffled roster until a candidate passes the completeness check.
    pub async fn pick_mystery_player(api: &FootballApi, league: u32, season: u32) -> Result<ApiPlayerDetails, FetchError> {
        let leagues = api.get_leagues().await?;
        if leagues.is_empty() {
            return Err(FetchError::NoLeagues);
        }

        let teams = api.get_teams(league, season).await?;
        let team = {
            let mut rng = rand::thread_rng();
            match teams.choose(&mut rng) {
                Some(entry) => entry.team.clone(),
                None => return Err(FetchError::NoTeams),
            }
        };

        let mut roster = api.get_roster(team.id, season).await?;
        if roster.is_empty() {
            return Err(FetchError::NoPlayers);
        }
        // Sample without replacement so a stats-sparse roster terminates
        // instead of re-drawing the same incomplete players forever.
        roster.shuffle(&mut rand::thread_rng());

        for candidate in roster {
            let (stats_rsp, previous_clubs) = tokio::join!(
                api.get_player_stats(candidate.player.id, season),
                TransferService::previous_clubs(api, candidate.player.id),
            );
            let Some(stats) = stats_rsp?.into_iter().next() else { continue };
            if let Some(details) = ApiPlayerDetails::from_stats(stats, &team.name, previous_clubs) {
                return Ok(details);
            }
        }
        Err(FetchError::NoCompletePlayer)
    }
}
