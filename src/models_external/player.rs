use serde::{Deserialize, Serialize};

/// Minimal shape of one roster entry from `players?team=&season=`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RosterEntry {
    pub player: PlayerRef,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayerRef {
    pub id: u32,
    pub name: String,
}

/// Detailed shape from `players?id=&season=`. Every bio field can be
/// missing upstream, the completeness check happens in player_service.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayerStatsEntry {
    pub player: PlayerBio,
    #[serde(default)]
    pub statistics: Vec<StatsEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PlayerBio {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatsEntry {
    pub games: GameStats,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct GameStats {
    pub position: Option<String>,
}
