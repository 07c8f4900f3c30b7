use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LeagueEntry {
    pub league: LeagueInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LeagueInfo {
    pub id: u32,
    pub name: String,
}
