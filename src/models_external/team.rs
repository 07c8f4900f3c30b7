use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamEntry {
    pub team: TeamInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TeamInfo {
    pub id: u32,
    pub name: String,
}
