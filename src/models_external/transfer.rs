use serde::{Deserialize, Serialize};

/// One entry of `transfers?player=`. A player without any recorded
/// transfers comes back without the array.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TransferEntry {
    #[serde(default)]
    pub transfers: Vec<Transfer>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Transfer {
    pub date: String,
    pub teams: TransferTeams,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TransferTeams {
    pub out: ClubRef,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClubRef {
    pub name: Option<String>,
}
