use serde::{Deserialize, Serialize};

/// The mystery player record returned by `GET /start`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiPlayerDetails {
    pub name: String,
    pub age: i32,
    pub nationality: String,
    pub team: String,
    pub height: String,
    pub weight: String,
    pub position: String,
    pub previousClubs: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiGuessResult {
    pub correct: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(msg: impl Into<String>) -> ApiError {
        ApiError { error: msg.into() }
    }
}
