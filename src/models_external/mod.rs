use serde::Deserialize;

pub mod league;
pub mod player;
pub mod team;
pub mod transfer;

/// API-Football wraps every resource in the same envelope.
/// An absent `response` array decodes to an empty list.
#[derive(Deserialize, Debug)]
pub struct ApiFootballRsp<T> {
    #[serde(default = "Vec::new")]
    pub response: Vec<T>,
}
