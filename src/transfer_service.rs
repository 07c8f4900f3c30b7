use chrono::{Datelike, NaiveDate, Utc};

use crate::models_external::transfer::TransferEntry;
use crate::rest_client::FootballApi;
use crate::LogResult;

// The shipped window spans 20 years even though the feature is pitched as
// "previous ten years". Kept as-is pending a product decision.
const TRANSFER_LOOKBACK_YEARS: i32 = 20;

pub struct TransferService;

impl TransferService {
    /// Clubs the player departed from within the lookback window,
    /// deduplicated. Never fails outward: upstream trouble is logged and
    /// reported as an empty history.
    pub async fn previous_clubs(api: &FootballApi, player: u32) -> Vec<String> {
        let entries = api.get_transfers(player).await
            .ok_log(&format!("[TRANSFER] fetch failed for player {player}"))
            .unwrap_or_default();
        clubs_within(entries, Utc::now().year())
    }
}

fn clubs_within(entries: Vec<TransferEntry>, current_year: i32) -> Vec<String> {
    let from_year = current_year - TRANSFER_LOOKBACK_YEARS;
    let mut clubs: Vec<String> = vec![];
    for transfer in entries.into_iter().flat_map(|e| e.transfers) {
        let year = match NaiveDate::parse_from_str(&transfer.date, "%Y-%m-%d") {
            Ok(date) => date.year(),
            Err(_) => continue,
        };
        if year < from_year || year > current_year {
            continue;
        }
        if let Some(name) = transfer.teams.out.name {
            if !clubs.contains(&name) {
                clubs.push(name);
            }
        }
    }
    clubs
}
