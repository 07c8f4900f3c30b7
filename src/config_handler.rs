use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub port: u16,

    pub football_api_url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_league")]
    pub league: u32,

    #[serde(default = "default_season")]
    pub season: u32,
}

fn default_league() -> u32 {
    39
}

fn default_season() -> u32 {
    2023
}

pub fn get_config() -> Config {
    let path = std::env::var("CONFIG_PATH").ok()
        .unwrap_or_else(|| "./deployment/config.json".to_string());
    let data = fs::read_to_string(path.clone())
        .expect("Unable to read file");
    let mut result: Config = serde_json::from_str(&data)
        .unwrap_or_else(|_| panic!("{}", &format!("Could not parse JSON at {path}!")));
    if let Ok(api_key) = std::env::var("RAPIDAPI_KEY") {
        result.api_key = api_key;
    }
    println!("[CONFIG] port {} league {} season {}", result.port, result.league, result.season);
    result
}
