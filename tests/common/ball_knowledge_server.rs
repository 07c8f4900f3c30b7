use std::process::{Child, Command};
use std::time::Duration;

use assert_cmd::prelude::CommandCargoExt;
use ball_knowledge_rs::config_handler::Config;
use serde_json::Value;

pub struct BallKnowledgeServer {
    port: u16,
    child_process: Option<Child>,
}

impl Drop for BallKnowledgeServer {
    fn drop(&mut self) {
        if self.child_process.is_some() {
            self.child_process.as_mut().unwrap().kill()
                .expect("Should kill");
        }
    }
}

impl BallKnowledgeServer {
    pub fn new(port: u16) -> BallKnowledgeServer {
        BallKnowledgeServer { port, child_process: None }
    }

    pub fn start(&mut self, path: &str, external_url: &str) {
        let config = Config {
            port: self.port,
            football_api_url: external_url.to_string(),
            api_key: "API_KEY".to_string(),
            league: 39,
            season: 2023,
        };

        let config_str = serde_json::to_string(&config).unwrap();
        let config_path = format!("{path}/config.json");
        std::fs::write(config_path.clone(), config_str).unwrap();
        let child_process = Command::cargo_bin("ball-knowledge-rs")
            .unwrap()
            .env("CONFIG_PATH", config_path)
            .spawn()
            .expect("should start");

        self.child_process = Some(child_process);
    }

    /// Polls until the process answers HTTP at all (the JSON 404 fallback
    /// counts as alive).
    pub async fn wait_until_ready(&self) {
        for _ in 0..100 {
            if reqwest::get(format!("http://localhost:{}/__ready", self.port)).await.is_ok() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        panic!("server did not start on port {}", self.port);
    }

    pub async fn get_start(&self) -> Result<reqwest::Response, reqwest::Error> {
        reqwest::get(format!("http://localhost:{}/start", self.port)).await
    }

    pub async fn post_guess(&self, body: &Value) -> Result<reqwest::Response, reqwest::Error> {
        reqwest::Client::new()
            .post(format!("http://localhost:{}/guess", self.port))
            .json(body)
            .send()
            .await
    }

    pub async fn get(&self, path: &str) -> Result<reqwest::Response, reqwest::Error> {
        reqwest::get(format!("http://localhost:{}{}", self.port, path)).await
    }
}
