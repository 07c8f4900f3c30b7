use ball_knowledge_rs::api::Api;
use ball_knowledge_rs::rest_client::FootballApi;
use ball_knowledge_rs::CONFIG;

#[tokio::main]
async fn main() {
    if std::env::var_os("RUST_LOG").is_none() {
        // Set the RUST_LOG, if it hasn't been explicitly defined
        std::env::set_var("RUST_LOG", "debug,hyper=debug")
    }

    // Configure a custom event formatter
    let format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_target(false)
        .with_ansi(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .compact();
    tracing_subscriber::fmt()
        .event_format(format)
        .with_max_level(tracing::Level::INFO)
        .init();

    let football_api = FootballApi::new(&CONFIG);
    Api::serve(CONFIG.port, football_api, CONFIG.league, CONFIG.season).await;
}
