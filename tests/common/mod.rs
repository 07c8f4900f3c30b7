pub mod ball_knowledge_server;
pub mod football_api_server;
