pub mod auth;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod flows;
pub mod llm_client;
pub mod navigation;
pub mod routes;
pub mod state;
