//! Product catalogue REST API with JWT authentication.
//!
//! Users sign up and trade their credentials for a signed access token;
//! products can only be read or changed with that token. The server drains
//! in-flight requests on SIGINT/SIGTERM before exiting.

pub mod auth;
pub mod config;
pub mod db;
pub mod lifecycle;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod types;
pub mod utils;

pub use config::EnvConfig;
pub use lifecycle::{Lifecycle, ServerState};
pub use state::AppState;
