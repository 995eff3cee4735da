//! Builder for the HTTP handler state.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use backend::domain::UserService;
use backend::inbound::http::state::HttpState;
use backend::outbound::in_memory::InMemoryUserRepository;
use backend::outbound::persistence::DieselUserRepository;

use super::ServerConfig;

/// Wire the user service to PostgreSQL when a pool is configured, otherwise
/// to a fresh in-memory store.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!(store = "postgres", "user repository selected");
            let repo = Arc::new(DieselUserRepository::new(pool.clone()));
            HttpState::from_service(Arc::new(UserService::new(repo)))
        }
        None => {
            info!(store = "memory", "user repository selected");
            let repo = Arc::new(InMemoryUserRepository::new());
            HttpState::from_service(Arc::new(UserService::new(repo)))
        }
    };
    web::Data::new(state)
}
