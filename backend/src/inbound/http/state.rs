//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the user use-cases.
    pub users_query: Arc<dyn UsersQuery>,
    /// Write side of the user use-cases.
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(users_query: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users_query,
            users_command,
        }
    }

    /// Construct state from one value serving both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use backend::domain::UserService;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::in_memory::InMemoryUserRepository;
    ///
    /// let service = Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new())));
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: UsersQuery + UsersCommand + 'static,
    {
        Self {
            users_query: service.clone(),
            users_command: service,
        }
    }
}
