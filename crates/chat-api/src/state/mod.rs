//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the configuration, and the bot event dispatcher.

use std::sync::Arc;

use chat_common::{AppConfig, JwtService};
use chat_service::{BotEventDispatcher, ServiceContext};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Background delivery of domain events to bots
    dispatcher: Arc<BotEventDispatcher>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        dispatcher: Arc<BotEventDispatcher>,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            dispatcher,
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the bot event dispatcher
    pub fn dispatcher(&self) -> &BotEventDispatcher {
        &self.dispatcher
    }

    /// Get the JWT service from the service context
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("app", &self.config.app.name)
            .field("dispatcher_running", &self.dispatcher.is_running())
            .finish()
    }
}
