//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chat_common::{AppConfig, AppError, JwtService};
use chat_core::rbac::roles;
use chat_core::Rbac;
use chat_service::services::UserService;
use chat_service::{
    BotEventDispatcher, BotMulticaster, EventBus, ServiceContext, TracingMulticaster,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes sit outside the rate limiter.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    api.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// Bot deliveries go to the structured log.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    create_app_state_with_multicaster(config, Arc::new(TracingMulticaster)).await
}

/// Initialize all dependencies with a custom bot delivery channel
///
/// Builds the access-control model, the in-memory store, the event bus and
/// its dispatcher, then creates the bootstrap administrator.
pub async fn create_app_state_with_multicaster(
    config: AppConfig,
    multicaster: Arc<dyn BotMulticaster>,
) -> Result<AppState, AppError> {
    let rbac = Rbac::standard()?;
    rbac.validate()?;
    info!(roles = rbac.roles().count(), "Access control model ready");

    let pool = chat_db::create_pool();
    let events = EventBus::new(config.bots.event_buffer);

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    let service_context = ServiceContext::builder()
        .in_memory(&pool)
        .rbac(Arc::new(rbac))
        .jwt_service(jwt_service)
        .events(events.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let dispatcher = Arc::new(BotEventDispatcher::new(
        &events,
        service_context.bot_repo_handle(),
        multicaster,
    ));
    Arc::clone(&dispatcher).start();

    bootstrap_admin(&service_context, &config).await?;

    Ok(AppState::new(service_context, config, dispatcher))
}

/// Create the administrator named by the bootstrap configuration
async fn bootstrap_admin(ctx: &ServiceContext, config: &AppConfig) -> Result<(), AppError> {
    let users = UserService::new(ctx);
    let admin = users
        .create_user(&config.bootstrap.admin_name, roles::ADMIN)
        .await?;
    info!(user_id = %admin.id, name = %admin.name, "Bootstrap administrator created");

    if config.app.env.is_development() {
        let token = users.issue_token(admin.id)?;
        info!(token = %token, "Bootstrap administrator access token");
    }
    Ok(())
}

/// Serve the application until `shutdown` resolves, then stop the bot
/// dispatcher
pub async fn run_server<F>(state: AppState, addr: SocketAddr, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", listener.local_addr().unwrap_or(addr));

    let app = create_app(state.clone());
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await;

    state.dispatcher().stop();
    info!("Server stopped");

    served.map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the complete server with configuration until Ctrl-C
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;

    run_server(state, addr, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received");
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_app_state_bootstraps_admin() {
        let config = AppConfig::with_defaults(0, "test-secret");
        let state = create_app_state(config).await.unwrap();

        let admin = state
            .service_context()
            .user_repo()
            .find_by_name("admin")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(admin.role, roles::ADMIN);
        assert!(state.dispatcher().is_running());
    }

    #[tokio::test]
    async fn test_run_server_stops_dispatcher_on_shutdown() {
        let config = AppConfig::with_defaults(0, "test-secret");
        let state = create_app_state(config).await.unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let server = tokio::spawn(run_server(
            state.clone(),
            SocketAddr::from(([127, 0, 0, 1], 0)),
            async {
                let _ = rx.await;
            },
        ));

        tx.send(()).unwrap();
        server.await.unwrap().unwrap();
        assert!(!state.dispatcher().is_running());
    }
}
