//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{
    bots, channels, groups, health, message_stamps, messages, pins, stamps, stars, users,
    webhooks,
};
use crate::state::AppState;

/// Create the main API router (health probes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes, kept outside the rate limiter
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(channel_routes())
        .merge(message_routes())
        .merge(webhook_routes())
        .merge(stamp_routes())
        .merge(group_routes())
        .merge(bot_routes())
}

/// User routes, including the caller's stars
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me/permissions", get(users::get_my_permissions))
        .route(
            "/users/@me/stars",
            get(stars::list_stars).post(stars::add_star),
        )
        .route(
            "/users/@me/stars/:channel_id",
            delete(stars::remove_star),
        )
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/permissions", get(users::get_user_permissions))
}

/// Channel routes
fn channel_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/channels",
            get(channels::list_channels).post(channels::create_channel),
        )
        .route("/channels/:channel_id", get(channels::get_channel))
        .route(
            "/channels/:channel_id/messages",
            get(messages::get_messages).post(messages::post_message),
        )
        .route(
            "/channels/:channel_id/pins",
            get(pins::list_pins).post(pins::create_pin),
        )
}

/// Message, message stamp and pin routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages/:message_id", get(messages::get_message))
        .route(
            "/messages/:message_id/stamps",
            get(message_stamps::list_message_stamps),
        )
        .route(
            "/messages/:message_id/stamps/:stamp_id",
            post(message_stamps::add_message_stamp).delete(message_stamps::remove_message_stamp),
        )
        .route("/pins/:pin_id", get(pins::get_pin).delete(pins::delete_pin))
}

/// Webhook routes
fn webhook_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/webhooks",
            get(webhooks::list_webhooks).post(webhooks::create_webhook),
        )
        .route(
            "/webhooks/:webhook_id",
            get(webhooks::get_webhook)
                .patch(webhooks::update_webhook)
                .delete(webhooks::delete_webhook),
        )
}

/// Stamp routes
fn stamp_routes() -> Router<AppState> {
    Router::new()
        .route("/stamps", get(stamps::list_stamps).post(stamps::create_stamp))
        .route(
            "/stamps/:stamp_id",
            get(stamps::get_stamp)
                .patch(stamps::update_stamp)
                .delete(stamps::delete_stamp),
        )
}

/// User group routes
fn group_routes() -> Router<AppState> {
    Router::new()
        .route("/groups", get(groups::list_groups).post(groups::create_group))
        .route(
            "/groups/:group_id",
            get(groups::get_group).delete(groups::delete_group),
        )
}

/// Bot routes
fn bot_routes() -> Router<AppState> {
    Router::new().route("/bots", get(bots::list_bots).post(bots::create_bot))
}
