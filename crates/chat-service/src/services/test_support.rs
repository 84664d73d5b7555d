//! Shared fixtures for service tests

use std::sync::Arc;

use chat_common::JwtService;
use chat_core::entities::User;
use chat_core::traits::UserRepository;
use chat_core::{DomainEvent, Rbac};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::events::EventBus;

use super::context::ServiceContext;

/// Context over a fresh in-memory store with the standard roles
pub fn context() -> ServiceContext {
    let pool = chat_db::create_pool();
    ServiceContext::builder()
        .in_memory(&pool)
        .rbac(Arc::new(Rbac::standard().unwrap()))
        .jwt_service(Arc::new(JwtService::new("test-secret", 900)))
        .events(EventBus::new(64))
        .build()
        .unwrap()
}

/// Insert an active user holding `role`
pub async fn user(ctx: &ServiceContext, role: &str) -> User {
    let id = Uuid::new_v4();
    let user = User::new(id, format!("u-{}", &id.simple().to_string()[..12]), role);
    ctx.user_repo().create(&user).await.unwrap();
    user
}

/// Drain the events published so far
pub fn drain(rx: &mut broadcast::Receiver<DomainEvent>) -> Vec<DomainEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
