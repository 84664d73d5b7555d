//! # chat-db
//!
//! Storage layer implementing the repository traits of `chat-core` over an
//! in-memory store.
//!
//! ## Overview
//!
//! - [`pool::Database`] holds one insertion-ordered table per entity
//! - every repository shares the store through a cloned [`DbPool`]
//! - multi-row writes (a webhook and its bot user) happen under one set of
//!   locks, so readers never observe half of them
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_db::{create_pool, MemUserRepository};
//! use chat_core::traits::UserRepository;
//!
//! async fn example() -> Result<(), chat_core::DomainError> {
//!     let pool = create_pool();
//!     let user_repo = MemUserRepository::new(pool);
//!     let users = user_repo.list().await?;
//!     Ok(())
//! }
//! ```

pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, Database, DatabaseStats, DbPool, Table};
pub use repositories::{
    MemBotRepository, MemChannelRepository, MemMessageRepository, MemMessageStampRepository,
    MemPinRepository, MemStampRepository, MemStarRepository, MemUserGroupRepository,
    MemUserRepository, MemWebhookRepository,
};
