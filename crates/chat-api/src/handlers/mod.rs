//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod bots;
pub mod channels;
pub mod groups;
pub mod health;
pub mod message_stamps;
pub mod messages;
pub mod pins;
pub mod stamps;
pub mod stars;
pub mod users;
pub mod webhooks;
