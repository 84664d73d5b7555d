//! Domain events and bot event kinds

mod bot_event;
mod domain_event;

pub use bot_event::BotEventType;
pub use domain_event::{
    ChannelCreatedEvent, DomainEvent, StampCreatedEvent, UserCreatedEvent, UserGroupCreatedEvent,
    UserGroupDeletedEvent,
};
