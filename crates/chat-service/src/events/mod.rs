//! Domain event publication and bot event dispatch

pub mod bus;
pub mod dispatcher;
pub mod handlers;
pub mod multicaster;
pub mod payload;

pub use bus::{EventBus, DEFAULT_EVENT_BUFFER};
pub use dispatcher::BotEventDispatcher;
pub use handlers::{DispatchError, HandlerContext};
pub use multicaster::{BotMulticaster, TracingMulticaster};
