//! Repository traits (ports)

mod repositories;

pub use repositories::{
    BotRepository, ChannelRepository, CreateBotArgs, CreateWebhookArgs, MessageQuery,
    MessageRepository, MessageStampRepository, PinRepository, RepoResult, StampRepository,
    StarRepository, UpdateStampArgs, UserGroupRepository, UserRepository, WebhookRepository,
};
