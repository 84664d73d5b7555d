//! Standard roles
//!
//! Role sets are flat. Richer roles are built by explicit union of the
//! narrower ones when [`Rbac::standard`] runs.

use crate::error::RbacError;
use crate::value_objects::Permissions;

use super::access::Rbac;

/// Read-only user
pub const READ: &str = "read";
/// Regular user without bot management
pub const WRITE: &str = "write";
/// Bot user
pub const BOT: &str = "bot";
/// Webhook and bot management
pub const MANAGE_BOT: &str = "manage_bot";
/// Regular user
pub const USER: &str = "user";
/// Administrator
pub const ADMIN: &str = "admin";

/// Permissions of the `read` role
pub const READ_PERMISSIONS: Permissions = Permissions::from_bits_retain(
    Permissions::GET_CHANNEL.bits()
        | Permissions::GET_MESSAGE.bits()
        | Permissions::GET_CHANNEL_SUBSCRIPTION.bits()
        | Permissions::CONNECT_NOTIFICATION_STREAM.bits()
        | Permissions::GET_USER.bits()
        | Permissions::GET_ME.bits()
        | Permissions::GET_CHANNEL_STAR.bits()
        | Permissions::GET_UNREAD.bits()
        | Permissions::GET_USER_TAG.bits()
        | Permissions::GET_USER_GROUP.bits()
        | Permissions::GET_STAMP.bits()
        | Permissions::GET_MY_STAMP_HISTORY.bits()
        | Permissions::DOWNLOAD_FILE.bits()
        | Permissions::GET_HEARTBEAT.bits()
        | Permissions::GET_WEBHOOK.bits()
        | Permissions::GET_BOT.bits()
        | Permissions::GET_CLIP_FOLDER.bits()
        | Permissions::GET_STAMP_PALETTE.bits(),
);

/// Permissions `write` adds on top of `read`
pub const WRITE_EXTRA: Permissions = Permissions::from_bits_retain(
    Permissions::CREATE_CHANNEL.bits()
        | Permissions::EDIT_CHANNEL.bits()
        | Permissions::POST_MESSAGE.bits()
        | Permissions::EDIT_MESSAGE.bits()
        | Permissions::DELETE_MESSAGE.bits()
        | Permissions::EDIT_CHANNEL_SUBSCRIPTION.bits()
        | Permissions::EDIT_ME.bits()
        | Permissions::EDIT_CHANNEL_STAR.bits()
        | Permissions::DELETE_UNREAD.bits()
        | Permissions::EDIT_USER_TAG.bits()
        | Permissions::CREATE_USER_GROUP.bits()
        | Permissions::EDIT_USER_GROUP.bits()
        | Permissions::DELETE_USER_GROUP.bits()
        | Permissions::CREATE_STAMP.bits()
        | Permissions::EDIT_STAMP.bits()
        | Permissions::GET_MESSAGE_STAMP.bits()
        | Permissions::ADD_MESSAGE_STAMP.bits()
        | Permissions::REMOVE_MESSAGE_STAMP.bits()
        | Permissions::CREATE_STAMP_PALETTE.bits()
        | Permissions::EDIT_STAMP_PALETTE.bits()
        | Permissions::DELETE_STAMP_PALETTE.bits()
        | Permissions::UPLOAD_FILE.bits()
        | Permissions::CREATE_MESSAGE_PIN.bits()
        | Permissions::DELETE_MESSAGE_PIN.bits()
        | Permissions::POST_HEARTBEAT.bits()
        | Permissions::CREATE_CLIP_FOLDER.bits()
        | Permissions::EDIT_CLIP_FOLDER.bits()
        | Permissions::DELETE_CLIP_FOLDER.bits(),
);

/// Permissions `bot` adds on top of `read`
pub const BOT_EXTRA: Permissions = Permissions::from_bits_retain(
    Permissions::POST_MESSAGE.bits()
        | Permissions::EDIT_MESSAGE.bits()
        | Permissions::DELETE_MESSAGE.bits()
        | Permissions::GET_MESSAGE_STAMP.bits()
        | Permissions::ADD_MESSAGE_STAMP.bits()
        | Permissions::REMOVE_MESSAGE_STAMP.bits()
        | Permissions::EDIT_ME.bits()
        | Permissions::UPLOAD_FILE.bits()
        | Permissions::CREATE_MESSAGE_PIN.bits()
        | Permissions::DELETE_MESSAGE_PIN.bits()
        | Permissions::BOT_ACTION_JOIN_CHANNEL.bits()
        | Permissions::BOT_ACTION_LEAVE_CHANNEL.bits(),
);

/// Permissions of the `manage_bot` role
pub const MANAGE_BOT_PERMISSIONS: Permissions = Permissions::from_bits_retain(
    Permissions::GET_WEBHOOK.bits()
        | Permissions::CREATE_WEBHOOK.bits()
        | Permissions::EDIT_WEBHOOK.bits()
        | Permissions::DELETE_WEBHOOK.bits()
        | Permissions::GET_BOT.bits()
        | Permissions::CREATE_BOT.bits()
        | Permissions::EDIT_BOT.bits()
        | Permissions::DELETE_BOT.bits(),
);

impl Rbac {
    /// Build the standard model: the full catalog plus the six built-in roles
    pub fn standard() -> Result<Self, RbacError> {
        Self::builder()
            .with_catalog()?
            .role(READ, READ_PERMISSIONS)?
            .role_union(WRITE, &[READ], WRITE_EXTRA)?
            .role_union(BOT, &[READ], BOT_EXTRA)?
            .role(MANAGE_BOT, MANAGE_BOT_PERMISSIONS)?
            .role_union(USER, &[WRITE, MANAGE_BOT], Permissions::empty())?
            .role_with_all(ADMIN)?
            .build()
    }
}
