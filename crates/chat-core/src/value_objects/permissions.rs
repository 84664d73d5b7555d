//! Permission catalog for the chat API
//!
//! Every capability the HTTP API checks is one bit of a 64-bit flag set.
//! Registry names are the lowercase form of the flag names (`GET_STAMP` is
//! registered as `get_stamp`).

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Permission flags
    ///
    /// Only single-bit flags live here. Role sets are assembled in
    /// [`crate::rbac::roles`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u64 {
        // Channels
        const GET_CHANNEL                  = 1 << 0;
        const CREATE_CHANNEL               = 1 << 1;
        const EDIT_CHANNEL                 = 1 << 2;
        const DELETE_CHANNEL               = 1 << 3;

        // Messages
        const GET_MESSAGE                  = 1 << 4;
        const POST_MESSAGE                 = 1 << 5;
        const EDIT_MESSAGE                 = 1 << 6;
        const DELETE_MESSAGE               = 1 << 7;

        // Subscriptions and notifications
        const GET_CHANNEL_SUBSCRIPTION     = 1 << 8;
        const EDIT_CHANNEL_SUBSCRIPTION    = 1 << 9;
        const CONNECT_NOTIFICATION_STREAM  = 1 << 10;

        // Users
        const GET_USER                     = 1 << 11;
        const GET_ME                       = 1 << 12;
        const EDIT_ME                      = 1 << 13;
        const EDIT_OTHER_USERS             = 1 << 14;

        // Channel stars
        const GET_CHANNEL_STAR             = 1 << 15;
        const EDIT_CHANNEL_STAR            = 1 << 16;

        // Unread markers
        const GET_UNREAD                   = 1 << 17;
        const DELETE_UNREAD                = 1 << 18;

        // User tags
        const GET_USER_TAG                 = 1 << 19;
        const EDIT_USER_TAG                = 1 << 20;

        // User groups
        const GET_USER_GROUP               = 1 << 21;
        const CREATE_USER_GROUP            = 1 << 22;
        const EDIT_USER_GROUP              = 1 << 23;
        const DELETE_USER_GROUP            = 1 << 24;

        // Stamps
        const GET_STAMP                    = 1 << 25;
        const CREATE_STAMP                 = 1 << 26;
        const EDIT_STAMP                   = 1 << 27;
        const EDIT_STAMP_CREATED_BY_OTHERS = 1 << 28;
        const DELETE_STAMP                 = 1 << 29;
        const GET_MESSAGE_STAMP            = 1 << 30;
        const ADD_MESSAGE_STAMP            = 1 << 31;
        const REMOVE_MESSAGE_STAMP         = 1 << 32;
        const GET_MY_STAMP_HISTORY         = 1 << 33;

        // Stamp palettes
        const GET_STAMP_PALETTE            = 1 << 34;
        const CREATE_STAMP_PALETTE         = 1 << 35;
        const EDIT_STAMP_PALETTE           = 1 << 36;
        const DELETE_STAMP_PALETTE         = 1 << 37;

        // Files
        const UPLOAD_FILE                  = 1 << 38;
        const DOWNLOAD_FILE                = 1 << 39;

        // Pins
        const CREATE_MESSAGE_PIN           = 1 << 40;
        const DELETE_MESSAGE_PIN           = 1 << 41;

        // Heartbeat
        const GET_HEARTBEAT                = 1 << 42;
        const POST_HEARTBEAT               = 1 << 43;

        // Webhooks
        const GET_WEBHOOK                  = 1 << 44;
        const CREATE_WEBHOOK               = 1 << 45;
        const EDIT_WEBHOOK                 = 1 << 46;
        const DELETE_WEBHOOK               = 1 << 47;
        const ACCESS_OTHERS_WEBHOOK        = 1 << 48;

        // Bots
        const GET_BOT                      = 1 << 49;
        const CREATE_BOT                   = 1 << 50;
        const EDIT_BOT                     = 1 << 51;
        const DELETE_BOT                   = 1 << 52;
        const ACCESS_OTHERS_BOT            = 1 << 53;
        const BOT_ACTION_JOIN_CHANNEL      = 1 << 54;
        const BOT_ACTION_LEAVE_CHANNEL     = 1 << 55;

        // Clip folders
        const GET_CLIP_FOLDER              = 1 << 56;
        const CREATE_CLIP_FOLDER           = 1 << 57;
        const EDIT_CLIP_FOLDER             = 1 << 58;
        const DELETE_CLIP_FOLDER           = 1 << 59;
    }
}

impl Permissions {
    /// Check if the set contains every bit of `permission`
    ///
    /// An empty `permission` is never granted.
    #[inline]
    pub fn has(&self, permission: Permissions) -> bool {
        !permission.is_empty() && self.contains(permission)
    }

    /// Union of several permission sets
    pub fn combine<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = Permissions>,
    {
        sets.into_iter().fold(Permissions::empty(), |acc, p| acc | p)
    }

    /// Check if this permission set is a subset of another
    #[inline]
    pub fn is_subset_of(&self, other: Permissions) -> bool {
        (*self & other) == *self
    }

    /// Whether this value is exactly one catalog flag
    #[inline]
    pub fn is_single(&self) -> bool {
        self.bits().count_ones() == 1 && Permissions::all().contains(*self)
    }

    /// Catalog names of the flags in this set, lowercase
    pub fn names(&self) -> Vec<String> {
        self.iter_names()
            .map(|(name, _)| name.to_ascii_lowercase())
            .collect()
    }

    /// Look up a single catalog flag by its lowercase name
    pub fn from_catalog_name(name: &str) -> Option<Self> {
        if name.is_empty() || name.bytes().any(|b| b.is_ascii_uppercase()) {
            return None;
        }
        Permissions::from_name(&name.to_ascii_uppercase())
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Permissions::empty()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(","))
    }
}

// Serialized as a list of catalog names
impl Serialize for Permissions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.names().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        let names = Vec::<String>::deserialize(deserializer)?;
        names.iter().try_fold(Permissions::empty(), |acc, name| {
            Permissions::from_catalog_name(name)
                .map(|flag| acc | flag)
                .ok_or_else(|| D::Error::custom(format!("unknown permission: {name}")))
        })
    }
}
