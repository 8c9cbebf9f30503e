//! Data models for the storage layer

use crate::cli::types::{ChannelId, PlayerId, ServerId, Timestamp};
use serde::{Deserialize, Serialize};

/// Anything that can name a player record: a bare key, a stored record, or
/// a caller-side adapter over a chat message or interaction.
pub trait PlayerIdentity {
    fn server_id(&self) -> ServerId;
    fn channel_id(&self) -> ChannelId;
    fn player_id(&self) -> PlayerId;
}

/// Composite key identifying one player record: the (server, channel,
/// player) triple. A player rolling in two channels has two records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerKey {
    pub server: ServerId,
    pub channel: ChannelId,
    pub player: PlayerId,
}

impl PlayerKey {
    pub fn new(server: ServerId, channel: ChannelId, player: PlayerId) -> Self {
        Self {
            server,
            channel,
            player,
        }
    }
}

impl PlayerIdentity for PlayerKey {
    fn server_id(&self) -> ServerId {
        self.server
    }

    fn channel_id(&self) -> ChannelId {
        self.channel
    }

    fn player_id(&self) -> PlayerId {
        self.player
    }
}

/// One row of the `players` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub server: ServerId,
    pub channel: ChannelId,
    pub player: PlayerId,
    pub flavour: Option<String>,
    pub last_roll: Option<Timestamp>,
}

impl PlayerIdentity for PlayerRecord {
    fn server_id(&self) -> ServerId {
        self.server
    }

    fn channel_id(&self) -> ChannelId {
        self.channel
    }

    fn player_id(&self) -> PlayerId {
        self.player
    }
}
