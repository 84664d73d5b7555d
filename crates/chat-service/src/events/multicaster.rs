//! Delivery of bot event payloads

use async_trait::async_trait;
use chat_core::entities::Bot;
use chat_core::events::BotEventType;

/// Sends one payload to many bots
#[async_trait]
pub trait BotMulticaster: Send + Sync {
    /// Deliver `payload` to every bot in `bots`
    ///
    /// A failure for the batch is reported as a single error.
    async fn multicast(
        &self,
        event: BotEventType,
        payload: serde_json::Value,
        bots: &[Bot],
    ) -> anyhow::Result<()>;
}

/// Records each delivery in the structured log
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMulticaster;

#[async_trait]
impl BotMulticaster for TracingMulticaster {
    async fn multicast(
        &self,
        event: BotEventType,
        payload: serde_json::Value,
        bots: &[Bot],
    ) -> anyhow::Result<()> {
        let body = serde_json::to_string(&payload)?;
        for bot in bots {
            tracing::info!(
                event = %event,
                bot_id = %bot.id,
                bot_user_id = %bot.bot_user_id,
                payload_bytes = body.len(),
                "Bot event delivered"
            );
        }
        tracing::debug!(event = %event, payload = %body, "Bot event payload");
        Ok(())
    }
}
