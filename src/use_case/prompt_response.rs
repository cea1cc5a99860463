use crate::context::{BotContext, ConfigContext, ListenerContext, MessageContext};
use crate::error::Result;
use crate::model::{
    choice::{ChoiceSet, Preset},
    outcome::PromptOutcome,
    reaction::PromptMessage,
};
use crate::session::PromptSession;

use serenity::model::id::UserId;
use tokio::time;

#[async_trait::async_trait]
pub trait PromptResponse:
    BotContext + MessageContext + ListenerContext + ConfigContext + Clone + Send + Sync + 'static
{
    /// Offers the choices on `message` and waits until `user_id` picks one.
    ///
    /// Exactly one of `preset` and `reacts` must be given. Fails if a choice cannot be
    /// attached; in that case nothing is left listening.
    async fn prompt_response(
        &self,
        user_id: UserId,
        message: PromptMessage,
        preset: Option<Preset>,
        reacts: Option<ChoiceSet>,
    ) -> Result<PromptOutcome> {
        let choices = ChoiceSet::select(preset, reacts)?;

        let (session, mut pending) = PromptSession::new(self.clone(), user_id, message, choices);
        session.setup().await?;

        let timeout = match self.prompt_timeout() {
            None => return Ok(PromptOutcome::Chosen(pending.await?)),
            Some(timeout) => timeout,
        };

        match time::timeout(timeout, &mut pending).await {
            Ok(value) => Ok(PromptOutcome::Chosen(value?)),
            Err(_) => {
                if session.expire().await {
                    Ok(PromptOutcome::TimedOut)
                } else {
                    // answered while the timer fired
                    Ok(PromptOutcome::Chosen(pending.await?))
                }
            }
        }
    }
}

impl<
        T: BotContext
            + MessageContext
            + ListenerContext
            + ConfigContext
            + Clone
            + Send
            + Sync
            + 'static,
    > PromptResponse for T
{
}
