use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::listener::{ListenerId, ListenerRegistry, ReactionListener};
use crate::model::command::Command;
use crate::model::reaction::PromptMessage;
use crate::use_case::{Ask, Help};

use anyhow::{anyhow, Context as _};
use serenity::{
    cache::Cache,
    http::Http,
    model::{
        channel::{Message, ReactionType},
        id::{ChannelId, UserId},
    },
};
use tracing::{debug, info};

mod bot;
mod channel;
mod config;
mod listener;
mod message;

pub use bot::BotContext;
pub use channel::ChannelContext;
pub use config::ConfigContext;
pub use listener::ListenerContext;
pub use message::MessageContext;

#[derive(Clone)]
pub struct Context {
    http: Arc<Http>,
    registry: ListenerRegistry,
    bot_id: UserId,
    author_id: UserId,
    channel_id: ChannelId,
    prefix: Arc<str>,
    prompt_timeout: Option<Duration>,
}

fn reaction_type(symbol: &str) -> Result<ReactionType> {
    let reaction =
        ReactionType::try_from(symbol).map_err(|_| anyhow!("invalid reaction {}", symbol))?;
    Ok(reaction)
}

/// Strips `prefix` only when it is a whole word at the start of `content`.
fn strip_command_prefix<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = content.strip_prefix(prefix)?;
    match rest.chars().next() {
        None => Some(rest),
        Some(c) if c.is_whitespace() => Some(rest.trim()),
        Some(_) => None,
    }
}

impl BotContext for Context {
    fn bot_id(&self) -> UserId {
        self.bot_id
    }
}

#[async_trait::async_trait]
impl ChannelContext for Context {
    fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    async fn message(&self, message: crate::model::message::Message) -> Result<PromptMessage> {
        debug!("send message: {}", message);
        let sent = self
            .channel_id
            .say(&self.http, message.to_string())
            .await
            .context("cannot create a message")?;
        Ok(PromptMessage::from(&sent))
    }
}

#[async_trait::async_trait]
impl MessageContext for Context {
    fn author_id(&self) -> UserId {
        self.author_id
    }

    async fn add_reaction(&self, message: PromptMessage, symbol: &str) -> Result<()> {
        message
            .channel_id
            .create_reaction(&self.http, message.message_id, reaction_type(symbol)?)
            .await
            .context("cannot create reaction")?;
        Ok(())
    }

    async fn remove_reaction(
        &self,
        message: PromptMessage,
        symbol: &str,
        user_id: UserId,
    ) -> Result<()> {
        message
            .channel_id
            .delete_reaction(
                &self.http,
                message.message_id,
                Some(user_id),
                reaction_type(symbol)?,
            )
            .await
            .context("cannot delete reaction")?;
        Ok(())
    }

    async fn delete_message(&self, message: PromptMessage) -> Result<()> {
        message
            .channel_id
            .delete_message(&self.http, message.message_id)
            .await
            .context("cannot delete message")?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ListenerContext for Context {
    async fn register_listener(&self, listener: Arc<dyn ReactionListener>) -> ListenerId {
        self.registry.register(listener).await
    }

    async fn unregister_listener(&self, id: ListenerId) -> bool {
        self.registry.unregister(id).await
    }
}

impl ConfigContext for Context {
    fn prompt_timeout(&self) -> Option<Duration> {
        self.prompt_timeout
    }
}

impl Context {
    pub fn new(
        http: Arc<Http>,
        cache: &Cache,
        registry: ListenerRegistry,
        prefix: Arc<str>,
        prompt_timeout: Option<Duration>,
        message: &Message,
    ) -> Context {
        Context {
            http,
            registry,
            bot_id: cache.current_user().id,
            author_id: message.author.id,
            channel_id: message.channel_id,
            prefix,
            prompt_timeout,
        }
    }

    fn extract_command<'a>(&self, content: &'a str) -> Option<&'a str> {
        let mentions = [format!("<@{}>", self.bot_id), format!("<@!{}>", self.bot_id)];
        mentions
            .iter()
            .find_map(|m| strip_command_prefix(content, m))
            .or_else(|| strip_command_prefix(content, &self.prefix))
    }

    pub async fn handle_message(&self, message: Message) -> Result<()> {
        let command = match self.extract_command(&message.content) {
            None => return Ok(()),
            Some(s) => s.parse::<Command>()?,
        };

        info!("handle command from {}: {:?}", self.author_id, command);

        match command {
            Command::Help => self.help().await,
            Command::Ask { choices, question } => self.ask(choices, question).await,
        }
    }
}
