use serenity::model::{
    channel::{Message, Reaction},
    id::{ChannelId, MessageId, UserId},
};

/// A message a prompt is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromptMessage {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

impl PromptMessage {
    pub fn new(channel_id: ChannelId, message_id: MessageId) -> Self {
        PromptMessage {
            channel_id,
            message_id,
        }
    }
}

impl From<&Message> for PromptMessage {
    fn from(message: &Message) -> Self {
        PromptMessage::new(message.channel_id, message.id)
    }
}

/// A reaction someone added to some message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    pub message_id: MessageId,
    pub user_id: UserId,
    pub emoji: String,
}

impl ReactionEvent {
    pub fn new(message_id: MessageId, user_id: UserId, emoji: impl Into<String>) -> Self {
        ReactionEvent {
            message_id,
            user_id,
            emoji: emoji.into(),
        }
    }

    /// `None` when the gateway did not tell who reacted.
    pub fn from_reaction(reaction: &Reaction) -> Option<Self> {
        let user_id = reaction.user_id?;
        Some(ReactionEvent::new(
            reaction.message_id,
            user_id,
            reaction.emoji.to_string(),
        ))
    }
}
