use crate::error::Result;
use crate::model::reaction::PromptMessage;

use serenity::model::id::UserId;

#[async_trait::async_trait]
pub trait MessageContext {
    fn author_id(&self) -> UserId;
    async fn add_reaction(&self, message: PromptMessage, symbol: &str) -> Result<()>;
    async fn remove_reaction(&self, message: PromptMessage, symbol: &str, user_id: UserId)
        -> Result<()>;
    async fn delete_message(&self, message: PromptMessage) -> Result<()>;
}
