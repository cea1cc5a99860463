use crate::context::{ChannelContext, MessageContext};
use crate::error::Result;
use crate::model::{
    choice::ChoiceSet, command::ChoiceSpecifier, message::Message, outcome::PromptOutcome,
};
use crate::use_case::PromptResponse;

use tracing::info;

#[async_trait::async_trait]
pub trait Ask: ChannelContext + MessageContext + PromptResponse {
    async fn ask(&self, choices: ChoiceSpecifier, question: String) -> Result<()> {
        let choices = match choices {
            ChoiceSpecifier::Preset(preset) => preset.choices(),
            ChoiceSpecifier::Custom(entries) => ChoiceSet::new(entries)?,
        };

        let asked_to = self.author_id();
        info!("ask {} in {}: {}", asked_to, self.channel_id(), question);
        let prompt = self
            .message(Message::Question {
                asked_to,
                question,
                choices: choices.clone(),
            })
            .await?;

        let outcome = self
            .prompt_response(asked_to, prompt, None, Some(choices))
            .await?;
        info!("{} answered with {:?}", asked_to, outcome);

        match outcome {
            PromptOutcome::Chosen(value) => self.message(Message::Answered(asked_to, value)).await?,
            PromptOutcome::TimedOut => self.message(Message::NoAnswer(asked_to)).await?,
        };
        Ok(())
    }
}

impl<T: ChannelContext + MessageContext + PromptResponse> Ask for T {}
