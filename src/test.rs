use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use crate::context::{BotContext, ChannelContext, ConfigContext, ListenerContext, MessageContext};
use crate::error::{Error, Result};
use crate::listener::{ListenerId, ListenerRegistry, ReactionListener};
use crate::model::{message::Message, reaction::PromptMessage};

use anyhow::anyhow;
use futures::lock::Mutex;
use serenity::model::id::{ChannelId, MessageId, UserId};
use tokio::sync::{Notify, Semaphore};

pub const MOCK_BOT_ID: UserId = UserId::new(6455241911587596288);
pub const MOCK_CHANNEL_ID: ChannelId = ChannelId::new(7933013268500803584);
pub const MOCK_MESSAGE_ID: MessageId = MessageId::new(8549307414562138112);
pub const OTHER_MESSAGE_ID: MessageId = MessageId::new(8549307414562138113);

pub const MOCK_AUTHOR_1: UserId = UserId::new(17308610930080528384);
pub const MOCK_AUTHOR_2: UserId = UserId::new(4081392650864611328);

pub const MOCK_MESSAGE: PromptMessage = PromptMessage {
    channel_id: MOCK_CHANNEL_ID,
    message_id: MOCK_MESSAGE_ID,
};

const UNLIMITED: usize = 1 << 16;

#[derive(Clone)]
pub struct MockContext {
    pub author_id: UserId,
    pub registry: ListenerRegistry,
    pub listener_registered: Arc<Notify>,
    pub unregister_calls: Arc<AtomicUsize>,
    pub sent_messages: Arc<Mutex<Vec<Message>>>,
    pub added_reactions: Arc<Mutex<Vec<(MessageId, String)>>>,
    pub reaction_added: Arc<Notify>,
    pub removed_reactions: Arc<Mutex<Vec<(MessageId, String, UserId)>>>,
    pub deleted_messages: Arc<Mutex<Vec<MessageId>>>,
    pub reaction_gate: Arc<Semaphore>,
    pub failing_symbol: Option<String>,
    pub failing_delete: bool,
    pub prompt_timeout: Option<Duration>,
}

impl MockContext {
    pub fn new() -> MockContext {
        MockContext::with_author(MOCK_AUTHOR_2)
    }

    pub fn with_author(author_id: UserId) -> MockContext {
        MockContext {
            author_id,
            registry: ListenerRegistry::new(),
            listener_registered: Arc::new(Notify::new()),
            unregister_calls: Arc::new(AtomicUsize::new(0)),
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            added_reactions: Arc::new(Mutex::new(Vec::new())),
            reaction_added: Arc::new(Notify::new()),
            removed_reactions: Arc::new(Mutex::new(Vec::new())),
            deleted_messages: Arc::new(Mutex::new(Vec::new())),
            reaction_gate: Arc::new(Semaphore::new(UNLIMITED)),
            failing_symbol: None,
            failing_delete: false,
            prompt_timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> MockContext {
        self.prompt_timeout = Some(timeout);
        self
    }

    /// Makes attaching `symbol` fail as if the platform refused it.
    pub fn failing_on(mut self, symbol: &str) -> MockContext {
        self.failing_symbol = Some(symbol.to_owned());
        self
    }

    pub fn failing_delete(mut self) -> MockContext {
        self.failing_delete = true;
        self
    }

    /// Blocks every `add_reaction` until [`MockContext::release_reactions`] lets it through.
    pub fn holding_reactions(mut self) -> MockContext {
        self.reaction_gate = Arc::new(Semaphore::new(0));
        self
    }

    pub fn release_reactions(&self, n: usize) {
        self.reaction_gate.add_permits(n);
    }

    pub async fn wait_for_reactions(&self, n: usize) {
        loop {
            let notified = self.reaction_added.notified();
            if self.added_reactions.lock().await.len() >= n {
                break;
            }
            notified.await;
        }
    }

    pub async fn wait_for_listener(&self) {
        self.listener_registered.notified().await;
    }

    pub fn unregistered(&self) -> usize {
        self.unregister_calls.load(Ordering::SeqCst)
    }
}

impl BotContext for MockContext {
    fn bot_id(&self) -> UserId {
        MOCK_BOT_ID
    }
}

#[async_trait::async_trait]
impl ChannelContext for MockContext {
    fn channel_id(&self) -> ChannelId {
        MOCK_CHANNEL_ID
    }

    async fn message(&self, message: Message) -> Result<PromptMessage> {
        self.sent_messages.lock().await.push(message);
        Ok(MOCK_MESSAGE)
    }
}

#[async_trait::async_trait]
impl MessageContext for MockContext {
    fn author_id(&self) -> UserId {
        self.author_id
    }

    async fn add_reaction(&self, message: PromptMessage, symbol: &str) -> Result<()> {
        self.reaction_gate
            .acquire()
            .await
            .map_err(|e| Error::Other(e.into()))?
            .forget();

        if self.failing_symbol.as_deref() == Some(symbol) {
            return Err(Error::Other(anyhow!("missing permissions to add {}", symbol)));
        }

        self.added_reactions
            .lock()
            .await
            .push((message.message_id, symbol.to_owned()));
        self.reaction_added.notify_waiters();
        Ok(())
    }

    async fn remove_reaction(
        &self,
        message: PromptMessage,
        symbol: &str,
        user_id: UserId,
    ) -> Result<()> {
        self.removed_reactions
            .lock()
            .await
            .push((message.message_id, symbol.to_owned(), user_id));
        Ok(())
    }

    async fn delete_message(&self, message: PromptMessage) -> Result<()> {
        if self.failing_delete {
            return Err(Error::Other(anyhow!("unknown message")));
        }

        self.deleted_messages.lock().await.push(message.message_id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ListenerContext for MockContext {
    async fn register_listener(&self, listener: Arc<dyn ReactionListener>) -> ListenerId {
        let id = self.registry.register(listener).await;
        self.listener_registered.notify_one();
        id
    }

    async fn unregister_listener(&self, id: ListenerId) -> bool {
        self.unregister_calls.fetch_add(1, Ordering::SeqCst);
        self.registry.unregister(id).await
    }
}

impl ConfigContext for MockContext {
    fn prompt_timeout(&self) -> Option<Duration> {
        self.prompt_timeout
    }
}
