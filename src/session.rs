//! A single prompt: one message, one choice set, one user allowed to answer.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use crate::context::{BotContext, ListenerContext, MessageContext};
use crate::error::{Error, Result};
use crate::listener::{ListenerId, ReactionListener};
use crate::model::{
    choice::{ChoiceSet, ChoiceValue},
    reaction::{PromptMessage, ReactionEvent},
};

use futures::lock::Mutex;
use serenity::model::id::UserId;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Choices are still being attached.
    Awaiting,
    /// Every choice is attached and the session is listening.
    Active,
    Resolved,
}

/// The write end of a [`PendingResult`]; fulfilling it consumes it.
#[derive(Debug)]
pub struct Resolver {
    sender: oneshot::Sender<ChoiceValue>,
}

impl Resolver {
    fn fulfill(self, value: ChoiceValue) {
        if self.sender.send(value).is_err() {
            debug!("prompt result was no longer awaited");
        }
    }
}

/// Resolves to the value chosen by the user, exactly once.
#[derive(Debug)]
pub struct PendingResult {
    receiver: oneshot::Receiver<ChoiceValue>,
}

impl Future for PendingResult {
    type Output = Result<ChoiceValue>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map_err(|_| Error::Abandoned)
    }
}

fn pending_pair() -> (Resolver, PendingResult) {
    let (sender, receiver) = oneshot::channel();
    (Resolver { sender }, PendingResult { receiver })
}

struct State {
    phase: Phase,
    listener_id: Option<ListenerId>,
    resolver: Option<Resolver>,
}

pub struct PromptSession<C> {
    ctx: C,
    user_id: UserId,
    message: PromptMessage,
    choices: ChoiceSet,
    // held for the whole handling of one event, so events for this session never interleave
    state: Mutex<State>,
}

impl<C> PromptSession<C>
where
    C: BotContext + MessageContext + ListenerContext + Send + Sync + 'static,
{
    pub fn new(
        ctx: C,
        user_id: UserId,
        message: PromptMessage,
        choices: ChoiceSet,
    ) -> (Arc<Self>, PendingResult) {
        let (resolver, pending) = pending_pair();
        let session = PromptSession {
            ctx,
            user_id,
            message,
            choices,
            state: Mutex::new(State {
                phase: Phase::Awaiting,
                listener_id: None,
                resolver: Some(resolver),
            }),
        };
        (Arc::new(session), pending)
    }

    pub async fn phase(&self) -> Phase {
        self.state.lock().await.phase
    }

    /// Attaches every choice in order, then starts listening for answers.
    ///
    /// On failure the session stays [`Phase::Awaiting`] and is never registered;
    /// choices attached so far are left on the message.
    pub async fn setup(self: &Arc<Self>) -> Result<()> {
        for symbol in self.choices.symbols() {
            self.ctx.add_reaction(self.message, symbol).await?;
        }

        let mut state = self.state.lock().await;
        if state.phase != Phase::Awaiting {
            return Ok(());
        }

        let listener: Arc<dyn ReactionListener> = Arc::clone(self) as _;
        let id = self.ctx.register_listener(listener).await;
        state.listener_id = Some(id);
        state.phase = Phase::Active;

        debug!(
            "prompt on {} is waiting for {}",
            self.message.message_id, self.user_id
        );
        Ok(())
    }

    /// Tears the session down without an answer. Returns `false` if it had already resolved.
    pub async fn expire(&self) -> bool {
        let mut state = self.state.lock().await;
        if state.phase == Phase::Resolved {
            return false;
        }

        state.phase = Phase::Resolved;
        let listener_id = state.listener_id.take();
        state.resolver = None;
        drop(state);

        self.teardown(listener_id).await;
        info!("prompt on {} expired", self.message.message_id);
        true
    }

    async fn teardown(&self, listener_id: Option<ListenerId>) {
        if let Some(id) = listener_id {
            self.ctx.unregister_listener(id).await;
        }

        if let Err(e) = self.ctx.delete_message(self.message).await {
            warn!(
                "failed to delete prompt message {}: {}",
                self.message.message_id, &e
            );
        }
    }

    async fn reject(&self, event: &ReactionEvent) -> Result<()> {
        self.ctx
            .remove_reaction(self.message, &event.emoji, event.user_id)
            .await
    }
}

#[async_trait::async_trait]
impl<C> ReactionListener for PromptSession<C>
where
    C: BotContext + MessageContext + ListenerContext + Send + Sync + 'static,
{
    async fn on_reaction_add(&self, event: &ReactionEvent) -> Result<()> {
        if event.message_id != self.message.message_id {
            return Ok(());
        }

        // the choices themselves are added by the bot
        if event.user_id == self.ctx.bot_id() {
            return Ok(());
        }

        let mut state = self.state.lock().await;
        match state.phase {
            Phase::Resolved => {
                debug!("ignore late reaction {} by {}", event.emoji, event.user_id);
                return Ok(());
            }
            Phase::Awaiting => {
                debug!("reject early reaction {} by {}", event.emoji, event.user_id);
                return self.reject(event).await;
            }
            Phase::Active => {}
        }

        let value = match self.choices.get(&event.emoji) {
            Some(value) if event.user_id == self.user_id => value.clone(),
            _ => {
                debug!("reject reaction {} by {}", event.emoji, event.user_id);
                return self.reject(event).await;
            }
        };

        state.phase = Phase::Resolved;
        let listener_id = state.listener_id.take();
        let resolver = state.resolver.take();
        drop(state);

        info!(
            "prompt on {} answered by {}: {}",
            self.message.message_id, self.user_id, value
        );
        self.teardown(listener_id).await;

        if let Some(resolver) = resolver {
            resolver.fulfill(value);
        }
        Ok(())
    }
}
