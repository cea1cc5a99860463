use std::fmt::{self, Display};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::error::Result;
use crate::model::reaction::ReactionEvent;

use futures::lock::Mutex;
use tracing::{debug, warn};

#[async_trait::async_trait]
pub trait ReactionListener: Send + Sync {
    async fn on_reaction_add(&self, event: &ReactionEvent) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

impl Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Process-wide table of everyone interested in added reactions.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    next_id: Arc<AtomicU64>,
    listeners: Arc<Mutex<Vec<(ListenerId, Arc<dyn ReactionListener>)>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, listener: Arc<dyn ReactionListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().await.push((id, listener));
        debug!("registered {}", id);
        id
    }

    pub async fn unregister(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.lock().await;
        let before = listeners.len();
        listeners.retain(|(x, _)| *x != id);
        let removed = listeners.len() != before;
        debug!("unregistered {}: {}", id, removed);
        removed
    }

    pub async fn len(&self) -> usize {
        self.listeners.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.listeners.lock().await.is_empty()
    }

    /// Delivers `event` to every listener registered at the time of the call, in registration order.
    pub async fn dispatch(&self, event: &ReactionEvent) {
        let listeners: Vec<_> = self.listeners.lock().await.clone();

        for (id, listener) in listeners {
            if let Err(e) = listener.on_reaction_add(event).await {
                warn!("{} failed to handle reaction: {}", id, &e);
            }
        }
    }
}
