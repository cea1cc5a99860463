use std::sync::Arc;

use crate::listener::{ListenerId, ReactionListener};

#[async_trait::async_trait]
pub trait ListenerContext {
    async fn register_listener(&self, listener: Arc<dyn ReactionListener>) -> ListenerId;
    async fn unregister_listener(&self, id: ListenerId) -> bool;
}
