use std::time::Duration;

pub trait ConfigContext {
    /// How long a prompt waits for an answer; `None` waits forever.
    fn prompt_timeout(&self) -> Option<Duration>;
}
