use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use clap::{ArgGroup, Parser};
use serenity::{
    client::{Client, EventHandler},
    model::{channel::Reaction, gateway::GatewayIntents, gateway::Ready},
};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use eprompt::{
    context::{ChannelContext, Context},
    listener::ListenerRegistry,
    model::{message::Message, reaction::ReactionEvent},
};

struct Handler {
    registry: ListenerRegistry,
    prefix: Arc<str>,
    prompt_timeout: Option<Duration>,
}

#[async_trait::async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: serenity::client::Context, ready: Ready) {
        info!("logged in as {}", ready.user.name);
    }

    async fn message(
        &self,
        ctx: serenity::client::Context,
        msg: serenity::model::channel::Message,
    ) {
        if msg.author.bot {
            return;
        }

        let ctx = Context::new(
            Arc::clone(&ctx.http),
            &ctx.cache,
            self.registry.clone(),
            Arc::clone(&self.prefix),
            self.prompt_timeout,
            &msg,
        );

        if let Err(e) = ctx.handle_message(msg).await {
            error!("error: {}", &e);
            let _ = ctx.message(Message::HandleError(e)).await;
        }
    }

    async fn reaction_add(&self, _ctx: serenity::client::Context, reaction: Reaction) {
        match ReactionEvent::from_reaction(&reaction) {
            Some(event) => self.registry.dispatch(&event).await,
            None => debug!("ignore reaction without user on {}", reaction.message_id),
        }
    }
}

#[derive(Parser)]
#[command(group(ArgGroup::new("tokens").required(true).multiple(false)))]
struct Opt {
    #[arg(
        long,
        env = "EPROMPT_DISCORD_TOKEN",
        hide_env_values = true,
        group = "tokens"
    )]
    token: Option<String>,
    #[arg(long, env = "EPROMPT_DISCORD_TOKEN_FILE", group = "tokens")]
    token_file: Option<PathBuf>,
    #[arg(long, env = "EPROMPT_PREFIX", default_value = "!prompt")]
    prefix: String,
    /// Give up on a prompt after this many seconds without an answer.
    #[arg(long, env = "EPROMPT_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let token = match (opt.token, opt.token_file) {
        (Some(token), _) => token,
        (None, Some(path)) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("cannot read token from {}", path.display()))?,
        (None, None) => bail!("no token given"),
    };
    let token = token.trim();

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::DIRECT_MESSAGE_REACTIONS;

    let mut client = Client::builder(token, intents)
        .event_handler(Handler {
            registry: ListenerRegistry::new(),
            prefix: Arc::from(opt.prefix),
            prompt_timeout: opt.timeout_secs.map(Duration::from_secs),
        })
        .await
        .context("Failed to create client")?;

    client.start().await.context("Client error")
}
