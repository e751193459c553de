//! Join and leave commands - channel membership requests

use once_cell::sync::Lazy;
use regex::RegexBuilder;

use bot_core::{ChannelName, MessageContext};

use crate::handlers::HandlerResult;
use crate::state::PluginState;

use super::CommandSpec;

static JOIN_SPEC: Lazy<CommandSpec> = Lazy::new(|| CommandSpec {
    name: "join",
    pattern: RegexBuilder::new(r"^join (.*)$")
        .case_insensitive(true)
        .build()
        .expect("join pattern"),
    only_directed: true,
    short_desc: "join #channel - Ask the bot to join a channel.",
    long_desc: None,
});

static LEAVE_SPEC: Lazy<CommandSpec> = Lazy::new(|| CommandSpec {
    name: "leave",
    pattern: RegexBuilder::new(r"^leave( #?[-_a-zA-Z0-9]+)?$")
        .case_insensitive(true)
        .build()
        .expect("leave pattern"),
    only_directed: true,
    short_desc: "leave [#channel] - Ask the bot to leave.",
    long_desc: Some("If the channel is omitted, leave the current channel."),
});

/// Join a channel on request
pub struct JoinCommand;

impl JoinCommand {
    /// Command specification for the router
    pub fn spec() -> &'static CommandSpec {
        &JOIN_SPEC
    }

    /// Join the named channel and acknowledge
    pub async fn run(
        state: &PluginState,
        context: &MessageContext,
        raw_channel: &str,
    ) -> HandlerResult<()> {
        let channel = ChannelName::new(raw_channel);
        tracing::info!(channel = %channel, requested_by = %context.nick, "Joining channel");

        state.transport().join_channel(&channel).await?;
        state
            .transport()
            .reply(context, &format!("OK, {}.", context.nick))
            .await?;
        Ok(())
    }
}

/// Leave a channel on request
pub struct LeaveCommand;

impl LeaveCommand {
    /// Command specification for the router
    pub fn spec() -> &'static CommandSpec {
        &LEAVE_SPEC
    }

    /// Say goodbye and part the channel
    ///
    /// With no argument the originating channel is left.
    pub async fn run(
        state: &PluginState,
        context: &MessageContext,
        raw_channel: Option<&str>,
    ) -> HandlerResult<()> {
        let channel = match raw_channel {
            Some(name) => ChannelName::new(name),
            None => context.channel.clone(),
        };
        tracing::info!(channel = %channel, requested_by = %context.nick, "Leaving channel");

        // say goodbye in the channel being left
        let farewell = context.in_channel(channel.clone());
        state.transport().reply(&farewell, "Bye!").await?;
        state.transport().leave_channel(&channel).await?;
        Ok(())
    }
}
