//! Names command - list the users the bot knows about

use once_cell::sync::Lazy;
use regex::RegexBuilder;

use bot_core::MessageContext;

use crate::handlers::HandlerResult;
use crate::state::PluginState;

use super::CommandSpec;

static SPEC: Lazy<CommandSpec> = Lazy::new(|| CommandSpec {
    name: "names",
    pattern: RegexBuilder::new(r"^(names?|users?|nicks?)\s?(?:list)?$")
        .case_insensitive(true)
        .build()
        .expect("names pattern"),
    only_directed: true,
    short_desc: "names - Get the list of users in channel.",
    long_desc: None,
});

/// List all tracked users
pub struct NamesCommand;

impl NamesCommand {
    /// Command specification for the router
    pub fn spec() -> &'static CommandSpec {
        &SPEC
    }

    /// Handle a matched names query
    ///
    /// `alias` is whichever keyword the sender used (names/users/nicks) and
    /// is echoed back in the reply.
    pub async fn run(
        state: &PluginState,
        context: &MessageContext,
        alias: &str,
    ) -> HandlerResult<()> {
        let nicks = state.registry().known_nicks();

        if nicks.is_empty() {
            // fall back to a fresh membership request
            tracing::debug!(channel = %context.channel, "Empty registry, refreshing membership list");
            state.transport().request_names(&context.channel).await?;
            state
                .transport()
                .reply(context, "No users tracked yet; refreshing the list.")
                .await?;
        } else {
            let reply = format!("{} list: {}.", alias, nicks.join(", "));
            state.transport().reply(context, &reply).await?;
        }

        Ok(())
    }
}
