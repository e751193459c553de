//! Seen command - report when a user was last active

use chrono::Utc;
use once_cell::sync::Lazy;
use regex::RegexBuilder;

use bot_core::MessageContext;

use crate::handlers::HandlerResult;
use crate::render::Elapsed;
use crate::state::PluginState;

use super::CommandSpec;

static SPEC: Lazy<CommandSpec> = Lazy::new(|| CommandSpec {
    name: "seen",
    pattern: RegexBuilder::new(r"^seen (.*)$")
        .case_insensitive(true)
        .build()
        .expect("seen pattern"),
    only_directed: true,
    short_desc: "seen <nick> - When was a user last seen?",
    long_desc: None,
});

/// Say when a nickname was last seen
pub struct SeenCommand;

impl SeenCommand {
    /// Command specification for the router
    pub fn spec() -> &'static CommandSpec {
        &SPEC
    }

    /// Handle a matched seen query
    pub async fn run(
        state: &PluginState,
        context: &MessageContext,
        raw_name: &str,
    ) -> HandlerResult<()> {
        let name = raw_name.trim();
        if name.is_empty() {
            // malformed query, stay silent
            tracing::trace!("Ignoring blank seen query");
            return Ok(());
        }

        if state.registry().is_self(name) {
            state.transport().reply(context, "I am always here!").await?;
            return Ok(());
        }

        let reply = match state.registry().lookup(name) {
            Some(record) => match record.last_seen {
                Some(at) => {
                    let elapsed = Elapsed::between(at, Utc::now());
                    format!("{} last seen {elapsed} ago", record.nickname)
                }
                // listed as present but quiet since tracking began
                None => format!("I have not seen {name}"),
            },
            None => format!("I have not seen {name}"),
        };

        state.transport().reply(context, &reply).await?;
        Ok(())
    }
}
