//! Chat command adapters
//!
//! The command surface exposed to the router: each command carries a
//! `CommandSpec` with its pattern and help text, plus a handler that reads
//! the presence registry and replies through the transport.

mod channel;
mod names;
mod seen;
mod spec;

pub use channel::{JoinCommand, LeaveCommand};
pub use names::NamesCommand;
pub use seen::SeenCommand;
pub use spec::CommandSpec;

use bot_core::MessageContext;

use crate::handlers::HandlerResult;
use crate::state::PluginState;

/// All command specs, in dispatch priority order
pub fn command_specs() -> Vec<&'static CommandSpec> {
    vec![
        SeenCommand::spec(),
        NamesCommand::spec(),
        JoinCommand::spec(),
        LeaveCommand::spec(),
    ]
}

/// Match a message against the command patterns and run the first hit
///
/// Returns `Ok(true)` when a command fired. Directed-only commands are
/// skipped for undirected messages.
pub async fn dispatch(
    state: &PluginState,
    context: &MessageContext,
    text: &str,
) -> HandlerResult<bool> {
    let text = text.trim();

    let seen = SeenCommand::spec();
    if seen.applies(context.directed) {
        if let Some(caps) = seen.captures(text) {
            SeenCommand::run(state, context, &caps[1]).await?;
            return Ok(true);
        }
    }

    let names = NamesCommand::spec();
    if names.applies(context.directed) {
        if let Some(caps) = names.captures(text) {
            NamesCommand::run(state, context, &caps[1]).await?;
            return Ok(true);
        }
    }

    let join = JoinCommand::spec();
    if join.applies(context.directed) {
        if let Some(caps) = join.captures(text) {
            JoinCommand::run(state, context, &caps[1]).await?;
            return Ok(true);
        }
    }

    let leave = LeaveCommand::spec();
    if leave.applies(context.directed) {
        if let Some(caps) = leave.captures(text) {
            let target = caps.get(1).map(|m| m.as_str());
            LeaveCommand::run(state, context, target).await?;
            return Ok(true);
        }
    }

    Ok(false)
}
