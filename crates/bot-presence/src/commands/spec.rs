//! Command specifications exposed to the router

use regex::{Captures, Regex};

/// A command pattern with its help text
///
/// The external router matches free-text input against `pattern` and hands
/// the capture groups to the command's handler.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Command name
    pub name: &'static str,
    /// Pattern matched against incoming messages
    pub pattern: Regex,
    /// Only respond when the message is directed at the bot
    pub only_directed: bool,
    /// One-line help string
    pub short_desc: &'static str,
    /// Longer description, where one exists
    pub long_desc: Option<&'static str>,
}

impl CommandSpec {
    /// Capture groups for a message matching this command
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.pattern.captures(text)
    }

    /// Whether this command should run for a message with the given direction
    pub fn applies(&self, directed: bool) -> bool {
        directed || !self.only_directed
    }
}
