//! Work Identifier
//!
//! Maps a free-form shell command to the check it invokes. A command
//! matches only when it actually invokes the check runner binary; prose
//! that merely mentions a check key never matches. Pure and side-effect
//! free, safe to call speculatively on every message.

use regex::Regex;

use scolo_checks::RUNNER_BIN;

/// Identifies which registered check a command invokes
#[derive(Debug)]
pub struct WorkIdentifier {
    /// (key, subcommand pattern) in registration order; first match wins
    patterns: Vec<(String, Regex)>,
}

impl WorkIdentifier {
    /// Build an identifier for the given check keys, preserving order.
    ///
    /// Keys that fail to compile into a pattern are skipped (cannot
    /// happen for catalog keys, which are plain identifiers).
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = keys
            .into_iter()
            .filter_map(|key| {
                let key = key.as_ref().to_string();
                let pattern = format!(r"^\s*{}(\s|$)", regex::escape(&key));
                Regex::new(&pattern).ok().map(|re| (key, re))
            })
            .collect();
        Self { patterns }
    }

    /// Resolve the check key a command invokes, or `None` when the
    /// command is not a runner invocation or names no registered check.
    pub fn identify(&self, command: &str) -> Option<&str> {
        let rest = runner_arguments(command)?;
        self.patterns
            .iter()
            .find(|(_, pattern)| pattern.is_match(&rest))
            .map(|(key, _)| key.as_str())
    }
}

/// If the command invokes the runner binary, return everything after the
/// binary token. Accepts bare and path-qualified invocations
/// (`scolo-check ...`, `./target/release/scolo-check ...`).
fn runner_arguments(command: &str) -> Option<String> {
    let tokens: Vec<&str> = command.split_whitespace().collect();
    let position = tokens.iter().position(|token| {
        let basename = token.rsplit('/').next().unwrap_or(token);
        basename == RUNNER_BIN
    })?;
    Some(tokens[position + 1..].join(" "))
}
