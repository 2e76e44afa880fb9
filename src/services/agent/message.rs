//! Agent Message Model
//!
//! Inbound messages from the investigation agent, plus the single
//! classification step that turns each content item into a tagged
//! `Call` / `ToolResult` / `Unrecognized` value. Translation logic never
//! does field-presence checks on raw JSON; it only matches on
//! `ContentClass`.

use serde_json::Value;

/// Tool name the agent uses to execute check commands
pub const EXECUTION_TOOL: &str = "Bash";

/// One raw message from the agent stream.
///
/// The underlying record is kept as-is so trace events and the audit log
/// see exactly what arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentMessage {
    raw: Value,
}

impl AgentMessage {
    /// Wrap an already-parsed JSON record
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// Parse one stream line into a message. Returns `None` for lines
    /// that are not JSON objects (keepalives, stray output).
    pub fn from_json_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        let raw: Value = serde_json::from_str(trimmed).ok()?;
        raw.is_object().then(|| Self::new(raw))
    }

    /// The unmodified record
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// The ordered content items of this message.
    ///
    /// Accepts `content` at the top level (SDK message shape) or nested
    /// under `message.content` (the stream-json wrapper the CLI emits).
    /// Messages without a content list yield an empty slice.
    pub fn content_items(&self) -> &[Value] {
        self.raw
            .get("content")
            .or_else(|| self.raw.get("message").and_then(|m| m.get("content")))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Classification of one content item
#[derive(Debug, Clone, PartialEq)]
pub enum ContentClass {
    /// Invocation of the execution tool, carrying a correlation id and
    /// the command to run
    Call { id: String, command: String },
    /// Asynchronous result referencing a prior call's correlation id
    ToolResult {
        id: String,
        content: String,
        is_error: bool,
    },
    /// Anything else (text, thinking, unrelated tools)
    Unrecognized,
}

/// Classify a single content item.
pub fn classify(item: &Value) -> ContentClass {
    if item.get("name").and_then(Value::as_str) == Some(EXECUTION_TOOL) {
        if let Some(input) = item.get("input") {
            let command = input
                .get("command")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let id = item
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return ContentClass::Call { id, command };
        }
    }

    if let Some(id) = item.get("tool_use_id").and_then(Value::as_str) {
        return ContentClass::ToolResult {
            id: id.to_string(),
            content: result_text(item.get("content")),
            is_error: item
                .get("is_error")
                .and_then(Value::as_bool)
                .unwrap_or(false),
        };
    }

    ContentClass::Unrecognized
}

/// Flatten a result `content` field to text. The field may be a plain
/// string or a list of text blocks.
fn result_text(content: Option<&Value>) -> String {
    match content {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(blocks)) => blocks
            .iter()
            .filter_map(|b| b.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}
