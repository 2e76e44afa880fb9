//! Result Extraction
//!
//! Best-effort extraction of a JSON object embedded in free-form tool
//! output. Tolerates prose before and after the object; never repairs a
//! malformed one. Strict success-or-nothing outcome.

use serde_json::Value;

/// Extract and parse the outermost balanced JSON object in `text`.
///
/// The scan starts at the first `{`, tracks brace depth while honoring
/// string literals and escapes, and parses exactly the balanced slice.
/// Returns `None` when no balanced object exists or it fails to parse.
pub fn extract_json_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let candidate = balanced_object(&text[start..])?;
    let parsed: Value = serde_json::from_str(candidate).ok()?;
    parsed.is_object().then_some(parsed)
}

/// Slice `text` (which starts with `{`) up to and including the brace
/// that closes the opening one, or `None` if it never closes.
fn balanced_object(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[..index + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}
