//! JSON extraction from free-form model output.
//!
//! The model is asked for a bare JSON object but routinely wraps it in prose
//! or a markdown code fence. Extraction strips fences first, then scans for
//! the first balanced `{...}` object. The scan tracks string and escape state
//! so braces inside string values do not terminate the object early.

use serde_json::Value;
use tracing::trace;

use crate::error::{IdentityError, Result};
use crate::record::IdentityRecord;

/// Locate the first JSON object in `text`, tolerating surrounding prose.
///
/// An object that never closes falls back to the first-`{`-to-last-`}` slice
/// and leaves the verdict to the parser. Returns `None` when there is no `{`
/// at all, or a `{` with no `}` after it.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let text = strip_code_fence(text);
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=start + offset]);
                }
            }
            _ => {}
        }
    }

    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Extract and parse one identity record out of raw model text.
pub fn parse_record(text: &str) -> Result<IdentityRecord> {
    let json = extract_json_object(text).ok_or_else(|| IdentityError::no_json_object(text))?;
    trace!(extracted = %json, "extracted candidate JSON object");
    let value: Value = serde_json::from_str(json)?;
    IdentityRecord::from_value(value)
}

/// Strip a markdown code fence (```json ... ```) when the reply uses one.
///
/// Only backticks at the start of a line open or close a fence; a literal
/// ``` inside a string value (a generated password, say) is left for the
/// balanced scan to walk past.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let open = match line_start_fence(text) {
        Some(offset) => offset,
        None => return text,
    };
    let newline = match text[open..].find('\n') {
        Some(offset) => open + offset,
        None => return text,
    };
    let content = newline + 1;
    match text[content..].rfind("\n```") {
        Some(end) => text[content..content + end].trim(),
        None => text,
    }
}

/// Offset of the first ``` that begins a line, if any.
fn line_start_fence(text: &str) -> Option<usize> {
    text.match_indices("```")
        .map(|(offset, _)| offset)
        .find(|&offset| offset == 0 || text.as_bytes()[offset - 1] == b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_object_surrounded_by_prose() {
        let text = "Here you go:\n{\"name\": \"Jane A. Doe\"}\nLet me know if you need more.";
        assert_eq!(extract_json_object(text), Some("{\"name\": \"Jane A. Doe\"}"));
    }

    #[test]
    fn nested_objects_are_kept_whole() {
        let text = "sure: {\"a\": {\"b\": \"c\"}, \"d\": \"e\"} bye";
        assert_eq!(
            extract_json_object(text),
            Some("{\"a\": {\"b\": \"c\"}, \"d\": \"e\"}")
        );
    }

    #[test]
    fn braces_inside_strings_do_not_terminate() {
        let text = r#"{"address": "12 Curly {Brace} Lane", "phone": "555"}"#;
        assert_eq!(extract_json_object(text), Some(text));
    }

    #[test]
    fn escaped_quotes_inside_strings_are_handled() {
        let text = r#"{"name": "Jane \"JJ\" Doe"} trailing"#;
        assert_eq!(extract_json_object(text), Some(r#"{"name": "Jane \"JJ\" Doe"}"#));
    }

    #[test]
    fn no_brace_at_all_yields_none() {
        assert_eq!(extract_json_object("I cannot help with that."), None);
        assert_eq!(extract_json_object(""), None);
    }

    #[test]
    fn unterminated_object_falls_back_to_outer_slice() {
        // Unbalanced inner quote leaves the scan inside a string; the
        // fallback slice still hands the parser something to reject.
        let text = "{\"name\": \"Jane}";
        assert_eq!(extract_json_object(text), Some("{\"name\": \"Jane}"));
    }

    #[test]
    fn fenced_json_is_unwrapped() {
        let text = "```json\n{\"name\": \"Jane A. Doe\"}\n```";
        assert_eq!(extract_json_object(text), Some("{\"name\": \"Jane A. Doe\"}"));
    }

    #[test]
    fn fence_preceded_by_prose_is_unwrapped() {
        let text = "Sure, here it is:\n```json\n{\"name\": \"Jane A. Doe\"}\n```";
        assert_eq!(extract_json_object(text), Some("{\"name\": \"Jane A. Doe\"}"));
    }

    #[test]
    fn backticks_inside_string_values_are_not_fences() {
        let text = "{\"password\": \"x```y\", \"username\": \"jdoe\"}";
        assert_eq!(extract_json_object(text), Some(text));

        let parsed = parse_record("{\"name\": \"Jane\", \"password\": \"a```b\"}").unwrap();
        assert_eq!(parsed.password.as_deref(), Some("a```b"));
    }

    #[test]
    fn parse_record_fails_cleanly_on_malformed_json() {
        let err = parse_record("{\"name\": oops}").unwrap_err();
        assert!(matches!(err, IdentityError::Json(_)));
    }

    #[test]
    fn parse_record_fails_on_missing_object() {
        let err = parse_record("no json here").unwrap_err();
        assert!(matches!(err, IdentityError::NoJsonObject { .. }));
    }

    #[test]
    fn parse_record_accepts_prose_wrapped_record() {
        let record = parse_record("Of course!\n{\"name\": \"Jane A. Doe\", \"zodiac\": \"Leo\"}")
            .unwrap();
        assert_eq!(record.name.as_deref(), Some("Jane A. Doe"));
        assert_eq!(record.zodiac.as_deref(), Some("Leo"));
    }
}
