//! Response Extractor
//!
//! Pulls the structured payload out of a free-form model reply.
//! Models often wrap JSON in markdown fences or surround it with
//! prose, so three patterns are tried in strict order:
//!
//! 1. interior of a ```json fenced block
//! 2. interior of a generic ``` fenced block
//! 3. the first balanced `{...}` span (string- and escape-aware)
//!
//! This is a heuristic, not a parser: a reply containing several
//! independent fenced blocks yields the first one.

use crate::error::PipelineError;
use regex::Regex;
use std::sync::LazyLock;

static FENCED_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").unwrap());

static FENCED_ANY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\s*(.*?)\s*```").unwrap());

/// Extract the candidate payload text from a reply.
///
/// Returns [`PipelineError::Extraction`] when no pattern matches.
pub fn extract_payload(reply: &str) -> Result<String, PipelineError> {
    if let Some(captures) = FENCED_JSON.captures(reply) {
        return Ok(captures[1].to_string());
    }

    if let Some(captures) = FENCED_ANY.captures(reply) {
        return Ok(captures[1].to_string());
    }

    if let Some(span) = balanced_object_span(reply) {
        return Ok(span.to_string());
    }

    Err(PipelineError::Extraction)
}

/// Find the first balanced `{...}` span in the text.
///
/// Braces inside JSON string literals (including escaped quotes) do
/// not count toward nesting. An unbalanced opening brace is skipped
/// and the scan restarts at the next one.
fn balanced_object_span(text: &str) -> Option<&str> {
    let mut from = 0;
    while let Some(offset) = text[from..].find('{') {
        let open = from + offset;
        if let Some(len) = balanced_len(&text[open..]) {
            return Some(&text[open..open + len]);
        }
        from = open + 1;
    }
    None
}

/// Length of the balanced object starting at the first byte of `text`,
/// which must be `{`. None if the braces never balance.
fn balanced_len(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + c.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_json_block_wins_regardless_of_prose() {
        let reply = "Here you go:\n```json\n{\"symptoms\":[\"cough\",\"fever\"]}\n```\nThanks!";
        let payload = extract_payload(reply).unwrap();
        assert_eq!(payload, r#"{"symptoms":["cough","fever"]}"#);
    }

    #[test]
    fn test_generic_fenced_block() {
        let reply = "Result:\n```\n{\"key\": \"value\"}\n```";
        let payload = extract_payload(reply).unwrap();
        assert_eq!(payload, r#"{"key": "value"}"#);
    }

    #[test]
    fn test_bare_balanced_span() {
        let reply = "The analysis shows {\"riskFactors\": []} overall.";
        let payload = extract_payload(reply).unwrap();
        assert_eq!(payload, r#"{"riskFactors": []}"#);
    }

    #[test]
    fn test_nested_braces_stay_balanced() {
        let reply = r#"prose {"a": {"b": {"c": 1}}} more prose"#;
        let payload = extract_payload(reply).unwrap();
        assert_eq!(payload, r#"{"a": {"b": {"c": 1}}}"#);
    }

    #[test]
    fn test_braces_inside_strings_are_ignored() {
        let reply = r#"{"note": "uses { and } freely", "ok": true}"#;
        let payload = extract_payload(reply).unwrap();
        assert_eq!(payload, reply);

        let reply = r#"{"quote": "she said \"hi {there}\"", "n": 1}"#;
        let payload = extract_payload(reply).unwrap();
        assert_eq!(payload, reply);
    }

    #[test]
    fn test_two_independent_spans_yield_the_first() {
        let reply = r#"first {"a": 1} then {"b": 2}"#;
        let payload = extract_payload(reply).unwrap();
        assert_eq!(payload, r#"{"a": 1}"#);
    }

    #[test]
    fn test_unbalanced_open_brace_is_skipped() {
        let reply = r#"broken { fragment, but later {"ok": true} appears"#;
        let payload = extract_payload(reply).unwrap();
        assert_eq!(payload, r#"{"ok": true}"#);
    }

    #[test]
    fn test_json_fence_preferred_over_earlier_bare_span() {
        let reply = "{\"bare\": 1}\n```json\n{\"fenced\": 2}\n```";
        let payload = extract_payload(reply).unwrap();
        assert_eq!(payload, r#"{"fenced": 2}"#);
    }

    #[test]
    fn test_no_structure_signals_extraction_failure() {
        let reply = "I'm sorry, I cannot produce structured output for that.";
        assert!(matches!(
            extract_payload(reply),
            Err(PipelineError::Extraction)
        ));
    }

    #[test]
    fn test_empty_reply_fails() {
        assert!(extract_payload("").is_err());
    }
}
