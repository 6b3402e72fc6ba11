//! Chain-of-thought tag extraction.
//!
//! Older server versions embed reasoning in the message content between
//! `<think>`/`<thinking>` tags. Recent versions return it as a dedicated
//! `reasoning_content` field, which is always preferred; this extraction is
//! kept as a compatibility fallback only.

use once_cell::sync::Lazy;
use regex::Regex;

static THINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<think(?:ing)?>(.*?)</think(?:ing)?>").unwrap());

/// Split `content` into (visible content, reasoning).
///
/// The first delimited span becomes the reasoning; every span is removed
/// from the visible content. With no markers present the content comes back
/// unchanged and the reasoning is empty.
pub fn extract_reasoning(content: &str) -> (String, String) {
    let reasoning = match THINK_PATTERN.captures(content) {
        Some(caps) => caps[1].to_string(),
        None => return (content.to_string(), String::new()),
    };

    let visible = THINK_PATTERN.replace_all(content, "").into_owned();
    (visible, reasoning)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_single_span() {
        let (content, reasoning) = extract_reasoning("<think>abc</think>visible");
        assert_eq!(reasoning, "abc");
        assert_eq!(content, "visible");
    }

    #[test]
    fn no_markers_returns_input_unchanged() {
        let (content, reasoning) = extract_reasoning("plain answer");
        assert_eq!(content, "plain answer");
        assert_eq!(reasoning, "");
    }

    #[test]
    fn long_form_and_mixed_case_markers() {
        let (content, reasoning) = extract_reasoning("<Thinking>step 1</Thinking>done");
        assert_eq!(reasoning, "step 1");
        assert_eq!(content, "done");
    }

    #[test]
    fn reasoning_spans_newlines() {
        let (content, reasoning) = extract_reasoning("<think>line 1\nline 2</think>ok");
        assert_eq!(reasoning, "line 1\nline 2");
        assert_eq!(content, "ok");
    }

    #[test]
    fn first_span_wins_but_all_are_stripped() {
        let (content, reasoning) = extract_reasoning("<think>a</think>x<think>b</think>y");
        assert_eq!(reasoning, "a");
        assert_eq!(content, "xy");
    }

    #[test]
    fn empty_span_yields_empty_reasoning() {
        let (content, reasoning) = extract_reasoning("<think></think>answer");
        assert_eq!(reasoning, "");
        assert_eq!(content, "answer");
    }
}
