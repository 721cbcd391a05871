//! Judgment response parsing
//!
//! Model output is expected to be a bare `{"url": ..., "confidence": ...}`
//! object. Providers sometimes wrap it in prose or code fences, so parsing
//! falls back to the first balanced `{...}` block before giving up.

use serde_json::Value;
use url::Url;

use shared::{is_http_url, Candidate, Judgment};
use crate::error::{ClientError, ClientResult};

/// Outcome of turning model text into JSON
#[derive(Debug, Clone, PartialEq)]
pub enum JudgmentParse {
    /// The whole text was valid JSON
    StrictJson(Value),
    /// JSON recovered from the first balanced `{...}` block
    ExtractedJson(Value),
    ParseFailure(String),
}

impl JudgmentParse {
    pub fn into_value(self) -> ClientResult<Value> {
        match self {
            JudgmentParse::StrictJson(value) | JudgmentParse::ExtractedJson(value) => Ok(value),
            JudgmentParse::ParseFailure(reason) => Err(ClientError::parse(reason)),
        }
    }
}

pub fn parse_judgment_text(text: &str) -> JudgmentParse {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return JudgmentParse::ParseFailure("model returned empty text".to_string());
    }

    if let Ok(value) = serde_json::from_str::<Value>(trimmed) {
        return JudgmentParse::StrictJson(value);
    }

    match first_balanced_object(trimmed) {
        Some(block) => match serde_json::from_str::<Value>(block) {
            Ok(value) => JudgmentParse::ExtractedJson(value),
            Err(e) => JudgmentParse::ParseFailure(format!("embedded JSON is invalid: {e}")),
        },
        None => JudgmentParse::ParseFailure("no JSON object found in model text".to_string()),
    }
}

/// Slice of the first `{...}` block whose braces balance, ignoring braces inside string literals
pub fn first_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Check shape and ranges of a parsed judgment object
pub fn validate_judgment(value: &Value) -> ClientResult<Judgment> {
    let object = value
        .as_object()
        .ok_or_else(|| ClientError::parse("judgment is not a JSON object"))?;

    let url = object
        .get("url")
        .and_then(Value::as_str)
        .map(str::trim)
        .ok_or_else(|| ClientError::parse("judgment has no string url"))?;
    if !is_http_url(url) {
        return Err(ClientError::parse(format!("judgment url is not an absolute http(s) URL: {url}")));
    }

    let confidence = object
        .get("confidence")
        .and_then(Value::as_f64)
        .ok_or_else(|| ClientError::parse("judgment has no numeric confidence"))?;
    if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
        return Err(ClientError::parse(format!("confidence {confidence} is outside 0..1")));
    }

    Ok(Judgment::new(url, confidence))
}

/// Parse and validate raw model text in one step
pub fn judgment_from_text(text: &str) -> ClientResult<Judgment> {
    let value = parse_judgment_text(text).into_value()?;
    validate_judgment(&value)
}

/// A selection must name a candidate, or at least a page on a candidate's host
pub fn check_selection(judgment: Judgment, candidates: &[Candidate]) -> ClientResult<Judgment> {
    let chosen = normalize(&judgment.url);
    if candidates.iter().any(|c| normalize(&c.url) == chosen) {
        return Ok(judgment);
    }

    let chosen_host = host_of(&judgment.url);
    if chosen_host.is_some() && candidates.iter().any(|c| host_of(&c.url) == chosen_host) {
        return Ok(judgment);
    }

    Err(ClientError::parse(format!(
        "selected url {} is not among the {} candidates",
        judgment.url,
        candidates.len()
    )))
}

/// Concatenated text parts of the first generateContent candidate
pub fn extract_generated_text(response: &Value) -> ClientResult<String> {
    let parts = response
        .get("candidates")
        .and_then(|candidates| candidates.get(0))
        .and_then(|candidate| candidate.get("content"))
        .and_then(|content| content.get("parts"))
        .and_then(Value::as_array)
        .ok_or_else(|| ClientError::parse("response has no candidates"))?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    if text.trim().is_empty() {
        return Err(ClientError::parse("response text is empty"));
    }
    Ok(text)
}

fn normalize(url: &str) -> &str {
    url.trim().trim_end_matches('/')
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url.trim())
        .ok()
        .and_then(|parsed| parsed.host_str().map(|h| h.trim_start_matches("www.").to_string()))
}
