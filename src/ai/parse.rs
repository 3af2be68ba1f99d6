//! Turn raw model output into [`CategorizedAdvice`].
//!
//! The model is asked for a JSON object, but answers are not always
//! well-formed. Parsing therefore happens in two stages: a strict decode of
//! the JSON object, and, only when that decode fails, a line scan that looks
//! for category headers followed by `-` bullets. Neither stage can fail; the
//! worst case is a result with every category empty.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::advice::{AdviceCategory, CategorizedAdvice};

/// Which stage produced the advice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Strict(CategorizedAdvice),
    Fallback(CategorizedAdvice),
}

impl ParseOutcome {
    pub fn advice(&self) -> &CategorizedAdvice {
        match self {
            ParseOutcome::Strict(a) | ParseOutcome::Fallback(a) => a,
        }
    }

    pub fn into_advice(self) -> CategorizedAdvice {
        match self {
            ParseOutcome::Strict(a) | ParseOutcome::Fallback(a) => a,
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, ParseOutcome::Strict(_))
    }
}

/// Parse model output, keeping track of which stage succeeded.
pub fn parse_outcome(raw: &str) -> ParseOutcome {
    match parse_strict(raw) {
        Ok(advice) => {
            debug!(total = advice.total(), "strict parse succeeded");
            ParseOutcome::Strict(advice)
        }
        Err(err) => {
            debug!(error = %err, "strict parse failed, scanning lines");
            let advice = parse_fallback(raw);
            debug!(total = advice.total(), "fallback parse finished");
            ParseOutcome::Fallback(advice)
        }
    }
}

/// Parse model output into categorized advice. Never fails.
pub fn parse_response(raw: &str) -> CategorizedAdvice {
    parse_outcome(raw).into_advice()
}

/// Decode `raw` as a JSON object with the five category keys.
///
/// Only a failure to decode a JSON object is an error. A missing key, or a
/// key whose value is not an array made only of strings, becomes an empty
/// category.
pub fn parse_strict(raw: &str) -> Result<CategorizedAdvice, serde_json::Error> {
    let object: Map<String, Value> = serde_json::from_str(strip_json_fences(raw))?;
    let mut advice = CategorizedAdvice::default();
    for category in AdviceCategory::ALL {
        let Some(value) = object.get(category.key()) else {
            trace!(key = category.key(), "key missing from model output");
            continue;
        };
        match string_array(value) {
            Some(items) => {
                for item in items {
                    advice.push(category, item);
                }
            }
            None => trace!(key = category.key(), "value is not an array of strings"),
        }
    }
    Ok(advice)
}

fn string_array(value: &Value) -> Option<Vec<&str>> {
    value.as_array()?.iter().map(Value::as_str).collect()
}

/// Scan free text line by line for category headers and `-` bullets.
pub fn parse_fallback(raw: &str) -> CategorizedAdvice {
    let mut advice = CategorizedAdvice::default();
    let mut current: Option<AdviceCategory> = None;

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(category) = match_header(line) {
            trace!(?category, line, "category header");
            current = Some(category);
        } else if let (Some(category), Some(item)) = (current, line.strip_prefix('-')) {
            advice.push(category, item);
        } else {
            trace!(line, "ignoring line");
        }
    }

    advice
}

/// Header keywords in priority order. A line can mention several
/// categories; the first match wins.
fn match_header(line: &str) -> Option<AdviceCategory> {
    let lower = line.to_lowercase();
    if lower.contains("crop care:") {
        Some(AdviceCategory::CropCare)
    } else if lower.contains("irrigation:") {
        Some(AdviceCategory::Irrigation)
    } else if lower.contains("pest") || lower.contains("disease") {
        Some(AdviceCategory::PestManagement)
    } else if lower.contains("urgent:") {
        Some(AdviceCategory::Urgent)
    } else if lower.contains("long term:") {
        Some(AdviceCategory::LongTerm)
    } else {
        None
    }
}

/// Strip a Markdown code fence the model may wrap its JSON in.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let rest = rest.trim_start();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}
