//! Categorized advice and the coarse sentence classifier.

use std::fmt::Write as _;

use serde::Serialize;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdviceCategory {
    CropCare,
    Irrigation,
    PestManagement,
    Urgent,
    LongTerm,
}

impl AdviceCategory {
    pub const ALL: [AdviceCategory; 5] = [
        AdviceCategory::CropCare,
        AdviceCategory::Irrigation,
        AdviceCategory::PestManagement,
        AdviceCategory::Urgent,
        AdviceCategory::LongTerm,
    ];

    /// JSON key the model is asked to use for this category.
    pub fn key(&self) -> &'static str {
        match self {
            AdviceCategory::CropCare => "cropCare",
            AdviceCategory::Irrigation => "irrigation",
            AdviceCategory::PestManagement => "pestManagement",
            AdviceCategory::Urgent => "urgent",
            AdviceCategory::LongTerm => "longTerm",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AdviceCategory::CropCare => "Crop care",
            AdviceCategory::Irrigation => "Irrigation",
            AdviceCategory::PestManagement => "Pest management",
            AdviceCategory::Urgent => "Urgent",
            AdviceCategory::LongTerm => "Long term",
        }
    }
}

/// Advice grouped by category.
///
/// Every category is always present. Entries are trimmed, non-empty and
/// kept in the order they were found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedAdvice {
    pub crop_care: Vec<String>,
    pub irrigation: Vec<String>,
    pub pest_management: Vec<String>,
    pub urgent: Vec<String>,
    pub long_term: Vec<String>,
}

impl CategorizedAdvice {
    pub fn get(&self, category: AdviceCategory) -> &[String] {
        match category {
            AdviceCategory::CropCare => &self.crop_care,
            AdviceCategory::Irrigation => &self.irrigation,
            AdviceCategory::PestManagement => &self.pest_management,
            AdviceCategory::Urgent => &self.urgent,
            AdviceCategory::LongTerm => &self.long_term,
        }
    }

    fn get_mut(&mut self, category: AdviceCategory) -> &mut Vec<String> {
        match category {
            AdviceCategory::CropCare => &mut self.crop_care,
            AdviceCategory::Irrigation => &mut self.irrigation,
            AdviceCategory::PestManagement => &mut self.pest_management,
            AdviceCategory::Urgent => &mut self.urgent,
            AdviceCategory::LongTerm => &mut self.long_term,
        }
    }

    /// Append a piece of advice. Returns `false` if it was blank and dropped.
    pub fn push(&mut self, category: AdviceCategory, text: &str) -> bool {
        let cleaned = text.trim();
        if cleaned.is_empty() {
            trace!(?category, "Dropping blank advice entry");
            return false;
        }
        self.get_mut(category).push(cleaned.to_string());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = (AdviceCategory, &[String])> {
        AdviceCategory::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Plain-text listing, skipping categories with no advice.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (category, items) in self.iter().filter(|(_, items)| !items.is_empty()) {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = writeln!(out, "{}:", category.title());
            for item in items {
                let _ = writeln!(out, "- {item}");
            }
        }
        out
    }
}

/// Buckets used by the sentence classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceCategory {
    PestManagement,
    Irrigation,
    CropCare,
    General,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceAdvice {
    pub crop_care: Vec<String>,
    pub pest_management: Vec<String>,
    pub irrigation: Vec<String>,
    pub general: Vec<String>,
}

impl SentenceAdvice {
    pub fn get(&self, category: SentenceCategory) -> &[String] {
        match category {
            SentenceCategory::PestManagement => &self.pest_management,
            SentenceCategory::Irrigation => &self.irrigation,
            SentenceCategory::CropCare => &self.crop_care,
            SentenceCategory::General => &self.general,
        }
    }
}

/// Classify one sentence by keyword. Pest and disease win over water,
/// which wins over crop and plant.
pub fn classify_sentence(sentence: &str) -> SentenceCategory {
    let lower = sentence.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));
    if has(&["pest", "disease"]) {
        SentenceCategory::PestManagement
    } else if has(&["water", "irrigation"]) {
        SentenceCategory::Irrigation
    } else if has(&["crop", "plant"]) {
        SentenceCategory::CropCare
    } else {
        SentenceCategory::General
    }
}

/// Split free-form advice into sentences on `.` and bucket each one.
///
/// This is the coarse path used when no structured advice is available;
/// it is unrelated to the line parser in [`crate::ai::parse`].
pub fn categorize_sentences(text: &str) -> SentenceAdvice {
    let mut out = SentenceAdvice::default();
    for sentence in text.split('.').map(str::trim).filter(|s| !s.is_empty()) {
        let bucket = match classify_sentence(sentence) {
            SentenceCategory::PestManagement => &mut out.pest_management,
            SentenceCategory::Irrigation => &mut out.irrigation,
            SentenceCategory::CropCare => &mut out.crop_care,
            SentenceCategory::General => &mut out.general,
        };
        bucket.push(sentence.to_string());
    }
    out
}
