use crate::utils::error::{Result, TimetableError};
use regex::Regex;

/// Splits a timetable into per-day blocks.
///
/// A day's block starts at the first occurrence of its name and runs up to
/// the next occurrence of any known day name, or to the end of the text.
#[derive(Debug, Clone)]
pub struct DaySegmenter {
    headings: Regex,
}

impl DaySegmenter {
    pub fn new<S: AsRef<str>>(days: &[S]) -> Result<Self> {
        let alternation = days
            .iter()
            .map(|d| d.as_ref())
            .filter(|d| !d.is_empty())
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");

        if alternation.is_empty() {
            return Err(TimetableError::ConfigError {
                message: "At least one day name is required to segment a timetable".to_string(),
            });
        }

        let headings = Regex::new(&alternation).map_err(|e| TimetableError::ConfigError {
            message: format!("Invalid day heading pattern: {}", e),
        })?;

        Ok(Self { headings })
    }

    pub fn segment<'t>(&self, text: &'t str, day: &str) -> Option<&'t str> {
        if day.is_empty() {
            return None;
        }
        let start = text.find(day)?;
        let body_start = start + day.len();
        let end = self
            .headings
            .find_at(text, body_start)
            .map(|m| m.start())
            .unwrap_or(text.len());
        Some(&text[start..end])
    }
}

/// One-shot form of [`DaySegmenter::segment`].
pub fn segment<'t, S: AsRef<str>>(text: &'t str, day: &str, all_days: &[S]) -> Option<&'t str> {
    DaySegmenter::new(all_days).ok()?.segment(text, day)
}
