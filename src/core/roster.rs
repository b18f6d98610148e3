use crate::domain::model::FacultyRoster;
use crate::utils::error::{Result, TimetableError};
use once_cell::sync::Lazy;
use regex::Regex;

static FACULTY_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]{2,3})\s+([A-Za-z. ]+)").expect("valid faculty entry pattern"));

/// Reads the "acronym  full name" listing that follows a section header.
#[derive(Debug, Clone)]
pub struct RosterExtractor {
    section: Regex,
}

impl RosterExtractor {
    pub fn new(header: &str) -> Result<Self> {
        if header.trim().is_empty() {
            return Err(TimetableError::ConfigError {
                message: "Faculty section header cannot be empty".to_string(),
            });
        }

        // Header, then the first run of consecutive acronym/name lines.
        let pattern = format!(
            r"(?s){}.*?((?:[A-Z]{{2,3}}\s+[A-Za-z. ]+\n?)+)",
            regex::escape(header)
        );
        let section = Regex::new(&pattern).map_err(|e| TimetableError::ConfigError {
            message: format!("Invalid faculty section pattern: {}", e),
        })?;

        Ok(Self { section })
    }

    pub fn extract(&self, text: &str) -> FacultyRoster {
        let mut roster = FacultyRoster::new();

        let Some(section) = self.section.captures(text).and_then(|c| c.get(1)) else {
            tracing::warn!("No faculty section found; roster is empty");
            return roster;
        };

        for caps in FACULTY_ENTRY.captures_iter(section.as_str()) {
            let acronym = caps[1].trim().to_string();
            let name = caps[2].trim().to_string();
            // Repeated acronyms keep their first position but take the later name.
            if let Some(previous) = roster.insert(acronym.clone(), name) {
                tracing::warn!(
                    "Faculty acronym {} listed more than once; replacing '{}' with '{}'",
                    acronym,
                    previous,
                    roster[&acronym]
                );
            }
        }

        tracing::debug!("Extracted faculty roster: {:?}", roster);
        roster
    }
}

pub fn extract_roster(text: &str, header: &str) -> Result<FacultyRoster> {
    Ok(RosterExtractor::new(header)?.extract(text))
}
