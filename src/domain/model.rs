use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIME_SLOTS: [&str; 9] = [
    "09:00-10:00 AM",
    "10:00-11:00 AM",
    "11:00-12:00 PM",
    "12:00-01:00 PM",
    "01:00-02:00 PM",
    "02:00-03:00 PM",
    "03:00-04:00 PM",
    "04:00-05:00 PM",
    "05:00-06:00 PM",
];

pub const DEFAULT_FACULTY_HEADER: &str = "Faculty";
pub const UNASSIGNED_LABEL: &str = "Not Assigned";
pub const TIMETABLE_TITLE: &str = "Remedial Timetable";
pub const DEFAULT_BUNDLE_NAME: &str = "remedial_timetable.zip";
pub const COLUMN_HEADERS: [&str; 3] = ["Day", "Time Slot", "Assigned Teacher"];

/// Teaching days, Monday through Saturday. Sunday is never scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

/// The conventions a source timetable is read with, and the labels the
/// output is written with. Passed into the pipeline per run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableLayout {
    pub days: Vec<String>,
    pub slots: Vec<String>,
    pub faculty_header: String,
    pub unassigned_label: String,
    pub title: String,
}

impl Default for TimetableLayout {
    fn default() -> Self {
        Self {
            days: Weekday::ALL.iter().map(|d| d.as_str().to_string()).collect(),
            slots: DEFAULT_TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
            faculty_header: DEFAULT_FACULTY_HEADER.to_string(),
            unassigned_label: UNASSIGNED_LABEL.to_string(),
            title: TIMETABLE_TITLE.to_string(),
        }
    }
}

/// Day -> free canonical slots, in day order. Every configured day is a key.
pub type FreeSlotMap = IndexMap<String, Vec<String>>;

/// Acronym -> full name, in order of first appearance.
pub type FacultyRoster = IndexMap<String, String>;

/// (day, slot) -> who covers it.
pub type AssignmentMap = IndexMap<(String, String), Assignment>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assignment {
    Faculty(String),
    Unassigned,
}

impl Assignment {
    pub fn label<'a>(&'a self, unassigned_label: &'a str) -> &'a str {
        match self {
            Assignment::Faculty(name) => name,
            Assignment::Unassigned => unassigned_label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub day: String,
    pub slot: String,
    pub teacher: String,
}

impl ScheduleRow {
    pub fn cells(&self) -> [&str; 3] {
        [&self.day, &self.slot, &self.teacher]
    }
}

/// Text decoded from the uploaded timetable.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    pub name: String,
    pub text: String,
}

/// Everything the load stage needs to write the remedial timetable.
#[derive(Debug, Clone, Serialize)]
pub struct RemedialTimetable {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub source_name: String,
    pub free_slots: FreeSlotMap,
    pub roster: FacultyRoster,
    #[serde(skip)]
    pub assignments: AssignmentMap,
    pub rows: Vec<ScheduleRow>,
}

impl RemedialTimetable {
    pub fn free_slot_count(&self) -> usize {
        self.free_slots.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_canonical_lists() {
        let layout = TimetableLayout::default();
        assert_eq!(layout.days.len(), 6);
        assert_eq!(layout.days[0], "Monday");
        assert_eq!(layout.days[5], "Saturday");
        assert!(!layout.days.iter().any(|d| d == "Sunday"));
        assert_eq!(layout.slots.len(), 9);
        assert_eq!(layout.slots[0], "09:00-10:00 AM");
        assert_eq!(layout.slots[8], "05:00-06:00 PM");
        assert_eq!(layout.unassigned_label, "Not Assigned");
    }

    #[test]
    fn test_assignment_label() {
        let named = Assignment::Faculty("Alice Smith".to_string());
        assert_eq!(named.label(UNASSIGNED_LABEL), "Alice Smith");
        assert_eq!(Assignment::Unassigned.label(UNASSIGNED_LABEL), "Not Assigned");
    }
}
