use crate::core::assigner::assign;
use crate::core::roster::extract_roster;
use crate::core::rows::to_rows;
use crate::core::slots::extract_free_slots;
use crate::domain::model::{RemedialTimetable, SourceDocument, TimetableLayout};
use crate::utils::error::Result;
use chrono::Utc;

/// Runs the whole text-to-schedule transform on one decoded document.
pub fn build_timetable(
    document: &SourceDocument,
    layout: &TimetableLayout,
) -> Result<RemedialTimetable> {
    let free_slots = extract_free_slots(&document.text, layout)?;
    let roster = extract_roster(&document.text, &layout.faculty_header)?;

    tracing::info!(
        "Found {} free slots across {} days and {} faculty members",
        free_slots.values().map(Vec::len).sum::<usize>(),
        free_slots.len(),
        roster.len()
    );

    let assignments = assign(&free_slots, &roster);
    let rows = to_rows(&free_slots, &assignments, &layout.unassigned_label);

    Ok(RemedialTimetable {
        title: layout.title.clone(),
        generated_at: Utc::now(),
        source_name: document.name.clone(),
        free_slots,
        roster,
        assignments,
        rows,
    })
}
