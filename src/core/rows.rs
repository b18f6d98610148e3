use crate::domain::model::{AssignmentMap, FreeSlotMap, ScheduleRow};

/// Flattens the schedule into (day, slot, teacher) rows for rendering.
///
/// Rows follow the free slot map's day and slot order. A pair missing from
/// `assignments` is written with `unassigned_label`.
pub fn to_rows(
    free_slots: &FreeSlotMap,
    assignments: &AssignmentMap,
    unassigned_label: &str,
) -> Vec<ScheduleRow> {
    let mut rows = Vec::new();

    for (day, slots) in free_slots {
        for slot in slots {
            let teacher = assignments
                .get(&(day.clone(), slot.clone()))
                .map(|a| a.label(unassigned_label))
                .unwrap_or(unassigned_label);
            rows.push(ScheduleRow {
                day: day.clone(),
                slot: slot.clone(),
                teacher: teacher.to_string(),
            });
        }
    }

    rows
}
