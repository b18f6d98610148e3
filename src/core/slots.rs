use crate::core::segmenter::DaySegmenter;
use crate::domain::model::{FreeSlotMap, TimetableLayout};
use crate::utils::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Busy periods as printed in the source, e.g. "10:00-11:00 AM". The meridiem
// is any 2-3 uppercase letters, looser than the canonical labels.
static OCCUPIED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{2}:\d{2}-\d{2}:\d{2} [A-Z]{2,3}").expect("valid marker pattern"));

/// Every occupied time range mentioned in a day block, in order of appearance.
pub fn occupied_markers(day_block: &str) -> Vec<&str> {
    OCCUPIED_MARKER
        .find_iter(day_block)
        .map(|m| m.as_str())
        .collect()
}

/// Canonical slots whose exact label is not marked occupied in `day_block`.
///
/// An absent block yields no free slots; a block without any markers yields
/// every canonical slot.
pub fn free_slots_for_day<S: AsRef<str>>(
    day_block: Option<&str>,
    canonical_slots: &[S],
) -> Vec<String> {
    let Some(block) = day_block else {
        return Vec::new();
    };

    let occupied: HashSet<&str> = occupied_markers(block).into_iter().collect();
    canonical_slots
        .iter()
        .map(|s| s.as_ref())
        .filter(|slot| !occupied.contains(slot))
        .map(str::to_string)
        .collect()
}

/// Builds the free slot map for every day in the layout.
pub fn extract_free_slots(text: &str, layout: &TimetableLayout) -> Result<FreeSlotMap> {
    let segmenter = DaySegmenter::new(&layout.days)?;
    let mut free_slots = FreeSlotMap::with_capacity(layout.days.len());

    for day in &layout.days {
        let block = segmenter.segment(text, day);
        match block {
            Some(block) => tracing::debug!(
                "{}: occupied markers {:?}",
                day,
                occupied_markers(block)
            ),
            None => tracing::debug!("{}: no section found in document", day),
        }
        free_slots.insert(day.clone(), free_slots_for_day(block, &layout.slots));
    }

    tracing::debug!("Extracted free slots: {:?}", free_slots);
    Ok(free_slots)
}
