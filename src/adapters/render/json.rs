use crate::core::{RemedialTimetable, ScheduleRenderer};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ScheduleRenderer for JsonRenderer {
    fn format(&self) -> &'static str {
        "json"
    }

    fn default_file_name(&self) -> &'static str {
        "remedial_timetable.json"
    }

    fn render(&self, timetable: &RemedialTimetable) -> Result<Vec<u8>> {
        let json = serde_json::to_vec_pretty(timetable)?;
        Ok(json)
    }
}
