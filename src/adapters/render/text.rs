use crate::core::{RemedialTimetable, ScheduleRenderer};
use crate::domain::model::COLUMN_HEADERS;
use crate::utils::error::Result;

/// Fixed-width plain text table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTableRenderer;

impl TextTableRenderer {
    fn column_widths(timetable: &RemedialTimetable) -> [usize; 3] {
        let mut widths = COLUMN_HEADERS.map(|h| h.chars().count());
        for row in &timetable.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn separator(widths: &[usize; 3]) -> String {
        let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
        format!("+{}+", dashes.join("+"))
    }

    fn line(cells: [&str; 3], widths: &[usize; 3]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!(" {:<width$} ", cell, width = width))
            .collect();
        format!("|{}|", padded.join("|"))
    }
}

impl ScheduleRenderer for TextTableRenderer {
    fn format(&self) -> &'static str {
        "text"
    }

    fn default_file_name(&self) -> &'static str {
        "remedial_timetable.txt"
    }

    fn render(&self, timetable: &RemedialTimetable) -> Result<Vec<u8>> {
        let widths = Self::column_widths(timetable);
        let separator = Self::separator(&widths);
        let table_width = separator.chars().count();

        let mut lines = Vec::with_capacity(timetable.rows.len() + 6);
        lines.push(format!("{:^width$}", timetable.title, width = table_width));
        lines.push(String::new());
        lines.push(separator.clone());
        lines.push(Self::line(COLUMN_HEADERS, &widths));
        lines.push(separator.clone());
        for row in &timetable.rows {
            lines.push(Self::line(row.cells(), &widths));
        }
        lines.push(separator);

        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output.into_bytes())
    }
}
