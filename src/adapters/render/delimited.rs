use crate::core::{RemedialTimetable, ScheduleRenderer};
use crate::domain::model::COLUMN_HEADERS;
use crate::utils::error::{Result, TimetableError};
use csv::WriterBuilder;

/// CSV or TSV, header row first. The title is implied by the file name.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedRenderer {
    delimiter: u8,
    format: &'static str,
    file_name: &'static str,
}

impl DelimitedRenderer {
    pub fn csv() -> Self {
        Self {
            delimiter: b',',
            format: "csv",
            file_name: "remedial_timetable.csv",
        }
    }

    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            format: "tsv",
            file_name: "remedial_timetable.tsv",
        }
    }
}

impl ScheduleRenderer for DelimitedRenderer {
    fn format(&self) -> &'static str {
        self.format
    }

    fn default_file_name(&self) -> &'static str {
        self.file_name
    }

    fn render(&self, timetable: &RemedialTimetable) -> Result<Vec<u8>> {
        let mut wtr = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        wtr.write_record(COLUMN_HEADERS)?;
        for row in &timetable.rows {
            wtr.write_record(row.cells())?;
        }

        wtr.into_inner().map_err(|e| TimetableError::RenderError {
            format: self.format.to_string(),
            message: e.to_string(),
        })
    }
}
