//! Output formats for a finished remedial timetable.
//!
//! Every renderer writes the same title and the same three columns
//! (`Day`, `Time Slot`, `Assigned Teacher`) from [`RemedialTimetable::rows`].

pub mod delimited;
pub mod json;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod text;

pub use delimited::DelimitedRenderer;
pub use json::JsonRenderer;
#[cfg(feature = "pdf")]
pub use pdf::PdfRenderer;
pub use text::TextTableRenderer;

use crate::core::ScheduleRenderer;
use crate::utils::error::{Result, TimetableError};

pub fn renderer_for(format: &str) -> Result<Box<dyn ScheduleRenderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(TextTableRenderer)),
        "csv" => Ok(Box::new(DelimitedRenderer::csv())),
        "tsv" => Ok(Box::new(DelimitedRenderer::tsv())),
        "json" => Ok(Box::new(JsonRenderer)),
        #[cfg(feature = "pdf")]
        "pdf" => Ok(Box::new(PdfRenderer::default())),
        #[cfg(not(feature = "pdf"))]
        "pdf" => Err(TimetableError::UnsupportedFormatError {
            format: format.to_string(),
            reason: "this build has no PDF support (enable the `pdf` feature)".to_string(),
        }),
        other => Err(TimetableError::UnsupportedFormatError {
            format: other.to_string(),
            reason: "no renderer registered for this format".to_string(),
        }),
    }
}
