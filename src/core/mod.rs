pub mod assigner;
pub mod engine;
pub mod pipeline;
pub mod roster;
pub mod rows;
pub mod segmenter;
pub mod slots;
pub mod timetable;

pub use crate::domain::model::{RemedialTimetable, SourceDocument, TimetableLayout};
pub use crate::domain::ports::{
    ConfigProvider, DocumentDecoder, Pipeline, ScheduleRenderer, Storage,
};
pub use crate::utils::error::Result;
