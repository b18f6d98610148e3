use crate::domain::model::{RemedialTimetable, SourceDocument, TimetableLayout};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn layout(&self) -> TimetableLayout;

    /// File name of the ZIP bundle, when artifacts are bundled.
    fn bundle_name(&self) -> Option<&str> {
        None
    }

    /// Overrides the renderer's default file name for `format`.
    fn file_name(&self, _format: &str) -> Option<&str> {
        None
    }
}

/// Turns raw input bytes into document text.
pub trait DocumentDecoder: Send + Sync {
    fn decode(&self, source_name: &str, bytes: &[u8]) -> Result<String>;
}

/// Writes a finished timetable in one output format.
pub trait ScheduleRenderer: Send + Sync {
    fn format(&self) -> &'static str;
    fn default_file_name(&self) -> &'static str;
    fn render(&self, timetable: &RemedialTimetable) -> Result<Vec<u8>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<SourceDocument>;
    async fn transform(&self, document: SourceDocument) -> Result<RemedialTimetable>;
    async fn load(&self, timetable: RemedialTimetable) -> Result<String>;
}
