use crate::adapters::decode::AutoDecoder;
use crate::adapters::render::renderer_for;
use crate::core::timetable::build_timetable;
use crate::core::{ConfigProvider, DocumentDecoder, Pipeline, Storage};
use crate::domain::model::{RemedialTimetable, SourceDocument};
use crate::utils::error::{Result, TimetableError};
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};

const TEXT_PREVIEW_CHARS: usize = 500;

pub struct RemedialPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    decoder: Box<dyn DocumentDecoder>,
}

impl<S: Storage, C: ConfigProvider> RemedialPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            decoder: Box::new(AutoDecoder),
        }
    }

    pub fn with_decoder<D: DocumentDecoder + 'static>(mut self, decoder: D) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_path())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }

    fn render_all(&self, timetable: &RemedialTimetable) -> Result<Vec<(String, Vec<u8>)>> {
        let mut artifacts = Vec::new();
        for format in self.config.output_formats() {
            let renderer = renderer_for(format)?;
            let data = renderer.render(timetable)?;
            let file_name = self
                .config
                .file_name(renderer.format())
                .unwrap_or(renderer.default_file_name());
            tracing::debug!("Rendered {} ({} bytes)", file_name, data.len());
            artifacts.push((file_name.to_string(), data));
        }
        Ok(artifacts)
    }
}

fn bundle(artifacts: &[(String, Vec<u8>)]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in artifacts {
        zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
        zip.write_all(data)?;
    }
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RemedialPipeline<S, C> {
    async fn extract(&self) -> Result<SourceDocument> {
        let input = self
            .config
            .input_path()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| TimetableError::MissingInputError {
                message: "no file selected".to_string(),
            })?;

        tracing::debug!("Reading timetable from: {}", input);
        let bytes = match self.storage.read_file(input).await {
            Ok(bytes) => bytes,
            Err(TimetableError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TimetableError::MissingInputError {
                    message: format!("'{}' was not found", input),
                });
            }
            Err(e) => return Err(e),
        };

        if bytes.is_empty() {
            return Err(TimetableError::MissingInputError {
                message: format!("'{}' is empty", input),
            });
        }

        let text = self.decoder.decode(input, &bytes)?;
        let preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
        tracing::debug!("Extracted text ({} chars): {}", text.chars().count(), preview);

        Ok(SourceDocument {
            name: input.to_string(),
            text,
        })
    }

    async fn transform(&self, document: SourceDocument) -> Result<RemedialTimetable> {
        build_timetable(&document, &self.config.layout())
    }

    async fn load(&self, timetable: RemedialTimetable) -> Result<String> {
        let artifacts = self.render_all(&timetable)?;

        if let Some(bundle_name) = self.config.bundle_name() {
            tracing::debug!("Creating ZIP file with {} files", artifacts.len());
            let zip_data = bundle(&artifacts)?;
            let output_path = self.output_file(bundle_name);

            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(&output_path, &zip_data).await?;
            return Ok(output_path);
        }

        let mut written = Vec::with_capacity(artifacts.len());
        for (name, data) in &artifacts {
            let output_path = self.output_file(name);
            self.storage.write_file(&output_path, data).await?;
            written.push(output_path);
        }
        Ok(written.join(", "))
    }
}
