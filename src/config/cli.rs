use crate::core::ConfigProvider;
use crate::domain::model::{
    TimetableLayout, DEFAULT_BUNDLE_NAME, DEFAULT_FACULTY_HEADER, TIMETABLE_TITLE,
    UNASSIGNED_LABEL,
};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_input_path, validate_non_empty_string, validate_output_formats, validate_path,
    Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "remedial-timetable")]
#[command(about = "Builds a remedial timetable from the free slots of a class timetable")]
pub struct CliConfig {
    /// Timetable document to read (.txt or .pdf)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Directory that relative input and output paths are resolved against
    #[arg(long, default_value = ".")]
    pub base_dir: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Output formats: text, csv, tsv, json, pdf
    #[arg(long, value_delimiter = ',', default_value = "text,csv")]
    pub formats: Vec<String>,

    /// Heading that introduces the faculty listing
    #[arg(long, default_value = DEFAULT_FACULTY_HEADER)]
    pub faculty_header: String,

    /// Label written for slots nobody could be assigned to
    #[arg(long, default_value = UNASSIGNED_LABEL)]
    pub unassigned_label: String,

    /// Pack every output file into a single ZIP archive
    #[arg(long)]
    pub bundle: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn layout(&self) -> TimetableLayout {
        TimetableLayout {
            faculty_header: self.faculty_header.clone(),
            unassigned_label: self.unassigned_label.clone(),
            title: TIMETABLE_TITLE.to_string(),
            ..TimetableLayout::default()
        }
    }

    fn bundle_name(&self) -> Option<&str> {
        self.bundle.then_some(DEFAULT_BUNDLE_NAME)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_input_path("input", self.input.as_deref().unwrap_or_default())?;
        validate_path("base_dir", &self.base_dir)?;
        validate_path("output_path", &self.output_path)?;
        validate_output_formats("formats", &self.formats)?;
        validate_non_empty_string("faculty_header", &self.faculty_header)?;
        validate_non_empty_string("unassigned_label", &self.unassigned_label)?;
        Ok(())
    }
}
