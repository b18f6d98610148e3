use crate::core::ConfigProvider;
use crate::domain::model::{TimetableLayout, DEFAULT_BUNDLE_NAME};
use crate::utils::error::{Result, TimetableError};
use crate::utils::logger::LOG_LEVELS;
use crate::utils::validation::{
    validate_input_path, validate_non_empty_string, validate_output_formats, validate_path,
    validate_unique_labels, Validate,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid placeholder pattern"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    pub timetable: Option<TimetableConfig>,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
    #[serde(skip)]
    layout: TimetableLayout,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_path: String,
    pub base_dir: Option<String>,
}

/// Overrides for the canonical timetable conventions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableConfig {
    pub days: Option<Vec<String>>,
    pub slots: Option<Vec<String>>,
    pub faculty_header: Option<String>,
    pub unassigned_label: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub compression: Option<CompressionConfig>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub text: Option<String>,
    pub csv: Option<String>,
    pub tsv: Option<String>,
    pub json: Option<String>,
    pub pdf: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TimetableError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let mut config: Self =
            toml::from_str(&processed_content).map_err(|e| TimetableError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.layout = config.build_layout();
        Ok(config)
    }

    /// 替換環境變數 (例如 ${TIMETABLE_DIR})
    fn substitute_env_vars(content: &str) -> String {
        ENV_PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    fn build_layout(&self) -> TimetableLayout {
        let mut layout = TimetableLayout::default();
        let Some(section) = &self.timetable else {
            return layout;
        };

        if let Some(days) = &section.days {
            layout.days = days.clone();
        }
        if let Some(slots) = &section.slots {
            layout.slots = slots.clone();
        }
        if let Some(header) = &section.faculty_header {
            layout.faculty_header = header.clone();
        }
        if let Some(label) = &section.unassigned_label {
            layout.unassigned_label = label.clone();
        }
        if let Some(title) = &section.title {
            layout.title = title.clone();
        }
        layout
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_input_path("source.input_path", &self.source.input_path)?;
        if let Some(base_dir) = &self.source.base_dir {
            validate_path("source.base_dir", base_dir)?;
        }

        validate_path("load.output_path", &self.load.output_path)?;
        validate_output_formats("load.output_formats", &self.load.output_formats)?;

        validate_unique_labels("timetable.days", &self.layout.days)?;
        validate_unique_labels("timetable.slots", &self.layout.slots)?;
        validate_non_empty_string("timetable.faculty_header", &self.layout.faculty_header)?;
        validate_non_empty_string("timetable.unassigned_label", &self.layout.unassigned_label)?;

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level.trim().to_ascii_lowercase().as_str()) {
                return Err(TimetableError::InvalidConfigValueError {
                    field: "monitoring.log_level".to_string(),
                    value: level.to_string(),
                    reason: format!("Expected one of: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        if let Some(CompressionConfig {
            enabled: true,
            filename: Some(filename),
        }) = &self.load.compression
        {
            validate_non_empty_string("load.compression.filename", filename)?;
        }

        Ok(())
    }

    pub fn base_dir(&self) -> &str {
        self.source.base_dir.as_deref().unwrap_or(".")
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> Option<&str> {
        Some(&self.source.input_path)
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn layout(&self) -> TimetableLayout {
        self.layout.clone()
    }

    fn bundle_name(&self) -> Option<&str> {
        match &self.load.compression {
            Some(c) if c.enabled => Some(c.filename.as_deref().unwrap_or(DEFAULT_BUNDLE_NAME)),
            _ => None,
        }
    }

    fn file_name(&self, format: &str) -> Option<&str> {
        let names = self.load.filenames.as_ref()?;
        let name = match format {
            "text" => &names.text,
            "csv" => &names.csv,
            "tsv" => &names.tsv,
            "json" => &names.json,
            "pdf" => &names.pdf,
            _ => return None,
        };
        name.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC: &str = r#"
[pipeline]
name = "remedial"
description = "Remedial timetable for semester 5"
version = "1.0.0"

[source]
input_path = "timetables/sem5.pdf"

[load]
output_path = "./remedial-output"
output_formats = ["pdf", "csv"]
"#;

    #[test]
    fn test_parse_basic_toml_config() {
        let config = TomlConfig::from_toml_str(BASIC).unwrap();

        assert_eq!(config.pipeline.name, "remedial");
        assert_eq!(config.input_path(), Some("timetables/sem5.pdf"));
        assert_eq!(config.base_dir(), ".");
        assert_eq!(config.output_formats().to_vec(), vec!["pdf", "csv"]);
        assert_eq!(config.layout(), TimetableLayout::default());
        assert!(config.bundle_name().is_none());
        assert!(!config.monitoring_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timetable_overrides() {
        let toml_content = r#"
[pipeline]
name = "evening"
description = "Evening batch"
version = "1.0"

[source]
input_path = "evening.txt"

[timetable]
days = ["Monday", "Wednesday", "Friday"]
slots = ["05:00-06:00 PM", "06:00-07:00 PM"]
faculty_header = "Teaching Staff"
unassigned_label = "TBD"

[load]
output_path = "./out"
output_formats = ["text"]

[load.filenames]
text = "evening.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let layout = config.layout();
        assert_eq!(layout.days, vec!["Monday", "Wednesday", "Friday"]);
        assert_eq!(layout.slots.len(), 2);
        assert_eq!(layout.faculty_header, "Teaching Staff");
        assert_eq!(layout.unassigned_label, "TBD");
        assert_eq!(layout.title, "Remedial Timetable");
        assert_eq!(config.file_name("text"), Some("evening.txt"));
        assert_eq!(config.file_name("csv"), None);
    }

    #[test]
    fn test_compression_bundle_name() {
        let toml_content = format!(
            "{}\n[load.compression]\nenabled = true\n",
            BASIC.trim_end()
        );
        let config = TomlConfig::from_toml_str(&toml_content).unwrap();
        assert_eq!(config.bundle_name(), Some(DEFAULT_BUNDLE_NAME));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("REMEDIAL_TEST_INPUT", "from-env.txt");

        let toml_content = r#"
[pipeline]
name = "test"
description = "test"
version = "1.0"

[source]
input_path = "${REMEDIAL_TEST_INPUT}"

[load]
output_path = "./output"
output_formats = ["csv"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.input_path, "from-env.txt");

        std::env::remove_var("REMEDIAL_TEST_INPUT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = BASIC.replace("timetables/sem5.pdf", "${REMEDIAL_UNSET_VAR_XYZ}");
        let config = TomlConfig::from_toml_str(&toml_content).unwrap();
        assert_eq!(config.source.input_path, "${REMEDIAL_UNSET_VAR_XYZ}");
    }

    #[test]
    fn test_config_validation() {
        let bad_format = BASIC.replace(r#"["pdf", "csv"]"#, r#"["docx"]"#);
        let config = TomlConfig::from_toml_str(&bad_format).unwrap();
        assert!(config.validate().is_err());

        let duplicate_days = format!(
            "{}\n[timetable]\ndays = [\"Monday\", \"Monday\"]\n",
            BASIC.trim_end()
        );
        let config = TomlConfig::from_toml_str(&duplicate_days).unwrap();
        assert!(config.validate().is_err());

        let bad_level = format!(
            "{}\n[monitoring]\nenabled = false\nlog_level = \"loud\"\n",
            BASIC.trim_end()
        );
        let config = TomlConfig::from_toml_str(&bad_level).unwrap();
        assert!(matches!(
            config.validate(),
            Err(TimetableError::InvalidConfigValueError { ref field, .. })
                if field == "monitoring.log_level"
        ));

        let no_input = BASIC.replace("timetables/sem5.pdf", "");
        let config = TomlConfig::from_toml_str(&no_input).unwrap();
        assert!(matches!(
            config.validate(),
            Err(TimetableError::MissingInputError { .. })
        ));
    }

    #[test]
    fn test_monitoring_log_level() {
        let toml_content = format!(
            "{}\n[monitoring]\nenabled = true\nlog_level = \"warn\"\n",
            BASIC.trim_end()
        );
        let config = TomlConfig::from_toml_str(&toml_content).unwrap();
        assert!(config.monitoring_enabled());
        assert_eq!(config.log_level(), Some("warn"));
        assert!(config.validate().is_ok());
        assert_eq!(
            crate::utils::logger::default_directive(false, config.log_level()),
            "remedial_timetable=warn,toml_timetable=warn"
        );
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let toml_content = format!(
            "{}\n[environment]\nSTAGE = \"prod\"\n",
            BASIC.trim_end()
        );
        let config = TomlConfig::from_toml_str(&toml_content).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[pipeline\nname =").unwrap_err();
        assert!(matches!(err, TimetableError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pipeline.name, "remedial");
    }
}
