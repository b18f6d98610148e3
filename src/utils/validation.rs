use crate::utils::error::{Result, TimetableError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Formats the load stage knows how to render.
pub const SUPPORTED_FORMATS: &[&str] = &["text", "txt", "csv", "tsv", "json", "pdf"];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TimetableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TimetableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// An empty input path is a rejected request, not a config typo.
pub fn validate_input_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(TimetableError::MissingInputError {
            message: format!("'{}' does not name a file", field_name),
        });
    }
    validate_path(field_name, path)
}

pub fn validate_output_formats(field_name: &str, formats: &[String]) -> Result<()> {
    if formats.is_empty() {
        return Err(TimetableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one output format is required".to_string(),
        });
    }

    for format in formats {
        if !SUPPORTED_FORMATS.contains(&format.as_str()) {
            return Err(TimetableError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_FORMATS.join(", ")
                ),
            });
        }
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TimetableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_labels(field_name: &str, labels: &[String]) -> Result<()> {
    if labels.is_empty() {
        return Err(TimetableError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "List cannot be empty".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for label in labels {
        validate_non_empty_string(field_name, label)?;
        if !seen.insert(label.as_str()) {
            return Err(TimetableError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: label.clone(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_input_path() {
        assert!(validate_input_path("input", "timetable.pdf").is_ok());
        assert!(matches!(
            validate_input_path("input", "  "),
            Err(TimetableError::MissingInputError { .. })
        ));
    }

    #[test]
    fn test_validate_output_formats() {
        let formats = vec!["csv".to_string(), "text".to_string()];
        assert!(validate_output_formats("formats", &formats).is_ok());

        let alias = vec!["txt".to_string()];
        assert!(validate_output_formats("formats", &alias).is_ok());

        let invalid = vec!["docx".to_string()];
        assert!(validate_output_formats("formats", &invalid).is_err());
        assert!(validate_output_formats("formats", &[]).is_err());
    }

    #[test]
    fn test_validate_unique_labels() {
        let days = vec!["Monday".to_string(), "Tuesday".to_string()];
        assert!(validate_unique_labels("days", &days).is_ok());

        let dupes = vec!["Monday".to_string(), "Monday".to_string()];
        assert!(validate_unique_labels("days", &dupes).is_err());

        let blank = vec!["Monday".to_string(), " ".to_string()];
        assert!(validate_unique_labels("days", &blank).is_err());
    }
}
