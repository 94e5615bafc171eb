/// Field-value validation.
///
/// Checks a submitted material value against the owning field's type and
/// validation constraints before it enters the tracker.
use thiserror::Error;

use super::field::{ContentField, FieldType};
use crate::material::submission::MaterialValue;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{label} must be at least {min} characters")]
    TooShort { label: String, min: usize },
    #[error("{label} must be at most {max} characters")]
    TooLong { label: String, max: usize },
    #[error("{label} expects text, not an uploaded file")]
    ExpectedText { label: String },
    #[error("{label} expects an uploaded file, not text")]
    ExpectedFile { label: String },
    #[error("{label} must be a number")]
    NotANumber { label: String },
    #[error("{label} must be at least {min_width}x{min_height}px")]
    ImageTooSmall {
        label: String,
        min_width: u32,
        min_height: u32,
    },
    #[error("{label} exceeds the {max_kb} KB size limit")]
    ImageTooLarge { label: String, max_kb: u32 },
    #[error("{label}: format '{format}' is not accepted")]
    UnsupportedFormat { label: String, format: String },
}

/// Validate a submitted value against its field definition.
pub fn validate_field_value(
    field: &ContentField,
    value: &MaterialValue,
) -> Result<(), ValidationError> {
    let label = field.label.clone();

    match (field.field_type.is_file(), value) {
        (true, MaterialValue::Text { .. }) => return Err(ValidationError::ExpectedFile { label }),
        (false, MaterialValue::File { .. }) => return Err(ValidationError::ExpectedText { label }),
        _ => {}
    }

    match value {
        MaterialValue::Text { text } => {
            if field.field_type == FieldType::Number && text.trim().parse::<f64>().is_err() {
                return Err(ValidationError::NotANumber { label });
            }
            if let Some(validation) = &field.validation {
                if let Some(min) = validation.min_length {
                    if text.chars().count() < min {
                        return Err(ValidationError::TooShort { label, min });
                    }
                }
                if let Some(max) = validation.max_length {
                    if text.chars().count() > max {
                        return Err(ValidationError::TooLong { label, max });
                    }
                }
            }
            Ok(())
        }
        MaterialValue::File {
            width,
            height,
            size_kb,
            format,
            ..
        } => {
            if let Some(validation) = &field.validation {
                let min_width = validation.min_width.unwrap_or(0);
                let min_height = validation.min_height.unwrap_or(0);
                // Geometry is only checked when the upload reports it.
                if let (Some(w), Some(h)) = (width, height) {
                    if *w < min_width || *h < min_height {
                        return Err(ValidationError::ImageTooSmall {
                            label,
                            min_width,
                            min_height,
                        });
                    }
                }
                if let (Some(max_kb), Some(kb)) = (validation.max_size_kb, size_kb) {
                    if *kb > max_kb {
                        return Err(ValidationError::ImageTooLarge { label, max_kb });
                    }
                }
                if let (Some(formats), Some(fmt)) = (&validation.formats, format) {
                    if !formats.iter().any(|f| f.eq_ignore_ascii_case(fmt)) {
                        return Err(ValidationError::UnsupportedFormat {
                            label,
                            format: fmt.clone(),
                        });
                    }
                }
            }
            Ok(())
        }
    }
}
