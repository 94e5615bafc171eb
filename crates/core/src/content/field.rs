use serde::{Deserialize, Serialize};

/// Kinds of content a template field can ask an author for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Textarea,
    Image,
    Number,
    Select,
    RichText,
}

impl FieldType {
    /// Whether submissions for this field are file references rather than text.
    pub fn is_file(&self) -> bool {
        matches!(self, FieldType::Image)
    }
}

/// Validation constraints attached to a field.
///
/// Length bounds apply to text-like fields; geometry, size and format
/// bounds apply to image fields. Unset bounds are unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size_kb: Option<u32>,
    /// Accepted file formats, lowercase extensions (e.g. "jpg", "webp").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formats: Option<Vec<String>>,
}

impl FieldValidation {
    pub fn text(min_length: Option<usize>, max_length: Option<usize>) -> Self {
        Self {
            min_length,
            max_length,
            ..Self::default()
        }
    }

    pub fn image(min_width: u32, min_height: u32, max_size_kb: u32, formats: &[&str]) -> Self {
        Self {
            min_width: Some(min_width),
            min_height: Some(min_height),
            max_size_kb: Some(max_size_kb),
            formats: Some(formats.iter().map(|f| f.to_string()).collect()),
            ..Self::default()
        }
    }
}

/// A single piece of content a client must provide for a section.
///
/// Field ids are unique within their section and immutable once the owning
/// template is published.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentField {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

impl ContentField {
    pub fn new(id: &str, label: &str, field_type: FieldType, required: bool) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            field_type,
            required,
            placeholder: None,
            help_text: None,
            validation: None,
        }
    }

    pub fn with_validation(mut self, validation: FieldValidation) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn with_help_text(mut self, help_text: &str) -> Self {
        self.help_text = Some(help_text.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&FieldType::RichText).unwrap(),
            "\"rich-text\""
        );
        assert_eq!(
            serde_json::to_string(&FieldType::Textarea).unwrap(),
            "\"textarea\""
        );
    }

    #[test]
    fn field_serializes_type_key() {
        let field = ContentField::new("headline", "Headline", FieldType::Text, true);
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["required"], true);
        assert!(json.get("validation").is_none());
    }

    #[test]
    fn only_images_are_files() {
        assert!(FieldType::Image.is_file());
        assert!(!FieldType::Text.is_file());
        assert!(!FieldType::RichText.is_file());
    }
}
