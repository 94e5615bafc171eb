/// Requirement key parsing utilities.
///
/// Requirement keys follow two forms:
/// - Plain: `{sectionId}.{fieldId}`
/// - Instanced (repeatable sections): `{sectionId}[{index}].{fieldId}`
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum KeyError {
    #[error("invalid requirement key '{0}'")]
    InvalidRequirementKey(String),
}

/// Identity of one content requirement: section, field, optional instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RequirementKey {
    section_id: String,
    field_id: String,
    instance: Option<u32>,
}

impl RequirementKey {
    pub fn new(section_id: &str, field_id: &str) -> Self {
        Self {
            section_id: section_id.to_string(),
            field_id: field_id.to_string(),
            instance: None,
        }
    }

    pub fn instanced(section_id: &str, field_id: &str, index: u32) -> Self {
        Self {
            section_id: section_id.to_string(),
            field_id: field_id.to_string(),
            instance: Some(index),
        }
    }

    /// Parse a requirement key from its canonical string form.
    pub fn parse(input: &str) -> Result<Self, KeyError> {
        let invalid = || KeyError::InvalidRequirementKey(input.to_string());

        let (section_part, field_id) = input.split_once('.').ok_or_else(invalid)?;
        if field_id.is_empty() || field_id.contains('.') {
            return Err(invalid());
        }

        match section_part.split_once('[') {
            None => {
                if section_part.is_empty() {
                    return Err(invalid());
                }
                Ok(Self::new(section_part, field_id))
            }
            Some((section_id, rest)) => {
                if section_id.is_empty() {
                    return Err(invalid());
                }
                let index_str = rest.strip_suffix(']').ok_or_else(invalid)?;
                let index: u32 = index_str.parse().map_err(|_| invalid())?;
                Ok(Self::instanced(section_id, field_id, index))
            }
        }
    }

    pub fn section_id(&self) -> &str {
        &self.section_id
    }

    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    pub fn instance(&self) -> Option<u32> {
        self.instance
    }

    pub fn is_instanced(&self) -> bool {
        self.instance.is_some()
    }

    /// The key with any instance index stripped.
    pub fn base(&self) -> Self {
        Self::new(&self.section_id, &self.field_id)
    }
}

impl fmt::Display for RequirementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.instance {
            Some(i) => write!(f, "{}[{i}].{}", self.section_id, self.field_id),
            None => write!(f, "{}.{}", self.section_id, self.field_id),
        }
    }
}

impl From<RequirementKey> for String {
    fn from(key: RequirementKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for RequirementKey {
    type Error = KeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_key() {
        let key = RequirementKey::parse("hero.headline").unwrap();
        assert_eq!(key, RequirementKey::new("hero", "headline"));
        assert_eq!(key.section_id(), "hero");
        assert_eq!(key.field_id(), "headline");
        assert!(!key.is_instanced());
        assert_eq!(key.to_string(), "hero.headline");
    }

    #[test]
    fn parse_instanced_key() {
        let key = RequirementKey::parse("news[2].title").unwrap();
        assert_eq!(key, RequirementKey::instanced("news", "title", 2));
        assert_eq!(key.instance(), Some(2));
        assert_eq!(key.base(), RequirementKey::new("news", "title"));
        assert_eq!(key.to_string(), "news[2].title");
    }

    #[test]
    fn malformed_keys_are_rejected() {
        for bad in [
            "",
            "hero",
            "hero.",
            ".headline",
            "hero.sub.headline",
            "news[].title",
            "news[x].title",
            "news[2.title",
            "[2].title",
        ] {
            assert_eq!(
                RequirementKey::parse(bad),
                Err(KeyError::InvalidRequirementKey(bad.to_string())),
                "expected '{bad}' to be rejected"
            );
        }
    }

    #[test]
    fn serde_round_trips_as_string() {
        let key = RequirementKey::instanced("news", "title", 1);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"news[1].title\"");
        let back: RequirementKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
