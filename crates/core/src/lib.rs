//! Core domain for the pageflow content pipeline.
//!
//! Everything in this crate is a pure, in-memory transform: the content
//! schema, the template registry, checklist generation, material tracking,
//! reminder generation and the theme registry. The only async pieces are
//! the event bus and the storage boundary, both of which delegate actual
//! I/O to external collaborators.

pub mod content;
pub mod events;
pub mod material;
pub mod reminder;
pub mod requirements;
pub mod storage;
pub mod template;
pub mod theme;

pub use content::field::{ContentField, FieldType, FieldValidation};
pub use content::section::ContentSection;
pub use material::submission::{MaterialValue, Submission, SubmissionState};
pub use material::tracker::{compute_status, MaterialItem, ProjectMaterialStatus};
pub use reminder::{generate_reminder, ReminderTrigger};
pub use requirements::checklist::{ChecklistError, ContentRequirement, ProjectContentChecklist};
pub use requirements::key::{KeyError, RequirementKey};
pub use template::config::{Complexity, TemplateConfig, TemplateModule};
pub use template::registry::TemplateRegistry;
pub use theme::{ThemeConfig, ThemeMode, ThemeRegistry};
