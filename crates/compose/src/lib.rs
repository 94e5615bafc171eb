//! Narrative composition engine: script generation and page composition.
//!
//! Both halves are pure transforms. The script engine turns an audience and
//! goal into an ordered sequence of section roles; the composer merges a
//! script with concrete content and a theme into a renderable tree.

pub mod composer;
pub mod sample;
pub mod script;

pub use composer::{compose, ComposeError, ComposeMode, RenderSection, RenderTree};
pub use script::{generate_script, AidaStage, Audience, Goal, PageScript, SectionScript, SectionType};
