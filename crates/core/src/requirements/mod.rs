pub mod checklist;
pub mod key;
