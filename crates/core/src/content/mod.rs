pub mod field;
pub mod page;
pub mod section;
pub mod validate;
