pub mod capacity;
pub mod draft;
pub mod validation;
