pub mod json;
pub mod repositories;
