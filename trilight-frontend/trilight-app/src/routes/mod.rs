pub mod analytics;
pub mod not_found;
