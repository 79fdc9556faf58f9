pub mod app_properties;
pub mod content_types;
pub mod core_properties;
pub mod relationships;
