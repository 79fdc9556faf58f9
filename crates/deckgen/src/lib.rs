pub mod common;
pub mod packages;
pub(crate) mod parts;
pub mod presentation;
pub(crate) mod serializers;
