pub mod scaffold;
pub mod slide;
