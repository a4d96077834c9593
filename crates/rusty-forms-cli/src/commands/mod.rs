pub mod render;
pub mod rules;
