pub mod progress;
pub mod render;
