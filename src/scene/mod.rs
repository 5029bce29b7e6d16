pub mod config;
pub mod engine;
pub mod presets;
pub mod render;
