pub mod color;
pub mod envelope;
pub mod param;
