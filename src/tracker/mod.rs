pub mod listeners;
pub mod scroll;
pub mod smoothing;
