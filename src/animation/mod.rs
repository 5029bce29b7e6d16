pub mod ease;
pub mod lerp;
pub mod stops;
