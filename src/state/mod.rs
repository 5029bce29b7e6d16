pub mod gallery;
pub mod lifecycle;
pub mod zoom;
