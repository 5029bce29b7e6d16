pub mod stagger;
pub mod window;
