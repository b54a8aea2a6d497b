pub mod drift;
pub mod physics;
pub mod render;
pub mod visibility;
