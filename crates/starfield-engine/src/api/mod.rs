pub mod config;
pub mod particles;
pub mod starfield;
