pub mod dot;
pub mod streak;
pub mod traits;
