pub mod driver;
pub mod particle;
pub mod rng;
pub mod star;
pub mod time;
pub mod velocity;
pub mod viewport;
