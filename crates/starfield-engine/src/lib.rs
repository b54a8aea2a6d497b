pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use crate::api::config::{StarfieldConfig, DampingMode, ParticleConfig, VisibilityConfig};
pub use crate::api::particles::ParticleField;
pub use crate::api::starfield::Starfield;
pub use crate::core::particle::Particle;
pub use crate::core::star::{Star, StarPool};
pub use crate::core::viewport::{Viewport, WindowMetrics};
pub use crate::core::velocity::Velocity;
pub use crate::core::time::FrameClock;
pub use crate::core::driver::{AnimationDriver, CancelToken, FrameStatus};
pub use crate::core::rng::Rng;
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::input::pointer::{PointerKind, PointerTracker};
pub use crate::renderer::dot::Dot;
pub use crate::renderer::streak::{Streak, StreakBuffer};
pub use crate::renderer::traits::Surface;
pub use crate::systems::physics::ReentryEdge;
pub use crate::systems::visibility::{CanvasVisibility, VisibilityGate};
