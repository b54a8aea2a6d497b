pub mod canvas;
pub mod dom;
pub mod particles;
pub mod runner;

pub use canvas::CanvasSurface;
pub use particles::ParticleLayer;
pub use runner::StarfieldRunner;
pub use starfield_engine::{ParticleConfig, StarfieldConfig};

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Generate the `#[wasm_bindgen]` exports for a page that hosts a starfield.
///
/// Generates:
/// - `thread_local!` storage for the [`StarfieldRunner`]
/// - `start_starfield(config, particles)` / `stop_starfield()` for the page's
///   own Rust code
/// - exports `starfield_init(config_json)` and `starfield_stop()`
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// starfield_web::export_starfield!("my-page");
/// ```
#[macro_export]
macro_rules! export_starfield {
    ($page_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::StarfieldRunner>> = RefCell::new(None);
        }

        /// Start the starfield (and the particle layer, if given), replacing
        /// any running one.
        pub fn start_starfield(
            config: $crate::StarfieldConfig,
            particles: Option<$crate::ParticleConfig>,
        ) {
            stop_starfield();
            match $crate::StarfieldRunner::start(config, particles) {
                Ok(runner) => RUNNER.with(|cell| *cell.borrow_mut() = runner),
                Err(err) => log::error!("{}: starfield failed to start: {:?}", $page_name, err),
            }
        }

        /// Stop the starfield if one is running.
        pub fn stop_starfield() {
            if let Some(runner) = RUNNER.with(|cell| cell.borrow_mut().take()) {
                runner.stop();
            }
        }

        #[wasm_bindgen]
        pub fn starfield_init(config_json: &str) {
            $crate::init_logging();
            match $crate::StarfieldConfig::from_json(config_json) {
                Ok(config) => {
                    start_starfield(config, None);
                    log::info!("{}: starfield initialized", $page_name);
                }
                Err(err) => log::error!("{}: bad starfield config: {}", $page_name, err),
            }
        }

        #[wasm_bindgen]
        pub fn starfield_stop() {
            stop_starfield();
        }
    };
}
