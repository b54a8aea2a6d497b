use wasm_bindgen::prelude::*;

mod config;
mod page;

pub use config::PageConfig;

starfield_web::export_starfield!("portfolio");

/// Boot the page with a built-in preset (`"home"` or `"subpage"`).
#[wasm_bindgen]
pub fn portfolio_init(variant: &str) {
    starfield_web::init_logging();
    boot(PageConfig::for_variant(variant));
}

/// Boot the page with a JSON [`PageConfig`].
#[wasm_bindgen]
pub fn portfolio_init_with_config(config_json: &str) {
    starfield_web::init_logging();
    match PageConfig::from_json(config_json) {
        Ok(config) => boot(config),
        Err(err) => log::error!("portfolio: bad page config: {}", err),
    }
}

fn boot(config: PageConfig) {
    if let Err(err) = page::install(&config) {
        log::error!("portfolio: page chrome failed: {:?}", err);
    }
    start_starfield(config.starfield, config.particles);
    log::info!("portfolio: initialized");
}
