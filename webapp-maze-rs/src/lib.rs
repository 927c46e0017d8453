//file: lib.rs
// desc: maze viewer web app; builds the maze image URL from the page controls

use leptos::*;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod params;
pub mod request_url;
pub mod seed;
pub mod state;
mod web;

use web::App;

pub use config::AppConfig;
pub use params::{BoundsIssue, Field, MazeRequestParams, ParamError};
pub use request_url::{ApiVersion, RequestUrlError, build_url, build_url_with_base, parse_url, parse_url_with_base};
pub use seed::generate_seed;
pub use state::MazeState;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();

    let config = AppConfig::resolve();
    log::info!("Requesting mazes from {} ({} API)", config.api_base, config.api_version);

    leptos::mount_to_body(move || view! { <App config=config/> });
}
