//! Infinite 2D canvas for the browser: grows a bounding box and auto-scrolls
//! the viewport while an element is dragged towards its edges.

use wasm_bindgen::prelude::*;

use crate::domain::logging::LogComponent;

pub mod application;
pub mod domain;
pub mod drag_state;
pub mod infrastructure;
pub mod presentation;
pub mod throttle;

pub use application::{DragOutcome, InfiniteSpace, SpaceConfig};
pub use domain::drag::{Direction, DragDecision, GeometrySnapshot, calculate_drag};
pub use drag_state::DragState;

/// Install panic hook, console logger and browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    crate::log_info!(LogComponent::Presentation("Initialize"), "🚀 Infinite space initialized");
}
