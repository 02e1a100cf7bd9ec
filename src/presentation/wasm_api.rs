//! JavaScript bridge. Parses options, forwards to the controller and hands
//! results back as plain JS objects.

use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::application::{InfiniteSpace, SpaceConfig};
use crate::domain::{
    drag::{GeometrySnapshot, calculate_drag},
    errors::SpaceError,
    geometry::Point,
    logging::{LogComponent, get_time_provider},
};
use crate::drag_state::DragState;
use crate::infrastructure::DomSurface;
use crate::log_error;

impl From<SpaceError> for JsValue {
    fn from(error: SpaceError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

fn serde_error(context: &str, error: serde_json::Error) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, error))
}

/// Stateless decision engine entry point, same shape as the widget input.
#[wasm_bindgen(js_name = calculateDrag)]
pub fn calculate_drag_js(options: JsValue) -> Result<JsValue, JsValue> {
    let snapshot: GeometrySnapshot = options
        .into_serde()
        .map_err(|e| serde_error("Invalid drag options", e))?;
    JsValue::from_serde(&calculate_drag(&snapshot)).map_err(|e| serde_error("Failed to encode decision", e))
}

/// Infinite space widget bound to live DOM elements
#[wasm_bindgen]
pub struct InfiniteSpaceApi {
    space: InfiniteSpace<DomSurface>,
    state: DragState,
    on_change: Option<Function>,
}

#[wasm_bindgen]
impl InfiniteSpaceApi {
    /// Bind to the configured elements, center content and viewport.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<InfiniteSpaceApi, JsValue> {
        let parsed: SpaceConfig = if config.is_undefined() || config.is_null() {
            SpaceConfig::default()
        } else {
            config.into_serde().map_err(|e| serde_error("Invalid config", e))?
        };
        let on_change = if config.is_object() {
            Reflect::get(&config, &JsValue::from_str("onChange"))
                .ok()
                .and_then(|value| value.dyn_into::<Function>().ok())
        } else {
            None
        };

        let surface = DomSurface::from_config(&parsed)?;
        let mut space = InfiniteSpace::new(parsed, surface)?;
        let state = space.init(now_ms())?;

        Ok(Self { space, state, on_change })
    }

    /// Feed a drag position. Returns the applied outcome, or `undefined`
    /// when the tick was throttled.
    #[wasm_bindgen(js_name = handleDrag)]
    pub fn handle_drag(&mut self, x: f64, y: f64, element: &HtmlElement) -> Result<JsValue, JsValue> {
        let outcome = self.space.handle_drag(&mut self.state, element, Point::new(x, y), now_ms())?;
        match outcome {
            Some(outcome) => JsValue::from_serde(&outcome).map_err(|e| serde_error("Failed to encode outcome", e)),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// End the drag. Returns the final geometry and passes it to `onChange`.
    #[wasm_bindgen(js_name = handleDrop)]
    pub fn handle_drop(&mut self, element: &HtmlElement) -> Result<JsValue, JsValue> {
        let (state, change) = self.space.handle_drop(self.state, element)?;
        self.state = state;

        let change = JsValue::from_serde(&change).map_err(|e| serde_error("Failed to encode change", e))?;
        if let Some(callback) = &self.on_change {
            if let Err(e) = callback.call1(&JsValue::NULL, &change) {
                log_error!(LogComponent::Presentation("InfiniteSpaceApi"), "onChange threw: {:?}", e);
            }
        }
        Ok(change)
    }

    /// Set the wrapper transform scale.
    pub fn update(&mut self, scale: f64) -> Result<(), JsValue> {
        self.state = self.space.update(self.state, scale)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setOnChange)]
    pub fn set_on_change(&mut self, callback: Option<Function>) {
        self.on_change = callback;
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }
}

fn now_ms() -> u64 {
    get_time_provider().current_timestamp()
}
