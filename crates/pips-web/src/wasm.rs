#![forbid(unsafe_code)]

use core::time::Duration;

use wasm_bindgen::prelude::*;

use crate::config::OverlayConfig;
use crate::error::WebError;
use crate::program::OverlayProgram;
use pips_catalog::SchemaRegistry;

/// Product detail overlay for a catalog page.
///
/// JS-facing wrapper around [`OverlayProgram`]. Everything crosses the
/// boundary as JSON strings; host commands come back from `takeCommands`
/// as a JSON array for the page script to apply.
#[wasm_bindgen]
pub struct ProductOverlay {
    program: OverlayProgram,
}

#[wasm_bindgen]
impl ProductOverlay {
    /// `options` is an optional partial config object as JSON.
    /// `schema` optionally replaces the built-in product tables.
    #[wasm_bindgen(constructor)]
    pub fn new(options: Option<String>, schema: Option<String>) -> Result<ProductOverlay, JsValue> {
        let config = match options.as_deref() {
            Some(json) => OverlayConfig::from_json(json).map_err(to_js)?,
            None => OverlayConfig::default(),
        };
        let registry = match schema.as_deref() {
            Some(json) => SchemaRegistry::from_json(json)
                .map_err(WebError::from)
                .map_err(to_js)?,
            None => SchemaRegistry::builtin(),
        };
        Ok(Self {
            program: OverlayProgram::new(config, registry),
        })
    }

    /// Load the catalog from the page's cards (JSON array) and queue the
    /// shell mount. Unknown or empty `category` means `rubber`.
    pub fn init(&mut self, category: &str, cards: &str) -> Result<(), JsValue> {
        self.program.init_json(category, cards).map_err(to_js)
    }

    /// Queue one input event (JSON, `kind`-tagged).
    #[wasm_bindgen(js_name = pushEvent)]
    pub fn push_event(&mut self, event: &str) -> Result<(), JsValue> {
        self.program.push_event_json(event).map_err(to_js)
    }

    /// Set the monotonic clock, in milliseconds (e.g. `performance.now()`).
    #[wasm_bindgen(js_name = setTime)]
    pub fn set_time(&mut self, now_ms: f64) {
        self.program.set_time(millis(now_ms));
    }

    #[wasm_bindgen(js_name = advanceTime)]
    pub fn advance_time(&mut self, dt_ms: f64) {
        self.program.advance_time(millis(dt_ms));
    }

    /// Fire due timers and process queued events. Returns the number of
    /// host commands produced.
    pub fn step(&mut self) -> usize {
        self.program.step().commands_emitted
    }

    /// Drain queued host commands as a JSON array.
    #[wasm_bindgen(js_name = takeCommands)]
    pub fn take_commands(&mut self) -> Result<String, JsValue> {
        self.program.take_outputs().to_json().map_err(to_js)
    }

    /// Earliest pending timer deadline in milliseconds, if any. The page
    /// should call `step` again at that time.
    #[wasm_bindgen(js_name = nextDeadline)]
    pub fn next_deadline(&self) -> Option<f64> {
        self.program
            .next_deadline()
            .map(|d| d.as_secs_f64() * 1000.0)
    }
}

fn millis(ms: f64) -> Duration {
    Duration::try_from_secs_f64(ms.max(0.0) / 1000.0).unwrap_or_default()
}

fn to_js(err: WebError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
