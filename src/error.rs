use wasm_bindgen::{JsCast, JsValue};

/// Failures while wiring the game into the page. The simulation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("canvas `{0}` not found")]
    CanvasNotFound(String),

    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),

    #[error("2d rendering context unavailable")]
    ContextUnavailable,

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl GameError {
    // Keeps the message of thrown `Error` objects instead of their debug form
    pub fn js(value: JsValue) -> Self {
        let message = match value.dyn_ref::<js_sys::Error>() {
            Some(err) => String::from(err.message()),
            None => value.as_string().unwrap_or_else(|| format!("{:?}", value)),
        };
        GameError::Js(message)
    }
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
