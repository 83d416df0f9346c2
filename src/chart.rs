//! JavaScript interop for Chart.js visualization.
//! Provides Rust bindings to chart helper functions defined in chart_helpers.js,
//! behind a small capability trait so the rest of the app never touches
//! the charting library directly.

use agri_yield::ChartSeries;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/chart_helpers.js")]
extern "C" {
    #[wasm_bindgen(js_name = initYieldChart)]
    fn init_yield_chart(canvas_id: &str, labels: JsValue, values: JsValue);

    #[wasm_bindgen(js_name = destroyYieldChart)]
    fn destroy_yield_chart();
}

/// What the controller needs from a charting backend: draw one labeled
/// bar series, tear the drawing down again.
pub trait YieldChart {
    fn render(&mut self, labels: &[String], values: &[f64]);
    fn destroy(&mut self);
}

/// Production backend delegating to the Chart.js helpers.
pub struct ChartJsBackend {
    canvas_id: &'static str,
}

impl ChartJsBackend {
    pub fn new(canvas_id: &'static str) -> Self {
        ChartJsBackend { canvas_id }
    }
}

impl YieldChart for ChartJsBackend {
    fn render(&mut self, labels: &[String], values: &[f64]) {
        let labels = serde_wasm_bindgen::to_value(labels).unwrap_or(JsValue::NULL);
        let values = serde_wasm_bindgen::to_value(values).unwrap_or(JsValue::NULL);
        init_yield_chart(self.canvas_id, labels, values);
    }

    fn destroy(&mut self) {
        destroy_yield_chart();
    }
}

/// Owns the single live chart instance.
///
/// At most one visualization exists at a time: `replace` destroys the
/// prior instance before rendering the new series, and `clear` is safe
/// to call when nothing is live.
pub struct ChartController<C: YieldChart> {
    backend: C,
    live: bool,
}

impl<C: YieldChart> ChartController<C> {
    pub fn new(backend: C) -> Self {
        ChartController {
            backend,
            live: false,
        }
    }

    /// Destroy the current chart, if any.
    pub fn clear(&mut self) {
        if self.live {
            self.backend.destroy();
            self.live = false;
        }
    }

    /// Destroy the current chart, then render `series` as the new one.
    pub fn replace(&mut self, series: &ChartSeries) {
        self.clear();
        self.backend.render(&series.labels, &series.values);
        self.live = true;
    }
}
