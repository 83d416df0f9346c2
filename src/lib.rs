use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Maximum number of crop entries ever shown in the chart.
pub const MAX_CHART_ENTRIES: usize = 5;

/// Message shown when the backend rejects a request without explanation.
pub const GENERIC_FAILURE_MESSAGE: &str = "Prediction failed";

/// One prediction request as sent to the backend.
///
/// Numeric fields carry whatever the form coercion produced, including
/// `NaN` for unparsable text; serde_json writes non-finite floats as
/// `null`, so the backend sees a missing value rather than a local
/// rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
    pub year: f64,
    pub crop: String,
}

/// Successful prediction body.
///
/// `predicted_yield` is kept as a raw JSON scalar and rendered verbatim;
/// `top_5_recommended_crops` preserves the order the backend sent it in
/// (serde_json is built with `preserve_order`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub predicted_yield: Value,
    pub top_5_recommended_crops: Map<String, Value>,
}

impl PredictionResponse {
    /// The yield text exactly as the backend reported it: strings are
    /// shown without quotes, everything else via its JSON rendering.
    pub fn yield_text(&self) -> String {
        match &self.predicted_yield {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// View model for the bar chart: uppercased crop labels and their
/// estimates, in received order, capped at [`MAX_CHART_ENTRIES`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn from_response(response: &PredictionResponse) -> Self {
        let mut labels = Vec::new();
        let mut values = Vec::new();
        for (name, estimate) in response
            .top_5_recommended_crops
            .iter()
            .take(MAX_CHART_ENTRIES)
        {
            labels.push(name.to_uppercase());
            values.push(estimate.as_f64().unwrap_or(f64::NAN));
        }
        ChartSeries { labels, values }
    }
}

// Error type for a settled prediction attempt
#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    /// Non-2xx status; carries the server's `error` field or the
    /// generic fallback.
    Backend(String),
    /// The request never completed (network / fetch failure).
    Transport(String),
    /// 2xx status but the body did not match the response contract.
    MalformedBody(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // All three surface identically in the error region; the
        // variant only records which stage failed.
        match self {
            PredictError::Backend(msg)
            | PredictError::Transport(msg)
            | PredictError::MalformedBody(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for PredictError {}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Pick the user-facing message for a non-ok response body: the `error`
/// field when the body carries one, the generic fallback otherwise.
pub fn failure_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string())
}
