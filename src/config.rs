//! Application-level configuration constants.

/// Prediction backend endpoint, relative to the page origin.
pub const PREDICT_ENDPOINT: &str = "/predict";

/// DOM id of the canvas the bar chart renders into.
pub const CHART_CANVAS_ID: &str = "yieldChart";

/// Crops the backend's model was trained on; options for the crop select.
pub const SUPPORTED_CROPS: &[&str] = &[
    "banana",
    "chickpea",
    "coconut",
    "coffee",
    "cotton",
    "jute",
    "lentil",
    "maize",
    "mango",
    "mothbeans",
    "muskmelon",
    "orange",
    "papaya",
    "pigeonpeas",
    "watermelon",
];

// Default values for input fields so the form submits on first load
pub const DEFAULT_N: &str = "90";
pub const DEFAULT_P: &str = "42";
pub const DEFAULT_K: &str = "43";
pub const DEFAULT_TEMPERATURE: &str = "20.88";
pub const DEFAULT_HUMIDITY: &str = "82.0";
pub const DEFAULT_PH: &str = "6.5";
pub const DEFAULT_RAINFALL: &str = "202.94";
pub const DEFAULT_YEAR: &str = "2025";
pub const DEFAULT_CROP: &str = "maize";
