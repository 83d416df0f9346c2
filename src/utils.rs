use agri_yield::PredictionRequest;

/// Raw text content of every form field at submit time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormFields {
    pub n: String,
    pub p: String,
    pub k: String,
    pub temperature: String,
    pub humidity: String,
    pub ph: String,
    pub rainfall: String,
    pub year: String,
    pub crop: String,
}

/// Coerce form text to a number with JavaScript `Number()` semantics:
/// blank input is `0`, unparsable input is `NaN`. The form intentionally
/// does not reject bad input locally; the payload carries whatever the
/// coercion produced.
pub fn coerce_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Build the request payload from the raw field texts.
pub fn build_request(fields: &FormFields) -> PredictionRequest {
    PredictionRequest {
        n: coerce_number(&fields.n),
        p: coerce_number(&fields.p),
        k: coerce_number(&fields.k),
        temperature: coerce_number(&fields.temperature),
        humidity: coerce_number(&fields.humidity),
        ph: coerce_number(&fields.ph),
        rainfall: coerce_number(&fields.rainfall),
        year: coerce_number(&fields.year),
        crop: fields.crop.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_parses_plain_numbers() {
        assert_eq!(coerce_number("3.5"), 3.5);
        assert_eq!(coerce_number("-2"), -2.0);
        assert_eq!(coerce_number(" 42 "), 42.0);
    }

    #[test]
    fn coerce_treats_blank_as_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
    }

    #[test]
    fn coerce_yields_nan_for_unparsable_text() {
        assert!(coerce_number("abc").is_nan());
        assert!(coerce_number("12,5").is_nan());
    }

    #[test]
    fn build_request_forwards_every_field() {
        let fields = FormFields {
            n: "90".into(),
            p: "42".into(),
            k: "43".into(),
            temperature: "20.88".into(),
            humidity: "82.0".into(),
            ph: "6.5".into(),
            rainfall: "202.94".into(),
            year: "2025".into(),
            crop: "maize".into(),
        };
        let request = build_request(&fields);
        assert_eq!(request.n, 90.0);
        assert_eq!(request.rainfall, 202.94);
        assert_eq!(request.year, 2025.0);
        assert_eq!(request.crop, "maize");
    }

    #[test]
    fn build_request_forwards_nan_untouched() {
        let fields = FormFields {
            ph: "acidic".into(),
            ..FormFields::default()
        };
        let request = build_request(&fields);
        assert!(request.ph.is_nan());
        assert_eq!(request.n, 0.0);
    }
}
