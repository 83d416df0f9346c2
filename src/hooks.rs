//! Submission state hook for the prediction form.

use std::cell::RefCell;
use std::rc::Rc;

use agri_yield::{ChartSeries, PredictError, PredictionRequest, PredictionResponse};
use yew::prelude::*;

use crate::api;
use crate::chart::{ChartController, YieldChart};

/// Where the controller currently is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
}

/// State and entry point for one submit-predict-render cycle.
pub struct Submission {
    pub phase: SubmitPhase,
    pub yield_text: Option<String>,
    pub error: Option<String>,
    pub submit: Callback<PredictionRequest>,
}

/// What a settled completion did to the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement {
    /// Superseded by a newer submission; nothing was touched.
    Discarded,
    Success { yield_text: String },
    Failure { message: String },
}

/// Apply a settled outcome against the chart.
///
/// A completion whose `submitted` token no longer matches the `latest`
/// submission mutates nothing, the chart included; otherwise success
/// replaces the chart and reports the yield text, failure reports the
/// message. The caller applies the returned settlement to its own
/// state.
pub fn settle<C: YieldChart>(
    chart: &mut ChartController<C>,
    latest: u32,
    submitted: u32,
    outcome: Result<PredictionResponse, PredictError>,
) -> Settlement {
    if latest != submitted {
        return Settlement::Discarded;
    }
    match outcome {
        Ok(response) => {
            let yield_text = response.yield_text();
            chart.replace(&ChartSeries::from_response(&response));
            Settlement::Success { yield_text }
        }
        Err(e) => Settlement::Failure {
            message: e.to_string(),
        },
    }
}

/// Drives the submit cycle: on `submit`, shows the busy indicator,
/// hides any prior error, destroys the live chart, then issues the
/// request and applies the settled outcome.
///
/// Each submission bumps a generation token; a completion whose token
/// no longer matches the latest submission is discarded wholesale, so
/// rapid resubmits settle last-submitted-wins rather than
/// last-resolved-wins.
#[hook]
pub fn use_submission<C>(chart: Rc<RefCell<ChartController<C>>>) -> Submission
where
    C: YieldChart + 'static,
{
    let phase = use_state(|| SubmitPhase::Idle);
    let yield_text = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    // Generation token; mutable ref so in-flight completions see bumps
    let token = use_mut_ref(|| 0u32);

    let submit = {
        let phase = phase.clone();
        let yield_text = yield_text.clone();
        let error = error.clone();
        let token = token.clone();
        let chart = chart.clone();

        Callback::from(move |request: PredictionRequest| {
            let current = {
                let mut t = token.borrow_mut();
                *t += 1;
                *t
            };

            phase.set(SubmitPhase::Submitting);
            error.set(None);
            chart.borrow_mut().clear();

            let phase = phase.clone();
            let yield_text = yield_text.clone();
            let error = error.clone();
            let token = token.clone();
            let chart = chart.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = api::predict(&request).await;
                if let Ok(ref response) = outcome {
                    log::debug!("prediction response: {:?}", response);
                }

                let latest = *token.borrow();
                match settle(&mut chart.borrow_mut(), latest, current, outcome) {
                    // A newer submission owns the UI now
                    Settlement::Discarded => return,
                    Settlement::Success { yield_text: text } => {
                        yield_text.set(Some(text));
                    }
                    Settlement::Failure { message } => {
                        error.set(Some(message));
                    }
                }
                // Busy indicator comes down no matter how we settled
                phase.set(SubmitPhase::Idle);
            });
        })
    };

    Submission {
        phase: *phase,
        yield_text: (*yield_text).clone(),
        error: (*error).clone(),
        submit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Render(Vec<String>),
        Destroy,
    }

    struct RecordingChart {
        events: Rc<RefCell<Vec<Event>>>,
    }

    impl YieldChart for RecordingChart {
        fn render(&mut self, labels: &[String], _values: &[f64]) {
            self.events
                .borrow_mut()
                .push(Event::Render(labels.to_vec()));
        }

        fn destroy(&mut self) {
            self.events.borrow_mut().push(Event::Destroy);
        }
    }

    fn controller() -> (ChartController<RecordingChart>, Rc<RefCell<Vec<Event>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let chart = RecordingChart {
            events: events.clone(),
        };
        (ChartController::new(chart), events)
    }

    fn response(body: &str) -> PredictionResponse {
        serde_json::from_str(body).expect("response should deserialize")
    }

    #[test]
    fn current_success_renders_and_reports_the_yield() {
        let (mut chart, events) = controller();
        let outcome = Ok(response(
            r#"{"predicted_yield": 42, "top_5_recommended_crops": {"wheat": 10}}"#,
        ));
        let settlement = settle(&mut chart, 3, 3, outcome);
        assert_eq!(
            settlement,
            Settlement::Success {
                yield_text: "42".to_string()
            }
        );
        assert_eq!(*events.borrow(), [Event::Render(vec!["WHEAT".to_string()])]);
    }

    #[test]
    fn current_failure_reports_the_message_without_touching_the_chart() {
        let (mut chart, events) = controller();
        let outcome = Err(PredictError::Backend("bad input".to_string()));
        let settlement = settle(&mut chart, 3, 3, outcome);
        assert_eq!(
            settlement,
            Settlement::Failure {
                message: "bad input".to_string()
            }
        );
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn stale_success_mutates_nothing() {
        let (mut chart, events) = controller();
        let outcome = Ok(response(
            r#"{"predicted_yield": 42, "top_5_recommended_crops": {"wheat": 10}}"#,
        ));
        let settlement = settle(&mut chart, 4, 3, outcome);
        assert_eq!(settlement, Settlement::Discarded);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn stale_completion_leaves_a_newer_chart_alone() {
        let (mut chart, events) = controller();
        // Submission 4 already rendered its chart
        let newer = Ok(response(
            r#"{"predicted_yield": 1, "top_5_recommended_crops": {"rice": 8}}"#,
        ));
        settle(&mut chart, 4, 4, newer);
        events.borrow_mut().clear();

        // Submission 3 settles late, success and failure alike
        let late_ok = Ok(response(
            r#"{"predicted_yield": 2, "top_5_recommended_crops": {"jute": 5}}"#,
        ));
        assert_eq!(settle(&mut chart, 4, 3, late_ok), Settlement::Discarded);
        let late_err = Err(PredictError::Transport("Failed to fetch".to_string()));
        assert_eq!(settle(&mut chart, 4, 3, late_err), Settlement::Discarded);
        assert!(events.borrow().is_empty());
    }
}
