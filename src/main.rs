//! Main module for the AgriYield prediction frontend using Yew.
//! Wires the form fields, submission hook, and chart lifecycle.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

mod api;
mod chart;
mod components;
mod config;
mod hooks;
mod utils;

use chart::{ChartController, ChartJsBackend};
use components::{BusySpinner, CropSelect, ErrorMessage, NumberField, YieldResult};
use config::*;
use hooks::{use_submission, SubmitPhase};
use utils::{build_request, FormFields};

/// Callback that mirrors an input's text into the given state handle.
fn text_oninput(setter: &UseStateHandle<String>) -> Callback<InputEvent> {
    let setter = setter.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        setter.set(input.value());
    })
}

/// Primary application component wiring state, effects, and UI elements.
#[function_component(Main)]
fn main_component() -> Html {
    // Raw text state per form field; coercion happens at submit time
    let n = use_state(|| DEFAULT_N.to_string());
    let p = use_state(|| DEFAULT_P.to_string());
    let k = use_state(|| DEFAULT_K.to_string());
    let temperature = use_state(|| DEFAULT_TEMPERATURE.to_string());
    let humidity = use_state(|| DEFAULT_HUMIDITY.to_string());
    let ph = use_state(|| DEFAULT_PH.to_string());
    let rainfall = use_state(|| DEFAULT_RAINFALL.to_string());
    let year = use_state(|| DEFAULT_YEAR.to_string());
    let crop = use_state(|| DEFAULT_CROP.to_string());

    // The one live chart; survives re-renders, owned by this component
    let chart = use_mut_ref(|| ChartController::new(ChartJsBackend::new(CHART_CANVAS_ID)));
    let submission = use_submission(chart.clone());

    let crop_onchange = {
        let crop = crop.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            crop.set(select.value());
        })
    };

    let onsubmit = {
        let n = n.clone();
        let p = p.clone();
        let k = k.clone();
        let temperature = temperature.clone();
        let humidity = humidity.clone();
        let ph = ph.clone();
        let rainfall = rainfall.clone();
        let year = year.clone();
        let crop = crop.clone();
        let submit = submission.submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fields = FormFields {
                n: (*n).clone(),
                p: (*p).clone(),
                k: (*k).clone(),
                temperature: (*temperature).clone(),
                humidity: (*humidity).clone(),
                ph: (*ph).clone(),
                rainfall: (*rainfall).clone(),
                year: (*year).clone(),
                crop: (*crop).clone(),
            };
            submit.emit(build_request(&fields));
        })
    };

    html! {
        <div class="container">
            <h1>{ "AgriYield Predictor" }</h1>

            <form class="predict-box" onsubmit={onsubmit}>
                <div class="field-grid">
                    <NumberField id="N" label="Nitrogen (N):"
                        value={(*n).clone()} oninput={text_oninput(&n)} />
                    <NumberField id="P" label="Phosphorus (P):"
                        value={(*p).clone()} oninput={text_oninput(&p)} />
                    <NumberField id="K" label="Potassium (K):"
                        value={(*k).clone()} oninput={text_oninput(&k)} />
                    <NumberField id="temperature" label="Temperature (°C):"
                        value={(*temperature).clone()} oninput={text_oninput(&temperature)} />
                    <NumberField id="humidity" label="Humidity (%):"
                        value={(*humidity).clone()} oninput={text_oninput(&humidity)} />
                    <NumberField id="ph" label="Soil pH:"
                        value={(*ph).clone()} oninput={text_oninput(&ph)} />
                    <NumberField id="rainfall" label="Rainfall (mm):"
                        value={(*rainfall).clone()} oninput={text_oninput(&rainfall)} />
                    <NumberField id="year" label="Year:"
                        value={(*year).clone()} oninput={text_oninput(&year)} />
                    <CropSelect value={(*crop).clone()} onchange={crop_onchange} />
                </div>

                // Resubmitting while in flight is allowed; the submission
                // hook discards whichever completion is no longer current.
                <button type="submit">{ "Predict" }</button>
            </form>

            <div class="result-box">
                if submission.phase == SubmitPhase::Submitting {
                    <BusySpinner />
                }
                if let Some(ref message) = submission.error {
                    <ErrorMessage message={message.clone()} />
                }
                if let Some(ref text) = submission.yield_text {
                    <YieldResult text={text.clone()} />
                }
            </div>

            // Chart section (full width)
            <div class="chart-section">
                <canvas id={CHART_CANVAS_ID}></canvas>
            </div>
        </div>
    }
}

/// Entry point: initializes logging and the Yew renderer.
fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<Main>::new().render();
}
