//! Pure Yew view components for the prediction form UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use yew::prelude::*;

use crate::config::SUPPORTED_CROPS;

/// Busy indicator shown only while a request is in flight.
#[function_component(BusySpinner)]
pub fn busy_spinner() -> Html {
    html! {
        <div class="loading-spinner">{ "Predicting..." }</div>
    }
}

/// Dedicated error region; rendered only when there is a message.
#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub message: String,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    html! {
        <div class="error-msg">{ &props.message }</div>
    }
}

/// The predicted yield, rendered exactly as the backend reported it.
#[derive(Properties, PartialEq)]
pub struct YieldResultProps {
    pub text: String,
}

#[function_component(YieldResult)]
pub fn yield_result(props: &YieldResultProps) -> Html {
    html! {
        <div class="predict-result">{ &props.text }</div>
    }
}

/// One labeled numeric form field. Free-text on purpose: coercion to a
/// number happens at submit time, not here.
#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
    pub oninput: Callback<InputEvent>,
}

#[function_component(NumberField)]
pub fn number_field(props: &NumberFieldProps) -> Html {
    html! {
        <div class="form-group">
            <label for={props.id}>{ props.label }</label>
            <input
                type="text"
                id={props.id}
                name={props.id}
                value={props.value.clone()}
                oninput={props.oninput.clone()}
            />
        </div>
    }
}

/// Select over the crops the backend's model supports.
#[derive(Properties, PartialEq)]
pub struct CropSelectProps {
    pub value: String,
    pub onchange: Callback<Event>,
}

#[function_component(CropSelect)]
pub fn crop_select(props: &CropSelectProps) -> Html {
    html! {
        <div class="form-group">
            <label for="crop">{ "Crop:" }</label>
            <select id="crop" name="crop" onchange={props.onchange.clone()}>
                { SUPPORTED_CROPS.iter().map(|crop| {
                    html! {
                        <option value={*crop} selected={*crop == props.value}>
                            { *crop }
                        </option>
                    }
                }).collect::<Html>() }
            </select>
        </div>
    }
}
