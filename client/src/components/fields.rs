//! Form inputs and result widgets shared by every tool view.
//!
//! DESIGN
//! ======
//! Inputs hold raw text in `RwSignal<String>` and tools parse on read with
//! [`number`] / [`count`], so a half-typed value shows an inline message
//! instead of silently computing with zero.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use std::fmt::Display;

use leptos::prelude::*;
use toolkit::{ToolError, parse_number};

use crate::util::catalog::ToolInfo;

/// Input signal seeded with `initial`.
pub fn text(initial: &str) -> RwSignal<String> {
    RwSignal::new(initial.to_owned())
}

/// Parse the current text of `value` as a number.
///
/// # Errors
///
/// Returns [`ToolError`] for blank or non-numeric input.
pub fn number(field: &'static str, value: RwSignal<String>) -> Result<f64, ToolError> {
    value.with(|raw| parse_number(field, raw))
}

/// Parse a whole, non-negative count such as "people" or "classes".
///
/// # Errors
///
/// Returns [`ToolError`] for blank, fractional, or negative input.
pub fn count(field: &'static str, raw: &str) -> Result<u32, ToolError> {
    let value = parse_number(field, raw)?;
    if value < 0.0 {
        return Err(ToolError::Negative { field });
    }
    if value.fract().abs() > f64::EPSILON || value > f64::from(u32::MAX) {
        return Err(ToolError::Invalid(format!("{field} must be a whole number")));
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(value as u32)
}

/// Display text for a computed value, or empty while inputs are invalid.
pub fn shown<T, E>(outcome: &Result<T, E>, format: impl FnOnce(&T) -> String) -> String {
    outcome.as_ref().map(format).unwrap_or_default()
}

/// Inline message for a failed computation.
pub fn error_text<T, E: Display>(outcome: &Result<T, E>) -> Option<String> {
    outcome.as_ref().err().map(ToString::to_string)
}

/// Labelled text or number input bound to `value`.
#[component]
pub fn Field(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(default = "number")] kind: &'static str,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Labelled `<select>` whose options are `(value, label)` pairs.
#[component]
pub fn Choice(#[prop(into)] label: String, value: RwSignal<String>, options: Vec<(String, String)>) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(v, l)| view! { <option value=v>{l}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Horizontal tab strip selecting one tool of a category.
#[component]
pub fn TabBar(tabs: &'static [ToolInfo], active: RwSignal<&'static str>) -> impl IntoView {
    view! {
        <nav class="tab-bar" role="tablist">
            {tabs
                .iter()
                .map(|tab| {
                    let id = tab.id;
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || active.get() == id
                            role="tab"
                            on:click=move |_| active.set(id)
                        >
                            {tab.name}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// One labelled figure in a result panel.
#[component]
pub fn Stat(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] highlight: bool,
) -> impl IntoView {
    view! {
        <div class="stat" class:stat--highlight=highlight>
            <span class="stat__label">{label}</span>
            <span class="stat__value">{move || value.get()}</span>
        </div>
    }
}

/// Inline validation message; renders nothing when `error` is `None`.
#[component]
pub fn ErrorNote(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <p class="error-note" role="alert">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}

/// Display-currency picker bound to the shared preference.
#[component]
pub fn CurrencySelect() -> impl IntoView {
    let stores = expect_context::<crate::state::AppStores>();
    let session = expect_context::<crate::app::Session>();
    let on_change = move |ev: leptos::ev::Event| {
        if let Ok(code) = event_target_value(&ev).parse::<toolkit::currency::CurrencyCode>() {
            stores.prefs.set_currency(code);
        }
    };
    view! {
        <label class="currency-select">
            <span class="field__label">"Currency"</span>
            <select prop:value=move || session.currency.get().code() on:change=on_change>
                {toolkit::currency::CurrencyCode::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.code()>{c.code()}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
