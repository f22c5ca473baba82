// =============================================================================
// Aarohan Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. TextArea
// 3. Select
// =============================================================================
//
// Controlled fields bound to an `RwSignal<String>`. Native `required`
// validation stays on so the browser blocks incomplete submissions.

use leptos::prelude::*;

fn field_label(label: String, required: bool) -> impl IntoView {
    view! {
        <span class="form-label">
            {label}
            {required.then(|| view! { <span class="required">"*"</span> })}
        </span>
    }
}

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Single-line input with label.
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };

    view! {
        <label class="form-field">
            {field_label(label, required)}
            <input
                type=input_type
                name=name
                class="form-input"
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |e| {
                    value.set(event_target_value(&e));
                }
            />
        </label>
    }
}

// -----------------------------------------------------------------------------
// 2. TextArea
// -----------------------------------------------------------------------------

/// Multi-line text area.
#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: u32,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let rows = if rows == 0 { 5 } else { rows };

    view! {
        <label class="form-field">
            {field_label(label, required)}
            <textarea
                name=name
                class="form-textarea"
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |e| {
                    value.set(event_target_value(&e));
                }
            />
        </label>
    }
}

// -----------------------------------------------------------------------------
// 3. Select
// -----------------------------------------------------------------------------

/// Select dropdown option.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Single-select dropdown.
#[component]
pub fn Select(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    options: Vec<SelectOption>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="form-field">
            {field_label(label, required)}
            <select
                name=name
                class="form-select"
                required=required
                prop:value=move || value.get()
                on:change=move |e| {
                    value.set(event_target_value(&e));
                }
            >
                {options
                    .into_iter()
                    .map(|opt| {
                        view! {
                            <option
                                value=opt.value
                                selected=move || value.with(|v| v == opt.value)
                            >
                                {opt.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
