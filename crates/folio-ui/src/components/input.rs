//! Input Field Components
//!
//! Labelled text inputs, textarea, the project search box and the consent
//! checkbox. All are controlled: the caller owns the value and receives
//! every change through `oninput` / `onchange`.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Form control name and element id
    pub name: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    pub label: String,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Labelled single-line input
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Input {
///         name: "email".to_string(),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///         value: form().text("email").to_string(),
///         oninput: move |v| form.with_mut(|f| { f.set_text("email", v); }),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "field",
            label { r#for: "{props.name}", "{props.label}" }
            input {
                id: "{props.name}",
                name: "{props.name}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub name: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    pub label: String,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = 5)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "field",
            label { r#for: "{props.name}", "{props.label}" }
            textarea {
                id: "{props.name}",
                name: "{props.name}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Search box above the project grid
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default = "Search projects…".to_string())]
    pub placeholder: String,
}

#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        div { class: "search",
            input {
                id: "searchInput",
                r#type: "search",
                "aria-label": "Search projects",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the Checkbox component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxProps {
    /// Element id and control name
    pub id: String,
    pub checked: bool,
    pub onchange: EventHandler<bool>,
    pub label: String,
}

/// Checkbox with a trailing label (used for the contact consent)
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label { class: "check", r#for: "{props.id}",
            input {
                id: "{props.id}",
                name: "{props.id}",
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |e| props.onchange.call(e.checked()),
            }
            span { "{props.label}" }
        }
    }
}
