//! Button Components
//!
//! - Primary: solid accent button (`.btn`)
//! - Ghost: outlined secondary action (`.btn-ghost`)
//! - Icon: compact square button for toggles and close controls

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Solid accent background
    #[default]
    Primary,
    /// Transparent with a border
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

fn with_extra(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Ghost,
///         onclick: move |_| modal.set(None),
///         "Close"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = with_extra(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Link styled as a button that opens in a new browsing context.
///
/// Always carries `rel="noopener"` so the opened page gets no handle back
/// to this window.
#[component]
pub fn ExternalLink(
    href: String,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] id: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        a {
            id: id,
            class: "{variant.class()}",
            href: "{href}",
            target: "_blank",
            rel: "noopener",
            {children}
        }
    }
}

/// Icon button for compact actions (theme toggle, nav toggle, close)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    pub children: Element,
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub aria_expanded: Option<bool>,
    #[props(default)]
    pub class: Option<String>,
    #[props(default)]
    pub id: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = with_extra("icon-btn", props.class.as_deref());
    let expanded = props.aria_expanded.map(|open| if open { "true" } else { "false" });

    rsx! {
        button {
            id: props.id.clone(),
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            "aria-expanded": expanded,
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close".to_string(),
            class: "close".to_string(),
            "\u{00D7}"
        }
    }
}
