//! Button component with size, disabled, and loading states

use leptos::either::Either;
use leptos::prelude::*;
use web_sys::MouseEvent;

use uikit_types::{css, ButtonSize, ButtonType, ComponentState, ARIA_ROLE_BUTTON};

/// Compose the class attribute value: size class, state token, loading
/// token, then the caller's extra classes. Only the edges are trimmed; the
/// token order is part of the style contract.
fn composed_class(size: ButtonSize, state: ComponentState, loading: bool, extra: &str) -> String {
    let loading_class = if loading { css::LOADING } else { "" };
    format!("{} {} {} {}", size.class(), state.as_str(), loading_class, extra)
        .trim()
        .to_string()
}

/// The accessible name is the explicit override when one was given,
/// otherwise the visible label.
fn accessible_name<'a>(aria_label: &'a str, label: &'a str) -> &'a str {
    if aria_label.is_empty() {
        label
    } else {
        aria_label
    }
}

/// Attributes spread onto the component (`attr:id`, `attr:data-*`, ...) are
/// forwarded to the rendered element unchanged. The attributes the component
/// emits itself (`type`, `disabled`, `class`, `role`, `aria-label`,
/// `aria-busy`, `aria-disabled`) are owned by it; spreading one of those
/// names is unsupported.
#[component]
pub fn Button(
    /// Visible text content and fallback accessible name
    #[prop(into)]
    label: String,
    /// Button size
    #[prop(optional)]
    size: ButtonSize,
    /// Whether button is disabled
    #[prop(optional)]
    disabled: bool,
    /// Whether button is in loading state (also disables interaction)
    #[prop(optional)]
    loading: bool,
    /// Click handler, receives the triggering mouse event
    #[prop(optional, into)]
    on_click: Option<Callback<MouseEvent>>,
    /// Native `type` attribute
    #[prop(optional)]
    button_type: ButtonType,
    /// Override for the accessible name (empty means "use the label")
    #[prop(optional, into)]
    aria_label: String,
    /// Additional CSS class
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let state = ComponentState::from_flags(disabled, loading);
    let blocked = state.is_disabled();
    let css_class = composed_class(size, state, loading, &class);
    let name = accessible_name(&aria_label, &label).to_string();

    let handle_click = move |ev: MouseEvent| {
        if blocked {
            ev.prevent_default();
            return;
        }
        if let Some(cb) = on_click {
            cb.run(ev);
        }
    };

    let content = if loading {
        Either::Left(view! {
            <span class=css::SPINNER aria-hidden="true"></span>
            <span class=css::LOADING_TEXT>{label.clone()}</span>
        })
    } else {
        Either::Right(label.clone())
    };

    view! {
        <button
            type=button_type.as_str()
            class=css_class
            disabled=blocked
            on:click=handle_click
            aria-label=name
            aria-busy=loading.to_string()
            aria-disabled=blocked.to_string()
            role=ARIA_ROLE_BUTTON
        >
            {content}
        </button>
    }
}
