//! Demo app exercising the button states

use leptos::prelude::*;
use web_sys::MouseEvent;

use uikit_types::{defaults, ButtonSize, ButtonType};

use crate::components::Button;

/// Parse a size string coming from outside the typed API.
///
/// An unknown value is a caller contract violation but never fatal: warn
/// and fall back to the default size.
pub fn parse_size_or_default(value: &str) -> ButtonSize {
    value.parse().unwrap_or_else(|err| {
        log::warn!("{err}; falling back to '{}'", defaults::SIZE);
        defaults::SIZE
    })
}

/// Root demo component: a small gallery of button states.
#[component]
pub fn App() -> impl IntoView {
    let clicks = RwSignal::new(0u32);
    let saving = RwSignal::new(false);
    let size_input = RwSignal::new(defaults::SIZE.to_string());

    let on_save = Callback::new(move |_: MouseEvent| {
        clicks.update(|c| *c += 1);
        log::info!("save clicked {} time(s)", clicks.get_untracked());
    });

    view! {
        <main class="demo">
            <h1>"uikit button gallery"</h1>

            <section class="demo__row">
                {ButtonSize::ALL
                    .into_iter()
                    .map(|size| {
                        view! { <Button label=format!("Size {size}") size=size /> }
                    })
                    .collect_view()}
            </section>

            <section class="demo__row">
                <Button label="Disabled" disabled=true />
                <Button
                    label="Submit"
                    button_type=ButtonType::Submit
                    class="demo__submit"
                    aria_label="Submit the demo form"
                />
            </section>

            <section class="demo__row">
                {move || {
                    view! {
                        <Button
                            label="Save"
                            loading=saving.get()
                            on_click=on_save
                        />
                    }
                }}
                <Button
                    label="Toggle loading"
                    on_click=Callback::new(move |_: MouseEvent| saving.update(|s| *s = !*s))
                />
                <p class="demo__clicks">"Saves: " {move || clicks.get()}</p>
            </section>

            <section class="demo__row">
                <label>
                    "Size (small / medium / large): "
                    <input
                        prop:value=move || size_input.get()
                        on:input=move |ev| size_input.set(event_target_value(&ev))
                    />
                </label>
                {move || {
                    let size = parse_size_or_default(&size_input.get());
                    view! { <Button label="Adjustable" size=size /> }
                }}
            </section>
        </main>
    }
}
