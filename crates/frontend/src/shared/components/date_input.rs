use leptos::prelude::*;

/// DateInput component with native date picker
/// The value is always yyyy-mm-dd; the browser renders it in locale format
#[component]
pub fn DateInput(
    /// The date value in yyyy-mm-dd format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the date changes (receives yyyy-mm-dd format)
    on_change: impl Fn(String) + 'static,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            id=move || id.get().unwrap_or_default()
            class="form__input form__input--date"
            prop:value=value
            on:input=move |ev| {
                on_change(event_target_value(&ev));
            }
        />
    }
}
