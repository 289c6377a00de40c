use crate::tariffs::ui::TariffLookupPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Single-screen app: no router, the lookup page is the whole UI.
    view! {
        <TariffLookupPage />
    }
}
