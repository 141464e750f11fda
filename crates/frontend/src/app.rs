use crate::dashboards::BookingSummaryDashboard;
use crate::shared::locale::LocaleProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // LocaleProvider makes the string table available to the whole app via
    // context and restores the persisted language choice.
    view! {
        <LocaleProvider>
            <BookingSummaryDashboard />
        </LocaleProvider>
    }
}
