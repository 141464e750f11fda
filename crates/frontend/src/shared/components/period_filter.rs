use crate::shared::locale::use_locale;
use chrono::{Datelike, Utc};
use leptos::prelude::*;

/// Year/month filter row of the booking dashboard.
///
/// The selected values live in the parent's signals; the buttons only run the
/// provided callbacks, so this component owns no fetch logic. Year options
/// span the current year down to five years prior, months are rendered with
/// localized long names. The empty option value means "no selection".
#[component]
pub fn PeriodFilter(
    /// Selected year as the raw `<select>` value ("" = none).
    selected_year: RwSignal<String>,
    /// Selected month as the raw `<select>` value ("" = none).
    selected_month: RwSignal<String>,
    /// Runs when the Filter button is clicked.
    on_filter: Callback<()>,
    /// Runs when the Clear Filter button is clicked.
    on_clear: Callback<()>,
    /// Disables the Filter button while a request is in flight.
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let locale_ctx = use_locale();
    let current_year = Utc::now().date_naive().year();
    let years: Vec<i32> = (0..6).map(|i| current_year - i).collect();

    let label_style = "margin: 0; font-size: 0.875rem; font-weight: 500; color: #495057;";
    let select_style = "padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; min-width: 150px; background: #fff;";

    view! {
        <div class="filter-row" style="display: flex; align-items: end; gap: 12px; flex-wrap: wrap;">
            <div style="display: flex; flex-direction: column; gap: 4px;">
                <label style=label_style>{move || locale_ctx.strings().year}</label>
                <select
                    prop:value=move || selected_year.get()
                    on:change=move |ev| selected_year.set(event_target_value(&ev))
                    style=select_style
                >
                    <option value="">{move || locale_ctx.strings().select_year}</option>
                    {years
                        .into_iter()
                        .map(|year| view! { <option value=year.to_string()>{year}</option> })
                        .collect_view()}
                </select>
            </div>

            <div style="display: flex; flex-direction: column; gap: 4px;">
                <label style=label_style>{move || locale_ctx.strings().month}</label>
                <select
                    prop:value=move || selected_month.get()
                    on:change=move |ev| selected_month.set(event_target_value(&ev))
                    style=select_style
                >
                    <option value="">{move || locale_ctx.strings().select_month}</option>
                    {move || {
                        let locale = locale_ctx.locale.get();
                        (1..=12u32)
                            .map(|month| {
                                view! {
                                    <option value=month.to_string()>{locale.month_name(month)}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </div>

            <button
                class="action-button action-button-primary"
                style="height: 32px; padding: 0 16px; background: #2b6cb0; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.875rem; font-weight: 500;"
                on:click=move |_| on_filter.run(())
                disabled=move || disabled.get()
            >
                {move || locale_ctx.strings().filter}
            </button>

            <button
                class="action-button"
                style="height: 32px; padding: 0 16px; background: #fff; color: #495057; border: 1px solid #ced4da; border-radius: 4px; cursor: pointer; font-size: 0.875rem; font-weight: 500;"
                on:click=move |_| on_clear.run(())
            >
                {move || locale_ctx.strings().clear_filter}
            </button>
        </div>
    }
}
