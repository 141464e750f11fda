use crate::dashboards::d400_booking_summary::api;
use crate::dashboards::d400_booking_summary::presenter::{
    present, ConsumptionsView, OfficeView, RoomView,
};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::period_filter::PeriodFilter;
use crate::shared::components::stat_card::{format_thousands, StatCard};
use crate::shared::icons::icon;
use crate::shared::locale::{use_locale, LocaleSelect, Strings};
use crate::shared::page_frame::PageFrame;
use contracts::dashboards::d400_booking_summary::{BookingSummaryResponse, PeriodSelection};
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq)]
enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
struct Toast {
    kind: ToastKind,
    title: String,
    description: Option<String>,
}

/// Booking summary dashboard page.
#[component]
pub fn BookingSummaryDashboard() -> impl IntoView {
    let locale_ctx = use_locale();

    let (summary, set_summary) = signal(None::<BookingSummaryResponse>);
    let (loading, set_loading) = signal(false);
    let (toast, set_toast) = signal(None::<Toast>);
    let selected_year = RwSignal::new(String::new());
    let selected_month = RwSignal::new(String::new());

    let show_toast = move |t: Toast| {
        let duration_ms = match t.kind {
            ToastKind::Success => 2000,
            ToastKind::Error => 3000,
        };
        set_toast.set(Some(t));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(duration_ms).await;
            set_toast.set(None);
        });
    };

    // One request per explicit action: mount, Refresh, Filter, Clear Filter.
    // The selection is sampled untracked, so changing a select by itself does
    // not fetch. A second action while a request is in flight is allowed to
    // race; the last response to resolve wins.
    let load_summary = move || {
        set_loading.set(true);

        let selection = PeriodSelection {
            year: selected_year.get_untracked().parse().ok(),
            month: selected_month.get_untracked().parse().ok(),
        };
        let range = selection.resolve();
        let strings = locale_ctx.locale.get_untracked().strings();

        spawn_local(async move {
            match api::get_booking_summary(range.as_ref()).await {
                Ok(data) => {
                    set_summary.set(Some(data));
                    show_toast(Toast {
                        kind: ToastKind::Success,
                        title: strings.summary_loaded.to_string(),
                        description: None,
                    });
                    set_loading.set(false);
                }
                Err(e) => {
                    // The previous summary stays as-is on any failure.
                    log!("Failed to fetch booking summary: {}", e);
                    show_toast(Toast {
                        kind: ToastKind::Error,
                        title: strings.summary_failed.to_string(),
                        description: Some(e.to_string()),
                    });
                    set_loading.set(false);
                }
            }
        });
    };

    // Initial load on mount.
    Effect::new(move |_| {
        load_summary();
    });

    let on_filter = Callback::new(move |_: ()| load_summary());
    let on_clear = Callback::new(move |_: ()| {
        selected_year.set(String::new());
        selected_month.set(String::new());
        load_summary();
    });

    view! {
        <PageFrame page_id="d400_booking_summary--dashboard" category="dashboard">
            <div
                class="page__header"
                style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;"
            >
                <h2 class="page__title" style="margin: 0;">
                    {move || locale_ctx.strings().app_title}
                </h2>
                <div style="display: flex; align-items: center; gap: 8px;">
                    <LocaleSelect />
                    <button
                        class="action-button action-button-primary"
                        style="height: 32px; padding: 0 16px; background: #2b6cb0; color: white; border: none; border-radius: 4px; cursor: pointer; font-size: 0.875rem; font-weight: 500; display: flex; align-items: center; gap: 6px;"
                        on:click=move |_| load_summary()
                        disabled=move || loading.get()
                    >
                        {icon("refresh")}
                        {move || {
                            let strings = locale_ctx.strings();
                            if loading.get() { strings.refreshing } else { strings.refresh }
                        }}
                    </button>
                </div>
            </div>

            {move || toast.get().map(|t| {
                let (bg, accent) = match t.kind {
                    ToastKind::Success => ("#f0fff4", "#48bb78"),
                    ToastKind::Error => ("#fff5f5", "#e53e3e"),
                };
                view! {
                    <div
                        class="toast"
                        style=format!(
                            "position: fixed; top: 16px; right: 16px; z-index: 1000; background: {bg}; border-left: 4px solid {accent}; border-radius: 4px; padding: 10px 16px; box-shadow: 0 2px 8px rgba(0,0,0,0.15); max-width: 360px;"
                        )
                    >
                        <div style="font-weight: 600; font-size: 0.875rem;">{t.title}</div>
                        {t.description.map(|d| view! {
                            <div style="font-size: 0.8rem; color: #6c757d; margin-top: 2px;">{d}</div>
                        })}
                    </div>
                }
            })}

            <CardAnimated>
                <PeriodFilter
                    selected_year=selected_year
                    selected_month=selected_month
                    on_filter=on_filter
                    on_clear=on_clear
                    disabled=Signal::derive(move || loading.get())
                />
            </CardAnimated>

            {move || {
                if loading.get() {
                    Some(view! {
                        <div
                            class="dashboard-loading"
                            style="text-align: center; padding: 32px; color: #6c757d;"
                        >
                            {locale_ctx.strings().loading_summary}
                        </div>
                    })
                } else {
                    None
                }
            }}

            {move || summary.get().map(|payload| {
                let locale = locale_ctx.locale.get();
                let strings = locale.strings();
                let vm = present(&payload, locale);
                let total_bookings = vm.total_bookings as i64;
                let total_participants = vm.total_participants as i64;

                view! {
                    {vm.period_label.map(|label| view! {
                        <div
                            class="period-line"
                            style="font-size: 1.05rem; font-weight: 600; color: #2b6cb0; margin: 16px 0 0 0;"
                        >
                            {format!("{}: {}", strings.period, label)}
                        </div>
                    })}

                    <div
                        class="stat-grid"
                        style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-top: 16px;"
                    >
                        <StatCard
                            label=strings.total_bookings.to_string()
                            icon_name="calendar".to_string()
                            value=Signal::derive(move || Some(total_bookings))
                            help_text=strings.bookings.to_string()
                        />
                        <StatCard
                            label=strings.total_participants.to_string()
                            icon_name="users".to_string()
                            value=Signal::derive(move || Some(total_participants))
                            help_text=strings.participants.to_string()
                        />
                    </div>

                    <CardAnimated delay_ms=80 style="margin-top: 16px;">
                        <h3 style="margin: 0 0 8px 0; font-size: 1.05rem;">
                            {strings.offices_heading}
                        </h3>
                        <div class="offices-list">
                            {vm.offices
                                .into_iter()
                                .map(|office| view! { <OfficeItem office=office strings=strings /> })
                                .collect_view()}
                        </div>
                    </CardAnimated>
                }
            })}
        </PageFrame>
    }
}

/// One expandable row of the offices accordion.
#[component]
fn OfficeItem(office: OfficeView, strings: &'static Strings) -> impl IntoView {
    let is_expanded = RwSignal::new(false);
    let toggle = move |_| is_expanded.update(|e| *e = !*e);

    let OfficeView {
        office_name,
        room_count_label,
        rooms,
    } = office;

    view! {
        <div class="office-item" style="border-bottom: 1px solid #e9ecef;">
            <div
                class="office-item__header"
                on:click=toggle
                style="display: flex; align-items: center; justify-content: space-between; padding: 10px 4px; cursor: pointer; user-select: none;"
            >
                <div>
                    <div style="font-weight: 600;">{office_name}</div>
                    <div style="font-size: 0.8rem; color: #6c757d;">{room_count_label}</div>
                </div>
                {move || {
                    if is_expanded.get() { icon("chevron-down") } else { icon("chevron-right") }
                }}
            </div>
            {move || {
                if is_expanded.get() {
                    view! {
                        <div
                            class="office-item__panel"
                            style="display: flex; flex-direction: column; gap: 12px; padding: 4px 4px 16px 4px;"
                        >
                            {rooms
                                .clone()
                                .into_iter()
                                .enumerate()
                                .map(|(i, room)| {
                                    let delay_ms = (i as u32) * 80;
                                    view! { <RoomCard room=room strings=strings delay_ms=delay_ms /> }
                                })
                                .collect_view()}
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}

/// Room summary card: date/time lines, inline stats and the consumption table.
#[component]
fn RoomCard(
    room: RoomView,
    strings: &'static Strings,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let RoomView {
        room_name,
        booking_dates,
        time_range,
        booking_count,
        total_participants,
        total_cost_label,
        consumptions,
    } = room;

    let th_style = "border-bottom: 1px solid #ddd; padding: 4px 6px; font-weight: 600; text-align: left;";
    let th_numeric_style = "border-bottom: 1px solid #ddd; padding: 4px 6px; font-weight: 600; text-align: right;";
    let td_style = "border-bottom: 1px solid #f1f3f5; padding: 4px 6px;";
    let td_numeric_style = "border-bottom: 1px solid #f1f3f5; padding: 4px 6px; text-align: right;";

    view! {
        <CardAnimated delay_ms=delay_ms>
            <div class="room-card__header" style="display: flex; flex-direction: column; gap: 8px;">
                <h4 style="margin: 0; font-size: 1rem;">{room_name}</h4>
                <div style="display: flex; flex-direction: column; gap: 2px; font-size: 0.75rem; color: #6c757d;">
                    <span>{format!("{}: {}", strings.booking_dates, booking_dates)}</span>
                    <span>{format!("{}: {}", strings.time_range, time_range)}</span>
                </div>
                <div style="display: flex; gap: 24px;">
                    <div class="room-card__stat">
                        <div style="font-size: 0.7rem; color: #6c757d;">{strings.bookings}</div>
                        <div style="font-size: 1.1rem; font-weight: 600;">
                            {format_thousands(booking_count as i64)}
                        </div>
                    </div>
                    <div class="room-card__stat">
                        <div style="font-size: 0.7rem; color: #6c757d;">{strings.participants}</div>
                        <div style="font-size: 1.1rem; font-weight: 600;">
                            {format_thousands(total_participants as i64)}
                        </div>
                    </div>
                    <div class="room-card__stat">
                        <div style="font-size: 0.7rem; color: #6c757d;">{strings.total_cost}</div>
                        <div style="font-size: 1.1rem; font-weight: 600;">{total_cost_label}</div>
                    </div>
                </div>
            </div>
            <div class="room-card__body" style="margin-top: 8px;">
                {match consumptions {
                    ConsumptionsView::NoData => view! {
                        <MessageBar intent=MessageBarIntent::Warning>
                            <span>{strings.no_consumption_data}</span>
                        </MessageBar>
                    }.into_any(),
                    ConsumptionsView::Table(rows) => view! {
                        <table
                            class="data-table"
                            style="width: 100%; border-collapse: collapse; font-size: 0.85em;"
                        >
                            <thead>
                                <tr>
                                    <th style=th_style>{strings.consumption}</th>
                                    <th style=th_numeric_style>{strings.count}</th>
                                    <th style=th_numeric_style>{strings.total_cost}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| view! {
                                        <tr>
                                            <td style=td_style>{row.name}</td>
                                            <td style=td_numeric_style>{row.count}</td>
                                            <td style=td_numeric_style>{row.total_cost_label}</td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }.into_any(),
                }}
            </div>
        </CardAnimated>
    }
}
