//! Display language module.
//!
//! The dashboard is a single view parameterized by a string table, with
//! support for English and Indonesian labels. The language choice is
//! persisted in localStorage.

use leptos::prelude::*;
use web_sys::window;

/// Available display languages.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Locale {
    #[default]
    En,
    Id,
}

/// Static label table for one language.
///
/// Every user-visible string of the dashboard lives here; components never
/// hardcode display text.
pub struct Strings {
    pub app_title: &'static str,
    pub refresh: &'static str,
    pub refreshing: &'static str,
    pub year: &'static str,
    pub month: &'static str,
    pub select_year: &'static str,
    pub select_month: &'static str,
    pub filter: &'static str,
    pub clear_filter: &'static str,
    pub period: &'static str,
    pub loading_summary: &'static str,
    pub summary_loaded: &'static str,
    pub summary_failed: &'static str,
    pub total_bookings: &'static str,
    pub bookings: &'static str,
    pub total_participants: &'static str,
    pub participants: &'static str,
    pub offices_heading: &'static str,
    pub booking_dates: &'static str,
    pub time_range: &'static str,
    pub total_cost: &'static str,
    pub consumption: &'static str,
    pub count: &'static str,
    pub no_consumption_data: &'static str,
}

static STRINGS_EN: Strings = Strings {
    app_title: "Booking Dashboard",
    refresh: "Refresh",
    refreshing: "Refreshing...",
    year: "Year",
    month: "Month",
    select_year: "Select year",
    select_month: "Select month",
    filter: "Filter",
    clear_filter: "Clear Filter",
    period: "Period",
    loading_summary: "Loading summary...",
    summary_loaded: "Summary loaded successfully",
    summary_failed: "Error fetching summary",
    total_bookings: "Total Bookings",
    bookings: "Bookings",
    total_participants: "Total Participants",
    participants: "Participants",
    offices_heading: "Offices and Rooms Summary",
    booking_dates: "Booking Dates",
    time_range: "Time Range",
    total_cost: "Total Cost",
    consumption: "Consumption",
    count: "Count",
    no_consumption_data: "No consumption data",
};

static STRINGS_ID: Strings = Strings {
    app_title: "Dasbor Pemesanan",
    refresh: "Muat Ulang",
    refreshing: "Memuat ulang...",
    year: "Tahun",
    month: "Bulan",
    select_year: "Pilih tahun",
    select_month: "Pilih bulan",
    filter: "Filter",
    clear_filter: "Hapus Filter",
    period: "Periode",
    loading_summary: "Memuat ringkasan...",
    summary_loaded: "Ringkasan berhasil dimuat",
    summary_failed: "Gagal memuat ringkasan",
    total_bookings: "Total Pemesanan",
    bookings: "Pemesanan",
    total_participants: "Total Peserta",
    participants: "Peserta",
    offices_heading: "Ringkasan Kantor dan Ruangan",
    booking_dates: "Tanggal Pemesanan",
    time_range: "Rentang Waktu",
    total_cost: "Total Biaya",
    consumption: "Konsumsi",
    count: "Jumlah",
    no_consumption_data: "Tidak ada data konsumsi",
};

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

impl Locale {
    /// Returns the locale code as a string (used for localStorage).
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }

    /// Returns the display name for the language selector.
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Id => "Bahasa Indonesia",
        }
    }

    /// Parse locale from string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "id" => Locale::Id,
            _ => Locale::En,
        }
    }

    /// Returns all available locales.
    pub fn all() -> [Locale; 2] {
        [Locale::En, Locale::Id]
    }

    /// The label table of this locale.
    pub fn strings(&self) -> &'static Strings {
        match self {
            Locale::En => &STRINGS_EN,
            Locale::Id => &STRINGS_ID,
        }
    }

    /// Long month name for `month` in 1..=12; empty string out of range.
    pub fn month_name(&self, month: u32) -> &'static str {
        let table = match self {
            Locale::En => &MONTHS_EN,
            Locale::Id => &MONTHS_ID,
        };
        month
            .checked_sub(1)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or_default()
    }

    /// Localized "N room(s)" label for an office header.
    pub fn room_count_label(&self, count: usize) -> String {
        match self {
            Locale::En if count == 1 => "1 room".to_string(),
            Locale::En => format!("{count} rooms"),
            // Indonesian does not inflect the noun for number.
            Locale::Id => format!("{count} ruangan"),
        }
    }
}

const LOCALE_STORAGE_KEY: &str = "booking-dashboard-locale";

/// Load locale from localStorage.
fn load_locale_from_storage() -> Locale {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
        .map(|s| Locale::from_str(&s))
        .unwrap_or_default()
}

/// Save locale to localStorage.
fn save_locale_to_storage(locale: Locale) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LOCALE_STORAGE_KEY, locale.as_str());
    }
}

/// Locale context type.
#[derive(Clone, Copy)]
pub struct LocaleContext {
    /// Current locale signal.
    pub locale: RwSignal<Locale>,
}

impl LocaleContext {
    /// Set the locale and persist to storage.
    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
        save_locale_to_storage(locale);
    }

    /// Label table of the current locale; reactive when read inside a
    /// tracking context.
    pub fn strings(&self) -> &'static Strings {
        self.locale.get().strings()
    }
}

/// Provides locale context to children components.
#[component]
pub fn LocaleProvider(children: Children) -> impl IntoView {
    let locale = RwSignal::new(load_locale_from_storage());
    provide_context(LocaleContext { locale });

    children()
}

/// Hook to use the locale context.
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>()
        .expect("LocaleContext not found. Wrap your app with LocaleProvider.")
}

/// Language selector dropdown component.
#[component]
pub fn LocaleSelect() -> impl IntoView {
    let ctx = use_locale();

    view! {
        <select
            class="locale-select"
            prop:value=move || ctx.locale.get().as_str().to_string()
            on:change=move |ev| ctx.set_locale(Locale::from_str(&event_target_value(&ev)))
            style="padding: 6px 10px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff;"
        >
            {Locale::all()
                .into_iter()
                .map(|locale| {
                    view! { <option value=locale.as_str()>{locale.display_name()}</option> }
                })
                .collect_view()}
        </select>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_by_locale() {
        assert_eq!(Locale::En.month_name(1), "January");
        assert_eq!(Locale::En.month_name(3), "March");
        assert_eq!(Locale::Id.month_name(3), "Maret");
        assert_eq!(Locale::Id.month_name(12), "Desember");
    }

    #[test]
    fn month_name_out_of_range_is_empty() {
        assert_eq!(Locale::En.month_name(0), "");
        assert_eq!(Locale::En.month_name(13), "");
    }

    #[test]
    fn room_count_labels() {
        assert_eq!(Locale::En.room_count_label(1), "1 room");
        assert_eq!(Locale::En.room_count_label(3), "3 rooms");
        assert_eq!(Locale::Id.room_count_label(1), "1 ruangan");
        assert_eq!(Locale::Id.room_count_label(3), "3 ruangan");
    }

    #[test]
    fn locale_code_round_trips() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_str(locale.as_str()), locale);
        }
        assert_eq!(Locale::from_str("unknown"), Locale::En);
    }
}
