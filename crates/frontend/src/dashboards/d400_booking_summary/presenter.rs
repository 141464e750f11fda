//! Read-only transform from the fetched summary payload to the display tree.
//!
//! Everything here is pure: no signals, no mutation of the input, the same
//! payload and locale always produce the same tree. Derived values (the
//! per-room cost total, the period label) are computed on every call and
//! never cached on the wire types.

use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::locale::Locale;
use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d400_booking_summary::{BookingSummaryResponse, RoomSummary};

/// Display tree of one fetched summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryView {
    /// "March 2024" style label; `None` when the response carries no window.
    pub period_label: Option<String>,
    pub total_bookings: u32,
    pub total_participants: u32,
    pub offices: Vec<OfficeView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OfficeView {
    pub office_name: String,
    pub room_count_label: String,
    pub rooms: Vec<RoomView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoomView {
    pub room_name: String,
    /// "04.03.2024 - 28.03.2024"
    pub booking_dates: String,
    /// "04.03.2024 08:00:00 - 28.03.2024 17:00:00"
    pub time_range: String,
    pub booking_count: u32,
    pub total_participants: u32,
    /// Derived sum of the room's consumption costs, formatted as rupiah.
    pub total_cost_label: String,
    pub consumptions: ConsumptionsView,
}

/// A room without consumption line items gets an explicit marker instead of
/// an empty table.
#[derive(Debug, Clone, PartialEq)]
pub enum ConsumptionsView {
    Table(Vec<ConsumptionRow>),
    NoData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsumptionRow {
    pub name: String,
    pub count: u32,
    pub total_cost_label: String,
}

/// Build the display tree for one summary payload.
///
/// Offices, rooms and consumptions keep the order they arrived in.
pub fn present(summary: &BookingSummaryResponse, locale: Locale) -> SummaryView {
    SummaryView {
        period_label: format_period(&summary.start_date, &summary.end_date, locale),
        total_bookings: summary.total_bookings,
        total_participants: summary.total_participants,
        offices: summary
            .offices
            .iter()
            .map(|office| OfficeView {
                office_name: office.office_name.clone(),
                room_count_label: locale.room_count_label(office.rooms.len()),
                rooms: office.rooms.iter().map(room_view).collect(),
            })
            .collect(),
    }
}

fn room_view(room: &RoomSummary) -> RoomView {
    let consumptions = if room.consumptions.is_empty() {
        ConsumptionsView::NoData
    } else {
        ConsumptionsView::Table(
            room.consumptions
                .iter()
                .map(|c| ConsumptionRow {
                    name: c.consumption_name.clone(),
                    count: c.count,
                    total_cost_label: format_rupiah(c.total_cost),
                })
                .collect(),
        )
    };

    RoomView {
        room_name: room.room_name.clone(),
        booking_dates: format!(
            "{} - {}",
            format_date(&room.booking_start_date),
            format_date(&room.booking_end_date)
        ),
        time_range: format!(
            "{} - {}",
            format_datetime(&room.start_time),
            format_datetime(&room.end_time)
        ),
        booking_count: room.booking_count,
        total_participants: room.total_participants,
        total_cost_label: format_rupiah(room_total_cost(room)),
        consumptions,
    }
}

/// Sum of the room's consumption costs.
pub fn room_total_cost(room: &RoomSummary) -> i64 {
    room.consumptions.iter().map(|c| c.total_cost).sum()
}

/// Human-readable period label.
///
/// Accepts plain `YYYY-MM-DD` dates as well as RFC 3339 timestamps (only the
/// date prefix matters). Start and end in the same calendar month collapse to
/// "<Month> <Year>"; otherwise both ends are spelled out. Empty or
/// unparseable input yields `None`.
pub fn format_period(start: &str, end: &str, locale: Locale) -> Option<String> {
    let start = parse_display_date(start)?;
    let end = parse_display_date(end)?;

    let start_label = format!("{} {}", locale.month_name(start.month()), start.year());
    if start.year() == end.year() && start.month() == end.month() {
        Some(start_label)
    } else {
        Some(format!(
            "{} - {} {}",
            start_label,
            locale.month_name(end.month()),
            end.year()
        ))
    }
}

fn parse_display_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok()
}

/// Rupiah amount with dot-grouped thousands: "Rp 1.234.567".
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.abs().to_string();
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(".");
    if amount < 0 {
        format!("Rp -{grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_booking_summary::{ConsumptionSummary, OfficeSummary};

    fn room(consumptions: Vec<ConsumptionSummary>) -> RoomSummary {
        RoomSummary {
            room_name: "Borobudur".to_string(),
            booking_start_date: "2024-03-04".to_string(),
            booking_end_date: "2024-03-28".to_string(),
            start_time: "2024-03-04T08:00:00Z".to_string(),
            end_time: "2024-03-28T17:00:00Z".to_string(),
            booking_count: 7,
            total_participants: 52,
            consumptions,
        }
    }

    fn consumption(name: &str, count: u32, total_cost: i64) -> ConsumptionSummary {
        ConsumptionSummary {
            consumption_name: name.to_string(),
            count,
            total_cost,
        }
    }

    fn summary(rooms: Vec<RoomSummary>) -> BookingSummaryResponse {
        BookingSummaryResponse {
            start_date: "2024-03-01".to_string(),
            end_date: "2024-03-31".to_string(),
            total_bookings: 12,
            total_participants: 87,
            offices: vec![OfficeSummary {
                office_name: "Jakarta HQ".to_string(),
                rooms,
            }],
        }
    }

    #[test]
    fn period_label_collapses_a_single_month() {
        assert_eq!(
            format_period("2024-03-01T00:00:00Z", "2024-03-31T00:00:00Z", Locale::En),
            Some("March 2024".to_string())
        );
    }

    #[test]
    fn period_label_spells_out_a_multi_month_window() {
        assert_eq!(
            format_period("2024-01-15T00:00:00Z", "2024-03-10T00:00:00Z", Locale::En),
            Some("January 2024 - March 2024".to_string())
        );
        assert_eq!(
            format_period("2023-11-01", "2024-02-29", Locale::En),
            Some("November 2023 - February 2024".to_string())
        );
    }

    #[test]
    fn period_label_follows_the_locale() {
        assert_eq!(
            format_period("2024-03-01", "2024-03-31", Locale::Id),
            Some("Maret 2024".to_string())
        );
    }

    #[test]
    fn period_label_absent_for_empty_window() {
        assert_eq!(format_period("", "", Locale::En), None);
        assert_eq!(format_period("2024-03-01", "", Locale::En), None);
    }

    #[test]
    fn room_cost_is_the_sum_of_consumption_costs() {
        let room = room(vec![
            consumption("Snack Siang", 2, 50000),
            consumption("Makan Siang", 1, 20000),
        ]);
        assert_eq!(room_total_cost(&room), 70000);

        let view = present(&summary(vec![room]), Locale::En);
        assert_eq!(view.offices[0].rooms[0].total_cost_label, "Rp 70.000");
    }

    #[test]
    fn empty_consumptions_present_as_no_data() {
        let view = present(&summary(vec![room(vec![])]), Locale::En);
        assert_eq!(
            view.offices[0].rooms[0].consumptions,
            ConsumptionsView::NoData
        );
    }

    #[test]
    fn consumption_rows_keep_received_order() {
        let view = present(
            &summary(vec![room(vec![
                consumption("Kopi", 9, 90000),
                consumption("Air Mineral", 4, 20000),
                consumption("Snack Siang", 1, 15000),
            ])]),
            Locale::En,
        );
        let ConsumptionsView::Table(rows) = &view.offices[0].rooms[0].consumptions else {
            panic!("expected a consumption table");
        };
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Kopi", "Air Mineral", "Snack Siang"]);
    }

    #[test]
    fn presenting_twice_yields_the_same_tree() {
        let payload = summary(vec![room(vec![consumption("Kopi", 2, 30000)])]);
        assert_eq!(
            present(&payload, Locale::En),
            present(&payload, Locale::En)
        );
    }

    #[test]
    fn room_lines_use_display_formatting() {
        let view = present(&summary(vec![room(vec![])]), Locale::En);
        let room = &view.offices[0].rooms[0];
        assert_eq!(room.booking_dates, "04.03.2024 - 28.03.2024");
        assert_eq!(
            room.time_range,
            "04.03.2024 08:00:00 - 28.03.2024 17:00:00"
        );
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(70000), "Rp 70.000");
        assert_eq!(format_rupiah(1234567), "Rp 1.234.567");
    }

    #[test]
    fn localized_room_count_in_office_header() {
        let view_en = present(&summary(vec![room(vec![])]), Locale::En);
        assert_eq!(view_en.offices[0].room_count_label, "1 room");

        let view_id = present(&summary(vec![room(vec![])]), Locale::Id);
        assert_eq!(view_id.offices[0].room_count_label, "1 ruangan");
    }
}
