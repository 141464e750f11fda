use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Year/month pair picked in the dashboard filter.
///
/// Both fields come from closed `<select>` option sets; a partial selection
/// (only one of the two) carries no filter meaning and resolves to no range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSelection {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Inclusive calendar window sent to the summary endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl PeriodSelection {
    /// Resolve the selection to the full calendar month it names.
    ///
    /// The end date is computed as the first day of the following month minus
    /// one day, so month lengths (including leap-year February) fall out of
    /// the calendar itself. Returns `None` when either field is absent or the
    /// pair does not name a real month.
    pub fn resolve(&self) -> Option<DateRange> {
        let (year, month) = (self.year?, self.month?);
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end_date = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)? - Duration::days(1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)? - Duration::days(1)
        };
        Some(DateRange {
            start_date,
            end_date,
        })
    }
}

impl DateRange {
    /// `start_date` query parameter value, `YYYY-MM-DD`.
    pub fn start_param(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    /// `end_date` query parameter value, `YYYY-MM-DD`.
    pub fn end_param(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(year: i32, month: u32) -> PeriodSelection {
        PeriodSelection {
            year: Some(year),
            month: Some(month),
        }
    }

    #[test]
    fn resolves_leap_year_february() {
        let range = selection(2024, 2).resolve().unwrap();
        assert_eq!(range.start_param(), "2024-02-01");
        assert_eq!(range.end_param(), "2024-02-29");
    }

    #[test]
    fn resolves_common_year_february() {
        let range = selection(2023, 2).resolve().unwrap();
        assert_eq!(range.end_param(), "2023-02-28");
    }

    #[test]
    fn century_years_are_not_leap_years() {
        let range = selection(2100, 2).resolve().unwrap();
        assert_eq!(range.end_param(), "2100-02-28");
    }

    #[test]
    fn resolves_december_across_year_boundary() {
        let range = selection(2024, 12).resolve().unwrap();
        assert_eq!(range.start_param(), "2024-12-01");
        assert_eq!(range.end_param(), "2024-12-31");
    }

    #[test]
    fn month_lengths_match_the_calendar() {
        for (month, last_day) in [
            (1, 31),
            (2, 28),
            (3, 31),
            (4, 30),
            (5, 31),
            (6, 30),
            (7, 31),
            (8, 31),
            (9, 30),
            (10, 31),
            (11, 30),
            (12, 31),
        ] {
            let range = selection(2023, month).resolve().unwrap();
            assert_eq!(
                range.end_date,
                NaiveDate::from_ymd_opt(2023, month, last_day).unwrap(),
                "month {month}"
            );
            assert!(range.start_date <= range.end_date);
        }
    }

    #[test]
    fn empty_selection_resolves_to_no_range() {
        assert_eq!(PeriodSelection::default().resolve(), None);
    }

    #[test]
    fn partial_selection_resolves_to_no_range() {
        let year_only = PeriodSelection {
            year: Some(2024),
            month: None,
        };
        let month_only = PeriodSelection {
            year: None,
            month: Some(5),
        };
        assert_eq!(year_only.resolve(), None);
        assert_eq!(month_only.resolve(), None);
    }

    #[test]
    fn out_of_range_month_resolves_to_no_range() {
        assert_eq!(selection(2024, 0).resolve(), None);
        assert_eq!(selection(2024, 13).resolve(), None);
    }
}
