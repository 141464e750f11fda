//! Date and time formatting for display.
//!
//! The summary endpoint emits plain `YYYY-MM-DD` dates and RFC 3339
//! timestamps. Both are reshaped at the string level; unexpected input falls
//! through unchanged instead of erroring.

fn split_ymd(date_part: &str) -> Option<(&str, &str, &str)> {
    let mut parts = date_part.splitn(3, '-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if year.is_empty() || month.is_empty() || day.is_empty() {
        return None;
    }
    Some((year, month, day))
}

/// Format an ISO date string as DD.MM.YYYY.
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match split_ymd(date_part) {
        Some((year, month, day)) => format!("{day}.{month}.{year}"),
        None => date_str.to_string(),
    }
}

/// Format an ISO datetime string as DD.MM.YYYY HH:MM:SS.
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    let Some((date_part, time_part)) = datetime_str.split_once('T') else {
        return format_date(datetime_str);
    };
    let time = time_part
        .split(['.', 'Z', '+'])
        .next()
        .unwrap_or(time_part);
    match split_ymd(date_part) {
        Some((year, month, day)) => format!("{day}.{month}.{year} {time}"),
        None => datetime_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-04"), "04.03.2024");
        assert_eq!(format_date("2024-03-04T08:00:00Z"), "04.03.2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-04T08:00:00.123Z"),
            "04.03.2024 08:00:00"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31.12.2024 23:59:59"
        );
        assert_eq!(format_datetime("2024-12-31"), "31.12.2024");
    }

    #[test]
    fn test_unexpected_input_falls_through() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_datetime("soonTlater"), "soonTlater");
    }
}
