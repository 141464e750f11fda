use crate::shared::icons::icon;
use leptos::prelude::*;

/// Group the digits of a count with non-breaking spaces ("12 345").
pub fn format_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\u{00a0}");
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = nothing loaded yet)
    #[prop(into)]
    value: Signal<Option<i64>>,
    /// Helper line below the value
    help_text: String,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format_thousands(v),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                <div class="stat-card__subtitle">{help_text}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(987), "987");
        assert_eq!(format_thousands(1234), "1\u{00a0}234");
        assert_eq!(format_thousands(1234567), "1\u{00a0}234\u{00a0}567");
        assert_eq!(format_thousands(-1234), "-1\u{00a0}234");
    }
}
