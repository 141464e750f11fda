//! PageFrame: standard root wrapper for every page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id` in the format `"{entity}--{category}"`, e.g. `"d400_booking_summary--dashboard"`
//!   - `data-page-category` with the page category, e.g. `"dashboard"`
//!
//! The `--` separator makes the entity name searchable: copy the id from the
//! browser DOM Inspector, paste into IDE search, and you land in the module
//! directory.

use leptos::prelude::*;

/// Root wrapper that sets standard metadata on every page.
#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`.
    page_id: &'static str,
    /// Page category, e.g. `"dashboard"`.
    category: &'static str,
    /// Additional CSS classes appended after the base class.
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        "dashboard" => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div
            id=page_id
            class=full_class
            data-page-category=category
        >
            {children()}
        </div>
    }
}
