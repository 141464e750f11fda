//! CardAnimated: wrapper around the Thaw Card with an entrance animation.
//!
//! Drop-in replacement for `<Card attr:style="...">`; the `card-appear`
//! keyframes live in the application stylesheet.
//!
//! # Example
//! ```ignore
//! // Cascading delays give a stagger effect across a card list:
//! <CardAnimated delay_ms=0>..</CardAnimated>
//! <CardAnimated delay_ms=80>..</CardAnimated>
//! <CardAnimated delay_ms=160>..</CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Wrapper around the Thaw [`Card`] with the `card-appear` animation.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds (for the stagger effect).
    #[prop(optional)]
    delay_ms: u32,
    /// Extra inline styles, appended after the animation styles.
    #[prop(optional, into)]
    style: String,
    children: Children,
) -> impl IntoView {
    let full_style = if style.is_empty() {
        format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
    } else {
        format!(
            "animation: card-appear 0.28s ease-out {}ms both; {}",
            delay_ms, style
        )
    };

    view! {
        <Card attr:style=full_style>
            {children()}
        </Card>
    }
}
