//! Accent theme picker
//!
//! One button per palette entry with a gradient swatch. Clicking a button is
//! the only way the selection changes; an index that is somehow out of range
//! is rejected and the current selection kept.

use dioxus::prelude::*;
use sigstudio_core::{AccentTheme, ACCENT_PALETTE};

#[component]
pub fn AccentPicker(mut accent_index: Signal<usize>) -> Element {
    let buttons = ACCENT_PALETTE.iter().enumerate().map(|(index, theme)| {
        let gradient = theme.linear_gradient(90);
        let class = if accent_index() == index {
            "accent-btn accent-btn--selected"
        } else {
            "accent-btn"
        };
        rsx! {
            button {
                key: "{theme.name}",
                class: "{class}",
                onclick: move |_| {
                    if AccentTheme::get(index).is_some() {
                        accent_index.set(index);
                    } else {
                        tracing::warn!("Ignoring out-of-range theme index {}", index);
                    }
                },
                span {
                    class: "accent-swatch",
                    style: "background: {gradient};",
                }
                "{theme.name}"
            }
        }
    });

    rsx! {
        div { class: "accent-picker", {buttons} }
    }
}
