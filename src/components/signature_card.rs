//! Signature preview pane
//!
//! Shows the rendered SVG card inline. The same document goes to the
//! rasterizer on export, so the preview is pixel-for-pixel what the PNG
//! will contain.

use dioxus::prelude::*;

#[component]
pub fn SignatureCard(svg: ReadOnlySignal<String>) -> Element {
    rsx! {
        article { class: "preview-pane",
            div {
                class: "preview-card",
                dangerous_inner_html: "{svg}",
            }
        }
    }
}
