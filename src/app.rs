use dioxus::prelude::*;
use sigstudio_core::{card, markup, AccentTheme, ACCENT_PALETTE};

use crate::components::{AccentPicker, ExportPanel, SignatureCard};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Holds the session state: the selected accent theme, the transient status
/// message of the last export action, and the busy flag for the PNG export.
/// The three representations (HTML snippet, plain text, SVG card) are
/// memoized on the selected theme, so switching themes regenerates all of
/// them in the same render pass.
#[component]
pub fn App() -> Element {
    let contact = crate::contact();

    // Index into ACCENT_PALETTE; first theme selected at startup
    let accent_index: Signal<usize> = use_signal(|| 0);
    // Outcome of the last export action, overwritten by each new action
    let status: Signal<Option<String>> = use_signal(|| None);
    // Busy guard: disables the download button while encoding is in flight
    let exporting: Signal<bool> = use_signal(|| false);

    let html = use_memo(move || {
        let theme = AccentTheme::get(accent_index()).unwrap_or(&ACCENT_PALETTE[0]);
        markup::email_html(contact, theme)
    });
    let text = use_memo(move || markup::plain_text(contact));
    let svg = use_memo(move || {
        let theme = AccentTheme::get(accent_index()).unwrap_or(&ACCENT_PALETTE[0]);
        card::signature_card_svg(contact, theme)
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "studio",
            header { class: "studio-header",
                p { class: "studio-kicker", "Signature électronique officielle" }
                h1 { class: "studio-title",
                    "Signature de "
                    span { class: "studio-title-name", "{contact.full_name}" }
                }
                p { class: "studio-lede",
                    "Download, copy or embed this professional signature, "
                    "optimized for email clients."
                }
                AccentPicker { accent_index }
            }

            section { class: "studio-grid",
                SignatureCard { svg }
                ExportPanel { html, text, svg, status, exporting }
            }
        }
    }
}
