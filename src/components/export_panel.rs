//! Export panel
//!
//! The three user-triggered export actions: rasterize-and-save as PNG, copy
//! the HTML snippet, copy the plain-text snippet. Each action is independent
//! and idempotent; none of them touches the contact record or the theme
//! selection. Failures are logged and surfaced as a short status line, never
//! propagated further.

use std::path::PathBuf;

use dioxus::prelude::*;
use sigstudio_core::{raster, SignatureResult};

/// Sampling density for the exported PNG (3x the on-screen card size).
const EXPORT_PIXEL_RATIO: f32 = 3.0;

#[component]
pub fn ExportPanel(
    html: ReadOnlySignal<String>,
    text: ReadOnlySignal<String>,
    svg: ReadOnlySignal<String>,
    mut status: Signal<Option<String>>,
    mut exporting: Signal<bool>,
) -> Element {
    let copy_html = move |_| copy_to_clipboard(html(), "HTML signature", status);
    let copy_text = move |_| copy_to_clipboard(text(), "Plain-text signature", status);

    let download_png = move |_| {
        // Overlapping encodes are prevented by the busy flag; a second click
        // while one export is in flight is a no-op.
        if exporting() {
            return;
        }
        let svg_doc = svg();
        if svg_doc.is_empty() {
            // Nothing rendered yet, nothing to rasterize
            return;
        }
        let filename = crate::contact().png_filename();

        exporting.set(true);
        spawn(async move {
            // Rasterization and the save dialog both block, so they run off
            // the UI thread.
            let result = tokio::task::spawn_blocking(move || -> SignatureResult<Option<PathBuf>> {
                let png = raster::rasterize_svg(&svg_doc, EXPORT_PIXEL_RATIO)?;
                let Some(path) = rfd::FileDialog::new()
                    .add_filter("PNG image", &["png"])
                    .set_file_name(&filename)
                    .set_title("Save signature")
                    .save_file()
                else {
                    return Ok(None);
                };
                std::fs::write(&path, &png)?;
                Ok(Some(path))
            })
            .await;

            match result {
                Ok(Ok(Some(path))) => {
                    tracing::info!("Saved signature PNG to {:?}", path);
                    status.set(Some("Signature downloaded as PNG ✔".to_string()));
                }
                Ok(Ok(None)) => {
                    // Save dialog dismissed; not an error, keep the status
                }
                Ok(Err(e)) => {
                    tracing::error!("PNG export failed: {}", e);
                    status.set(Some("Download failed. Try again.".to_string()));
                }
                Err(e) => {
                    tracing::error!("Export task failed: {}", e);
                    status.set(Some("Download failed. Try again.".to_string()));
                }
            }
            exporting.set(false);
        });
    };

    rsx! {
        aside { class: "export-panel",
            h2 { class: "export-header", "Export the signature" }
            p { class: "export-hint",
                "Use the actions below to drop the signature into an email "
                "client or an office application."
            }

            div { class: "export-actions",
                button {
                    class: "btn-primary",
                    disabled: exporting(),
                    onclick: download_png,
                    if exporting() { "Encoding…" } else { "⬇️ Download as PNG" }
                }
                button {
                    class: "btn-ghost",
                    onclick: copy_html,
                    "📋 Copy the HTML version"
                }
                button {
                    class: "btn-ghost",
                    onclick: copy_text,
                    "✏️ Copy the plain text"
                }
            }

            div { class: "snippet-block",
                p { class: "snippet-label", "HTML signature" }
                pre { class: "snippet-body", "{html}" }
            }

            div { class: "tip-box",
                p { class: "tip-label", "Tip" }
                p { class: "tip-body",
                    "For maximum compatibility with Outlook and Gmail, paste "
                    "the HTML directly into the signature preferences, or use "
                    "the PNG file on platforms without HTML support."
                }
            }

            if let Some(message) = status() {
                div { class: "status-pill", "{message}" }
            }
        }
    }
}

/// Write a string to the system clipboard and report the outcome.
///
/// Clipboard access failures are logged and reported; they never escalate
/// beyond the status line.
fn copy_to_clipboard(value: String, label: &'static str, mut status: Signal<Option<String>>) {
    spawn(async move {
        match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(value)) {
            Ok(()) => {
                status.set(Some(format!("{} copied to clipboard ✔", label)));
            }
            Err(e) => {
                tracing::warn!("Clipboard not available: {}", e);
                status.set(Some("Could not copy. Select the snippet manually.".to_string()));
            }
        }
    });
}
