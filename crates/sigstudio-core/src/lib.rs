//! Signature Studio Core Library
//!
//! Everything needed to generate, render and export a personal email
//! signature, independent of the desktop UI.
//!
//! ## Overview
//!
//! A single [`ContactRecord`] is the source of truth. Three synchronized
//! representations are derived from it and the selected [`AccentTheme`]:
//!
//! - an HTML snippet suitable for pasting into a mail client
//!   ([`markup::email_html`])
//! - a plain-text snippet ([`markup::plain_text`])
//! - a visual card as an SVG document ([`card::signature_card_svg`]),
//!   which is also the input to the PNG rasterizer
//!   ([`raster::rasterize_svg`])
//!
//! All generators are pure functions: identical inputs produce
//! byte-identical output, so the preview, the snippet and the exported
//! image can never disagree.
//!
//! ## Quick Start
//!
//! ```
//! use sigstudio_core::{accent, card, markup, raster, ContactRecord};
//!
//! let contact = ContactRecord::default();
//! let theme = accent::AccentTheme::get(0).unwrap();
//!
//! let html = markup::email_html(&contact, theme);
//! let text = markup::plain_text(&contact);
//! let svg = card::signature_card_svg(&contact, theme);
//! let png = raster::rasterize_svg(&svg, 3.0).unwrap();
//! assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
//! ```

pub mod accent;
pub mod card;
pub mod contact;
pub mod error;
pub mod markup;
pub mod raster;

// Re-exports
pub use accent::{AccentTheme, ACCENT_PALETTE};
pub use contact::ContactRecord;
pub use error::{SignatureError, SignatureResult};
