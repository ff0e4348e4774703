//! UI Components for Signature Studio.

mod accent_picker;
mod export_panel;
mod signature_card;

pub use accent_picker::AccentPicker;
pub use export_panel::ExportPanel;
pub use signature_card::SignatureCard;
