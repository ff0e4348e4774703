//! Contact Record
//!
//! The single source of truth for the signature. Loaded once at startup,
//! either from the built-in default or from a TOML file, and never mutated
//! afterwards. Every representation (HTML, plain text, SVG card) is a pure
//! projection of this record.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{SignatureError, SignatureResult};

/// Identity and contact fields rendered into the signature.
///
/// All fields are required and must be non-empty; [`ContactRecord::validate`]
/// enforces this when a record is loaded from a file.
///
/// # Example
///
/// ```
/// use sigstudio_core::ContactRecord;
///
/// let contact = ContactRecord::default();
/// assert_eq!(contact.reversed_name(), "Hakima Ouabas");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Full display name, e.g. "Ouabas Hakima"
    pub full_name: String,
    /// Job title or role line shown under the name
    pub title: String,
    /// Email address (rendered as a mailto: link in HTML)
    pub email: String,
    /// Phone number, displayed verbatim
    pub phone: String,
    /// Website URL including scheme
    pub website: String,
    /// City / location line
    pub address: String,
}

impl Default for ContactRecord {
    fn default() -> Self {
        Self {
            full_name: "Ouabas Hakima".to_string(),
            title: "Consultante en communication digitale".to_string(),
            email: "contact@ouabashakima.com".to_string(),
            phone: "+33 6 45 82 19 73".to_string(),
            website: "https://ouabashakima.com".to_string(),
            address: "Paris, France".to_string(),
        }
    }
}

impl ContactRecord {
    /// Load a contact record from a TOML file and validate it.
    ///
    /// Used by the `--contact` command line override. The record must be
    /// fully populated; a missing or empty field is an error so the session
    /// never starts with a partial signature.
    pub fn from_toml_file(path: impl AsRef<Path>) -> SignatureResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let record: Self = toml::from_str(&content)?;
        record.validate()?;
        Ok(record)
    }

    /// Check that every field is non-empty.
    pub fn validate(&self) -> SignatureResult<()> {
        let fields = [
            ("full_name", &self.full_name),
            ("title", &self.title),
            ("email", &self.email),
            ("phone", &self.phone),
            ("website", &self.website),
            ("address", &self.address),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(SignatureError::InvalidContact(format!(
                    "{} is empty",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Full name with its words in reversed order.
    ///
    /// Decorative footer line on the visual card, derived from
    /// `full_name` rather than stored separately.
    pub fn reversed_name(&self) -> String {
        self.full_name
            .split_whitespace()
            .rev()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Website without the URL scheme, for display.
    pub fn website_display(&self) -> &str {
        self.website
            .strip_prefix("https://")
            .or_else(|| self.website.strip_prefix("http://"))
            .unwrap_or(&self.website)
    }

    /// Suggested filename for the exported PNG, derived from the name.
    pub fn png_filename(&self) -> String {
        let mut slug = String::with_capacity(self.full_name.len());
        let mut last_dash = true;
        for c in self.full_name.chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
                last_dash = false;
            } else if !last_dash {
                slug.push('-');
                last_dash = true;
            }
        }
        let slug = slug.trim_end_matches('-');
        format!("signature-{}.png", slug)
    }
}
