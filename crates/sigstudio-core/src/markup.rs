//! Representation generators
//!
//! Pure functions mapping (contact, theme) to the HTML snippet and the
//! plain-text snippet. Both are stateless and deterministic: calling them
//! twice with the same inputs yields byte-identical output.

use crate::accent::AccentTheme;
use crate::contact::ContactRecord;

/// Escape a field value for interpolation into HTML or SVG text.
pub(crate) fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Generate the email-client HTML snippet.
///
/// Table-based layout with inline styles only, so the markup survives being
/// pasted into rich-text signature editors (Outlook, Gmail). The theme's
/// colors appear on the vertical divider gradient and on the two links.
pub fn email_html(contact: &ContactRecord, theme: &AccentTheme) -> String {
    let full_name = escape_text(&contact.full_name);
    let title = escape_text(&contact.title);
    let phone = escape_text(&contact.phone);
    let email = escape_text(&contact.email);
    let website = escape_text(&contact.website);
    let website_display = escape_text(contact.website_display());
    let address = escape_text(&contact.address);

    format!(
        r#"<table cellpadding="0" cellspacing="0" style="font-family: 'Segoe UI', Arial, sans-serif; color: #1e1e1e;">
  <tr>
    <td style="padding-right: 24px;">
      <span style="display: block; font-size: 24px; font-weight: 600; letter-spacing: 0.08em; text-transform: uppercase;">{full_name}</span>
      <span style="display: block; margin-top: 4px; font-size: 14px; color: #5b5b5b;">{title}</span>
    </td>
    <td style="width: 2px; background: {divider};"></td>
    <td style="padding-left: 24px;">
      <table cellpadding="0" cellspacing="0" style="font-size: 14px; color: #3b3b3b;">
        <tr>
          <td style="padding: 2px 0;">📞</td>
          <td style="padding: 2px 12px 2px 8px;">{phone}</td>
        </tr>
        <tr>
          <td style="padding: 2px 0;">✉️</td>
          <td style="padding: 2px 12px 2px 8px;"><a href="mailto:{email}" style="color: {link}; text-decoration: none;">{email}</a></td>
        </tr>
        <tr>
          <td style="padding: 2px 0;">🌐</td>
          <td style="padding: 2px 12px 2px 8px;"><a href="{website}" style="color: {link}; text-decoration: none;">{website_display}</a></td>
        </tr>
        <tr>
          <td style="padding: 2px 0;">📍</td>
          <td style="padding: 2px 12px 2px 8px;">{address}</td>
        </tr>
      </table>
    </td>
  </tr>
</table>"#,
        divider = theme.linear_gradient(180),
        link = theme.from,
    )
}

/// Generate the plain-text snippet.
///
/// One line per logical field group, pipe-delimited within a line:
///
/// ```text
/// <full_name>
/// <title>
/// <phone> | <email>
/// <website> | <address>
/// ```
pub fn plain_text(contact: &ContactRecord) -> String {
    format!(
        "{}\n{}\n{} | {}\n{} | {}",
        contact.full_name,
        contact.title,
        contact.phone,
        contact.email,
        contact.website,
        contact.address
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accent::ACCENT_PALETTE;

    fn sample_contact() -> ContactRecord {
        ContactRecord {
            full_name: "Jane Doe".to_string(),
            title: "Engineer".to_string(),
            email: "j@x.com".to_string(),
            phone: "+1 555 0100".to_string(),
            website: "https://janedoe.dev".to_string(),
            address: "Lyon, France".to_string(),
        }
    }

    #[test]
    fn test_generators_are_pure() {
        let contact = sample_contact();
        let theme = &ACCENT_PALETTE[1];
        assert_eq!(
            email_html(&contact, theme),
            email_html(&contact, theme)
        );
        assert_eq!(plain_text(&contact), plain_text(&contact));
    }

    #[test]
    fn test_html_contains_theme_colors_for_every_theme() {
        let contact = sample_contact();
        for theme in &ACCENT_PALETTE {
            let html = email_html(&contact, theme);
            assert!(html.contains(theme.from), "missing {}", theme.from);
            assert!(html.contains(theme.to), "missing {}", theme.to);
        }
    }

    #[test]
    fn test_html_is_inline_only_table_markup() {
        let contact = sample_contact();
        let html = email_html(&contact, &ACCENT_PALETTE[0]);
        assert!(html.starts_with("<table"));
        assert!(html.ends_with("</table>"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("class="));
        assert!(html.contains("mailto:j@x.com"));
        assert!(html.contains(r#"href="https://janedoe.dev""#));
        // Displayed website drops the scheme
        assert!(html.contains(">janedoe.dev</a>"));
    }

    #[test]
    fn test_plain_text_exact_format() {
        let text = plain_text(&sample_contact());
        assert_eq!(
            text,
            "Jane Doe\nEngineer\n+1 555 0100 | j@x.com\nhttps://janedoe.dev | Lyon, France"
        );
    }

    #[test]
    fn test_plain_text_and_html_carry_the_same_fields() {
        let contact = sample_contact();
        for theme in &ACCENT_PALETTE {
            let html = email_html(&contact, theme);
            let text = plain_text(&contact);
            for value in [
                &contact.full_name,
                &contact.title,
                &contact.email,
                &contact.phone,
                &contact.address,
            ] {
                assert!(html.contains(value.as_str()), "html missing {}", value);
                assert!(text.contains(value.as_str()), "text missing {}", value);
                // Exactly once, except the email which the HTML repeats as
                // the mailto target and the link label.
                let html_hits = html.matches(value.as_str()).count();
                let expected = if value == &contact.email { 2 } else { 1 };
                assert_eq!(html_hits, expected, "{} repeated in html", value);
                assert_eq!(text.matches(value.as_str()).count(), 1);
            }
        }
    }

    #[test]
    fn test_field_values_are_escaped() {
        let contact = ContactRecord {
            title: "R&D <Lead>".to_string(),
            ..sample_contact()
        };
        let html = email_html(&contact, &ACCENT_PALETTE[0]);
        assert!(html.contains("R&amp;D &lt;Lead&gt;"));
        assert!(!html.contains("R&D <Lead>"));
        // Plain text is not markup and stays verbatim
        assert!(plain_text(&contact).contains("R&D <Lead>"));
    }
}
