//! Visual card renderer
//!
//! Renders the on-screen signature card as a self-contained SVG document.
//! The same document is shown inline in the preview pane and handed to the
//! rasterizer for PNG export, so the pixels the user downloads are exactly
//! the card they see.
//!
//! Field set, field order and theme colors mirror
//! [`markup::email_html`](crate::markup::email_html): both functions are
//! projections of the same (contact, theme) pair and must never diverge.

use crate::accent::AccentTheme;
use crate::contact::ContactRecord;
use crate::markup::escape_text;

/// Card geometry, in CSS pixels at a pixel ratio of 1.
pub const CARD_WIDTH: u32 = 640;
/// Card height in CSS pixels.
pub const CARD_HEIGHT: u32 = 400;

const FONT_STACK: &str = "'Segoe UI', Arial, sans-serif";

/// Render the signature card as an SVG document.
///
/// Layout, top to bottom: small caps label, uppercase letter-spaced name,
/// title, the four contact lines (phone, email, website, address), a
/// horizontal gradient divider in the theme colors, and the reversed-name
/// footer. Email and website use the theme's `from` color, matching the
/// link color of the HTML snippet.
pub fn signature_card_svg(contact: &ContactRecord, theme: &AccentTheme) -> String {
    let name = escape_text(&contact.full_name.to_uppercase());
    let title = escape_text(&contact.title);
    let phone = escape_text(&contact.phone);
    let email = escape_text(&contact.email);
    let website = escape_text(contact.website_display());
    let address = escape_text(&contact.address);
    let footer = escape_text(&contact.reversed_name().to_uppercase());

    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
<defs>
<linearGradient id="divider" x1="0" y1="0" x2="1" y2="0">
<stop offset="0%" stop-color="{from}"/>
<stop offset="100%" stop-color="{to}"/>
</linearGradient>
</defs>
<rect width="{w}" height="{h}" rx="24" fill="#ffffff" stroke="#e2e8f0" stroke-width="1"/>
"##,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
        from = theme.from,
        to = theme.to,
    ));

    svg.push_str(&format!(
        r##"<text x="48" y="64" font-family="{font}" font-size="11" letter-spacing="4" fill="#94a3b8">SIGNATURE OFFICIELLE</text>
<text x="48" y="122" font-family="{font}" font-size="32" font-weight="600" letter-spacing="10" fill="#0f172a">{name}</text>
<text x="48" y="152" font-family="{font}" font-size="15" font-weight="500" fill="#475569">{title}</text>
"##,
        font = FONT_STACK,
    ));

    // Contact lines, same order as the HTML table
    let lines = [
        ("\u{1F4DE}", phone.as_str(), "#475569"),
        ("\u{2709}\u{FE0F}", email.as_str(), theme.from),
        ("\u{1F310}", website.as_str(), theme.from),
        ("\u{1F4CD}", address.as_str(), "#475569"),
    ];
    for (i, (glyph, value, color)) in lines.iter().enumerate() {
        let y = 196 + (i as u32) * 30;
        svg.push_str(&format!(
            r##"<text x="48" y="{y}" font-family="{font}" font-size="15" fill="#94a3b8">{glyph}</text>
<text x="80" y="{y}" font-family="{font}" font-size="15" fill="{color}">{value}</text>
"##,
            font = FONT_STACK,
        ));
    }

    svg.push_str(&format!(
        r##"<rect x="48" y="328" width="{dw}" height="2" fill="url(#divider)"/>
<text x="48" y="368" font-family="{font}" font-size="11" letter-spacing="4" fill="#64748b">{footer}</text>
</svg>"##,
        dw = CARD_WIDTH - 96,
        font = FONT_STACK,
    ));

    svg
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
    fn test_card_is_a_standalone_svg_document() {
        let svg = signature_card_svg(&sample_contact(), &ACCENT_PALETTE[0]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
    }

    #[test]
    fn test_card_is_pure() {
        let contact = sample_contact();
        let theme = &ACCENT_PALETTE[2];
        assert_eq!(
            signature_card_svg(&contact, theme),
            signature_card_svg(&contact, theme)
        );
    }

    #[test]
    fn test_card_contains_theme_colors_for_every_theme() {
        let contact = sample_contact();
        for theme in &ACCENT_PALETTE {
            let svg = signature_card_svg(&contact, theme);
            assert!(svg.contains(theme.from), "missing {}", theme.from);
            assert!(svg.contains(theme.to), "missing {}", theme.to);
        }
    }

    #[test]
    fn test_card_carries_every_field() {
        let contact = sample_contact();
        let svg = signature_card_svg(&contact, &ACCENT_PALETTE[0]);
        assert!(svg.contains("JANE DOE"));
        assert!(svg.contains("Engineer"));
        assert!(svg.contains("+1 555 0100"));
        assert!(svg.contains("j@x.com"));
        assert!(svg.contains("janedoe.dev"));
        assert!(svg.contains("Lyon, France"));
    }

    #[test]
    fn test_card_footer_is_the_reversed_name() {
        let contact = sample_contact();
        let svg = signature_card_svg(&contact, &ACCENT_PALETTE[0]);
        assert!(svg.contains("DOE JANE"));
    }

    #[test]
    fn test_card_matches_html_field_order() {
        // Both representations list phone, email, website, address in that
        // order; compare the positions of the values in the output.
        let contact = sample_contact();
        for theme in &ACCENT_PALETTE {
            for output in [
                signature_card_svg(&contact, theme),
                crate::markup::email_html(&contact, theme),
            ] {
                let phone = output.find(&contact.phone).unwrap();
                let email = output.find(&contact.email).unwrap();
                let website = output.find(contact.website_display()).unwrap();
                let address = output.find(&contact.address).unwrap();
                assert!(phone < email && email < website && website < address);
            }
        }
    }
}
