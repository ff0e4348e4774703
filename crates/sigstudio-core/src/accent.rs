//! Accent themes
//!
//! A fixed, ordered palette of named two-color gradients. Exactly one theme
//! is selected at a time via an index into [`ACCENT_PALETTE`]; the selected
//! theme drives the divider gradient and the link colors in every
//! representation.

/// A named two-color gradient applied to decorative and link elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentTheme {
    /// Display name shown on the picker button
    pub name: &'static str,
    /// Gradient start color (also used as the link color)
    pub from: &'static str,
    /// Gradient end color
    pub to: &'static str,
}

/// The fixed theme sequence offered by the picker, in display order.
pub const ACCENT_PALETTE: [AccentTheme; 3] = [
    AccentTheme {
        name: "Saphir",
        from: "#112A46",
        to: "#3973AC",
    },
    AccentTheme {
        name: "Corail",
        from: "#A83357",
        to: "#F29A76",
    },
    AccentTheme {
        name: "Sauge",
        from: "#2F5241",
        to: "#9EC5AB",
    },
];

impl AccentTheme {
    /// Look up a theme by palette index.
    ///
    /// Returns `None` for an out-of-range index; callers leave the current
    /// selection unchanged in that case.
    pub fn get(index: usize) -> Option<&'static AccentTheme> {
        ACCENT_PALETTE.get(index)
    }

    /// CSS linear-gradient over this theme's two colors.
    ///
    /// Shared by the picker swatches and the HTML snippet so both always
    /// show the same gradient.
    pub fn linear_gradient(&self, degrees: u16) -> String {
        format!(
            "linear-gradient({}deg, {}, {})",
            degrees, self.from, self.to
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..].chars().all(|c| c.is_ascii_hexdigit())
    }

    #[test]
    fn test_palette_has_three_themes() {
        assert_eq!(ACCENT_PALETTE.len(), 3);
        assert_eq!(ACCENT_PALETTE[0].name, "Saphir");
        assert_eq!(ACCENT_PALETTE[1].name, "Corail");
        assert_eq!(ACCENT_PALETTE[2].name, "Sauge");
    }

    #[test]
    fn test_palette_colors_are_valid() {
        for theme in &ACCENT_PALETTE {
            assert!(is_hex_color(theme.from), "bad from color: {}", theme.from);
            assert!(is_hex_color(theme.to), "bad to color: {}", theme.to);
        }
    }

    #[test]
    fn test_get_in_range() {
        assert_eq!(AccentTheme::get(0), Some(&ACCENT_PALETTE[0]));
        assert_eq!(AccentTheme::get(2), Some(&ACCENT_PALETTE[2]));
    }

    #[test]
    fn test_get_out_of_range() {
        assert_eq!(AccentTheme::get(3), None);
        assert_eq!(AccentTheme::get(usize::MAX), None);
    }

    #[test]
    fn test_linear_gradient() {
        let css = ACCENT_PALETTE[0].linear_gradient(90);
        assert_eq!(css, "linear-gradient(90deg, #112A46, #3973AC)");
    }
}
