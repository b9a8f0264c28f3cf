//! Color palettes for the two effective modes.

use ratatui::style::Color;

/// Semantic color slots shared by both modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub deepest_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,

    // --- Borders ---
    pub border_dim: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub accent_dim: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_bright: Color,
    /// Foreground on top of an accent background
    pub contrast_fg: Color,

    // --- Status ---
    pub status_green: Color,
    pub status_red: Color,
    pub status_yellow: Color,

    pub shadow: Color,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            deepest_bg: Color::Rgb(10, 12, 16),
            card_bg: Color::Rgb(18, 21, 28),
            popup_bg: Color::Rgb(28, 33, 43),
            border_dim: Color::Rgb(45, 51, 59),
            border_active: Color::Rgb(88, 166, 255),
            accent: Color::Rgb(88, 166, 255),
            accent_dim: Color::Rgb(56, 107, 163),
            text_primary: Color::Rgb(201, 209, 217),
            text_secondary: Color::Rgb(125, 133, 144),
            text_muted: Color::Rgb(72, 79, 88),
            text_bright: Color::Rgb(240, 246, 252),
            contrast_fg: Color::Rgb(10, 12, 16),
            status_green: Color::Rgb(16, 185, 129),
            status_red: Color::Rgb(244, 63, 94),
            status_yellow: Color::Rgb(234, 179, 8),
            shadow: Color::Rgb(5, 6, 8),
        }
    }

    pub const fn light() -> Self {
        Self {
            deepest_bg: Color::Rgb(246, 248, 250),
            card_bg: Color::Rgb(255, 255, 255),
            popup_bg: Color::Rgb(234, 238, 242),
            border_dim: Color::Rgb(208, 215, 222),
            border_active: Color::Rgb(9, 105, 218),
            accent: Color::Rgb(9, 105, 218),
            accent_dim: Color::Rgb(84, 174, 255),
            text_primary: Color::Rgb(31, 35, 40),
            text_secondary: Color::Rgb(89, 99, 110),
            text_muted: Color::Rgb(140, 149, 159),
            text_bright: Color::Rgb(0, 0, 0),
            contrast_fg: Color::Rgb(255, 255, 255),
            status_green: Color::Rgb(26, 127, 55),
            status_red: Color::Rgb(207, 34, 46),
            status_yellow: Color::Rgb(154, 103, 0),
            shadow: Color::Rgb(175, 184, 193),
        }
    }

    /// Palette for the resolved effective mode
    pub const fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode_picks_palette() {
        assert_eq!(Palette::for_mode(true), Palette::dark());
        assert_eq!(Palette::for_mode(false), Palette::light());
    }

    #[test]
    fn test_modes_differ_where_it_matters() {
        let dark = Palette::dark();
        let light = Palette::light();
        assert_ne!(dark.deepest_bg, light.deepest_bg);
        assert_ne!(dark.text_primary, light.text_primary);
    }
}
