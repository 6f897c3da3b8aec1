//! Color theme and glyphs for Folio TUI.
//!
//! Uses a Kanagawa Wave palette by default with an optional high-contrast override.

use ratatui::style::{Color, Modifier, Style};

use folio_types::Rgb;
use folio_types::ui::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    // === Backgrounds (Sumi Ink) ===
    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_PANEL: Color = Color::Rgb(31, 31, 40); // sumiInk3
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    // === Foregrounds (Fuji) ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    // === Primary/Brand ===
    pub const PRIMARY: Color = Color::Rgb(149, 127, 184); // oniViolet

    // === Accent Colors ===
    pub const CYAN: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const YELLOW: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ORANGE: Color = Color::Rgb(255, 160, 102); // surimiOrange

    // === Semantic Aliases ===
    pub const ACCENT: Color = CYAN;
    pub const PEACH: Color = ORANGE;
    pub const BAR: Color = YELLOW;
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_panel: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub peach: Color,
    /// Background of the bright marquee bars.
    pub bar: Color,
    /// Item accents are replaced by `accent` when false.
    pub item_accents: bool,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_panel: colors::BG_PANEL,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            primary: colors::PRIMARY,
            accent: colors::ACCENT,
            peach: colors::PEACH,
            bar: colors::BAR,
            item_accents: true,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_panel: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            primary: Color::White,
            accent: Color::Cyan,
            peach: Color::Yellow,
            bar: Color::Yellow,
            item_accents: false,
        }
    }

    /// Terminal color for an item accent.
    #[must_use]
    pub fn item_accent(&self, color: Rgb) -> Color {
        if self.item_accents {
            Color::Rgb(color.r, color.g, color.b)
        } else {
            self.accent
        }
    }

    /// Blend `fg` toward the background by `1 - opacity`.
    ///
    /// Indexed colors cannot be blended; they fall back to `text_muted`
    /// below half opacity.
    #[must_use]
    pub fn fade(&self, fg: Color, opacity: f32) -> Color {
        let opacity = opacity.clamp(0.0, 1.0);
        match (fg, self.bg_dark) {
            (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg, bb)) => {
                let mix = |f: u8, b: u8| {
                    (f32::from(b) + (f32::from(f) - f32::from(b)) * opacity).round() as u8
                };
                Color::Rgb(mix(fr, br), mix(fg_, bg), mix(fb, bb))
            }
            _ if opacity < 0.5 => self.text_muted,
            _ => fg,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for indicators and buttons.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub dot_active: &'static str,
    pub dot_inactive: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub selected: &'static str,
    pub paused: &'static str,
    pub running: &'static str,
    pub separator: &'static str,
    pub bullet: &'static str,
    pub rule: &'static str,
    pub arrows: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            dot_active: "*",
            dot_inactive: "o",
            previous: "<",
            next: ">",
            selected: ">",
            paused: "||",
            running: ">",
            separator: "|",
            bullet: "*",
            rule: "-",
            arrows: "<-/->",
        }
    } else {
        Glyphs {
            dot_active: "●",
            dot_inactive: "○",
            previous: "‹",
            next: "›",
            selected: "▸",
            paused: "⏸",
            running: "▶",
            separator: "│",
            bullet: "•",
            rule: "─",
            arrows: "←/→",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn tab_active(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tab_inactive(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.peach)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use folio_types::Rgb;
    use folio_types::ui::UiOptions;
    use ratatui::style::Color;

    use super::{Palette, glyphs};

    #[test]
    fn fade_blends_toward_background() {
        let palette = Palette::standard();
        let fg = Color::Rgb(222, 222, 229);
        assert_eq!(palette.fade(fg, 1.0), fg);
        assert_eq!(palette.fade(fg, 0.0), palette.bg_dark);
        assert_eq!(palette.fade(fg, 0.5), Color::Rgb(122, 122, 129));
    }

    #[test]
    fn high_contrast_ignores_item_accents() {
        let accent = Rgb::new(0xF4, 0x72, 0xB6);
        assert_eq!(
            Palette::standard().item_accent(accent),
            Color::Rgb(0xF4, 0x72, 0xB6)
        );
        let hc = Palette::high_contrast();
        assert_eq!(hc.item_accent(accent), hc.accent);
        assert_eq!(hc.fade(Color::White, 0.4), hc.text_muted);
        assert_eq!(hc.fade(Color::White, 0.9), Color::White);
    }

    #[test]
    fn ascii_glyphs_are_ascii() {
        let g = glyphs(UiOptions {
            ascii_only: true,
            ..UiOptions::default()
        });
        for glyph in [
            g.dot_active,
            g.dot_inactive,
            g.previous,
            g.next,
            g.selected,
            g.paused,
            g.running,
            g.separator,
            g.bullet,
            g.rule,
            g.arrows,
        ] {
            assert!(glyph.is_ascii(), "{glyph:?}");
        }
    }
}
