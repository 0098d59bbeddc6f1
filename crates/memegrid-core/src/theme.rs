//! Everforest palette for the meme grid.
//!
//! Two variants, switchable at runtime and persisted through [`crate::settings`].

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Palette choice, stored as `theme` in `config.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeVariant {
    /// Everforest Dark (default)
    #[default]
    EverforestDark,
    /// Everforest Light
    EverforestLight,
}

/// Raw colors for one variant. Widgets should go through [`Theme::ratatui_style`].
#[derive(Debug, Clone)]
pub struct ColorPalette {
    /// Screen fill behind everything
    pub background: Color,
    /// Body text
    pub foreground: Color,
    /// Title and focused tile (green)
    pub accent: Color,
    /// Loading failures (red)
    pub error: Color,
    /// Loaded status and modal frame (aqua)
    pub info: Color,
    /// Tile frames and muted text (gray)
    pub border: Color,
    /// Focused tile background
    pub selection: Color,
    /// Loading status (yellow)
    pub warning: Color,
}

/// Things on screen that get their own style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// Whole-screen fill
    Background,
    /// Captions and field values
    Text,
    /// Screen and modal titles
    Title,
    /// Tile frame in the grid
    Tile,
    /// Tile under the cursor
    TileFocused,
    /// Secondary detail text (URLs, ids, hints)
    Muted,
    /// Header status while loading
    Pending,
    /// Header status once loaded
    Ready,
    /// Error notice and failed status
    Error,
    /// Detail modal frame
    Modal,
}

/// Active variant plus its palette.
#[derive(Debug, Clone)]
pub struct Theme {
    variant: ThemeVariant,
    colors: ColorPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

impl Theme {
    /// Build the palette for `variant`.
    pub fn new(variant: ThemeVariant) -> Self {
        let colors = match variant {
            ThemeVariant::EverforestDark => ColorPalette {
                background: Color::Rgb(45, 53, 59),    // #2d353b
                foreground: Color::Rgb(211, 198, 170), // #d3c6aa
                accent: Color::Rgb(167, 192, 128),     // #a7c080
                error: Color::Rgb(230, 126, 128),      // #e67e80
                info: Color::Rgb(127, 187, 179),       // #7fbbb3
                border: Color::Rgb(116, 125, 135),     // #747d87
                selection: Color::Rgb(64, 72, 78),     // #40484e
                warning: Color::Rgb(219, 188, 127),    // #dbbc7f
            },
            ThemeVariant::EverforestLight => ColorPalette {
                background: Color::Rgb(253, 246, 227), // #fdf6e3
                foreground: Color::Rgb(92, 106, 114),  // #5c6a72
                accent: Color::Rgb(141, 161, 1),       // #8da101
                error: Color::Rgb(248, 85, 82),        // #f85552
                info: Color::Rgb(53, 167, 124),        // #35a77c
                border: Color::Rgb(150, 160, 170),     // #96a0aa
                selection: Color::Rgb(243, 236, 217),  // #f3ecd9
                warning: Color::Rgb(207, 131, 44),     // #cf832c
            },
        };

        Self { variant, colors }
    }

    /// Currently active variant.
    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    /// Raw palette, for widgets that need a bare color.
    pub fn colors(&self) -> &ColorPalette {
        &self.colors
    }

    /// Switch between dark and light.
    pub fn toggle(&mut self) {
        let next = match self.variant {
            ThemeVariant::EverforestDark => ThemeVariant::EverforestLight,
            ThemeVariant::EverforestLight => ThemeVariant::EverforestDark,
        };
        *self = Self::new(next);
    }

    /// Style for an on-screen element. Everything but the focused tile sits
    /// on the palette background.
    pub fn ratatui_style(&self, element: Element) -> Style {
        let base = Style::default().bg(self.colors.background);
        match element {
            Element::Background | Element::Text => base.fg(self.colors.foreground),
            Element::Title => base.fg(self.colors.accent).add_modifier(Modifier::BOLD),
            Element::Tile => base.fg(self.colors.border),
            Element::TileFocused => Style::default()
                .fg(self.colors.accent)
                .bg(self.colors.selection)
                .add_modifier(Modifier::BOLD),
            Element::Muted => base.fg(self.colors.border),
            Element::Pending => base.fg(self.colors.warning),
            Element::Ready => base.fg(self.colors.info),
            Element::Error => base.fg(self.colors.error).add_modifier(Modifier::BOLD),
            Element::Modal => base.fg(self.colors.info),
        }
    }

    /// Get style for normal text
    pub fn text_style(&self) -> Style {
        self.ratatui_style(Element::Text)
    }

    /// Get style for titles
    pub fn title_style(&self) -> Style {
        self.ratatui_style(Element::Title)
    }

    /// Get style for secondary text
    pub fn muted_style(&self) -> Style {
        self.ratatui_style(Element::Muted)
    }
}
