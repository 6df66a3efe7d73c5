//! # Theme System
//!
//! Centralized colors for the account selector.
//!
//! ## Overview
//!
//! Rendering code never hardcodes a `ratatui::style::Color`; it reads the
//! semantic fields of the active [`Theme`]. Themes are cycled at runtime with
//! `t` and the choice is persisted through [`super::config::Config`].
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Catppuccin Latte** - light pastel theme
//! - **Nord** - arctic, north-bluish color palette
//! - **Dracula** - dark theme with vivid colors
//! - **Gruvbox Dark** - retro groove color scheme

use ratatui::style::Color;

/// All colors used by the selector, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name, also the key stored in the config file.
    pub name: &'static str,

    /// Card background.
    pub bg: Color,
    /// Labels and positive balances.
    pub fg: Color,
    /// Account numbers, unselected icons, hints.
    pub fg_dim: Color,

    /// Selected icons and the border of the open list.
    pub accent: Color,
    /// Keyboard cursor marker.
    pub cursor: Color,
    /// Background of highlighted rows.
    pub highlight_bg: Color,
    /// Negative balances.
    pub negative: Color,
}

impl Theme {
    /// Return the list of all built-in themes (order = cycle order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let pos = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or(0);
        &BUILT_IN_THEMES[(pos + 1) % BUILT_IN_THEMES.len()]
    }

    /// Comma-separated theme names, for error messages.
    pub fn names() -> String {
        BUILT_IN_THEMES
            .iter()
            .map(|t| t.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        cursor: Color::Rgb(249, 226, 175),    // yellow
        highlight_bg: Color::Rgb(69, 71, 90), // surface1
        negative: Color::Rgb(243, 139, 168),  // red
    },
    // 1 - Catppuccin Latte
    Theme {
        name: "Catppuccin Latte",
        bg: Color::Rgb(239, 241, 245),           // base
        fg: Color::Rgb(76, 79, 105),             // text
        fg_dim: Color::Rgb(156, 160, 176),       // overlay0
        accent: Color::Rgb(30, 102, 245),        // blue
        cursor: Color::Rgb(223, 142, 29),        // yellow
        highlight_bg: Color::Rgb(188, 192, 204), // surface1
        negative: Color::Rgb(210, 15, 57),       // red
    },
    // 2 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208), // frost
        cursor: Color::Rgb(235, 203, 139), // yellow
        highlight_bg: Color::Rgb(67, 76, 94),
        negative: Color::Rgb(191, 97, 106),
    },
    // 3 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253), // cyan
        cursor: Color::Rgb(241, 250, 140), // yellow
        highlight_bg: Color::Rgb(68, 71, 90),
        negative: Color::Rgb(255, 85, 85),
    },
    // 4 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152), // blue
        cursor: Color::Rgb(250, 189, 47),  // yellow
        highlight_bg: Color::Rgb(80, 73, 69),
        negative: Color::Rgb(251, 73, 52),
    },
];
