//! Theme and styling for the picker.
//!
//! This module provides the [`Theme`] struct for managing colors and styles
//! throughout the terminal interface. It supports both dark and light color
//! schemes.
//!
//! # Example
//!
//! ```
//! use snip_core::ColorScheme;
//! use snip_tui::Theme;
//!
//! let theme = Theme::from_scheme(ColorScheme::Light);
//! assert_eq!(theme, Theme::light());
//! ```

use ratatui::style::{Color, Modifier, Style};
use snip_core::ColorScheme;

/// Theme configuration for the picker.
///
/// Use [`Theme::dark()`] or [`Theme::light()`] to get predefined themes,
/// or [`Theme::from_scheme()`] to create a theme based on configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // =========================================================================
    // Base Colors
    // =========================================================================
    /// Primary foreground color.
    pub fg: Color,

    /// Dimmed/secondary text color.
    pub dimmed_fg: Color,

    /// Accent color for highlights.
    pub accent: Color,

    /// Foreground color of navigation markers.
    pub marker_fg: Color,

    // =========================================================================
    // Border Styles
    // =========================================================================
    /// Style for normal borders.
    pub border_style: Style,

    /// Style for the border of the focused query line.
    pub focused_border_style: Style,

    // =========================================================================
    // Component Styles
    // =========================================================================
    /// Style for the highlighted item.
    pub highlight_style: Style,

    /// Style for block titles.
    pub header_style: Style,

    /// Style for the status bar.
    pub status_bar_style: Style,
}

impl Theme {
    /// Creates a dark theme (light text on dark background).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(220, 220, 220),
            dimmed_fg: Color::Rgb(128, 128, 128),
            accent: Color::Rgb(100, 150, 255), // Soft blue
            marker_fg: Color::Rgb(255, 200, 100),

            border_style: Style::default().fg(Color::Rgb(80, 80, 100)),
            focused_border_style: Style::default().fg(Color::Rgb(100, 150, 255)),

            highlight_style: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(60, 60, 80))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(100, 150, 255))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(180, 180, 180))
                .bg(Color::Rgb(40, 40, 50)),
        }
    }

    /// Creates a light theme (dark text on light background).
    #[must_use]
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(30, 30, 30),
            dimmed_fg: Color::Rgb(100, 100, 100),
            accent: Color::Rgb(50, 100, 200), // Dark blue
            marker_fg: Color::Rgb(180, 130, 50),

            border_style: Style::default().fg(Color::Rgb(150, 150, 170)),
            focused_border_style: Style::default().fg(Color::Rgb(50, 100, 200)),

            highlight_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Rgb(200, 200, 220))
                .add_modifier(Modifier::BOLD),
            header_style: Style::default()
                .fg(Color::Rgb(50, 100, 200))
                .add_modifier(Modifier::BOLD),
            status_bar_style: Style::default()
                .fg(Color::Rgb(60, 60, 60))
                .bg(Color::Rgb(220, 220, 230)),
        }
    }

    /// A theme without colors, for `NO_COLOR` terminals.
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            fg: Color::Reset,
            dimmed_fg: Color::Reset,
            accent: Color::Reset,
            marker_fg: Color::Reset,
            border_style: Style::default(),
            focused_border_style: Style::default(),
            highlight_style: Style::default().add_modifier(Modifier::REVERSED),
            header_style: Style::default().add_modifier(Modifier::BOLD),
            status_bar_style: Style::default(),
        }
    }

    /// Creates a theme from a [`ColorScheme`] configuration.
    ///
    /// If the scheme is [`ColorScheme::Auto`], defaults to dark theme.
    #[must_use]
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark | ColorScheme::Auto | _ => Self::dark(),
        }
    }

    /// Returns a style with the base foreground color.
    #[must_use]
    pub fn base_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Returns a style for dimmed/secondary text.
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed_fg)
    }

    /// Returns a style for accent/highlighted text.
    #[must_use]
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Returns the style of navigation marker rows.
    #[must_use]
    pub fn marker_style(&self) -> Style {
        Style::default()
            .fg(self.marker_fg)
            .add_modifier(Modifier::ITALIC)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.fg, Color::Rgb(220, 220, 220));
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.fg, Color::Rgb(30, 30, 30));
    }

    #[test]
    fn test_theme_from_scheme() {
        assert_eq!(Theme::from_scheme(ColorScheme::Dark), Theme::dark());
        assert_eq!(Theme::from_scheme(ColorScheme::Light), Theme::light());
        assert_eq!(Theme::from_scheme(ColorScheme::Auto), Theme::dark());
    }

    #[test]
    fn test_marker_style_is_italic() {
        let theme = Theme::dark();
        let style = theme.marker_style();
        assert_eq!(style.fg, Some(theme.marker_fg));
        assert!(style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_monochrome_has_no_colors() {
        let theme = Theme::monochrome();
        assert_eq!(theme.highlight_style.fg, None);
        assert_eq!(theme.fg, Color::Reset);
    }

    #[test]
    fn test_theme_default() {
        assert_eq!(Theme::default(), Theme::dark());
    }
}
