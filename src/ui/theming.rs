// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming for the toast surface.
//!
//! [`ThemeMode`] is what the user configures, [`ColorMode`] is what a toast
//! is actually rendered with once `System` has been resolved.

use crate::ui::design_tokens::{opacity, palette};
use crate::ui::notifications::Variant;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Semantic colors, one per notification variant
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    /// Hover/pressed wash behind icon buttons.
    pub control_wash: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            control_wash: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            // Lighter shades keep the accents readable on the dark surface
            error: palette::ERROR_400,
            warning: palette::WARNING_400,
            success: palette::SUCCESS_400,
            info: palette::INFO_400,

            control_wash: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            },
        }
    }

    #[must_use]
    pub fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Self::light(),
            ColorMode::Dark => Self::dark(),
        }
    }

    /// Accent color a toast of `variant` is drawn with in this scheme.
    #[must_use]
    pub fn accent(&self, variant: Variant) -> Color {
        match variant {
            Variant::Info => self.info,
            Variant::Success => self.success,
            Variant::Warning => self.warning,
            Variant::Error => self.error,
        }
    }
}

/// Effective color mode a toast is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// The built-in iced theme matching this mode.
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            ColorMode::Light => Theme::Light,
            ColorMode::Dark => Theme::Dark,
        }
    }
}

/// User-facing theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    #[must_use]
    pub fn resolve(self) -> ColorMode {
        if self.is_dark() {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }

    /// Parses a mode name as accepted on the command line.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}

impl From<ColorMode> for ThemeMode {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => ThemeMode::Light,
            ColorMode::Dark => ThemeMode::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9); // Close to white
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2); // Close to black
    }

    #[test]
    fn text_contrasts_with_surface() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            let delta = (scheme.text_primary.r - scheme.surface_primary.r).abs();
            assert!(delta > 0.5);
        }
    }

    #[test]
    fn accents_depend_on_color_mode() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();

        for variant in Variant::ALL {
            assert_ne!(light.accent(variant), dark.accent(variant), "{variant:?}");
        }
        assert_eq!(dark.accent(Variant::Error), dark.error);
    }

    #[test]
    fn accents_are_distinct_within_a_scheme() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            for (i, a) in Variant::ALL.iter().enumerate() {
                for b in &Variant::ALL[i + 1..] {
                    assert_ne!(scheme.accent(*a), scheme.accent(*b), "{a:?} and {b:?}");
                }
            }
        }
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.resolve();
    }

    #[test]
    fn explicit_modes_resolve_directly() {
        assert_eq!(ThemeMode::Light.resolve(), ColorMode::Light);
        assert_eq!(ThemeMode::Dark.resolve(), ColorMode::Dark);
        assert_eq!(ColorMode::Light.toggled(), ColorMode::Dark);
        assert_eq!(ThemeMode::from(ColorMode::Dark), ThemeMode::Dark);
    }

    #[test]
    fn theme_mode_names_parse() {
        assert_eq!(ThemeMode::from_name("DARK"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_name(" system "), Some(ThemeMode::System));
        assert_eq!(ThemeMode::from_name("sepia"), None);
    }

    #[test]
    fn theme_mode_serializes_lowercase() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let text = toml::to_string(&Wrapper {
            mode: ThemeMode::System,
        })
        .unwrap();
        assert!(text.contains("\"system\""));
    }
}
