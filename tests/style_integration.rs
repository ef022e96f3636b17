// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced_toast::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_toast::ui::notifications::Variant;
    use iced_toast::ui::theming::{ColorMode, ColorScheme, ThemeMode};

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::INFO_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_MEDIUM;

        // Sizing
        assert!(sizing::TOAST_WIDTH > 0.0);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ColorScheme::for_mode(ThemeMode::Light.resolve());
        let dark = ColorScheme::for_mode(ThemeMode::Dark.resolve());

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_primary.r > dark.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);
    }

    #[test]
    fn variant_accents_match_semantic_colors() {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            let scheme = ColorScheme::for_mode(mode);
            assert_eq!(scheme.accent(Variant::Info), scheme.info);
            assert_eq!(scheme.accent(Variant::Success), scheme.success);
            assert_eq!(scheme.accent(Variant::Warning), scheme.warning);
            assert_eq!(scheme.accent(Variant::Error), scheme.error);
        }
    }

    #[test]
    fn variant_accents_change_with_color_mode() {
        let light = ColorScheme::for_mode(ColorMode::Light);
        let dark = ColorScheme::for_mode(ColorMode::Dark);

        assert_eq!(light.accent(Variant::Error), palette::ERROR_500);
        assert_eq!(dark.accent(Variant::Error), palette::ERROR_400);
        for variant in Variant::ALL {
            assert_ne!(light.accent(variant), dark.accent(variant));
        }
    }
}
