// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::widget::button::Status;
    use iced::Theme;
    use text_eraser::ui::design_tokens::{opacity, palette, sizing, spacing};
    use text_eraser::ui::styles::{button, container};
    use text_eraser::ui::theming::ThemeMode;

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = button::primary(&theme, Status::Active);
            let _ = button::primary(&theme, Status::Disabled);
            let _ = button::secondary(&theme, Status::Hovered);
            let _ = button::dismiss(&theme, Status::Pressed);
            let _ = container::panel(&theme);
            let _ = container::banner(&theme, palette::ERROR_500);
            let _ = container::toast(&theme, palette::SUCCESS_500);
            let _ = container::placeholder(&theme);
        }
    }

    #[test]
    fn disabled_submit_differs_from_active() {
        let theme = Theme::Dark;
        let active = button::primary(&theme, Status::Active);
        let disabled = button::primary(&theme, Status::Disabled);
        assert_ne!(active.background, disabled.background);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::PRIMARY_500;
        let _ = spacing::MD;
        let _ = opacity::OVERLAY_STRONG;
        assert!(sizing::ACTION_BUTTON_WIDTH > sizing::BUTTON_HEIGHT);
    }

    #[test]
    fn explicit_theme_modes_resolve() {
        assert_eq!(ThemeMode::Light.to_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_theme(), Theme::Dark);
    }
}
