// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Main call to action ("Remove Text", "Download", "Open Image").
///
/// The disabled state keeps the brand shape but greys out, so the
/// "Processing..." label stays readable.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, elevation) = match status {
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => {
            let background = if theme.extended_palette().is_dark {
                palette::GRAY_700
            } else {
                palette::GRAY_200
            };
            return button::Style {
                background: Some(Background::Color(background)),
                text_color: palette::GRAY_400,
                border: Border {
                    color: palette::GRAY_400,
                    width: 1.0,
                    radius: radius::SM.into(),
                },
                shadow: shadow::NONE,
                snap: true,
            };
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Secondary action ("Start Over").
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;

    let (bg_color, text_color) = if is_dark {
        (palette::GRAY_700, WHITE)
    } else {
        (palette::GRAY_100, palette::GRAY_900)
    };

    let (background, border_color, elevation) = match status {
        button::Status::Hovered => {
            let hover = if is_dark {
                Color::from_rgb(0.35, 0.35, 0.35)
            } else {
                palette::GRAY_200
            };
            (hover, palette::PRIMARY_500, shadow::SM)
        }
        _ => (bg_color, palette::GRAY_400, shadow::NONE),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: elevation,
        snap: true,
    }
}

/// Borderless "x" button on toasts.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| {
            Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn primary_disabled_is_grey() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.background, Some(Background::Color(palette::GRAY_200)));
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn secondary_hover_highlights_border() {
        let normal = secondary(&Theme::Light, button::Status::Active);
        let hover = secondary(&Theme::Light, button::Status::Hovered);
        assert_ne!(normal.border.color, hover.border.color);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn dismiss_is_transparent_until_hovered() {
        assert!(dismiss(&Theme::Dark, button::Status::Active)
            .background
            .is_none());
        assert!(dismiss(&Theme::Dark, button::Status::Hovered)
            .background
            .is_some());
    }
}
