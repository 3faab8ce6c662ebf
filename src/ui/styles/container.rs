// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Panel surface for the intake card and the comparison panes.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

/// Banner with a tinted background and an accent border.
pub fn banner(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BANNER_TINT,
            ..accent
        })),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Floating card used by toasts.
pub fn toast(theme: &Theme, accent: Color) -> container::Style {
    let background = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: accent,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Dimmed area shown in the result pane before there is a result.
pub fn placeholder(theme: &Theme) -> container::Style {
    let text = theme.palette().text;

    container::Style {
        text_color: Some(Color {
            a: opacity::OVERLAY_STRONG,
            ..text
        }),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
