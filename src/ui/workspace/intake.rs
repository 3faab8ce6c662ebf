// SPDX-License-Identifier: MPL-2.0
//! Empty state: invites the user to open or drop an image.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::SUPPORTED_EXTENSIONS;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("empty-state-title")).size(typography::TITLE_LG);

    let subtitle = Text::new(i18n.tr("empty-state-subtitle"))
        .size(typography::BODY)
        .align_x(alignment::Horizontal::Center);

    let open = button(Text::new(i18n.tr("empty-state-open-button")).size(typography::BODY))
        .on_press(Message::OpenFile)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    let drop_hint = Text::new(i18n.tr("empty-state-drop-hint")).size(typography::BODY);

    let formats = Text::new(i18n.tr_with_args(
        "empty-state-formats",
        &[("formats", &supported_formats_label())],
    ))
    .size(typography::CAPTION)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    });

    let card = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(open)
        .push(drop_hint)
        .push(formats);

    Container::new(
        Container::new(card)
            .width(Length::Fixed(sizing::INTAKE_CARD_WIDTH))
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .style(styles::container::panel),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

/// "PNG, JPG, ..." with `jpeg`/`tif` folded into their short forms.
fn supported_formats_label() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .filter(|ext| !matches!(**ext, "jpeg" | "tiff"))
        .map(|ext| ext.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_label_lists_unique_formats() {
        let label = supported_formats_label();
        assert!(label.starts_with("PNG, JPG"));
        assert!(label.contains("WEBP"));
        assert!(!label.contains("JPEG"));
        assert!(!label.contains("TIFF"));
    }
}
