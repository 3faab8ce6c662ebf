// SPDX-License-Identifier: MPL-2.0
//! Inline banner for the failure of the latest request.
//!
//! ```ignore
//! ErrorBanner::new(i18n.tr("error-banner-title"), message).view()
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

#[derive(Debug, Clone)]
pub struct ErrorBanner {
    title: String,
    message: String,
    accent: Color,
}

impl ErrorBanner {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            accent: palette::ERROR_500,
        }
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        let accent = self.accent;

        let marker = Text::new("!")
            .size(typography::TITLE_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent),
            });

        let body = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(
                Text::new(self.title)
                    .size(typography::BODY)
                    .style(move |_theme: &Theme| text::Style {
                        color: Some(accent),
                    }),
            )
            .push(Text::new(self.message).size(typography::BODY));

        Container::new(
            Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center)
                .push(marker)
                .push(body),
        )
        .width(Length::Fill)
        .padding([spacing::SM, spacing::MD])
        .style(move |theme: &Theme| styles::container::banner(theme, accent))
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_keeps_message_verbatim() {
        let banner = ErrorBanner::new("Text removal failed", "  service unavailable ");
        assert_eq!(banner.title, "Text removal failed");
        assert_eq!(banner.message, "  service unavailable ");
    }

    #[test]
    fn banner_builds_element() {
        let _element: Element<'_, ()> = ErrorBanner::new("t", "m").view();
    }
}
