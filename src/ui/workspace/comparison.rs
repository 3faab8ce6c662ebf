// SPDX-License-Identifier: MPL-2.0
//! Side-by-side "Original Image" / "Text Removed" panes.

use super::{Message, ViewContext};
use crate::session::{Phase, PreviewRef};
use crate::ui::components::Spinner;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let session = ctx.session;

    let original_body = match session.original() {
        Some(original) => preview(original.preview()),
        None => placeholder(String::new()),
    };
    let original_caption = session
        .original()
        .map(|original| original.image().file_name().to_string());

    let result_body = match session.phase() {
        Phase::Processing => processing(i18n.tr("result-processing"), ctx.spinner_rotation),
        Phase::Succeeded => match session.result_preview() {
            Some(result) => with_download(preview(result), i18n.tr("action-download")),
            None => placeholder(i18n.tr("result-placeholder")),
        },
        Phase::Failed => placeholder(i18n.tr("result-failed-placeholder")),
        Phase::Empty | Phase::Ready => placeholder(i18n.tr("result-placeholder")),
    };

    Row::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(pane(i18n.tr("pane-original-title"), original_caption, original_body))
        .push(pane(i18n.tr("pane-result-title"), None, result_body))
        .into()
}

fn pane<'a>(
    title: String,
    caption: Option<String>,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut header = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(title).size(typography::TITLE_SM));
    if let Some(caption) = caption {
        header = header.push(
            Text::new(caption)
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );
    }

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(body)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .padding(spacing::MD)
    .width(Length::FillPortion(1))
    .height(Length::Fill)
    .style(styles::container::panel)
    .into()
}

fn preview<'a>(preview: &PreviewRef) -> Element<'a, Message> {
    Container::new(
        image(preview.handle().clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn with_download<'a>(body: Element<'a, Message>, label: String) -> Element<'a, Message> {
    let download = button(Text::new(label).size(typography::BODY))
        .on_press(Message::Download)
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(body)
        .push(download)
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

fn processing<'a>(label: String, rotation: f32) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(Spinner::new(palette::PRIMARY_500, rotation).into_element())
            .push(Text::new(label).size(typography::BODY)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(styles::container::placeholder)
    .into()
}
