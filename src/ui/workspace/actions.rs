// SPDX-License-Identifier: MPL-2.0
//! Submit and reset controls.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::session::{Phase, Session};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(i18n: &'a I18n, session: &'a Session) -> Element<'a, Message> {
    let processing = session.is_processing();

    let submit_label = if processing {
        i18n.tr("action-processing")
    } else {
        i18n.tr("action-remove-text")
    };
    let submit = action_button(submit_label, submit_message(session))
        .style(styles::button::primary);

    let reset = action_button(i18n.tr("action-start-over"), Some(Message::StartOver))
        .style(styles::button::secondary);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(submit)
        .push(reset)
        .into()
}

/// `None` disables the submit button.
fn submit_message(session: &Session) -> Option<Message> {
    match session.phase() {
        Phase::Ready | Phase::Succeeded | Phase::Failed => Some(Message::RemoveText),
        Phase::Empty | Phase::Processing => None,
    }
}

fn action_button<'a>(label: String, on_press: Option<Message>) -> button::Button<'a, Message> {
    button(
        Text::new(label)
            .size(typography::BODY)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill),
    )
    .on_press_maybe(on_press)
    .width(Length::Fixed(sizing::ACTION_BUTTON_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding([spacing::XS, spacing::MD])
}
