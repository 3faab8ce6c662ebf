// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::notifications::{self, Toast};
use crate::ui::workspace::{self, ViewContext as WorkspaceViewContext};
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub notifications: &'a notifications::Manager,
    pub spinner_rotation: f32,
}

/// Renders the workspace with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = workspace::view(WorkspaceViewContext {
        i18n: ctx.i18n,
        session: ctx.session,
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::Workspace);

    let base = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
