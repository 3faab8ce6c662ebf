// SPDX-License-Identifier: MPL-2.0
//! The single screen of the application, rendered from the session alone.
//!
//! - `Empty`: intake card (open button and drop hint)
//! - otherwise: error banner (when failed), the two comparison panes, and
//!   the action bar

mod actions;
mod comparison;
mod intake;

use crate::application::port::RemoteError;
use crate::i18n::fluent::I18n;
use crate::session::{Phase, Session};
use crate::ui::components::ErrorBanner;
use crate::ui::design_tokens::spacing;
use iced::widget::Column;
use iced::{Element, Length};

/// User intents raised by the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    OpenFile,
    RemoveText,
    Download,
    StartOver,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    /// Current angle of the loading indicator, in radians.
    pub spinner_rotation: f32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.session.phase() == Phase::Empty {
        return intake::view(ctx.i18n);
    }

    let mut content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(error) = ctx.session.error() {
        content = content.push(
            ErrorBanner::new(ctx.i18n.tr("error-banner-title"), error_text(ctx.i18n, error)).view(),
        );
    }

    content
        .push(comparison::view(&ctx))
        .push(actions::view(ctx.i18n, ctx.session))
        .into()
}

/// Resolves the banner text for `error`, falling back to its English form
/// when the current locale has no message for it.
fn error_text(i18n: &I18n, error: &RemoteError) -> String {
    let text = translate_error(i18n, error);
    if text.starts_with("MISSING:") {
        error.user_message()
    } else {
        text
    }
}

fn translate_error(i18n: &I18n, error: &RemoteError) -> String {
    let key = error.i18n_key();
    let args = error.i18n_args();
    if args.is_empty() {
        return i18n.tr(key);
    }
    let args: Vec<(&str, &str)> = args.iter().map(|(k, v)| (*k, v.as_str())).collect();
    i18n.tr_with_args(key, &args)
}
