// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the editing session to the remote text remover,
//! localization, notifications and persisted dialog directories, and
//! translates messages into side effects (dialogs, file reads, the remote
//! call, saving).

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{RemoteError, TextRemover, UnavailableRemover};
use crate::config;
use crate::i18n::fluent::I18n;
use crate::infrastructure::GeminiClient;
use crate::session::Session;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::PersistedState;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    remover: Arc<dyn TextRemover>,
    notifications: notifications::Manager,
    /// Last open and save directories.
    persisted: PersistedState,
    /// Overrides where `state.cbor` is written; `None` resolves the data dir.
    state_dir: Option<PathBuf>,
    theme_mode: ThemeMode,
    /// Angle of the loading indicator, advanced on each tick while processing.
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.session.phase())
            .field("remover", &self.remover.describe())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            session: Session::new(),
            remover: Arc::new(UnavailableRemover::new(RemoteError::Client(
                "not configured".to_string(),
            ))),
            notifications: notifications::Manager::new(),
            persisted: PersistedState::default(),
            state_dir: None,
            theme_mode: ThemeMode::System,
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let (remover, remover_warning) = build_remover(&config.remote);
        app.remover = remover;
        if let Some(notification) = remover_warning {
            app.notifications.push(notification);
        }

        let (persisted, state_warning) = PersistedState::load();
        app.persisted = persisted;
        if let Some(key) = state_warning {
            app.notifications.push(Notification::warning(key));
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            remover = %app.remover.describe(),
            "application started"
        );

        let task = match flags.file_path {
            Some(path) => update::load_image_from_path(PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.session.original() {
            Some(original) => format!("{} - {app_name}", original.image().file_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
            self.session.is_processing(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            session: &mut self.session,
            remover: &self.remover,
            notifications: &mut self.notifications,
            persisted: &mut self.persisted,
            state_dir: self.state_dir.clone(),
            spinner_rotation: &mut self.spinner_rotation,
        };

        match message {
            Message::Workspace(workspace_message) => {
                update::handle_workspace_message(&mut ctx, workspace_message)
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::OpenFileDialogResult(path) => update::handle_open_file_dialog_result(path),
            Message::FileDropped(path) => update::handle_file_dropped(path),
            Message::ImageLoaded { path, result } => {
                update::handle_image_loaded(&mut ctx, path, result)
            }
            Message::RemoveTextCompleted { id, result } => {
                update::handle_remove_text_completed(&mut ctx, id, result)
            }
            Message::DownloadDialogResult(path) => {
                update::handle_download_dialog_result(&mut ctx, path)
            }
            Message::DownloadCompleted(result) => {
                update::handle_download_completed(&mut ctx, result)
            }
            Message::Tick(_now) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
            notifications: &self.notifications,
            spinner_rotation: self.spinner_rotation,
        })
    }
}

/// Builds the Gemini client, or a stand-in that fails every call plus the
/// toast explaining why.
fn build_remover(remote: &config::RemoteConfig) -> (Arc<dyn TextRemover>, Option<Notification>) {
    match GeminiClient::from_config(remote) {
        Ok(client) => {
            tracing::debug!(url = client.url(), "remote client ready");
            (Arc::new(client), None)
        }
        Err(err) => {
            tracing::warn!(error = %err, "remote client unavailable");
            let notification = match &err {
                RemoteError::MissingApiKey { var } => {
                    Notification::warning("notification-api-key-missing").with_arg("var", var.clone())
                }
                other => Notification::error("notification-remote-client-error")
                    .with_arg("error", other.to_string()),
            };
            (Arc::new(UnavailableRemover::new(err)), Some(notification))
        }
    }
}
