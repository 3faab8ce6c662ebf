// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::defaults::NOTIFICATION_TICK_MS;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval of the loading indicator animation.
const SPINNER_TICK_MS: u64 = 60;

/// Routes dropped files to the intake.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = event {
            return Some(Message::FileDropped(path));
        }
        None
    })
}

/// Ticks only while something time-based is on screen.
pub fn create_tick_subscription(
    has_notifications: bool,
    is_processing: bool,
) -> Subscription<Message> {
    match tick_interval(has_notifications, is_processing) {
        Some(interval) => time::every(interval).map(Message::Tick),
        None => Subscription::none(),
    }
}

fn tick_interval(has_notifications: bool, is_processing: bool) -> Option<Duration> {
    if is_processing {
        Some(Duration::from_millis(SPINNER_TICK_MS))
    } else if has_notifications {
        Some(Duration::from_millis(NOTIFICATION_TICK_MS))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_app_does_not_tick() {
        assert_eq!(tick_interval(false, false), None);
    }

    #[test]
    fn processing_ticks_faster_than_toasts() {
        let processing = tick_interval(true, true).expect("interval");
        let toasts = tick_interval(true, false).expect("interval");
        assert!(processing < toasts);
    }
}
