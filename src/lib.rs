// SPDX-License-Identifier: MPL-2.0
//! `text_eraser` is a small desktop tool built with the Iced GUI framework.
//!
//! The user opens an image, a remote generative image model removes its
//! visible text, and the edited image is shown next to the original and can
//! be saved to disk.
//!
//! # Architecture
//!
//! - [`session`]: the `Empty | Ready | Processing | Succeeded | Failed` state
//!   machine, with request tagging so stale responses are discarded
//! - [`application::port`]: the [`TextRemover`](application::port::TextRemover) trait
//! - [`infrastructure`]: the Gemini `generateContent` client
//! - [`media`]: intake (format sniffing) and download
//! - [`app`] and [`ui`]: the Iced application

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod session;
pub mod ui;
