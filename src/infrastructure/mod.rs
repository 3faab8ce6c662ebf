// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`gemini`]: Text removal via the Gemini REST API (implements [`TextRemover`])
//!
//! [`TextRemover`]: crate::application::port::TextRemover

pub mod gemini;

pub use gemini::GeminiClient;
