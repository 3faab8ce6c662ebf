// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These traits use only domain types, so the session and UI never see
//! HTTP or JSON details.
//!
//! # Available Ports
//!
//! - [`text_removal`]: Remote removal of visible text from an image
//!
//! # Design Notes
//!
//! - Traits are `Send + Sync` so adapters can be shared behind `Arc`
//! - Futures are boxed and `'static` so callers can wrap them in an
//!   `iced::Task` without borrowing the adapter

pub mod text_removal;

pub use text_removal::{
    RemoteError, RemoteResult, TextRemover, UnavailableRemover, GENERIC_FAILURE_MESSAGE,
};
