// SPDX-License-Identifier: MPL-2.0
//! User interface: design tokens, styles, shared components and the single
//! workspace screen.

pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod workspace;
