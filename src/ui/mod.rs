// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Elm-style "state down, messages up": components own their state, render it
//! in `view`, and receive their own messages back through `App::update`.
//!
//! - [`gallery`] - The gallery screen (artwork, caption, navigation)
//! - [`state`] - Transform and gesture state, independent of widgets
//! - [`widgets`] - Custom Iced widgets (transformed image surface)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
