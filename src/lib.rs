// SPDX-License-Identifier: MPL-2.0
//! `art_space` is a small art gallery built with the Iced GUI framework.
//!
//! It shows one painting at a time with its title and artist, cycles through
//! the collection with Previous/Next, and lets the viewer zoom and pan the
//! artwork with touch, mouse or keyboard.

#![doc(html_root_url = "https://docs.rs/art_space/0.1.0")]

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod ui;
