// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Filled pill button used for previous/next navigation.
pub fn navigation(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let colors = colors.clone();
    move |_theme: &Theme, status: button::Status| {
        let (background, shadow) = match status {
            button::Status::Hovered => (colors.brand_hover, shadow::MD),
            button::Status::Pressed => (colors.brand_pressed, shadow::NONE),
            button::Status::Disabled => (palette::GRAY_200, shadow::NONE),
            _ => (colors.brand_primary, shadow::SM),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: colors.brand_text,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow,
            snap: true,
        }
    }
}
