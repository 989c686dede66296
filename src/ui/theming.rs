// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors of the gallery screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    /// Backdrop behind the artwork (visible when the image is zoomed out or panned away).
    pub image_surface: Color,

    // Caption panel
    pub caption_background: Color,
    pub caption_text: Color,

    // Navigation buttons
    pub brand_primary: Color,
    pub brand_hover: Color,
    pub brand_pressed: Color,
    pub brand_text: Color,

    pub text_secondary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            image_surface: palette::GRAY_100,

            caption_background: palette::CAPTION_GRAY,
            caption_text: palette::GRAY_900,

            brand_primary: palette::LAVENDER_400,
            brand_hover: palette::LAVENDER_300,
            brand_pressed: palette::LAVENDER_600,
            brand_text: palette::SNOW,

            text_secondary: palette::GRAY_700,
        }
    }

    /// The caption panel keeps its light gray in both schemes.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            image_surface: Color::from_rgb(0.15, 0.15, 0.15),

            caption_background: palette::CAPTION_GRAY,
            caption_text: palette::GRAY_900,

            brand_primary: palette::LAVENDER_400,
            brand_hover: palette::LAVENDER_300,
            brand_pressed: palette::LAVENDER_600,
            brand_text: palette::SNOW,

            text_secondary: palette::GRAY_200,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    /// Case-insensitive, so hand-edited settings like `Dark` still apply.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(format!("unknown theme mode `{other}`")),
        }
    }
}

impl ThemeMode {
    /// `System` asks the OS and falls back to dark when it cannot tell.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Resolved theme: the mode chosen by the user plus its colors.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

impl AppTheme {
    /// Resolves `mode`, querying the OS once for [`ThemeMode::System`].
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, mode, dark }
    }

    /// The built-in Iced theme matching this one.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
