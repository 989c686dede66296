// SPDX-License-Identifier: MPL-2.0
//! Colors, spacing and sizes of the gallery screen.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Caption panel background.
    pub const CAPTION_GRAY: Color = Color::from_rgb8(0xD3, 0xD2, 0xD3);

    // Navigation buttons
    pub const LAVENDER_300: Color = Color::from_rgb8(0xD4, 0xC4, 0xF2);
    pub const LAVENDER_400: Color = Color::from_rgb8(0xC1, 0xAA, 0xEB);
    pub const LAVENDER_600: Color = Color::from_rgb8(0x9C, 0x80, 0xD4);

    /// Off-white used for button labels.
    pub const SNOW: Color = Color::from_rgb8(0xFA, 0xF9, 0xF9);
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 20.0;
    pub const XL: f32 = 40.0;
    /// Gap above the artwork card.
    pub const XXL: f32 = 50.0;
}

pub mod sizing {
    /// Height kept free at the bottom of the screen for the navigation row.
    pub const NAV_BAR_RESERVE: f32 = 80.0;

    /// Width of the Previous and Next buttons.
    pub const NAV_BUTTON_WIDTH: f32 = 110.0;
}

pub mod typography {
    /// Artwork title
    pub const TITLE: f32 = 20.0;

    /// Navigation button labels
    pub const BUTTON: f32 = 17.0;

    /// Artist line
    pub const ARTIST: f32 = 15.0;

    /// Position counter
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    /// Card corners.
    pub const MD: f32 = 12.0;
    /// Pill-shaped buttons.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Resting buttons and cards.
    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Hovered button.
    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.5,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::MD > spacing::XS);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);
    assert!(spacing::XXL > spacing::XL);

    assert!(typography::TITLE > typography::BUTTON);
    assert!(typography::BUTTON > typography::ARTIST);
    assert!(typography::ARTIST > typography::CAPTION);
};
