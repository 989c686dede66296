// SPDX-License-Identifier: MPL-2.0
//! The built-in collection shipped with the application.

use super::{ArtPiece, Gallery, ImageId};

/// Authored entries: image asset, title, artist line.
///
/// The last painting is listed twice; the gallery cycles through nine entries.
const ENTRIES: &[(&str, &str, &str)] = &[
    ("pic1.png", "Wheat Field with Cypresses", "Van Gogh, Vincent (1853)"),
    ("pic2.png", "Mona Lisa", "Da Vinci, Leonardo (1503)"),
    ("pic3.png", "The Kiss, detail (Grey variation)", "Klimt, Gustav (1907)"),
    ("pic4.png", "The Milkmaid", "Vermeer, Johannes (1661)"),
    ("pic5.png", "Girl With A Pearl Earring", "Vermeer, Jantje (1665)"),
    ("pic6.png", "The Last Supper", "Da Vinci, Leonardo (1495)"),
    ("pic7.png", "Starry Night", "Van Gogh, Vincent (1889)"),
    ("pic8.png", "The Artists Sister at a Window", "Morisot, Berthe (1869)"),
    ("pic8.png", "The Artists Sister at a Window", "Morisot, Berthe (1869)"),
];

// An empty catalog would leave the navigator without a valid index.
const _: () = assert!(!ENTRIES.is_empty());

/// Builds the gallery shown at startup.
#[must_use]
pub fn default_gallery() -> Gallery {
    let items = ENTRIES
        .iter()
        .map(|&(file, title, artist)| ArtPiece::new(ImageId::new(file), title, artist))
        .collect();

    match Gallery::new(items) {
        Ok(gallery) => gallery,
        Err(_) => unreachable!("catalog entries are checked non-empty at compile time"),
    }
}
