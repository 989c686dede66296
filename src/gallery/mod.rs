// SPDX-License-Identifier: MPL-2.0
//! Gallery model: the authored list of art pieces shown by the application.
//!
//! A [`Gallery`] is immutable once built and always holds at least one
//! [`ArtPiece`], so any index handed out by the [`GalleryNavigator`] is valid.
//! Images are referenced by [`ImageId`] and decoded separately through
//! [`assets::ArtLibrary`].

pub mod assets;
pub mod catalog;
pub mod navigator;

pub use assets::{ArtImage, ArtLibrary};
pub use catalog::default_gallery;
pub use navigator::GalleryNavigator;

use crate::error::{Error, Result};
use std::fmt;

/// Stable identifier of a bundled image asset (its file name under
/// `assets/gallery/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(&'static str);

impl ImageId {
    #[must_use]
    pub const fn new(file_name: &'static str) -> Self {
        Self(file_name)
    }

    #[must_use]
    pub fn file_name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One gallery entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtPiece {
    image: ImageId,
    title: String,
    artist: String,
}

impl ArtPiece {
    pub fn new(image: ImageId, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            image,
            title: title.into(),
            artist: artist.into(),
        }
    }

    #[must_use]
    pub fn image(&self) -> ImageId {
        self.image
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn artist(&self) -> &str {
        &self.artist
    }
}

/// Ordered, non-empty, read-only sequence of art pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<ArtPiece>,
}

impl Gallery {
    /// Builds a gallery from authored pieces.
    ///
    /// Returns [`Error::EmptyGallery`] when `items` is empty.
    pub fn new(items: Vec<ArtPiece>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyGallery);
        }
        Ok(Self { items })
    }

    /// Returns the piece at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`. Callers obtain indices from
    /// [`GalleryNavigator`], which keeps them in range.
    #[must_use]
    pub fn item_at(&self, index: usize) -> &ArtPiece {
        &self.items[index]
    }

    /// Number of pieces; never zero.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArtPiece> {
        self.items.iter()
    }
}
