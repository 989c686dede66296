// SPDX-License-Identifier: MPL-2.0
//! Bundled artwork images.
//!
//! Image files under `assets/gallery/` are embedded at compile time. They are
//! decoded once at startup into an [`ArtLibrary`]; a piece whose asset cannot
//! be read is simply absent from the library and the view shows a placeholder.

use super::{Gallery, ImageId};
use crate::error::{AssetError, Result};
use iced::widget::image;
use image_rs::ImageReader;
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::io::Cursor;

#[derive(RustEmbed)]
#[folder = "assets/gallery/"]
pub(crate) struct GalleryAssets;

/// A decoded artwork ready to be drawn.
#[derive(Debug, Clone)]
pub struct ArtImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ArtImage {
    /// Builds an image from encoded bytes (PNG, JPEG).
    ///
    /// Only the header is parsed here; pixel decoding is left to the renderer.
    pub fn from_encoded(name: &str, bytes: Vec<u8>) -> Result<Self> {
        let undecodable = |reason: String| AssetError::Undecodable {
            name: name.to_string(),
            reason,
        };

        let (width, height) =
            read_dimensions(&bytes).map_err(|err| undecodable(err.to_string()))?;
        if width == 0 || height == 0 {
            return Err(undecodable("image has no pixels".to_string()).into());
        }

        Ok(Self {
            handle: image::Handle::from_bytes(bytes),
            width,
            height,
        })
    }

}

fn read_dimensions(bytes: &[u8]) -> Result<(u32, u32)> {
    let dimensions = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(dimensions)
}

/// Loads one embedded asset by id.
pub fn load(id: ImageId) -> Result<ArtImage> {
    let file = GalleryAssets::get(id.file_name())
        .ok_or_else(|| AssetError::Missing(id.file_name().to_string()))?;
    ArtImage::from_encoded(id.file_name(), file.data.into_owned())
}

/// Decoded images for every distinct asset referenced by a gallery.
#[derive(Debug, Clone, Default)]
pub struct ArtLibrary {
    images: HashMap<ImageId, ArtImage>,
}

impl ArtLibrary {
    /// Decodes every asset referenced by `gallery`.
    ///
    /// Returns the library together with the errors for assets that could not
    /// be loaded, so the caller can report them without aborting.
    pub fn load(gallery: &Gallery) -> (Self, Vec<AssetError>) {
        let mut images = HashMap::new();
        let mut failures = Vec::new();

        for piece in gallery.iter() {
            let id = piece.image();
            if images.contains_key(&id) {
                continue;
            }
            match load(id) {
                Ok(art) => {
                    images.insert(id, art);
                }
                Err(crate::error::Error::Asset(err)) => {
                    if !failures.contains(&err) {
                        failures.push(err);
                    }
                }
                Err(other) => failures.push(AssetError::Undecodable {
                    name: id.file_name().to_string(),
                    reason: other.to_string(),
                }),
            }
        }

        (Self { images }, failures)
    }

    #[must_use]
    pub fn image(&self, id: ImageId) -> Option<&ArtImage> {
        self.images.get(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
