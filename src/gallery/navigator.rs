// SPDX-License-Identifier: MPL-2.0
//! Cyclic navigation through a [`Gallery`].
//!
//! The navigator owns the gallery together with the current position, so the
//! index can only change through [`GalleryNavigator::next`] and
//! [`GalleryNavigator::previous`] and always stays in `0..count`.

use super::{ArtPiece, Gallery};

/// Current position within a gallery, with wraparound navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryNavigator {
    gallery: Gallery,
    current_index: usize,
}

impl GalleryNavigator {
    /// Creates a navigator positioned on the first piece.
    #[must_use]
    pub fn new(gallery: Gallery) -> Self {
        Self {
            gallery,
            current_index: 0,
        }
    }

    /// Advances to the next piece, wrapping from the last to the first.
    ///
    /// Returns the new index.
    pub fn next(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.gallery.count();
        self.current_index
    }

    /// Steps back to the previous piece, wrapping from the first to the last.
    ///
    /// Returns the new index.
    pub fn previous(&mut self) -> usize {
        let count = self.gallery.count();
        self.current_index = (self.current_index + count - 1) % count;
        self.current_index
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The piece at the current position.
    #[must_use]
    pub fn current(&self) -> &ArtPiece {
        self.gallery.item_at(self.current_index)
    }

    /// Total number of pieces; never zero.
    #[must_use]
    pub fn count(&self) -> usize {
        self.gallery.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{catalog, ImageId};

    fn navigator_with(count: usize) -> GalleryNavigator {
        let items = (0..count)
            .map(|i| ArtPiece::new(ImageId::new("pic1.png"), format!("Piece {i}"), "Artist"))
            .collect();
        GalleryNavigator::new(Gallery::new(items).expect("non-empty"))
    }

    fn navigator_at(count: usize, index: usize) -> GalleryNavigator {
        let mut nav = navigator_with(count);
        for _ in 0..index {
            nav.next();
        }
        assert_eq!(nav.current_index(), index);
        nav
    }

    #[test]
    fn new_navigator_starts_at_first_piece() {
        let nav = GalleryNavigator::new(catalog::default_gallery());
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.count(), 9);
        assert_eq!(nav.current().title(), "Wheat Field with Cypresses");
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut nav = GalleryNavigator::new(catalog::default_gallery());
        assert_eq!(nav.previous(), 8);
        assert_eq!(nav.current().title(), "The Artists Sister at a Window");
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut nav = GalleryNavigator::new(catalog::default_gallery());
        nav.previous();
        assert_eq!(nav.next(), 0);
        assert_eq!(nav.current_index(), 0);
    }

    #[test]
    fn n_steps_in_either_direction_return_to_start() {
        for count in 1..=6 {
            for start in 0..count {
                let mut forward = navigator_at(count, start);
                let mut backward = navigator_at(count, start);
                for _ in 0..count {
                    forward.next();
                    backward.previous();
                }
                assert_eq!(forward.current_index(), start);
                assert_eq!(backward.current_index(), start);
            }
        }
    }

    #[test]
    fn next_then_previous_restores_index() {
        for start in 0..9 {
            let mut nav = navigator_at(9, start);
            nav.next();
            nav.previous();
            assert_eq!(nav.current_index(), start);

            nav.previous();
            nav.next();
            assert_eq!(nav.current_index(), start);
        }
    }

    #[test]
    fn single_piece_gallery_stays_put() {
        let mut nav = navigator_with(1);
        assert_eq!(nav.next(), 0);
        assert_eq!(nav.previous(), 0);
        assert_eq!(nav.current().title(), "Piece 0");
    }

    #[test]
    fn current_follows_index() {
        let mut nav = navigator_with(3);
        nav.next();
        assert_eq!(nav.current().title(), "Piece 1");
        nav.previous();
        nav.previous();
        assert_eq!(nav.current().title(), "Piece 2");
    }
}
