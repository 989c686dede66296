// SPDX-License-Identifier: MPL-2.0
//! Image surface that draws an artwork through a scale + translate transform
//! and reports pointer gestures over it.
//!
//! The artwork is first fitted to cover the widget bounds, then scaled about
//! the bounds' centre and translated by the offset. Drawing is clipped to the
//! bounds. Touch, drag and wheel input is turned into [`GestureSample`]s by a
//! [`GestureTracker`] kept in the widget tree, and each sample is published
//! as one message.

use crate::gallery::ArtImage;
use crate::ui::state::gesture::{self, GestureTracker};
use crate::ui::state::{GestureSample, TransformState};
use iced::advanced::image::{self as advanced_image, Renderer as _};
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{mouse, touch, Element, Event, Length, Rectangle, Size, Theme};

/// Artwork drawn through a [`TransformState`].
pub struct TransformedImage<'a, Message> {
    image: &'a ArtImage,
    transform: TransformState,
    wheel_zoom_factor: f32,
    on_gesture: Box<dyn Fn(GestureSample) -> Message + 'a>,
}

impl<'a, Message> TransformedImage<'a, Message> {
    /// Creates a surface for `image`; `on_gesture` maps every gesture sample
    /// to a message.
    pub fn new(
        image: &'a ArtImage,
        transform: TransformState,
        on_gesture: impl Fn(GestureSample) -> Message + 'a,
    ) -> Self {
        Self {
            image,
            transform,
            wheel_zoom_factor: crate::app::config::DEFAULT_WHEEL_ZOOM_FACTOR,
            on_gesture: Box::new(on_gesture),
        }
    }

    /// Zoom multiplier per wheel line.
    #[must_use]
    pub fn wheel_zoom_factor(mut self, factor: f32) -> Self {
        self.wheel_zoom_factor = factor;
        self
    }
}

/// Where the artwork lands on screen for the given bounds and transform.
#[must_use]
pub fn transformed_bounds(
    bounds: Rectangle,
    image_width: u32,
    image_height: u32,
    transform: &TransformState,
) -> Rectangle {
    let image_width = image_width.max(1) as f32;
    let image_height = image_height.max(1) as f32;

    // Cover: fill the bounds, cropping the overflowing axis.
    let fit = (bounds.width / image_width).max(bounds.height / image_height);
    let width = image_width * fit * transform.scale();
    let height = image_height * fit * transform.scale();

    let center = bounds.center() + transform.offset();

    Rectangle {
        x: center.x - width / 2.0,
        y: center.y - height / 2.0,
        width,
        height,
    }
}

/// What the surface does with one input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputOutcome {
    /// Not ours; let other widgets see it.
    Ignored,
    /// A gesture started on the surface.
    Tracked,
    Gesture(GestureSample),
}

/// Feeds `event` to `tracker`.
///
/// Presses only start tracking inside `bounds`; the wheel only zooms while
/// the cursor is over them. Moves and releases are always forwarded so a
/// drag that leaves the surface keeps going until it ends.
pub fn handle_event(
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    tracker: &mut GestureTracker,
    wheel_zoom_factor: f32,
) -> InputOutcome {
    let sample = match event {
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            if !bounds.contains(*position) {
                return InputOutcome::Ignored;
            }
            tracker.finger_pressed(id.0, *position);
            return InputOutcome::Tracked;
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => {
            tracker.finger_moved(id.0, *position)
        }
        Event::Touch(touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. }) => {
            tracker.finger_lifted(id.0);
            None
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let Some(position) = cursor.position_over(bounds) else {
                return InputOutcome::Ignored;
            };
            tracker.mouse_pressed(position);
            return InputOutcome::Tracked;
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => tracker.mouse_moved(*position),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Mouse(mouse::Event::CursorLeft) => {
            tracker.mouse_released();
            None
        }
        Event::Mouse(mouse::Event::WheelScrolled { delta }) if cursor.is_over(bounds) => {
            gesture::wheel_sample(*delta, wheel_zoom_factor)
        }
        _ => None,
    };

    sample.map_or(InputOutcome::Ignored, InputOutcome::Gesture)
}

impl<Message> Widget<Message, Theme, iced::Renderer> for TransformedImage<'_, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<GestureTracker>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(GestureTracker::default())
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fill)
    }

    fn layout(
        &mut self,
        _tree: &mut widget::Tree,
        _renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        layout::atomic(limits, Length::Fill, Length::Fill)
    }

    fn draw(
        &self,
        _tree: &widget::Tree,
        renderer: &mut iced::Renderer,
        _theme: &Theme,
        _style: &renderer::Style,
        layout: Layout<'_>,
        _cursor: mouse::Cursor,
        _viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return;
        }

        let target = transformed_bounds(
            bounds,
            self.image.width,
            self.image.height,
            &self.transform,
        );

        renderer.with_layer(bounds, |renderer| {
            let image = advanced_image::Image::new(self.image.handle.clone())
                .filter_method(advanced_image::FilterMethod::Linear);
            renderer.draw_image(image, target, bounds);
        });
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let tracker = tree.state.downcast_mut::<GestureTracker>();

        match handle_event(
            event,
            layout.bounds(),
            cursor,
            tracker,
            self.wheel_zoom_factor,
        ) {
            InputOutcome::Ignored => {}
            InputOutcome::Tracked => shell.capture_event(),
            InputOutcome::Gesture(sample) => {
                shell.publish((self.on_gesture)(sample));
                shell.capture_event();
            }
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        let tracker = tree.state.downcast_ref::<GestureTracker>();
        if tracker.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(layout.bounds()) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<TransformedImage<'a, Message>> for Element<'a, Message>
where
    Message: 'a,
{
    fn from(widget: TransformedImage<'a, Message>) -> Self {
        Self::new(widget)
    }
}

/// Helper function to create a transformed image surface.
pub fn transformed_image<'a, Message>(
    image: &'a ArtImage,
    transform: TransformState,
    on_gesture: impl Fn(GestureSample) -> Message + 'a,
) -> TransformedImage<'a, Message> {
    TransformedImage::new(image, transform, on_gesture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::{Point, Vector};

    fn bounds() -> Rectangle {
        Rectangle {
            x: 10.0,
            y: 20.0,
            width: 400.0,
            height: 300.0,
        }
    }

    #[test]
    fn identity_transform_covers_bounds() {
        // 200x100 image into 400x300: cover factor is 3 → 600x300.
        let rect = transformed_bounds(bounds(), 200, 100, &TransformState::default());
        assert_eq!(rect.width, 600.0);
        assert_eq!(rect.height, 300.0);
        assert_eq!(rect.center(), bounds().center());
    }

    #[test]
    fn scale_grows_about_the_center() {
        let mut transform = TransformState::default();
        transform.apply_gesture(GestureSample::zoom(2.0));

        let rect = transformed_bounds(bounds(), 400, 300, &transform);
        assert_eq!(rect.width, 800.0);
        assert_eq!(rect.height, 600.0);
        assert_eq!(rect.center(), bounds().center());
    }

    #[test]
    fn offset_translates_the_image() {
        let mut transform = TransformState::default();
        transform.apply_gesture(GestureSample::pan(15.0, -5.0));

        let rect = transformed_bounds(bounds(), 400, 300, &transform);
        assert_eq!(rect.center(), bounds().center() + Vector::new(15.0, -5.0));
    }

    #[test]
    fn degenerate_image_size_does_not_divide_by_zero() {
        let rect = transformed_bounds(bounds(), 0, 0, &TransformState::default());
        assert!(rect.width.is_finite() && rect.height.is_finite());
    }

    const FACTOR: f32 = 1.1;

    fn inside() -> Point {
        Point::new(100.0, 100.0)
    }

    fn outside() -> Point {
        Point::new(500.0, 500.0)
    }

    fn finger_pressed(position: Point) -> Event {
        Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(1),
            position,
        })
    }

    fn finger_moved(position: Point) -> Event {
        Event::Touch(touch::Event::FingerMoved {
            id: touch::Finger(1),
            position,
        })
    }

    fn wheel_up() -> Event {
        Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        })
    }

    fn feed(tracker: &mut GestureTracker, event: Event, cursor: mouse::Cursor) -> InputOutcome {
        handle_event(&event, bounds(), cursor, tracker, FACTOR)
    }

    #[test]
    fn touch_inside_bounds_starts_tracking() {
        let mut tracker = GestureTracker::default();
        let cursor = mouse::Cursor::Unavailable;

        assert_eq!(
            feed(&mut tracker, finger_pressed(inside()), cursor),
            InputOutcome::Tracked
        );
        assert_eq!(
            feed(&mut tracker, finger_moved(Point::new(110.0, 95.0)), cursor),
            InputOutcome::Gesture(GestureSample::pan(10.0, -5.0))
        );
    }

    #[test]
    fn touch_outside_bounds_is_ignored() {
        let mut tracker = GestureTracker::default();
        let cursor = mouse::Cursor::Unavailable;

        assert_eq!(
            feed(&mut tracker, finger_pressed(outside()), cursor),
            InputOutcome::Ignored
        );
        assert_eq!(
            feed(&mut tracker, finger_moved(Point::new(510.0, 500.0)), cursor),
            InputOutcome::Ignored
        );
    }

    #[test]
    fn mouse_drag_publishes_pan_only_samples() {
        let mut tracker = GestureTracker::default();
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let moved = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(130.0, 90.0),
        });
        let release = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));

        assert_eq!(
            feed(&mut tracker, press, mouse::Cursor::Available(inside())),
            InputOutcome::Tracked
        );
        match feed(&mut tracker, moved, mouse::Cursor::Available(Point::new(130.0, 90.0))) {
            InputOutcome::Gesture(sample) => {
                assert_eq!(sample.pan, Vector::new(30.0, -10.0));
                assert_eq!(sample.zoom, 1.0);
            }
            other => panic!("expected a pan, got {other:?}"),
        }

        feed(&mut tracker, release, mouse::Cursor::Available(Point::new(130.0, 90.0)));
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn mouse_press_outside_bounds_does_not_drag() {
        let mut tracker = GestureTracker::default();
        let press = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));

        assert_eq!(
            feed(&mut tracker, press, mouse::Cursor::Available(outside())),
            InputOutcome::Ignored
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn wheel_zooms_only_over_the_surface() {
        let mut tracker = GestureTracker::default();

        assert_eq!(
            feed(&mut tracker, wheel_up(), mouse::Cursor::Available(outside())),
            InputOutcome::Ignored
        );
        assert_eq!(
            feed(&mut tracker, wheel_up(), mouse::Cursor::Unavailable),
            InputOutcome::Ignored
        );
        match feed(&mut tracker, wheel_up(), mouse::Cursor::Available(inside())) {
            InputOutcome::Gesture(sample) => {
                assert_eq!(sample.pan, Vector::ZERO);
                assert!(sample.zoom > 1.0);
            }
            other => panic!("expected a zoom, got {other:?}"),
        }
    }
}
