// SPDX-License-Identifier: MPL-2.0
//! Gallery screen component: navigation, image transform and layout.

use crate::app::config::ViewerConfig;
use crate::gallery::{ArtLibrary, GalleryNavigator};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::{GestureSample, TransformState};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::transformed_image;
use iced::font::Weight;
use iced::widget::{button, column, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Font, Length, Padding, Vector};

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Previous,
    Next,
    /// One sample from the image surface's gesture stream.
    Gesture(GestureSample),
    ZoomIn,
    ZoomOut,
    ResetTransform,
    /// Keyboard pan, in the same units as a gesture pan.
    PanBy(Vector),
}

/// Environment information required to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
}

/// Complete gallery screen state.
pub struct State {
    navigator: GalleryNavigator,
    library: ArtLibrary,
    transform: TransformState,
    reset_on_navigate: bool,
    wheel_zoom_factor: f32,
    keyboard_pan_step: f32,
}

impl State {
    /// Starts a fresh session on the first piece with an identity transform.
    #[must_use]
    pub fn new(navigator: GalleryNavigator, library: ArtLibrary, viewer: &ViewerConfig) -> Self {
        Self {
            navigator,
            library,
            transform: TransformState::default(),
            reset_on_navigate: viewer.resets_transform_on_navigate(),
            wheel_zoom_factor: viewer.effective_wheel_zoom_factor(),
            keyboard_pan_step: viewer.effective_keyboard_pan_step(),
        }
    }

    pub fn navigator(&self) -> &GalleryNavigator {
        &self.navigator
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    pub fn wheel_zoom_factor(&self) -> f32 {
        self.wheel_zoom_factor
    }

    pub fn keyboard_pan_step(&self) -> f32 {
        self.keyboard_pan_step
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Previous => {
                let index = self.navigator.previous();
                self.after_navigation(index);
            }
            Message::Next => {
                let index = self.navigator.next();
                self.after_navigation(index);
            }
            Message::Gesture(sample) => self.apply(sample),
            Message::ZoomIn => self.apply(GestureSample::zoom(self.wheel_zoom_factor)),
            Message::ZoomOut => self.apply(GestureSample::zoom(1.0 / self.wheel_zoom_factor)),
            Message::PanBy(delta) => self.apply(GestureSample::new(delta, 1.0)),
            Message::ResetTransform => {
                self.transform.reset();
                tracing::debug!("transform reset");
            }
        }
    }

    fn apply(&mut self, sample: GestureSample) {
        self.transform.apply_gesture(sample);
        tracing::trace!(
            scale = self.transform.scale(),
            offset_x = self.transform.offset().x,
            offset_y = self.transform.offset().y,
            "gesture applied"
        );
    }

    fn after_navigation(&mut self, index: usize) {
        if self.reset_on_navigate {
            self.transform.reset();
        }
        tracing::debug!(index, title = self.navigator.current().title(), "navigated");
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let colors = env.colors;

        let surface = Container::new(self.view_image(env.i18n))
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .style(styles::container::image_card(colors));

        let image_area = Container::new(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: spacing::XXL,
                bottom: spacing::MD,
                left: 0.0,
                right: 0.0,
            });

        column![image_area, self.view_caption(env.i18n, colors), view_navigation(env.i18n, colors)]
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::LG)
            .into()
    }

    fn view_image<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let piece = self.navigator.current();
        match self.library.image(piece.image()) {
            Some(image) => transformed_image(image, self.transform, Message::Gesture)
                .wheel_zoom_factor(self.wheel_zoom_factor)
                .into(),
            None => Container::new(Text::new(i18n.tr("image-unavailable")).size(typography::CAPTION))
                .center(Length::Fill)
                .into(),
        }
    }

    fn view_caption<'a>(&'a self, i18n: &'a I18n, colors: &'a ColorScheme) -> Element<'a, Message> {
        let piece = self.navigator.current();

        let title = Text::new(piece.title())
            .size(typography::TITLE)
            .color(colors.caption_text);
        let artist = Text::new(piece.artist())
            .size(typography::ARTIST)
            .color(colors.caption_text)
            .font(Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            });
        let counter = Text::new(i18n.tr_with_args(
            "gallery-counter",
            &[
                ("current", &(self.navigator.current_index() + 1).to_string()),
                ("total", &self.navigator.count().to_string()),
            ],
        ))
        .size(typography::CAPTION)
        .color(colors.text_secondary);

        let panel = Container::new(
            Column::new()
                .spacing(spacing::XXS)
                .push(title)
                .push(artist)
                .push(counter),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::caption_panel(colors));

        Container::new(panel)
            .width(Length::Fill)
            .padding(Padding {
                top: 0.0,
                bottom: spacing::XL,
                left: spacing::MD,
                right: spacing::MD,
            })
            .into()
    }
}

fn view_navigation<'a>(i18n: &'a I18n, colors: &'a ColorScheme) -> Element<'a, Message> {
    let nav_button = |key: &str, message: Message| {
        button(
            text(i18n.tr(key))
                .size(typography::BUTTON)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fixed(sizing::NAV_BUTTON_WIDTH))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button_navigation(colors))
        .on_press(message)
    };

    Container::new(
        Row::new()
            .push(nav_button("button-previous", Message::Previous))
            .push(Space::new().width(Length::Fill))
            .push(nav_button("button-next", Message::Next))
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::NAV_BAR_RESERVE))
    .padding([spacing::XS, spacing::MD])
    .align_y(alignment::Vertical::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::default_gallery;

    fn state_with(viewer: ViewerConfig) -> State {
        let gallery = default_gallery();
        let (library, _) = ArtLibrary::load(&gallery);
        State::new(GalleryNavigator::new(gallery), library, &viewer)
    }

    fn state() -> State {
        state_with(ViewerConfig::default())
    }

    #[test]
    fn starts_on_first_piece_with_identity_transform() {
        let state = state();
        assert_eq!(state.navigator().current_index(), 0);
        assert!(state.transform().is_identity());
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let mut state = state();
        state.handle_message(Message::Next);
        assert_eq!(state.navigator().current_index(), 1);
        state.handle_message(Message::Previous);
        assert_eq!(state.navigator().current_index(), 0);
        state.handle_message(Message::Previous);
        assert_eq!(state.navigator().current_index(), 8);
    }

    #[test]
    fn navigation_keeps_transform_by_default() {
        let mut state = state();
        state.handle_message(Message::Gesture(GestureSample::new(Vector::new(10.0, 0.0), 2.0)));
        let before = *state.transform();

        state.handle_message(Message::Next);
        assert_eq!(*state.transform(), before);
        assert_eq!(state.transform().scale(), 2.0);
    }

    #[test]
    fn navigation_resets_transform_when_configured() {
        let mut state = state_with(ViewerConfig {
            reset_transform_on_navigate: Some(true),
            ..ViewerConfig::default()
        });
        state.handle_message(Message::Gesture(GestureSample::zoom(3.0)));
        state.handle_message(Message::Previous);
        assert!(state.transform().is_identity());
    }

    #[test]
    fn zoom_in_and_out_use_the_wheel_factor() {
        let mut state = state_with(ViewerConfig {
            wheel_zoom_factor: Some(2.0),
            ..ViewerConfig::default()
        });
        state.handle_message(Message::ZoomIn);
        assert_eq!(state.transform().scale(), 2.0);
        state.handle_message(Message::ZoomOut);
        assert_eq!(state.transform().scale(), 1.0);
        state.handle_message(Message::ZoomOut);
        assert_eq!(state.transform().scale(), 1.0);
    }

    #[test]
    fn keyboard_pan_goes_through_the_gesture_rule() {
        let mut state = state();
        state.handle_message(Message::ZoomIn);
        let scale = state.transform().scale();
        state.handle_message(Message::PanBy(Vector::new(0.0, -10.0)));
        assert_eq!(state.transform().offset(), Vector::new(0.0, -10.0 * scale));
    }

    #[test]
    fn reset_transform_restores_identity_without_navigating() {
        let mut state = state();
        state.handle_message(Message::Next);
        state.handle_message(Message::Gesture(GestureSample::new(Vector::new(3.0, 4.0), 1.5)));
        state.handle_message(Message::ResetTransform);
        assert!(state.transform().is_identity());
        assert_eq!(state.navigator().current_index(), 1);
    }
}
