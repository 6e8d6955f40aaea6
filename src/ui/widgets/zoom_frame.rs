// SPDX-License-Identifier: MPL-2.0
//! Canvas that paints the zoomed image and reports pointer activity.
//!
//! Pointer events over the frame are published as hover zoom messages and
//! captured, so ancestors never see them.

use crate::domain::zoom::Pose;
use crate::ui::hover_zoom::Message;
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::widget::image::Handle;
use iced::{mouse, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme};

/// Paints `image` at `pose`, relative to the frame's top-left corner.
pub struct ZoomFrame<'a> {
    image: Option<&'a Handle>,
    pose: Pose,
    interactive: bool,
}

impl<'a> ZoomFrame<'a> {
    #[must_use]
    pub fn new(image: Option<&'a Handle>, pose: Pose) -> Self {
        Self {
            image,
            pose,
            interactive: false,
        }
    }

    /// Whether pointer events are reported. Off until the image is ready.
    #[must_use]
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Creates a Canvas widget filling its container.
    pub fn into_element(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Hover change derived from one mouse event.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PointerTransition {
    Entered(Point),
    Moved(Point),
    Exited,
}

impl PointerTransition {
    fn hovered_after(self) -> bool {
        !matches!(self, PointerTransition::Exited)
    }

    fn into_message(self, origin: Point) -> Message {
        match self {
            PointerTransition::Entered(position) => Message::PointerEntered { position, origin },
            PointerTransition::Moved(position) => Message::PointerMoved { position, origin },
            PointerTransition::Exited => Message::PointerExited,
        }
    }
}

fn pointer_transition(hovered: bool, event: &Event, bounds: Rectangle) -> Option<PointerTransition> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            let inside = bounds.contains(*position);
            match (hovered, inside) {
                (false, true) => Some(PointerTransition::Entered(*position)),
                (true, true) => Some(PointerTransition::Moved(*position)),
                (true, false) => Some(PointerTransition::Exited),
                (false, false) => None,
            }
        }
        Event::Mouse(mouse::Event::CursorLeft) if hovered => Some(PointerTransition::Exited),
        _ => None,
    }
}

impl canvas::Program<Message> for ZoomFrame<'_> {
    /// Whether the pointer is currently over the frame.
    type State = bool;

    fn update(
        &self,
        hovered: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        if !self.interactive {
            return None;
        }

        let transition = pointer_transition(*hovered, event, bounds)?;
        *hovered = transition.hovered_after();
        Some(canvas::Action::publish(transition.into_message(bounds.position())).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if let Some(handle) = self.image {
            #[allow(clippy::cast_precision_loss)]
            let target = Rectangle::new(
                Point::new(self.pose.left as f32, self.pose.top as f32),
                Size::new(self.pose.width as f32, self.pose.height as f32),
            );
            frame.draw_image(target, handle);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.interactive && cursor.is_over(bounds) {
            mouse::Interaction::ZoomIn
        } else {
            mouse::Interaction::default()
        }
    }
}
