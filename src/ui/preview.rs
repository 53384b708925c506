// SPDX-License-Identifier: MPL-2.0
//! Interactive preview canvas.
//!
//! Draws the decoded image at the scale and offset held by a [`Viewport`]
//! and turns pointer input into [`Message`]s: the wheel zooms around the
//! cursor, a left-button drag pans, and a double click restores the fitted
//! view. While hovering the image, the pixel under the cursor is shown next
//! to it.
#![allow(clippy::cast_precision_loss)]

use crate::config::PREVIEW_DOUBLE_CLICK_MS;
use crate::ui::design_tokens::{border, opacity, palette, spacing, typography};
use crate::ui::viewport::{zoom_factor, Viewport};
use iced::widget::canvas::{self, Canvas, Frame, Path, Stroke, Text};
use iced::widget::image::Handle;
use iced::{mouse, Color, Element, Font, Length, Point, Rectangle, Size, Theme};
use std::time::{Duration, Instant};

const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(PREVIEW_DOUBLE_CLICK_MS);

/// Gap between the cursor and the pixel readout.
const READOUT_OFFSET: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Zoom by `factor` around `anchor` (frame coordinates).
    Zoom { factor: f32, anchor: Point },
    DragStarted(Point),
    DragMoved(Point),
    DragEnded,
    /// Back to the fitted view.
    Reset,
}

/// Applies a preview message to the viewport it was produced for.
pub fn apply(viewport: &mut Viewport, message: Message) {
    match message {
        Message::Zoom { factor, anchor } => viewport.zoom_at(factor, anchor),
        Message::DragStarted(position) => viewport.begin_drag(position),
        Message::DragMoved(position) => viewport.drag_to(position),
        Message::DragEnded => viewport.end_drag(),
        Message::Reset => viewport.reset(),
    }
}

/// Text of the hover readout for image pixel `(x, y)`.
#[must_use]
pub fn readout_label((x, y): (u32, u32)) -> String {
    format!("x: {x}, y: {y}")
}

/// Canvas-local pointer state.
#[derive(Debug, Default)]
pub struct Interaction {
    last_press: Option<Instant>,
    dragging: bool,
}

impl Interaction {
    /// Records a press at `now`. Returns `true` when it completes a double click.
    fn register_press(&mut self, now: Instant) -> bool {
        let is_double_click = self
            .last_press
            .is_some_and(|t| now.duration_since(t) < DOUBLE_CLICK_THRESHOLD);

        // a third click starts a new pair
        self.last_press = if is_double_click { None } else { Some(now) };
        is_double_click
    }
}

/// What the canvas does with an event.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Reaction {
    Publish(Message),
    Redraw,
    Ignore,
}

fn react(
    state: &mut Interaction,
    event: &iced::Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    now: Instant,
) -> Reaction {
    let iced::Event::Mouse(event) = event else {
        return Reaction::Ignore;
    };

    match event {
        mouse::Event::WheelScrolled { delta } => match cursor.position_in(bounds) {
            Some(anchor) => Reaction::Publish(Message::Zoom {
                factor: zoom_factor(*delta),
                anchor,
            }),
            None => Reaction::Ignore,
        },
        mouse::Event::ButtonPressed(mouse::Button::Left) => {
            let Some(position) = cursor.position_in(bounds) else {
                return Reaction::Ignore;
            };
            if state.register_press(now) {
                state.dragging = false;
                Reaction::Publish(Message::Reset)
            } else {
                state.dragging = true;
                Reaction::Publish(Message::DragStarted(position))
            }
        }
        mouse::Event::CursorMoved { .. } => {
            if state.dragging {
                // keep following the cursor outside the frame
                match cursor.position() {
                    Some(p) => {
                        Reaction::Publish(Message::DragMoved(Point::new(p.x - bounds.x, p.y - bounds.y)))
                    }
                    None => Reaction::Ignore,
                }
            } else if cursor.is_over(bounds) {
                Reaction::Redraw
            } else {
                Reaction::Ignore
            }
        }
        mouse::Event::ButtonReleased(mouse::Button::Left) if state.dragging => {
            state.dragging = false;
            Reaction::Publish(Message::DragEnded)
        }
        mouse::Event::CursorLeft => {
            if state.dragging {
                state.dragging = false;
                Reaction::Publish(Message::DragEnded)
            } else {
                Reaction::Redraw
            }
        }
        _ => Reaction::Ignore,
    }
}

/// Canvas program drawing one image through a viewport.
pub struct PreviewCanvas {
    handle: Handle,
    viewport: Viewport,
}

impl canvas::Program<Message> for PreviewCanvas {
    type State = Interaction;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match react(state, event, bounds, cursor, Instant::now()) {
            Reaction::Publish(message) => Some(Action::publish(message).and_capture()),
            Reaction::Redraw => Some(Action::request_redraw()),
            Reaction::Ignore => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let rect = self.viewport.image_rect();
        frame.draw_image(rect, canvas::Image::new(self.handle.clone()));
        frame.stroke(
            &Path::rectangle(rect.position(), rect.size()),
            Stroke::default()
                .with_width(border::WIDTH_MD)
                .with_color(palette::BLACK),
        );

        if let Some(position) = cursor.position_in(bounds) {
            if let Some(pixel) = self.viewport.pixel_at(position) {
                draw_readout(&mut frame, position, &readout_label(pixel));
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.dragging {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

fn draw_readout(frame: &mut Frame, cursor: Point, label: &str) {
    let size = typography::CAPTION;
    // monospace glyphs are roughly 0.6em wide
    let text_width = label.chars().count() as f32 * size * 0.6;
    let background = Size::new(text_width + spacing::XS, size + spacing::XS);
    let top_left = Point::new(
        cursor.x + READOUT_OFFSET,
        cursor.y - background.height - spacing::XS,
    );

    frame.fill_rectangle(
        top_left,
        background,
        Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        },
    );
    frame.fill_text(Text {
        content: label.to_string(),
        position: Point::new(top_left.x + spacing::XXS, top_left.y + spacing::XXS),
        color: palette::WHITE,
        size: size.into(),
        font: Font::MONOSPACE,
        ..Text::default()
    });
}

/// Canvas filling its container with `handle` drawn through `viewport`.
pub fn view<'a>(handle: &Handle, viewport: Viewport) -> Element<'a, Message> {
    Canvas::new(PreviewCanvas {
        handle: handle.clone(),
        viewport,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
