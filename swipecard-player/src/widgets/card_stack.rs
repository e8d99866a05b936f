//! Canvas program hosting the card stack
//!
//! Cards are drawn back to front and hit-tested front to back. A press
//! captures the topmost card under the pointer; every later event of that
//! pointer goes to the captured card until release, even if it leaves the
//! card or the canvas.

use std::time::Instant;

use iced::mouse;
use iced::touch;
use iced::widget::Action;
use iced::widget::canvas::{self, Event, Frame, Geometry};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme};
use swipecard_core::card::CardStyle;
use swipecard_core::config::CardConfig;
use swipecard_core::gesture::Point as CardPoint;
use swipecard_core::{CardId, PointerEvent, Presentation, Side};

use super::card_painter;
use crate::messages::Message;

/// Render snapshot of one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardView {
    pub id: CardId,
    pub style: CardStyle,
    pub presentation: Presentation,
    pub offset: f32,
    /// Half under the pointer while dragging.
    pub side: Option<Side>,
}

#[derive(Debug)]
pub struct CardStackCanvas {
    /// Back to front.
    cards: Vec<CardView>,
    card: CardConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

#[derive(Debug, Clone, Copy)]
struct Grab {
    id: CardId,
    pointer: Pointer,
    /// Fan position at press time; the gesture keeps this frame even if the
    /// fan re-lays out underneath it.
    presentation: Presentation,
}

/// Canvas state: which card, if any, the active pointer holds.
#[derive(Debug, Default)]
pub struct PointerCapture {
    grab: Option<Grab>,
}

impl CardStackCanvas {
    pub fn new(cards: Vec<CardView>, card: CardConfig) -> Self {
        Self { cards, card }
    }

    /// Map a canvas-relative position into the resting frame of a card with
    /// `presentation`: fan offset and scale removed, drag offset kept.
    pub fn to_card_frame(
        &self,
        position: Point,
        canvas: Size,
        presentation: Presentation,
    ) -> CardPoint {
        let scale = presentation.scale.max(f32::EPSILON);
        let center_x = canvas.width / 2.0 + presentation.offset_x;
        let center_y = canvas.height / 2.0;
        CardPoint::new(
            (position.x - center_x) / scale + self.card.width / 2.0,
            (position.y - center_y) / scale + self.card.height / 2.0,
        )
    }

    /// Topmost card whose visible rectangle contains `position`.
    pub fn hit_test(&self, position: Point, canvas: Size) -> Option<&CardView> {
        self.cards.iter().rev().find(|view| {
            let local = self.to_card_frame(position, canvas, view.presentation);
            let x = local.x - view.offset;
            (0.0..=self.card.width).contains(&x) && (0.0..=self.card.height).contains(&local.y)
        })
    }

    fn press(
        &self,
        state: &mut PointerCapture,
        pointer: Pointer,
        position: Point,
        canvas: Size,
    ) -> Option<Action<Message>> {
        if state.grab.is_some() {
            return None;
        }
        let view = self.hit_test(position, canvas)?;
        let grab = Grab {
            id: view.id,
            pointer,
            presentation: view.presentation,
        };
        state.grab = Some(grab);

        let position = self.to_card_frame(position, canvas, grab.presentation);
        let at = Instant::now();
        publish(grab.id, PointerEvent::Down { position, at })
    }

    fn motion(
        &self,
        state: &PointerCapture,
        pointer: Pointer,
        position: Point,
        canvas: Size,
    ) -> Option<Action<Message>> {
        let grab = state.grab.filter(|grab| grab.pointer == pointer)?;
        let position = self.to_card_frame(position, canvas, grab.presentation);
        let at = Instant::now();
        publish(grab.id, PointerEvent::Move { position, at })
    }

    fn release(
        &self,
        state: &mut PointerCapture,
        pointer: Pointer,
        position: Option<Point>,
        canvas: Size,
    ) -> Option<Action<Message>> {
        let grab = state.grab.filter(|grab| grab.pointer == pointer)?;
        state.grab = None;

        let at = Instant::now();
        let event = match position {
            Some(position) => PointerEvent::Up {
                position: self.to_card_frame(position, canvas, grab.presentation),
                at,
            },
            None => PointerEvent::Cancel { at },
        };
        publish(grab.id, event)
    }
}

fn publish(id: CardId, event: PointerEvent) -> Option<Action<Message>> {
    Some(Action::publish(Message::Pointer(id, event)).and_capture())
}

fn relative(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

impl canvas::Program<Message> for CardStackCanvas {
    type State = PointerCapture;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let canvas = bounds.size();
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                self.press(state, Pointer::Mouse, position, canvas)
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                self.motion(state, Pointer::Mouse, relative(*position, bounds), canvas)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let position = cursor.position().map(|position| relative(position, bounds));
                self.release(state, Pointer::Mouse, position, canvas)
            }
            Event::Mouse(mouse::Event::CursorLeft) => {
                self.release(state, Pointer::Mouse, None, canvas)
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                self.press(state, Pointer::Finger(*id), relative(*position, bounds), canvas)
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                self.motion(state, Pointer::Finger(*id), relative(*position, bounds), canvas)
            }
            Event::Touch(touch::Event::FingerLifted { id, position }) => self.release(
                state,
                Pointer::Finger(*id),
                Some(relative(*position, bounds)),
                canvas,
            ),
            Event::Touch(touch::Event::FingerLost { id, .. }) => {
                self.release(state, Pointer::Finger(*id), None, canvas)
            }
            _ => None,
        }
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
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::BLACK);

        let center = frame.center();
        for view in &self.cards {
            card_painter::paint(&mut frame, center, view, &self.card);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.grab.is_some_and(|grab| grab.pointer == Pointer::Mouse) {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(position) if self.hit_test(position, bounds.size()).is_some() => {
                mouse::Interaction::Grab
            }
            _ => mouse::Interaction::default(),
        }
    }
}
