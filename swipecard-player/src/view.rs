use std::time::Instant;

use iced::widget::canvas;
use iced::{Element, Length};

use crate::messages::Message;
use crate::state::State;
use crate::widgets::CardStackCanvas;

pub fn view(state: &State) -> Element<'_, Message> {
    let cards = state.card_views(Instant::now());

    canvas(CardStackCanvas::new(cards, state.config.card))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
