//! Canvas drawing for a single card

use iced::widget::canvas::{Frame, Path};
use iced::{Color, Point, Size, Vector};
use swipecard_core::config::CardConfig;
use swipecard_core::{Rgba, Side};

use super::card_stack::CardView;

const SIDE_HINT_WIDTH: f32 = 4.0;
const SIDE_HINT_ALPHA: f32 = 0.25;

pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Paint `view` with its center on `center`, applying the fan scale around
/// the card center and then the drag offset in the card's own frame.
pub fn paint(frame: &mut Frame, center: Point, view: &CardView, card: &CardConfig) {
    let size = Size::new(card.width, card.height);

    frame.with_save(|frame| {
        frame.translate(Vector::new(center.x + view.presentation.offset_x, center.y));
        frame.scale(view.presentation.scale);
        frame.translate(Vector::new(view.offset - size.width / 2.0, -size.height / 2.0));

        let background = Path::rounded_rectangle(
            Point::ORIGIN,
            size,
            view.style.corner_radius.into(),
        );
        frame.fill(&background, to_color(view.style.background));

        for block in view.style.placeholder_blocks(card.width) {
            let path = Path::rounded_rectangle(
                Point::new(block.x, block.y),
                Size::new(block.width, block.height),
                block.radius.into(),
            );
            frame.fill(&path, to_color(view.style.placeholder));
        }

        if let Some(side) = view.side {
            let x = match side {
                Side::Left => 0.0,
                Side::Right => size.width - SIDE_HINT_WIDTH,
            };
            let hint = Path::rectangle(
                Point::new(x, view.style.corner_radius),
                Size::new(SIDE_HINT_WIDTH, size.height - 2.0 * view.style.corner_radius),
            );
            frame.fill(&hint, to_color(Rgba::WHITE.with_alpha(SIDE_HINT_ALPHA)));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_convert_componentwise() {
        let color = to_color(Rgba::from_argb(0x80ff0000));
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.a - 128.0 / 255.0).abs() < 1e-6);
    }
}
