//! Card identity and style payload

use std::fmt;

use uuid::Uuid;

use crate::constants::card as cfg;

/// Stable card identity, independent of anything the card displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(Uuid);

impl CardId {
    /// Allocate a fresh, time-ordered id.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Straight-alpha color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha; 1.0 is opaque.
    pub a: f32,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Build a color from float components.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Decode a packed `0xAARRGGBB` value.
    pub fn from_argb(argb: u32) -> Self {
        let channel = |shift: u32| ((argb >> shift) & 0xff) as f32 / 255.0;
        Self {
            a: channel(24),
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// A rounded placeholder shape inside a card, relative to the card's
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceholderBlock {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width of the shape.
    pub width: f32,
    /// Height of the shape.
    pub height: f32,
    /// Corner radius; half the height gives a pill, half the size a circle.
    pub radius: f32,
}

/// What a card looks like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    /// Card fill.
    pub background: Rgba,
    /// Radius of the card corners.
    pub corner_radius: f32,
    /// Fill of the placeholder content.
    pub placeholder: Rgba,
}

impl CardStyle {
    /// Style with the default corner radius and translucent black
    /// placeholders.
    pub fn new(background: Rgba) -> Self {
        Self {
            background,
            corner_radius: cfg::CORNER_RADIUS,
            placeholder: Rgba::BLACK.with_alpha(cfg::PLACEHOLDER_ALPHA),
        }
    }

    /// Lay out the placeholder content for a card of the given width: an
    /// avatar circle followed by two stacked bars, vertically centered in a
    /// row that spans half the padded width.
    pub fn placeholder_blocks(&self, card_width: f32) -> [PlaceholderBlock; 3] {
        let inner_width = (card_width - 2.0 * cfg::PADDING_HORIZONTAL).max(0.0);
        let row_width = inner_width * cfg::ROW_WIDTH_FRACTION;
        let column_x = cfg::PADDING_HORIZONTAL + cfg::AVATAR_SIZE + cfg::AVATAR_GAP;
        let column_width = (row_width - cfg::AVATAR_SIZE - cfg::AVATAR_GAP).max(0.0);
        let column_height = 2.0 * cfg::BAR_HEIGHT + cfg::BAR_GAP;
        let row_height = cfg::AVATAR_SIZE.max(column_height);

        let avatar_y = cfg::PADDING_VERTICAL + (row_height - cfg::AVATAR_SIZE) / 2.0;
        let column_y = cfg::PADDING_VERTICAL + (row_height - column_height) / 2.0;

        [
            PlaceholderBlock {
                x: cfg::PADDING_HORIZONTAL,
                y: avatar_y,
                width: cfg::AVATAR_SIZE,
                height: cfg::AVATAR_SIZE,
                radius: cfg::AVATAR_SIZE / 2.0,
            },
            PlaceholderBlock {
                x: column_x,
                y: column_y,
                width: column_width,
                height: cfg::BAR_HEIGHT,
                radius: cfg::BAR_HEIGHT / 2.0,
            },
            PlaceholderBlock {
                x: column_x,
                y: column_y + cfg::BAR_HEIGHT + cfg::BAR_GAP,
                width: column_width * cfg::SECOND_BAR_FRACTION,
                height: cfg::BAR_HEIGHT,
                radius: cfg::BAR_HEIGHT / 2.0,
            },
        ]
    }
}

/// One card in the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Identity used for removal and per-card state.
    pub id: CardId,
    /// Appearance.
    pub style: CardStyle,
}

impl Card {
    /// A card with a fresh id and the given background.
    pub fn new(background: Rgba) -> Self {
        Self {
            id: CardId::new(),
            style: CardStyle::new(background),
        }
    }

    /// A card from a packed `0xAARRGGBB` background.
    pub fn from_argb(argb: u32) -> Self {
        Self::new(Rgba::from_argb(argb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_decodes_channels() {
        let c = Rgba::from_argb(0xff90caf9);
        assert_eq!(c.a, 1.0);
        assert!((c.r - 0x90 as f32 / 255.0).abs() < f32::EPSILON);
        assert!((c.g - 0xca as f32 / 255.0).abs() < f32::EPSILON);
        assert!((c.b - 0xf9 as f32 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn ids_are_unique_even_for_equal_colors() {
        let a = Card::from_argb(0xfffafafa);
        let b = Card::from_argb(0xfffafafa);
        assert_eq!(a.style, b.style);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn placeholder_layout_matches_card_geometry() {
        let style = CardStyle::new(Rgba::WHITE);
        let [avatar, first, second] = style.placeholder_blocks(320.0);

        assert_eq!((avatar.x, avatar.y), (32.0, 24.0));
        assert_eq!(avatar.radius, 18.0);
        // Row spans half of 256, minus the avatar and its gap.
        assert_eq!(first.x, 76.0);
        assert_eq!(first.width, 84.0);
        assert_eq!(first.y, 27.0);
        assert_eq!(second.y, 45.0);
        assert!((second.width - 50.4).abs() < 1e-4);
    }
}
