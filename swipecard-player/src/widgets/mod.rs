pub mod card_painter;
pub mod card_stack;

pub use card_stack::{CardStackCanvas, CardView, PointerCapture};
