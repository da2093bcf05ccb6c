pub mod diverging;
pub mod frame;
pub mod primitives;

pub use diverging::DivergingScale;
pub use frame::RenderFrame;
pub use primitives::{Color, FillRule, PathPrimitive, TextHAlign, TextPrimitive};
