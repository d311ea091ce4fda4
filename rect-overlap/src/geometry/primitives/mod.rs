mod aa_rect;
mod axis;
mod point;
mod rectangle;

#[doc(inline)]
pub use aa_rect::AARect;
#[doc(inline)]
pub use axis::Axis;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rectangle::Rectangle;
