mod geo_traits;
mod point;
mod rect;

#[doc(inline)]
pub use geo_traits::CollidesWith;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use rect::Rect;
