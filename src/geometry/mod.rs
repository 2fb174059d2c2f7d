pub mod point;
pub mod polygon;
pub mod rect;

pub use point::Point2D;
pub use polygon::Polygon;
pub use rect::Rect;
