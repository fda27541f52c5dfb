//! Geometry kernel shared by the footprint and routing crates.

pub mod cursor;
pub mod layer;
pub mod merge;
pub mod pad;
pub mod point;
pub mod stamp;
pub mod stroke;
pub mod units;

pub use cavalier_contours::polyline::{PlineSource, PlineVertex, Polyline};
pub use cursor::{Cursor, CursorStack};
pub use layer::Layer;
pub use pad::{Designator, NetRole, Pad, PadError, PadSet, RESERVED_NAME};
pub use point::Point;
