pub mod color;
pub mod document;
pub mod units;

pub use color::Color;
pub use document::TocEntry;
pub use units::{POSITION_EPSILON, from_thousandths, to_thousandths};
