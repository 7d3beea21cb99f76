//! Chapter and section numbering.

mod chapter;
mod section;

pub use chapter::{Chapter, ChapterCounter, NumberState};
pub use section::{Section, Title};
