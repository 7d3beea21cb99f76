//! Tab stop resolution.
//!
//! The layout engine asks [`TabSettings`] for the stop following the cursor, then
//! asks that [`TabStop`] where the tabbed content should start on this line.

mod settings;
mod stop;

pub use settings::{DEFAULT_TAB_INTERVAL, TabSettings};
pub use stop::TabStop;
