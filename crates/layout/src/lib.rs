use lectern_style::StyleParseError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
    #[error("Unsupported element: a {0} cannot be added to a list.")]
    UnsupportedElement(&'static str),
    #[error("Style error: {0}")]
    Style(#[from] StyleParseError),
    #[error("Font error: {0}")]
    Font(String),
}

pub mod config;
pub mod element;
pub mod lists;
pub mod metrics;
pub mod numbering;
pub mod tabs;

pub use self::config::LayoutConfig;
pub use self::element::Element;
pub use self::lists::{LabelStrategy, ListEntry, ListItem, ListLabel, NumberedList, NumeralStyle};
pub use self::metrics::{AverageAdvance, ShapedMeasure, TextMeasure};
pub use self::numbering::{Chapter, ChapterCounter, NumberState, Section, Title};
pub use self::tabs::{DEFAULT_TAB_INTERVAL, TabSettings, TabStop};

// Re-export style values that appear in this crate's public signatures
pub use lectern_style::{Leader, ListStyleType, NumberStyle, SymbolTemplate, TabAlignment};

#[cfg(test)]
mod numbering_test;
