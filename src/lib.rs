pub mod error;
pub mod settings;

pub use error::Error;
pub use settings::TypesetSettings;

pub use lectern_layout::{
    AverageAdvance, Chapter, ChapterCounter, DEFAULT_TAB_INTERVAL, Element, LabelStrategy,
    LayoutConfig, LayoutError, ListEntry, ListItem, ListLabel, NumberState, NumberedList,
    NumeralStyle, Section, ShapedMeasure, TabSettings, TabStop, TextMeasure, Title,
};
pub use lectern_style::{
    Decoration, FontSpec, FontStyle, FontWeight, Leader, ListStyle, ListStyleType, NumberStyle,
    StyleParseError, SymbolTemplate, TabAlignment, TabStopSpec, TextDecoration,
};
pub use lectern_types::{Color, TocEntry};
