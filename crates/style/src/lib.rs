pub mod font;
pub mod text;
pub mod list;
pub mod tab;
pub mod symbol;
pub mod parsers;

pub use font::{FontSpec, FontStyle, FontWeight};
pub use text::{Decoration, TextDecoration};
pub use list::{ListStyle, ListStyleType, NumberStyle};
pub use tab::{Leader, TabAlignment, TabStopSpec};
pub use symbol::SymbolTemplate;
pub use parsers::StyleParseError;
