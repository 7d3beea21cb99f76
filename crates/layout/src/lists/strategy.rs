use super::markers::{to_alpha, to_greek, to_roman};
use lectern_style::ListStyleType;

/// How a sequential list writes its counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralStyle {
    Decimal,
    /// `a, b, ... z, aa, ab, ...`, starting at 1.
    Alphabetic,
    /// `i, ii, iii, ...`, starting at 1.
    Roman,
}

/// Turns a list item's index into the text of its label.
///
/// The set of strategies is closed. Note that [`LabelStrategy::FixedGlyph`] ignores
/// the index entirely: every item of such a list carries the same label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelStrategy {
    Sequential(NumeralStyle),
    /// Greek letters, counted from zero: index 0 is `α`.
    Greek,
    FixedGlyph(char),
}

impl Default for LabelStrategy {
    fn default() -> Self {
        LabelStrategy::Sequential(NumeralStyle::Decimal)
    }
}

impl LabelStrategy {
    /// Renders `index` without prefix or suffix.
    ///
    /// Indices outside the range of a lettered or roman style fall back to decimal.
    pub fn label(&self, index: i32, lowercase: bool) -> String {
        let counted = u32::try_from(index).ok();
        let rendered = match self {
            LabelStrategy::Sequential(NumeralStyle::Decimal) => None,
            LabelStrategy::Sequential(NumeralStyle::Alphabetic) => {
                counted.and_then(|n| to_alpha(n, lowercase))
            }
            LabelStrategy::Sequential(NumeralStyle::Roman) => {
                counted.and_then(|n| to_roman(n, lowercase))
            }
            LabelStrategy::Greek => counted.map(|n| to_greek(n, lowercase)),
            LabelStrategy::FixedGlyph(glyph) => Some(glyph.to_string()),
        };
        rendered.unwrap_or_else(|| index.to_string())
    }

    /// The first index of a freshly created list using this strategy.
    pub fn default_first_index(&self) -> i32 {
        match self {
            LabelStrategy::Greek => 0,
            _ => 1,
        }
    }

    /// The text placed after the label when the list does not override it.
    pub fn default_suffix(&self) -> &'static str {
        match self {
            LabelStrategy::FixedGlyph(_) => "",
            _ => ".",
        }
    }

    pub fn glyph(&self) -> Option<char> {
        match self {
            LabelStrategy::FixedGlyph(glyph) => Some(*glyph),
            _ => None,
        }
    }

    /// Maps a CSS-like list style onto a strategy and its letter case.
    ///
    /// `none` becomes a blank glyph so items keep their indentation.
    pub fn from_style_type(style_type: ListStyleType) -> (Self, bool) {
        let lowercase = style_type.is_lowercase();
        let strategy = match style_type {
            ListStyleType::Decimal => LabelStrategy::Sequential(NumeralStyle::Decimal),
            ListStyleType::LowerAlpha | ListStyleType::UpperAlpha => {
                LabelStrategy::Sequential(NumeralStyle::Alphabetic)
            }
            ListStyleType::LowerRoman | ListStyleType::UpperRoman => {
                LabelStrategy::Sequential(NumeralStyle::Roman)
            }
            ListStyleType::LowerGreek | ListStyleType::UpperGreek => LabelStrategy::Greek,
            ListStyleType::None => LabelStrategy::FixedGlyph(' '),
            bullet => LabelStrategy::FixedGlyph(bullet.bullet().unwrap_or('•')),
        };
        (strategy, lowercase)
    }
}
