//! List and heading numbering properties.
use crate::symbol::SymbolTemplate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum ListStyleType {
    Disc,
    Circle,
    Square,
    #[default]
    Decimal,
    LowerAlpha,
    UpperAlpha,
    LowerRoman,
    UpperRoman,
    LowerGreek,
    UpperGreek,
    None,
}

impl ListStyleType {
    /// The glyph drawn for bullet styles, `None` for counting styles.
    pub fn bullet(self) -> Option<char> {
        match self {
            ListStyleType::Disc => Some('•'),
            ListStyleType::Circle => Some('◦'),
            ListStyleType::Square => Some('▪'),
            _ => None,
        }
    }

    pub fn is_lowercase(self) -> bool {
        matches!(
            self,
            ListStyleType::LowerAlpha | ListStyleType::LowerRoman | ListStyleType::LowerGreek
        )
    }
}

/// How a section number is rendered in front of its title.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[derive(Default)]
pub enum NumberStyle {
    /// `1.2.3.`
    #[default]
    Dotted,
    /// `1.2.3`
    DottedWithoutFinalDot,
}

/// A reusable list configuration, typically read from a JSON stylesheet.
///
/// Unset fields fall back to the defaults of the list variant that
/// `list_style_type` selects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ListStyle {
    pub list_style_type: ListStyleType,
    /// Overrides `list_style_type` with a fixed glyph when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_indent: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_indent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_indent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<i32>,
    pub symbol: SymbolTemplate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_style_from_json() {
        let style: ListStyle = serde_json::from_str(
            r#"{
                "listStyleType": "upper-roman",
                "symbolIndent": 18,
                "suffix": ")",
                "symbol": { "font": { "family": "Times", "size": 10 } }
            }"#,
        )
        .unwrap();

        assert_eq!(style.list_style_type, ListStyleType::UpperRoman);
        assert_eq!(style.symbol_indent, Some(18.0));
        assert_eq!(style.suffix.as_deref(), Some(")"));
        assert_eq!(style.prefix, None);
        assert_eq!(style.symbol.font.family, "Times");
        assert!(!style.list_style_type.is_lowercase());
    }

    #[test]
    fn test_bullets_only_for_bullet_styles() {
        assert_eq!(ListStyleType::Disc.bullet(), Some('•'));
        assert_eq!(ListStyleType::Decimal.bullet(), None);
        assert_eq!(ListStyleType::None.bullet(), None);
    }
}
