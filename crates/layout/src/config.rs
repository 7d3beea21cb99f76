use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Spacing of the implicit tab stops used once the cursor has passed every
    /// explicit stop.
    ///
    /// Must be strictly positive. Defaults to `36.0` (half an inch).
    pub tab_interval: f32,
    /// Left indentation given to list items, and added to nested lists.
    ///
    /// Defaults to `0.0`.
    pub symbol_indent: f32,
    /// When set, list items are indented by the width of their label instead of
    /// `symbol_indent`.
    ///
    /// Defaults to `true`.
    pub auto_indent: bool,
    /// When set, finishing a list gives every item the widest item indentation.
    ///
    /// Defaults to `true`.
    pub align_indent: bool,
    /// Text appended to counting labels (numerals and greek letters).
    ///
    /// Defaults to `"."`.
    pub numeral_suffix: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tab_interval: crate::tabs::DEFAULT_TAB_INTERVAL,
            symbol_indent: 0.0,
            auto_indent: true,
            align_indent: true,
            numeral_suffix: ".".to_string(),
        }
    }
}
