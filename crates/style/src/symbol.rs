use crate::font::FontSpec;
use crate::text::Decoration;
use serde::{Deserialize, Serialize};

/// Prototype for the visual attributes of list labels.
///
/// A list copies its template into each label at the moment the label is
/// generated, so later changes to the template leave existing labels alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SymbolTemplate {
    pub font: FontSpec,
    pub decoration: Decoration,
}

impl SymbolTemplate {
    pub fn new(font: FontSpec) -> Self {
        Self {
            font,
            decoration: Decoration::default(),
        }
    }

    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }
}
