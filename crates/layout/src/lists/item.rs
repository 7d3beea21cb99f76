use lectern_style::{Decoration, FontSpec};

/// The label a list stamped onto one of its items.
#[derive(Debug, Clone, PartialEq)]
pub struct ListLabel {
    /// Prefix, rendered index and suffix.
    pub text: String,
    pub font: FontSpec,
    pub decoration: Decoration,
    /// Advance width of `text` in `font`.
    pub width: f32,
}

/// A terminal list entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    text: String,
    label: Option<ListLabel>,
    indentation_left: f32,
    indentation_right: f32,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `None` until the item has been added to a list.
    pub fn label(&self) -> Option<&ListLabel> {
        self.label.as_ref()
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_ref().map(|label| label.text.as_str())
    }

    pub fn indentation_left(&self) -> f32 {
        self.indentation_left
    }

    pub fn indentation_right(&self) -> f32 {
        self.indentation_right
    }

    pub fn set_indentation_left(&mut self, indentation: f32) {
        self.indentation_left = indentation;
    }

    /// Attaches `label` and indents the item by the label width when
    /// `auto_indent` is set, by `symbol_indent` otherwise.
    pub(crate) fn stamp(&mut self, label: ListLabel, symbol_indent: f32, auto_indent: bool) {
        self.indentation_left = if auto_indent {
            label.width
        } else {
            symbol_indent
        };
        self.indentation_right = 0.0;
        self.label = Some(label);
    }
}

impl From<&str> for ListItem {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
