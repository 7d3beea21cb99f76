use super::item::{ListItem, ListLabel};
use super::strategy::{LabelStrategy, NumeralStyle};
use crate::element::Element;
use crate::metrics::{AverageAdvance, TextMeasure};
use crate::{LayoutConfig, LayoutError};
use lectern_style::{ListStyle, ListStyleType, SymbolTemplate};
use std::sync::Arc;

/// One entry of a [`NumberedList`], in rendering order.
#[derive(Debug)]
pub enum ListEntry {
    Item(ListItem),
    List(NumberedList),
}

/// An ordered list that labels its items as they are added.
///
/// Labels are computed once, at add time, from the list's configuration at that
/// moment. Reconfiguring the list afterwards only affects items added later.
///
/// Nested lists occupy an entry slot without advancing the count: the items after
/// a nested list continue numbering where the items before it left off.
#[derive(Debug)]
pub struct NumberedList {
    entries: Vec<ListEntry>,
    strategy: LabelStrategy,
    first_index: i32,
    symbol_indent: f32,
    auto_indent: bool,
    align_indent: bool,
    lowercase: bool,
    prefix: String,
    suffix: String,
    symbol: SymbolTemplate,
    indentation_left: f32,
    indentation_right: f32,
    completed: bool,
    measure: Arc<dyn TextMeasure>,
}

impl NumberedList {
    /// A list whose items are indented by the width of their labels.
    pub fn new(strategy: LabelStrategy) -> Self {
        Self {
            entries: Vec::new(),
            strategy,
            first_index: strategy.default_first_index(),
            symbol_indent: 0.0,
            auto_indent: true,
            align_indent: true,
            lowercase: false,
            prefix: String::new(),
            suffix: strategy.default_suffix().to_string(),
            symbol: SymbolTemplate::default(),
            indentation_left: 0.0,
            indentation_right: 0.0,
            completed: false,
            measure: Arc::new(AverageAdvance::default()),
        }
    }

    /// A list whose items are indented by a fixed `symbol_indent`.
    pub fn with_symbol_indent(strategy: LabelStrategy, symbol_indent: f32) -> Self {
        Self {
            symbol_indent,
            auto_indent: false,
            align_indent: false,
            ..Self::new(strategy)
        }
    }

    pub fn with_config(strategy: LabelStrategy, config: &LayoutConfig) -> Self {
        let mut list = Self::new(strategy);
        list.symbol_indent = config.symbol_indent;
        list.auto_indent = config.auto_indent;
        list.align_indent = config.align_indent;
        if strategy.glyph().is_none() {
            list.suffix = config.numeral_suffix.clone();
        }
        list
    }

    pub fn numbered() -> Self {
        Self::new(LabelStrategy::Sequential(NumeralStyle::Decimal))
    }

    pub fn lettered(lowercase: bool) -> Self {
        let mut list = Self::new(LabelStrategy::Sequential(NumeralStyle::Alphabetic));
        list.lowercase = lowercase;
        list
    }

    pub fn roman(lowercase: bool) -> Self {
        let mut list = Self::new(LabelStrategy::Sequential(NumeralStyle::Roman));
        list.lowercase = lowercase;
        list
    }

    /// Greek lists count from zero so that their first item is `α`.
    pub fn greek(lowercase: bool) -> Self {
        let mut list = Self::new(LabelStrategy::Greek);
        list.lowercase = lowercase;
        list
    }

    /// A list labelling every item with the same glyph.
    pub fn glyph(glyph: char) -> Result<Self, LayoutError> {
        validate_glyph(glyph)?;
        Ok(Self::new(LabelStrategy::FixedGlyph(glyph)))
    }

    pub fn from_style_type(style_type: ListStyleType) -> Self {
        let (strategy, lowercase) = LabelStrategy::from_style_type(style_type);
        let mut list = Self::new(strategy);
        list.lowercase = lowercase;
        list
    }

    /// Builds a list from a stylesheet entry, validating its symbol template.
    pub fn from_style(style: &ListStyle) -> Result<Self, LayoutError> {
        let mut list = match style.glyph {
            Some(glyph) => Self::glyph(glyph)?,
            None => Self::from_style_type(style.list_style_type),
        };
        if let Some(indent) = style.symbol_indent {
            list.symbol_indent = indent;
            list.auto_indent = false;
        }
        if let Some(auto_indent) = style.auto_indent {
            list.auto_indent = auto_indent;
        }
        if let Some(align_indent) = style.align_indent {
            list.align_indent = align_indent;
        }
        if let Some(prefix) = &style.prefix {
            list.prefix = prefix.clone();
        }
        if let Some(suffix) = &style.suffix {
            list.suffix = suffix.clone();
        }
        if let Some(first) = style.first {
            list.first_index = first;
        }
        list.set_symbol_template(style.symbol.clone())?;
        Ok(list)
    }

    // --- Configuration ---

    pub fn strategy(&self) -> LabelStrategy {
        self.strategy
    }

    /// The index the next item would receive if no nested list had been added.
    pub fn first_index(&self) -> i32 {
        self.first_index
    }

    pub fn set_first_index(&mut self, first_index: i32) {
        self.first_index = first_index;
    }

    pub fn symbol_indent(&self) -> f32 {
        self.symbol_indent
    }

    pub fn set_symbol_indent(&mut self, symbol_indent: f32) {
        self.symbol_indent = symbol_indent;
    }

    pub fn auto_indent(&self) -> bool {
        self.auto_indent
    }

    pub fn set_auto_indent(&mut self, auto_indent: bool) {
        self.auto_indent = auto_indent;
    }

    pub fn align_indent(&self) -> bool {
        self.align_indent
    }

    pub fn set_align_indent(&mut self, align_indent: bool) {
        self.align_indent = align_indent;
    }

    pub fn lowercase(&self) -> bool {
        self.lowercase
    }

    pub fn set_lowercase(&mut self, lowercase: bool) {
        self.lowercase = lowercase;
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    pub fn symbol_template(&self) -> &SymbolTemplate {
        &self.symbol
    }

    pub fn set_symbol_template(&mut self, template: SymbolTemplate) -> Result<(), LayoutError> {
        let font = &template.font;
        if font.family.trim().is_empty() {
            return Err(LayoutError::InvalidConfiguration(
                "symbol template needs a font family".to_string(),
            ));
        }
        if !font.size.is_finite() || font.size <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "symbol template font size must be positive, got {}",
                font.size
            )));
        }
        self.symbol = template;
        Ok(())
    }

    /// Changes the glyph of a fixed-glyph list. Items already added keep theirs.
    pub fn set_glyph(&mut self, glyph: char) -> Result<(), LayoutError> {
        if self.strategy.glyph().is_none() {
            return Err(LayoutError::InvalidConfiguration(format!(
                "{:?} lists have no glyph to set",
                self.strategy
            )));
        }
        validate_glyph(glyph)?;
        self.strategy = LabelStrategy::FixedGlyph(glyph);
        Ok(())
    }

    pub fn set_measure(&mut self, measure: Arc<dyn TextMeasure>) {
        self.measure = measure;
    }

    pub fn indentation_left(&self) -> f32 {
        self.indentation_left
    }

    pub fn set_indentation_left(&mut self, indentation: f32) {
        self.indentation_left = indentation;
    }

    pub fn indentation_right(&self) -> f32 {
        self.indentation_right
    }

    pub fn set_indentation_right(&mut self, indentation: f32) {
        self.indentation_right = indentation;
    }

    /// A new, empty list of the same variant and configuration.
    pub fn clone_configuration(&self) -> Self {
        let nested = self.nested_count();
        Self {
            entries: Vec::new(),
            strategy: self.strategy,
            // Undo the compensation applied for this list's own nested entries.
            first_index: self.first_index.saturating_add(nested),
            symbol_indent: self.symbol_indent,
            auto_indent: self.auto_indent,
            align_indent: self.align_indent,
            lowercase: self.lowercase,
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            symbol: self.symbol.clone(),
            indentation_left: self.indentation_left,
            indentation_right: self.indentation_right,
            completed: false,
            measure: Arc::clone(&self.measure),
        }
    }

    // --- Content ---

    /// Adds an item or a nested list.
    ///
    /// Returns `false`, leaving the list untouched, for any other kind of element
    /// or once the list has been completed.
    pub fn add(&mut self, element: impl Into<Element>) -> bool {
        match self.try_add(element.into()) {
            Ok(()) => true,
            Err(LayoutError::UnsupportedElement(kind)) => {
                log::debug!("List ignored a {}", kind);
                false
            }
            Err(e) => {
                log::warn!("List rejected an entry: {}", e);
                false
            }
        }
    }

    /// Shorthand for adding a new item with `text`.
    pub fn add_text(&mut self, text: &str) -> bool {
        self.add(ListItem::new(text))
    }

    pub fn try_add(&mut self, element: Element) -> Result<(), LayoutError> {
        match element {
            Element::Item(item) => {
                self.ensure_open()?;
                self.push_item(item);
                Ok(())
            }
            Element::List(nested) => {
                self.ensure_open()?;
                self.push_nested(nested);
                Ok(())
            }
            other => Err(LayoutError::UnsupportedElement(other.kind())),
        }
    }

    fn ensure_open(&self) -> Result<(), LayoutError> {
        if self.completed {
            return Err(LayoutError::InvalidOperation(
                "the list has already been completed".to_string(),
            ));
        }
        Ok(())
    }

    /// Saturates at `i32::MAX`: past that point consecutive items share a label.
    fn next_label_index(&self) -> i32 {
        let taken = i32::try_from(self.entries.len()).unwrap_or(i32::MAX);
        self.first_index.saturating_add(taken)
    }

    fn push_item(&mut self, mut item: ListItem) {
        let index = self.next_label_index();
        let text = format!(
            "{}{}{}",
            self.prefix,
            self.strategy.label(index, self.lowercase),
            self.suffix
        );
        let width = self.measure.text_width(&text, &self.symbol.font);
        log::debug!("Labelled list item {} as '{}' ({:.2}pt)", index, text, width);

        let label = ListLabel {
            text,
            font: self.symbol.font.clone(),
            decoration: self.symbol.decoration.clone(),
            width,
        };
        item.stamp(label, self.symbol_indent, self.auto_indent);
        self.entries.push(ListEntry::Item(item));
    }

    fn push_nested(&mut self, mut nested: NumberedList) {
        nested.indentation_left += self.symbol_indent;
        self.compensate_for_nested_list();
        self.entries.push(ListEntry::List(nested));
    }

    /// A nested list takes an entry slot but no number, so the cursor steps back
    /// by one to keep `first_index + entries.len()` pointing at the next number.
    fn compensate_for_nested_list(&mut self) {
        self.first_index = self.first_index.saturating_sub(1);
    }

    /// Gives every direct item the largest left indentation among them.
    pub fn normalize_indentation(&mut self) {
        let widest = self
            .items()
            .map(ListItem::indentation_left)
            .fold(0.0_f32, f32::max);
        for entry in &mut self.entries {
            if let ListEntry::Item(item) = entry {
                item.set_indentation_left(widest);
            }
        }
    }

    /// Marks the list as finished, aligning item indentation first when
    /// `align_indent` is set. Later additions are rejected.
    pub fn mark_completed(&mut self) {
        if self.completed {
            return;
        }
        if self.align_indent {
            self.normalize_indentation();
        }
        self.completed = true;
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    // --- Queries ---

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The direct items, skipping nested lists.
    pub fn items(&self) -> impl Iterator<Item = &ListItem> {
        self.entries.iter().filter_map(|entry| match entry {
            ListEntry::Item(item) => Some(item),
            ListEntry::List(_) => None,
        })
    }

    pub fn nested_lists(&self) -> impl Iterator<Item = &NumberedList> {
        self.entries.iter().filter_map(|entry| match entry {
            ListEntry::List(list) => Some(list),
            ListEntry::Item(_) => None,
        })
    }

    pub fn first_item(&self) -> Option<&ListItem> {
        self.items().next()
    }

    pub fn last_item(&self) -> Option<&ListItem> {
        self.items().last()
    }

    fn nested_count(&self) -> i32 {
        i32::try_from(self.nested_lists().count()).unwrap_or(i32::MAX)
    }
}

fn validate_glyph(glyph: char) -> Result<(), LayoutError> {
    if glyph.is_control() {
        return Err(LayoutError::InvalidConfiguration(format!(
            "list glyph must be printable, got U+{:04X}",
            glyph as u32
        )));
    }
    Ok(())
}
