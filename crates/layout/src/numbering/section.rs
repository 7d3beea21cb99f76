use crate::LayoutError;
use crate::element::Element;
use lectern_style::{FontSpec, NumberStyle};
use lectern_types::TocEntry;

/// The heading of a chapter or section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Title {
    pub text: String,
    pub font: FontSpec,
}

impl Title {
    pub fn new(text: impl Into<String>, font: FontSpec) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
            font: FontSpec::default(),
        }
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Self {
            text,
            font: FontSpec::default(),
        }
    }
}

/// A numbered division of a chapter.
///
/// `numbers` holds one counter per nesting level, outermost first, so a
/// subsection of chapter 3 reads `[3, 1, 2]`.
#[derive(Debug)]
pub struct Section {
    title: Title,
    numbers: Vec<i32>,
    number_depth: usize,
    number_style: NumberStyle,
    indentation: f32,
    bookmark_title: Option<String>,
    subsections: i32,
    sections: Vec<Section>,
    content: Vec<Element>,
    completed: bool,
}

impl Section {
    pub(crate) fn top_level(title: Title, number: i32) -> Self {
        Self {
            title,
            numbers: vec![number],
            number_depth: 1,
            number_style: NumberStyle::default(),
            indentation: 0.0,
            bookmark_title: None,
            subsections: 0,
            sections: Vec::new(),
            content: Vec::new(),
            completed: false,
        }
    }

    /// Adds a subsection titled with plain text.
    pub fn add_section(&mut self, title: &str) -> Result<&mut Section, LayoutError> {
        self.add_rich_section(Title::from(title))
    }

    /// Adds a subsection numbered one level below this one.
    ///
    /// Fails without touching this section once it has been completed.
    pub fn add_rich_section(&mut self, title: Title) -> Result<&mut Section, LayoutError> {
        self.ensure_open()?;

        self.subsections += 1;
        let mut numbers = self.numbers.clone();
        numbers.push(self.subsections);
        log::debug!("Adding section {:?} '{}'", numbers, title.text);

        self.sections.push(Section {
            title,
            numbers,
            number_depth: self.number_depth + 1,
            number_style: self.number_style,
            indentation: 0.0,
            bookmark_title: None,
            subsections: 0,
            sections: Vec::new(),
            content: Vec::new(),
            completed: false,
        });
        let last = self.sections.len() - 1;
        Ok(&mut self.sections[last])
    }

    /// Appends body content. Fails once the section has been completed.
    pub fn add_content(&mut self, element: impl Into<Element>) -> Result<(), LayoutError> {
        self.ensure_open()?;
        self.content.push(element.into());
        Ok(())
    }

    pub fn add_paragraph(&mut self, text: impl Into<String>) -> Result<(), LayoutError> {
        self.add_content(Element::Paragraph(text.into()))
    }

    fn ensure_open(&self) -> Result<(), LayoutError> {
        if self.completed {
            return Err(LayoutError::InvalidOperation(format!(
                "section '{}' has already been completed",
                self.title.text
            )));
        }
        Ok(())
    }

    /// Replaces the outermost number here and in every descendant.
    pub(crate) fn renumber_chapter(&mut self, number: i32) {
        if let Some(first) = self.numbers.first_mut() {
            *first = number;
        }
        for section in &mut self.sections {
            section.renumber_chapter(number);
        }
    }

    /// Completes this section and everything below it.
    pub fn mark_completed(&mut self) {
        self.completed = true;
        for section in &mut self.sections {
            section.mark_completed();
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn numbers(&self) -> &[i32] {
        &self.numbers
    }

    /// 1 for a chapter, 2 for its sections, and so on.
    pub fn depth(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_chapter(&self) -> bool {
        self.depth() == 1
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    /// How many of the innermost numbers are shown in front of the title.
    pub fn number_depth(&self) -> usize {
        self.number_depth
    }

    pub fn set_number_depth(&mut self, number_depth: usize) {
        self.number_depth = number_depth;
    }

    pub fn number_style(&self) -> NumberStyle {
        self.number_style
    }

    pub fn set_number_style(&mut self, number_style: NumberStyle) {
        self.number_style = number_style;
    }

    pub fn indentation(&self) -> f32 {
        self.indentation
    }

    pub fn set_indentation(&mut self, indentation: f32) {
        self.indentation = indentation;
    }

    pub fn set_bookmark_title(&mut self, bookmark_title: impl Into<String>) {
        self.bookmark_title = Some(bookmark_title.into());
    }

    /// The outline text, defaulting to the numbered title.
    pub fn bookmark_title(&self) -> String {
        self.bookmark_title
            .clone()
            .unwrap_or_else(|| self.numbered_title())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }

    pub fn content(&self) -> &[Element] {
        &self.content
    }

    /// The title preceded by its number, e.g. `"2.1. Setup"`.
    pub fn numbered_title(&self) -> String {
        let shown = self.numbers.len().min(self.number_depth);
        if shown == 0 {
            return self.title.text.clone();
        }
        let mut label = self.numbers[self.numbers.len() - shown..]
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(".");
        if self.number_style == NumberStyle::Dotted {
            label.push('.');
        }
        format!("{} {}", label, self.title.text)
    }

    /// Outline entries for this section and its descendants, in document order.
    pub fn toc_entries(&self) -> Vec<TocEntry> {
        let mut entries = Vec::new();
        self.collect_toc(&mut entries);
        entries
    }

    fn collect_toc(&self, entries: &mut Vec<TocEntry>) {
        entries.push(TocEntry {
            level: u8::try_from(self.depth()).unwrap_or(u8::MAX),
            text: self.bookmark_title(),
            numbers: self.numbers.clone(),
        });
        for section in &self.sections {
            section.collect_toc(entries);
        }
    }
}
