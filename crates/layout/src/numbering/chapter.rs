use super::section::{Section, Title};
use crate::LayoutError;
use crate::element::Element;
use lectern_types::TocEntry;

/// Whether a chapter has received its number yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberState {
    Unassigned,
    Assigned(i32),
}

/// A top-level section, numbered either explicitly or on first use.
#[derive(Debug)]
pub struct Chapter {
    section: Section,
    state: NumberState,
}

impl Chapter {
    /// A chapter with a fixed number.
    pub fn new(title: impl Into<Title>, number: i32) -> Self {
        Self {
            section: Section::top_level(title.into(), number),
            state: NumberState::Assigned(number),
        }
    }

    /// A chapter numbered by [`Chapter::assign_automatic_number`].
    pub fn auto(title: impl Into<Title>) -> Self {
        Self {
            section: Section::top_level(title.into(), 0),
            state: NumberState::Unassigned,
        }
    }

    pub fn number_state(&self) -> NumberState {
        self.state
    }

    pub fn number(&self) -> Option<i32> {
        match self.state {
            NumberState::Assigned(number) => Some(number),
            NumberState::Unassigned => None,
        }
    }

    /// Numbers the chapter `candidate + 1` and returns that number, the first time
    /// only. Afterwards the call changes nothing and hands `candidate` back, so a
    /// running counter passed through it is never advanced twice.
    pub fn assign_automatic_number(&mut self, candidate: i32) -> i32 {
        match self.state {
            NumberState::Assigned(_) => candidate,
            NumberState::Unassigned => {
                let number = candidate.saturating_add(1);
                self.section.renumber_chapter(number);
                self.state = NumberState::Assigned(number);
                log::debug!("Chapter '{}' numbered {}", self.section.title().text, number);
                number
            }
        }
    }

    pub fn add_section(&mut self, title: &str) -> Result<&mut Section, LayoutError> {
        self.section.add_section(title)
    }

    pub fn add_rich_section(&mut self, title: Title) -> Result<&mut Section, LayoutError> {
        self.section.add_rich_section(title)
    }

    pub fn add_content(&mut self, element: impl Into<Element>) -> Result<(), LayoutError> {
        self.section.add_content(element)
    }

    pub fn numbers(&self) -> &[i32] {
        self.section.numbers()
    }

    pub fn mark_completed(&mut self) {
        self.section.mark_completed();
    }

    pub fn is_completed(&self) -> bool {
        self.section.is_completed()
    }

    pub fn numbered_title(&self) -> String {
        self.section.numbered_title()
    }

    pub fn toc_entries(&self) -> Vec<TocEntry> {
        self.section.toc_entries()
    }

    pub fn section(&self) -> &Section {
        &self.section
    }

    pub fn section_mut(&mut self) -> &mut Section {
        &mut self.section
    }
}

/// The running chapter number of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChapterCounter {
    last: i32,
}

impl ChapterCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continues numbering after `last`.
    pub fn starting_after(last: i32) -> Self {
        Self { last }
    }

    /// Numbers `chapter` if it still needs a number and returns the counter value.
    pub fn number(&mut self, chapter: &mut Chapter) -> i32 {
        self.last = chapter.assign_automatic_number(self.last);
        self.last
    }

    pub fn last(&self) -> i32 {
        self.last
    }
}
