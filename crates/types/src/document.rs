/// An entry in the table of contents, produced from numbered sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TocEntry {
    /// Nesting level (1 = chapter, 2 = section, etc.)
    pub level: u8,
    /// The rendered heading text, including its number label.
    pub text: String,
    /// The numbers identifying the heading, outermost first.
    pub numbers: Vec<i32>,
}
