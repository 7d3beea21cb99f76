//! The content elements numbering containers accept.

use crate::lists::{ListItem, NumberedList};

/// A piece of document content handed to a list or a section.
///
/// Lists only take [`Element::Item`] and [`Element::List`]; sections take anything.
#[derive(Debug)]
pub enum Element {
    Item(ListItem),
    List(NumberedList),
    Paragraph(String),
}

impl Element {
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Item(_) => "list item",
            Element::List(_) => "list",
            Element::Paragraph(_) => "paragraph",
        }
    }
}

impl From<ListItem> for Element {
    fn from(item: ListItem) -> Self {
        Element::Item(item)
    }
}

impl From<NumberedList> for Element {
    fn from(list: NumberedList) -> Self {
        Element::List(list)
    }
}
