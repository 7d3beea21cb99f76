//! Numbered lists and the strategies that label their items.

mod item;
pub mod markers;
mod numbered;
mod strategy;

pub use item::{ListItem, ListLabel};
pub use numbered::{ListEntry, NumberedList};
pub use strategy::{LabelStrategy, NumeralStyle};
