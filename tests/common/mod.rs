#![allow(dead_code)]

use lectern::{FontSpec, ListEntry, NumberedList, TabSettings, TextMeasure};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Places tab-separated segments on a line the way a paragraph layouter would,
/// returning the start offset of every segment.
pub fn place_segments(
    settings: &TabSettings,
    segments: &[&str],
    measure: &dyn TextMeasure,
    font: &FontSpec,
) -> Vec<f32> {
    let mut starts = Vec::new();
    let mut x = 0.0_f32;
    for (i, segment) in segments.iter().enumerate() {
        let width = measure.text_width(segment, font);
        if i == 0 {
            starts.push(x);
            x += width;
            continue;
        }
        let tab = settings.next_stop(x);
        let anchor = segment
            .find(tab.anchor())
            .map(|at| x + measure.text_width(&segment[..at], font));
        let start = tab.resolve(x, x + width, anchor);
        starts.push(start);
        x = start + width;
    }
    starts
}

/// Flattens a list into one line per item, indenting nested lists by two spaces.
pub fn render_list(list: &NumberedList) -> Vec<String> {
    let mut lines = Vec::new();
    render_entries(list, 0, &mut lines);
    lines
}

fn render_entries(list: &NumberedList, depth: usize, lines: &mut Vec<String>) {
    for entry in list.entries() {
        match entry {
            ListEntry::Item(item) => lines.push(format!(
                "{}{} {}",
                "  ".repeat(depth),
                item.label_text().unwrap_or_default(),
                item.text()
            )),
            ListEntry::List(nested) => render_entries(nested, depth + 1, lines),
        }
    }
}
