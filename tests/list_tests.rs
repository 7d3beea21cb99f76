mod common;

use common::{TestResult, init_logging, render_list};
use lectern::{Element, ListItem, ListStyleType, NumberedList, TypesetSettings};

#[test]
fn test_recipe_outline() -> TestResult {
    init_logging();

    let settings = TypesetSettings::from_json(
        r#"{
            "listStyles": {
                "steps": { "listStyleType": "decimal", "symbolIndent": 18 },
                "notes": { "listStyleType": "lower-alpha", "prefix": "(", "suffix": ")", "symbolIndent": 12 }
            }
        }"#,
    )?;

    let mut notes = settings.list("notes")?;
    notes.add_text("use unsalted butter");
    notes.add_text("room temperature");

    let mut steps = settings.list("steps")?;
    assert!(steps.add_text("Preheat the oven"));
    assert!(steps.add_text("Cream butter and sugar"));
    assert!(steps.add(notes));
    assert!(steps.add_text("Fold in the flour"));
    steps.mark_completed();

    assert_eq!(
        render_list(&steps),
        vec![
            "1. Preheat the oven",
            "2. Cream butter and sugar",
            "  (a) use unsalted butter",
            "  (b) room temperature",
            "3. Fold in the flour",
        ]
    );

    let nested = steps.nested_lists().next().ok_or("missing nested list")?;
    assert_eq!(nested.indentation_left(), 18.0);
    Ok(())
}

#[test]
fn test_zero_based_list_with_nested_entry() -> TestResult {
    init_logging();

    let mut list = NumberedList::numbered();
    list.set_first_index(0);
    list.add_text("zero");
    list.add_text("one");
    list.add(NumberedList::greek(true));
    list.add_text("two");

    assert_eq!(render_list(&list), vec!["0. zero", "1. one", "2. two"]);
    Ok(())
}

#[test]
fn test_paragraphs_are_not_list_entries() -> TestResult {
    init_logging();

    let mut list = NumberedList::from_style_type(ListStyleType::UpperRoman);
    list.add(ListItem::new("Scope"));
    assert!(!list.add(Element::Paragraph("stray text".to_string())));
    list.add(ListItem::new("Method"));

    assert_eq!(render_list(&list), vec!["I. Scope", "II. Method"]);
    Ok(())
}

#[test]
fn test_checklist_glyph_switch() -> TestResult {
    init_logging();

    let mut list = NumberedList::glyph('☐')?;
    list.add_text("draft");
    list.set_glyph('☑')?;
    list.add_text("review");

    let mut continued = list.clone_configuration();
    continued.add_text("publish");

    assert_eq!(render_list(&list), vec!["☐ draft", "☑ review"]);
    assert_eq!(render_list(&continued), vec!["☑ publish"]);
    Ok(())
}

#[test]
fn test_greek_outline_wraps_after_omega() -> TestResult {
    init_logging();

    let mut list = NumberedList::greek(true);
    list.set_suffix(")");
    for i in 0..25 {
        list.add_text(&format!("point {}", i));
    }
    let lines = render_list(&list);
    assert_eq!(lines[0], "α) point 0");
    assert_eq!(lines[23], "ω) point 23");
    assert_eq!(lines[24], "αα) point 24");
    Ok(())
}
