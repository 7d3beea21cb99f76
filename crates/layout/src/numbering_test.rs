use crate::lists::NumberedList;
use crate::numbering::{Chapter, ChapterCounter, NumberState, Title};
use crate::{LayoutError, NumberStyle};
use lectern_style::FontSpec;

#[test]
fn test_automatic_number_is_assigned_once() {
    let mut chapter = Chapter::auto("Overview");
    assert_eq!(chapter.number_state(), NumberState::Unassigned);
    assert_eq!(chapter.number(), None);

    assert_eq!(chapter.assign_automatic_number(5), 6);
    assert_eq!(chapter.assign_automatic_number(5), 5);
    assert_eq!(chapter.number(), Some(6));
    assert_eq!(chapter.numbers(), &[6]);
}

#[test]
fn test_explicit_number_is_never_reassigned() {
    let mut chapter = Chapter::new("Preface", 3);
    assert_eq!(chapter.number_state(), NumberState::Assigned(3));
    assert_eq!(chapter.assign_automatic_number(10), 10);
    assert_eq!(chapter.numbers(), &[3]);
}

#[test]
fn test_sections_are_numbered_in_order() {
    let mut chapter = Chapter::new("Intro", 1);
    assert_eq!(chapter.add_section("A").unwrap().numbers(), &[1, 1]);
    let b = chapter.add_section("B").unwrap();
    assert_eq!(b.numbers(), &[1, 2]);
    assert_eq!(b.add_section("B.1").unwrap().numbers(), &[1, 2, 1]);
    assert_eq!(b.add_section("B.2").unwrap().numbers(), &[1, 2, 2]);

    let sections = chapter.section().sections();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[1].sections()[1].depth(), 3);
}

#[test]
fn test_rich_section_keeps_title_font() {
    let mut chapter = Chapter::new("Fonts", 2);
    let title = Title::new("Heavy", FontSpec::new("Times", 18.0));
    let section = chapter.add_rich_section(title.clone()).unwrap();
    assert_eq!(section.title(), &title);
    assert_eq!(section.numbers(), &[2, 1]);
}

#[test]
fn test_late_chapter_number_reaches_descendants() {
    let mut chapter = Chapter::auto("Drafted");
    chapter
        .add_section("First")
        .unwrap()
        .add_section("Nested")
        .unwrap();
    chapter.add_section("Second").unwrap();
    assert_eq!(chapter.section().sections()[0].numbers(), &[0, 1]);

    assert_eq!(chapter.assign_automatic_number(2), 3);

    let sections = chapter.section().sections();
    assert_eq!(sections[0].numbers(), &[3, 1]);
    assert_eq!(sections[0].sections()[0].numbers(), &[3, 1, 1]);
    assert_eq!(sections[1].numbers(), &[3, 2]);
    assert_eq!(chapter.add_section("Third").unwrap().numbers(), &[3, 3]);
}

#[test]
fn test_completed_chapter_rejects_sections() {
    let mut chapter = Chapter::new("Done", 4);
    chapter.add_section("Only").unwrap();
    chapter.mark_completed();

    let err = chapter.add_section("Late").unwrap_err();
    assert!(matches!(err, LayoutError::InvalidOperation(_)));
    assert!(
        chapter
            .add_rich_section(Title::from("Late rich"))
            .is_err()
    );

    assert_eq!(chapter.numbers(), &[4]);
    assert_eq!(chapter.section().sections().len(), 1);
    assert!(chapter.section().sections()[0].is_completed());
}

#[test]
fn test_failed_add_leaves_counters_alone() {
    let mut chapter = Chapter::new("Parent", 1);
    let child = chapter.add_section("Child").unwrap();
    child.mark_completed();
    assert!(child.add_section("Grandchild").is_err());
    assert!(child.sections().is_empty());

    // The open parent keeps counting from where it was.
    assert_eq!(chapter.add_section("Sibling").unwrap().numbers(), &[1, 2]);
}

#[test]
fn test_completed_section_rejects_content() {
    let mut chapter = Chapter::new("Body", 1);
    chapter.add_content(NumberedList::numbered()).unwrap();
    chapter
        .section_mut()
        .add_paragraph("Some text.")
        .unwrap();
    chapter.mark_completed();

    assert!(matches!(
        chapter.add_content(NumberedList::numbered()),
        Err(LayoutError::InvalidOperation(_))
    ));
    assert_eq!(chapter.section().content().len(), 2);
    assert!(chapter.is_completed());
}

#[test]
fn test_numbered_titles() {
    let mut chapter = Chapter::new("Intro", 1);
    assert_eq!(chapter.numbered_title(), "1. Intro");

    chapter.add_section("Skip").unwrap();
    let section = chapter.add_section("Setup").unwrap();
    assert_eq!(section.numbered_title(), "1.2. Setup");

    let nested = section.add_section("Details").unwrap();
    assert_eq!(nested.number_depth(), 3);
    assert_eq!(nested.numbered_title(), "1.2.1. Details");

    nested.set_number_depth(2);
    assert_eq!(nested.numbered_title(), "2.1. Details");
    nested.set_number_depth(0);
    assert_eq!(nested.numbered_title(), "Details");
}

#[test]
fn test_number_style_without_final_dot_is_inherited() {
    let mut chapter = Chapter::new("Intro", 1);
    chapter
        .section_mut()
        .set_number_style(NumberStyle::DottedWithoutFinalDot);
    assert_eq!(chapter.numbered_title(), "1 Intro");

    let section = chapter.add_section("Setup").unwrap();
    assert_eq!(section.number_style(), NumberStyle::DottedWithoutFinalDot);
    assert_eq!(section.numbered_title(), "1.1 Setup");
}

#[test]
fn test_toc_entries_follow_document_order() {
    let mut chapter = Chapter::new("Guide", 2);
    {
        let first = chapter.add_section("Install").unwrap();
        first.add_section("Linux").unwrap();
        first.set_bookmark_title("Installing");
    }
    chapter.add_section("Usage").unwrap();

    let toc = chapter.toc_entries();
    let texts: Vec<&str> = toc.iter().map(|entry| entry.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["2. Guide", "Installing", "2.1.1. Linux", "2.2. Usage"]
    );
    let levels: Vec<u8> = toc.iter().map(|entry| entry.level).collect();
    assert_eq!(levels, vec![1, 2, 3, 2]);
    assert_eq!(toc[2].numbers, vec![2, 1, 1]);
}

#[test]
fn test_chapter_counter_numbers_automatic_chapters() {
    let mut counter = ChapterCounter::new();
    let mut first = Chapter::auto("One");
    let mut fixed = Chapter::new("Appendix", 99);
    let mut second = Chapter::auto("Two");

    assert_eq!(counter.number(&mut first), 1);
    assert_eq!(counter.number(&mut fixed), 1);
    assert_eq!(counter.number(&mut second), 2);
    // Numbering again is a no-op.
    assert_eq!(counter.number(&mut first), 2);
    assert_eq!(first.number(), Some(1));
    assert_eq!(counter.last(), 2);

    let mut resumed = ChapterCounter::starting_after(7);
    let mut next = Chapter::auto("Eight");
    assert_eq!(resumed.number(&mut next), 8);
    assert_eq!(next.numbered_title(), "8. Eight");
}
