//! Mounting and unmounting sections.

use std::time::Duration;

use folio_engine::{BindingOwner, Key};
use folio_types::ui::Section;

use crate::common::{app, find, render, terminal};

fn carousel_bindings(app: &folio_engine::App) -> usize {
    app.keymap()
        .count_where(|owner| matches!(owner, BindingOwner::Carousel(_)))
}

#[test]
fn one_arrow_press_moves_one_slot_after_many_remounts() {
    let mut app = app(&["A", "B", "C", "D"], Section::Work);
    for _ in 0..10 {
        app.handle_key(Key::Tab);
        app.handle_key(Key::Tab);
    }
    assert_eq!(carousel_bindings(&app), 2);
    app.handle_key(Key::Right);
    assert_eq!(app.work().expect("mounted").carousel().index(), 1);
}

#[test]
fn only_the_visible_section_exists() {
    let mut app = app(&["A", "B"], Section::Work);
    assert!(app.work().is_some());
    assert!(app.stack().is_none());

    app.handle_key(Key::Tab);
    assert!(app.work().is_none());
    assert!(app.stack().is_some());
    assert_eq!(carousel_bindings(&app), 0);
}

#[test]
fn remounted_stack_restarts_unmeasured() {
    let mut app = app(&["A"], Section::Stack);
    let mut term = terminal(80, 16);
    render(&mut term, &mut app);
    app.advance(Duration::from_millis(300));
    assert_ne!(
        app.stack().expect("mounted").strips()[0].marquee().offset(),
        0.0
    );

    app.handle_key(Key::Tab);
    app.advance(Duration::from_secs(5));
    app.handle_key(Key::Tab);

    let stack = app.stack().expect("remounted");
    for strip in stack.strips() {
        assert_eq!(strip.marquee().offset(), 0.0);
        assert!(strip.marquee().state().content_width.is_none());
    }
    // Not measured yet, so no motion until the next render
    app.advance(Duration::from_millis(300));
    assert_eq!(
        app.stack().expect("mounted").strips()[0].marquee().offset(),
        0.0
    );
}

#[test]
fn remounted_carousel_starts_at_first_item() {
    let mut app = app(&["A", "B", "C"], Section::Work);
    let mut term = terminal(110, 32);
    app.handle_key(Key::Right);
    app.handle_key(Key::Right);
    app.handle_key(Key::Tab);
    let rows = render(&mut term, &mut app);
    assert!(find(&rows, "STACK").is_some());

    app.handle_key(Key::Tab);
    let rows = render(&mut term, &mut app);
    assert!(find(&rows, "1/3 Item").is_some());
}

#[test]
fn quit_is_global() {
    for start in [Section::Work, Section::Stack] {
        let mut app = app(&["A"], start);
        app.handle_key(Key::Char('q'));
        assert!(app.should_quit());
    }
}
