//! Carousel navigation end to end: state machine, keys, pointer, views.

use folio_engine::Key;
use folio_types::ui::Section;
use folio_types::{Carousel, JumpOutcome, NavDirection, SameSlotPolicy};

use crate::common::{app, find, item, render, settings, terminal};

fn carousel(ids: &[&str]) -> Carousel {
    Carousel::new(ids.iter().copied().map(item).collect()).expect("valid carousel")
}

#[test]
fn four_item_walkthrough() {
    let mut c = carousel(&["A", "B", "C", "D"]);
    let mut steps: Vec<(usize, NavDirection)> = Vec::new();
    c.next();
    steps.push((c.index(), c.direction()));
    c.next();
    steps.push((c.index(), c.direction()));
    c.previous();
    steps.push((c.index(), c.direction()));
    assert_eq!(c.jump_to(3), JumpOutcome::Moved);
    steps.push((c.index(), c.direction()));
    c.next();
    steps.push((c.index(), c.direction()));

    assert_eq!(
        steps,
        [
            (1, NavDirection::Forward),
            (2, NavDirection::Forward),
            (1, NavDirection::Backward),
            (3, NavDirection::Forward),
            (0, NavDirection::Forward),
        ]
    );
}

#[test]
fn n_moves_in_either_direction_return_home() {
    for n in 1..=6 {
        let ids: Vec<String> = (0..n).map(|i| format!("item-{i}")).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut c = carousel(&refs);
        c.jump_to(n / 2);
        let start = c.index();
        for _ in 0..n {
            c.next();
        }
        assert_eq!(c.index(), start);
        for _ in 0..n {
            c.previous();
        }
        assert_eq!(c.index(), start);
    }
}

#[test]
fn out_of_range_jumps_change_nothing() {
    let mut c = carousel(&["A", "B", "C"]);
    c.next();
    let revision = c.revision();
    assert_eq!(c.jump_to(3), JumpOutcome::Rejected);
    assert_eq!(c.jump_to(usize::MAX), JumpOutcome::Rejected);
    assert_eq!(c.index(), 1);
    assert_eq!(c.direction(), NavDirection::Forward);
    assert_eq!(c.revision(), revision);
}

#[test]
fn same_slot_policy_controls_direction() {
    let mut keep = carousel(&["A", "B", "C"]);
    keep.next();
    assert_eq!(keep.jump_to(1), JumpOutcome::Unchanged);
    assert_eq!(keep.direction(), NavDirection::Forward);

    let mut backward = carousel(&["A", "B", "C"]).with_same_slot_policy(SameSlotPolicy::Backward);
    backward.next();
    assert_eq!(backward.jump_to(1), JumpOutcome::Unchanged);
    assert_eq!(backward.index(), 1);
    assert_eq!(backward.direction(), NavDirection::Backward);
}

#[test]
fn views_stay_in_sync_with_selection() {
    let mut c = carousel(&["A", "B", "C", "D"]);
    for target in [2, 0, 3, 1] {
        c.jump_to(target);
        let stage = c.stage_view();
        let dots = c.dots_view();
        let list = c.list_view();
        assert_eq!(stage.index, target);
        assert_eq!(stage.item.id, c.items()[target].id);
        assert!(dots[target].active);
        assert_eq!(dots.iter().filter(|d| d.active).count(), 1);
        assert!(list[target].active);
        assert!(
            list.iter()
                .filter(|e| !e.active)
                .all(|e| e.prominence.opacity < list[target].prominence.opacity)
        );
    }
}

#[test]
fn arrow_keys_and_clicks_share_one_state() {
    let mut app = app(&["A", "B", "C", "D"], Section::Work);
    let mut term = terminal(110, 32);
    render(&mut term, &mut app);

    app.handle_key(Key::Left);
    assert_eq!(app.work().expect("mounted").carousel().index(), 3);

    let rows = render(&mut term, &mut app);
    let (x, y) = find(&rows, "Item B").expect("list entry");
    app.pointer_clicked(x, y);
    let carousel = app.work().expect("mounted").carousel();
    assert_eq!(carousel.index(), 1);
    assert_eq!(carousel.direction(), NavDirection::Backward);

    app.handle_key(Key::Right);
    assert_eq!(app.work().expect("mounted").carousel().index(), 2);
}

#[test]
fn backward_same_slot_policy_flows_from_settings() {
    let mut settings = settings(&["A", "B"], Section::Work);
    settings.same_slot = SameSlotPolicy::Backward;
    let mut app = folio_engine::App::new(settings).expect("app");
    let work = app.work_mut().expect("mounted");
    work.next();
    assert_eq!(work.jump_to(1), JumpOutcome::Unchanged);
    assert_eq!(work.carousel().direction(), NavDirection::Backward);
}

#[test]
fn single_item_carousel_is_stable() {
    let mut c = carousel(&["solo"]);
    c.next();
    assert_eq!(c.index(), 0);
    c.previous();
    assert_eq!(c.index(), 0);
    assert_eq!(c.stage_view().accents.primary, c.stage_view().accents.secondary);
}

#[test]
fn empty_carousel_refuses_to_start() {
    assert!(Carousel::new(Vec::new()).is_err());
    let mut settings = settings(&["A"], Section::Work);
    settings.items.clear();
    assert!(folio_engine::App::new(settings).is_err());
}
