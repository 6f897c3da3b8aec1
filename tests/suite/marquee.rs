//! Marquee timing properties and the stack section around it.

use std::time::Duration;

use folio_engine::Key;
use folio_types::ui::Section;
use folio_types::{Marquee, MarqueeContent, ScrollDirection};

use crate::common::{app, find, render, terminal};

fn marquee(speed: f64, direction: ScrollDirection, width: f64) -> Marquee {
    let content = ["React", "Rust", "Tokio"]
        .into_iter()
        .map(MarqueeContent::new)
        .collect();
    let mut marquee = Marquee::configure(speed, direction, content).expect("valid marquee");
    marquee.measure(width * 2.0);
    marquee
}

fn phase(offset: f64, width: f64) -> f64 {
    offset.rem_euclid(width)
}

#[test]
fn single_large_tick_wraps_to_zero() {
    let mut m = marquee(50.0, ScrollDirection::Left, 200.0);
    m.tick(4.0);
    assert_eq!(m.offset(), 0.0);
}

#[test]
fn wrapped_offset_matches_unbounded_motion() {
    for direction in [ScrollDirection::Left, ScrollDirection::Right] {
        let mut m = marquee(37.0, direction, 120.0);
        let mut unbounded = 0.0_f64;
        for _ in 0..500 {
            m.tick(0.05);
            unbounded += 37.0 * 0.05 * direction.sign();
            let offset = m.offset();
            assert!((-120.0..=0.0).contains(&offset), "{offset} out of range");
            let diff = (phase(offset, 120.0) - phase(unbounded, 120.0)).abs();
            assert!(diff < 1e-6 || (120.0 - diff) < 1e-6, "{offset} vs {unbounded}");
        }
    }
}

#[test]
fn halving_the_frame_rate_keeps_the_speed() {
    let mut fast = marquee(45.0, ScrollDirection::Left, 300.0);
    let mut slow = marquee(45.0, ScrollDirection::Left, 300.0);
    for _ in 0..240 {
        fast.tick(1.0 / 120.0);
    }
    for _ in 0..120 {
        slow.tick(1.0 / 60.0);
    }
    let diff = (phase(fast.offset(), 300.0) - phase(slow.offset(), 300.0)).abs();
    assert!(diff < 1e-6 || (300.0 - diff) < 1e-6);
}

#[test]
fn pause_freezes_and_resume_continues() {
    let mut m = marquee(20.0, ScrollDirection::Left, 500.0);
    m.tick(1.0);
    m.set_paused(true);
    for _ in 0..50 {
        m.tick(0.3);
    }
    assert_eq!(m.offset(), -20.0);
    m.set_paused(false);
    m.tick(0.5);
    assert_eq!(m.offset(), -30.0);
}

#[test]
fn direction_change_keeps_offset() {
    let mut m = marquee(10.0, ScrollDirection::Left, 500.0);
    m.tick(2.0);
    m.set_direction(ScrollDirection::Right);
    assert_eq!(m.offset(), -20.0);
    m.tick(1.0);
    assert_eq!(m.offset(), -10.0);
}

#[test]
fn zero_speed_and_unmeasured_strips_hold_still() {
    let content = vec![MarqueeContent::new("Rust")];
    let mut unmeasured =
        Marquee::configure(30.0, ScrollDirection::Left, content.clone()).expect("valid");
    unmeasured.tick(5.0);
    assert_eq!(unmeasured.offset(), 0.0);

    let mut still = Marquee::configure(0.0, ScrollDirection::Left, content).expect("valid");
    still.measure(40.0);
    still.tick(5.0);
    assert_eq!(still.offset(), 0.0);
}

#[test]
fn pause_key_holds_every_rendered_strip() {
    let mut app = app(&["A"], Section::Stack);
    let mut term = terminal(80, 16);
    // Everything above the status bar
    let strips = |rows: Vec<String>| rows[..14].to_vec();
    let before = strips(render(&mut term, &mut app));

    app.handle_key(Key::Char('p'));
    app.advance(Duration::from_secs(2));
    let held = strips(render(&mut term, &mut app));
    assert_eq!(before, held);

    app.handle_key(Key::Char('p'));
    app.advance(Duration::from_millis(250));
    let moving = strips(render(&mut term, &mut app));
    assert_ne!(held, moving);
}

#[test]
fn hovering_a_label_pauses_its_strip_until_pointer_leaves() {
    let mut app = app(&["A"], Section::Stack);
    let mut term = terminal(200, 16);
    let rows = render(&mut term, &mut app);
    let (x, y) = find(&rows, "Rust").expect("tech strip");
    app.pointer_moved(x, y);

    let stack = app.stack().expect("mounted");
    let strip = stack
        .strips()
        .iter()
        .find(|s| s.hovered_label().is_some())
        .expect("one strip hovered");
    assert_eq!(strip.hovered_label(), Some("Rust"));
    assert!(strip.marquee().is_paused());

    app.pointer_left();
    let stack = app.stack().expect("mounted");
    assert!(stack.strips().iter().all(|s| !s.marquee().is_paused()));
}
