//! Whole-frame snapshots of small, fully controlled screens.

use std::time::Duration;

use folio_config::StripSpec;
use folio_types::ScrollDirection;
use folio_types::ui::Section;
use insta::assert_snapshot;

use crate::common::{app, inner_text, render, settings, terminal};

fn strip(units: &[&str], speed: f64, direction: ScrollDirection, gap: usize) -> StripSpec {
    StripSpec {
        units: units.iter().map(ToString::to_string).collect(),
        speed,
        direction,
        repeat: 1,
        gap,
    }
}

#[test]
fn stack_frame_before_and_after_scrolling() {
    let mut settings = settings(&["A"], Section::Stack);
    settings.ui.ascii_only = true;
    settings.strips = vec![
        strip(&["Tokio", "Serde"], 8.0, ScrollDirection::Left, 2),
        strip(&["axum"], 4.0, ScrollDirection::Right, 3),
    ];
    let mut app = folio_engine::App::new(settings).expect("app");
    let mut term = terminal(30, 10);

    let rows = render(&mut term, &mut app);
    assert_snapshot!(inner_text(&rows), @r"
 folio |  WORK   STACK

Tokio  Serde  Tokio  Serde


axum   axum   axum   axum

 > scrolling | p pause | hov
");

    app.advance(Duration::from_millis(500));
    let rows = render(&mut term, &mut app);
    assert_snapshot!(inner_text(&rows), @r"
 folio |  WORK   STACK

o  Serde  Tokio  Serde  Toki


  axum   axum   axum   axum

 > scrolling | p pause | hov
");
}

#[test]
fn too_small_frame_shows_only_the_notice() {
    let mut app = app(&["A", "B"], Section::Work);
    let mut term = terminal(10, 3);
    let rows = render(&mut term, &mut app);
    let text = rows
        .iter()
        .map(|row| row.trim_end())
        .collect::<Vec<_>>()
        .join("\n");
    assert_snapshot!(text.trim_end(), @r"
 Terminal
too small
");
}
