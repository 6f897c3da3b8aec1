//! User configuration flowing into a running app.

use std::time::Duration;

use folio_config::{ConfigError, FolioConfig};
use folio_engine::{App, Key};
use folio_types::ScrollDirection;
use folio_types::ui::Section;

use crate::common::{find, render, terminal, write_config};

const USER_CONFIG: &str = r##"
[ui]
ascii_only = true
start_section = "stack"

[carousel]
transition_ms = 0

[stack]
reversed = true

[[marquee]]
units = ["Tokio", "Serde"]
speed = 12.0
direction = "left"
repeat = 1
gap = 2

[[items]]
id = "alpha"
title = "Alpha Service"
description = "First custom project."
image = "/alpha.png"
category = "Systems"
color = "#112233"
tech = ["Rust"]
primary = "https://example.com/alpha"
secondary = "https://alpha.example.com"

[[items]]
id = "beta"
title = "Beta Tool"
description = "Second custom project."
image = "/beta.png"
category = "CLI"
color = "#445566"
primary = "https://example.com/beta"
secondary = "https://beta.example.com"
"##;

#[test]
fn user_file_drives_sections() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(dir.path(), USER_CONFIG);
    let settings = FolioConfig::load_from(&path)
        .expect("loads")
        .resolve()
        .expect("resolves");
    assert_eq!(settings.strips[0].direction, ScrollDirection::Right);
    assert!(settings.items[1].tech_tags.is_empty());

    let mut app = App::new(settings).expect("app");
    assert_eq!(app.section(), Section::Stack);

    let mut term = terminal(60, 16);
    let rows = render(&mut term, &mut app);
    assert!(find(&rows, "Tokio").is_some());
    assert!(find(&rows, "TECH STACK").is_none());

    // "Tokio" + 2 + "Serde" + 2
    let strip = &app.stack().expect("mounted").strips()[0];
    assert_eq!(strip.layout().width(), 14);
    assert_eq!(strip.marquee().state().content_width, Some(14.0));

    app.advance(Duration::from_millis(500));
    let offset = app.stack().expect("mounted").strips()[0].marquee().offset();
    assert!((-14.0..0.0).contains(&offset), "{offset}");

    app.handle_key(Key::Tab);
    let rows = render(&mut term, &mut app);
    assert!(find(&rows, "Alpha Service").is_some());
    assert!(find(&rows, "1/2 Alpha").is_some());
}

#[test]
fn zero_transition_snaps_the_stage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(dir.path(), USER_CONFIG);
    let settings = FolioConfig::load_from(&path)
        .expect("loads")
        .resolve()
        .expect("resolves");
    let mut app = App::new(settings).expect("app");
    app.switch_section();
    app.handle_key(Key::Right);
    let work = app.work().expect("mounted");
    assert_eq!(work.carousel().index(), 1);
    assert!(work.effect().is_none());
}

#[test]
fn invalid_user_file_reports_its_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(dir.path(), "[ui\nascii_only = true\n");
    let err = FolioConfig::load_from(&path).expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), Some(path.as_path()));
    assert!(err.to_string().contains("config.toml"));
}
