//! Shared fixtures for the integration suite.

use std::path::{Path, PathBuf};

use folio_config::Settings;
use folio_engine::App;
use folio_types::ui::Section;
use folio_types::{DisplayItem, ItemId, ItemLinks, Rgb};
use ratatui::{Terminal, backend::TestBackend};

pub fn item(id: &str) -> DisplayItem {
    DisplayItem {
        id: ItemId::new(id).expect("non-empty id"),
        title: format!("Item {id}"),
        description: format!("Description of {id}"),
        image_ref: format!("/{id}.png"),
        category: "Web Development".to_string(),
        accent: Rgb::new(0x34, 0xD3, 0x99),
        tech_tags: vec!["Rust".to_string(), "ratatui".to_string()],
        links: ItemLinks {
            primary: format!("https://github.com/example/{id}"),
            secondary: format!("https://{id}.example.app/"),
        },
    }
}

/// Built-in settings with the carousel replaced by `ids`.
pub fn settings(ids: &[&str], start: Section) -> Settings {
    let mut settings = Settings::builtin().expect("built-in showcase");
    settings.items = ids.iter().copied().map(item).collect();
    settings.start_section = start;
    settings
}

pub fn app(ids: &[&str], start: Section) -> App {
    App::new(settings(ids, start)).expect("app")
}

/// Draw one frame and return the screen as rows of text.
pub fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) -> Vec<String> {
    terminal
        .draw(|frame| folio_tui::draw(frame, app))
        .expect("draw");
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect())
        .collect()
}

pub fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).expect("terminal")
}

/// Column and row of the first occurrence of `needle`.
pub fn find(rows: &[String], needle: &str) -> Option<(u16, u16)> {
    rows.iter().enumerate().find_map(|(y, row)| {
        row.find(needle)
            .map(|byte| (row[..byte].chars().count() as u16, y as u16))
    })
}

pub fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, body).expect("write config");
    path
}

/// Screen text inside the one-cell margin, trailing blanks trimmed.
pub fn inner_text(rows: &[String]) -> String {
    rows[1..rows.len() - 1]
        .iter()
        .map(|row| row.chars().skip(1).collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
