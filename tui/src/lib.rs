//! TUI rendering for Folio using ratatui.

mod effects;
mod input;
mod stack;
mod theme;
mod work;

pub use effects::apply_slide_pose;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use folio_engine::App;
use folio_types::ui::{Region, Section};

const MIN_WIDTH: u16 = 24;
const MIN_HEIGHT: u16 = 6;

/// Main draw function.
///
/// Also reports back to the mounted section what it needs from layout:
/// strip widths for the marquees, clickable regions for the carousel.
/// Regions from the previous frame are dropped first, so pointer input only
/// reaches what this frame draws.
pub fn draw(frame: &mut Frame, app: &mut App) {
    app.clear_hit_regions();
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let area = frame.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        draw_too_small(frame, area, &palette);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Min(1),    // Section
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_tabs(frame, app.section(), chunks[0], &palette, &glyphs);
    match app.section() {
        Section::Work => {
            if let Some(work) = app.work_mut() {
                work::draw(frame, work, chunks[1], &palette, &glyphs);
            }
        }
        Section::Stack => {
            if let Some(stack) = app.stack_mut() {
                stack::draw(frame, stack, chunks[1], &palette);
            }
        }
    }
    draw_status_bar(frame, app, chunks[2], &palette, &glyphs);
}

pub(crate) fn region_of(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}

fn draw_too_small(frame: &mut Frame, area: Rect, palette: &Palette) {
    let message = Paragraph::new("Terminal too small")
        .style(Style::default().fg(palette.text_muted))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}

fn draw_tabs(frame: &mut Frame, current: Section, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans = vec![
        Span::styled(
            " folio ",
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", glyphs.separator), styles::key_hint(palette)),
    ];
    for section in [Section::Work, Section::Stack] {
        let style = if section == current {
            styles::tab_active(palette)
        } else {
            styles::tab_inactive(palette)
        };
        spans.push(Span::styled(format!(" {} ", section.title()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let mut spans = vec![Span::raw(" ")];
    let hints: [(&str, &str); 4] = match app.section() {
        Section::Work => {
            if let Some(work) = app.work() {
                let carousel = work.carousel();
                spans.push(Span::styled(
                    format!(
                        "{} {}/{} {}",
                        glyphs.selected,
                        carousel.index() + 1,
                        carousel.item_count(),
                        carousel.active().short_title()
                    ),
                    Style::default().fg(palette.item_accent(carousel.active().accent)),
                ));
            }
            [
                (glyphs.arrows, "navigate"),
                ("click", "select"),
                ("Tab", "stack"),
                ("q", "quit"),
            ]
        }
        Section::Stack => {
            let paused = app.stack().is_some_and(folio_engine::StackSection::is_manually_paused);
            let (glyph, label) = if paused {
                (glyphs.paused, "paused")
            } else {
                (glyphs.running, "scrolling")
            };
            spans.push(Span::styled(
                format!("{glyph} {label}"),
                Style::default().fg(palette.text_secondary),
            ));
            [("p", "pause"), ("hover", "hold"), ("Tab", "work"), ("q", "quit")]
        }
    };

    for (key, action) in hints {
        spans.push(Span::styled(
            format!(" {} ", glyphs.separator),
            styles::key_hint(palette),
        ));
        spans.push(Span::styled(key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action}"), styles::key_hint(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
