//! Featured-work section: project list, stage, and navigation row.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use folio_engine::{WorkHitMap, WorkSection, WorkTarget};
use folio_types::ui::SlidePose;
use folio_types::{AccentPair, DisplayItem, ListEntry};

use crate::effects::apply_slide_pose;
use crate::region_of;
use crate::theme::{Glyphs, Palette};

const SIDEBAR_MAX_WIDTH: u16 = 30;
/// Rows per list entry: title, category, spacer.
const ENTRY_HEIGHT: u16 = 3;

pub(crate) fn draw(
    frame: &mut Frame,
    work: &mut WorkSection,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let hits = render(frame, work, area, palette, glyphs);
    work.record_hits(hits);
}

fn render(
    frame: &mut Frame,
    work: &WorkSection,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) -> WorkHitMap {
    let mut hits = WorkHitMap::default();
    let sidebar_width = SIDEBAR_MAX_WIDTH.min(area.width / 3);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(1)])
        .split(area);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(columns[1]);

    draw_list(frame, &work.carousel().list_view(), columns[0], palette, glyphs, &mut hits);
    draw_stage(frame, work, right[0], palette, glyphs);
    draw_nav(frame, work, right[1], palette, glyphs, &mut hits);
    hits
}

fn draw_list(
    frame: &mut Frame,
    entries: &[ListEntry<'_>],
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut WorkHitMap,
) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::vertical(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for entry in entries {
        let top = inner
            .y
            .saturating_add((entry.position as u16).saturating_mul(ENTRY_HEIGHT));
        if u32::from(top) + 2 > u32::from(inner.y) + u32::from(inner.height) {
            break;
        }
        let rect = Rect {
            x: inner.x,
            y: top,
            width: inner.width,
            height: 2,
        };
        hits.targets
            .push((region_of(rect), WorkTarget::ListEntry(entry.position)));

        let prominence = entry.prominence;
        let indent = (2.0 + prominence.shift_x / 10.0).max(0.0) as usize;
        let marker = if entry.active { glyphs.selected } else { " " };
        let base = if entry.active || entry.hovered {
            palette.item_accent(entry.item.accent)
        } else {
            palette.text_primary
        };
        let mut title_style = Style::default().fg(palette.fade(base, prominence.opacity));
        if prominence.scale > 1.0 {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        let lines = vec![
            Line::from(vec![
                Span::raw(" ".repeat(indent)),
                Span::styled(format!("{marker} "), title_style),
                Span::styled(entry.item.title.clone(), title_style),
            ]),
            Line::from(Span::styled(
                format!("{}  {}", " ".repeat(indent), entry.item.category),
                Style::default().fg(palette.fade(palette.text_muted, prominence.opacity)),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), rect);
    }
}

fn draw_stage(
    frame: &mut Frame,
    work: &WorkSection,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let carousel = work.carousel();
    let stage = carousel.stage_view();
    let counter = (stage.index + 1, carousel.item_count());

    let incoming = match work.effect() {
        Some(effect) => {
            if let Some(pose) = effect.outgoing_pose()
                && let Some(item) = carousel.items().get(effect.outgoing())
            {
                let outgoing = Card {
                    item,
                    accents: AccentPair {
                        primary: item.accent,
                        secondary: item.accent,
                    },
                    counter: (effect.outgoing() + 1, carousel.item_count()),
                };
                draw_card(frame, &outgoing, pose, area, palette, glyphs);
            }
            effect.incoming_pose()
        }
        None => SlidePose::CENTER,
    };
    let card = Card {
        item: stage.item,
        accents: stage.accents,
        counter,
    };
    draw_card(frame, &card, incoming, area, palette, glyphs);
}

struct Card<'a> {
    item: &'a DisplayItem,
    accents: AccentPair,
    counter: (usize, usize),
}

fn draw_card(
    frame: &mut Frame,
    card: &Card<'_>,
    pose: SlidePose,
    stage: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let Some(rect) = apply_slide_pose(pose, stage) else {
        return;
    };
    let item = card.item;
    let accent = palette.fade(palette.item_accent(card.accents.primary), pose.opacity);
    let text = palette.fade(palette.text_primary, pose.opacity);
    let muted = palette.fade(palette.text_muted, pose.opacity);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(accent))
        .title(Span::styled(
            format!(" {:02} / {:02} ", card.counter.0, card.counter.1),
            Style::default().fg(muted),
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(rect);
    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mut lines = vec![
        glow_line(card.accents, inner.width, pose.opacity, palette, glyphs.rule),
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(item.category.clone(), Style::default().fg(muted))),
        Line::default(),
        Line::from(Span::styled(item.description.clone(), Style::default().fg(text))),
        Line::default(),
    ];
    if !item.tech_tags.is_empty() {
        lines.push(Line::from(Span::styled(
            item.tech_tags.join(&format!(" {} ", glyphs.bullet)),
            Style::default().fg(accent),
        )));
        lines.push(Line::default());
    }
    for (label, uri) in [
        ("code ", &item.links.primary),
        ("live ", &item.links.secondary),
        ("image", &item.image_ref),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{label}  "), Style::default().fg(muted)),
            Span::styled(uri.clone(), Style::default().fg(text)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

/// Horizontal rule fading from the active accent into the next item's accent.
fn glow_line(
    accents: AccentPair,
    width: u16,
    opacity: f32,
    palette: &Palette,
    rule: &'static str,
) -> Line<'static> {
    let from = palette.item_accent(accents.primary);
    let to = palette.item_accent(accents.secondary);
    let span = f32::from(width.saturating_sub(1).max(1));
    let spans: Vec<Span<'static>> = (0..width)
        .map(|col| {
            let color = mix(from, to, f32::from(col) / span);
            Span::styled(rule, Style::default().fg(palette.fade(color, opacity)))
        })
        .collect();
    Line::from(spans)
}

fn mix(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
        }
        _ => from,
    }
}

fn draw_nav(
    frame: &mut Frame,
    work: &WorkSection,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
    hits: &mut WorkHitMap,
) {
    let dots = work.carousel().dots_view();
    let count = dots.len() as u16;
    // "‹  ● ○ ○  ›"
    let total = 1 + 2 + count * 2 - 1 + 2 + 1;
    if area.width < total || area.height == 0 {
        return;
    }
    let y = area.y;
    let mut x = area.x + (area.width - total) / 2;
    let buf = frame.buffer_mut();
    let button = Style::default()
        .fg(palette.text_secondary)
        .add_modifier(Modifier::BOLD);

    buf.set_string(x, y, glyphs.previous, button);
    hits.targets
        .push((region_of(Rect::new(x, y, 1, 1)), WorkTarget::Previous));
    x += 3;

    for dot in &dots {
        let (glyph, style) = if dot.active {
            (
                glyphs.dot_active,
                Style::default().fg(palette.item_accent(dot.accent)),
            )
        } else {
            (glyphs.dot_inactive, Style::default().fg(palette.text_muted))
        };
        buf.set_string(x, y, glyph, style);
        hits.targets
            .push((region_of(Rect::new(x, y, 1, 1)), WorkTarget::Dot(dot.position)));
        x += 2;
    }

    x += 1;
    buf.set_string(x, y, glyphs.next, button);
    hits.targets
        .push((region_of(Rect::new(x, y, 1, 1)), WorkTarget::Next));
}
