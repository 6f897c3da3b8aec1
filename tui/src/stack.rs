//! Tech-stack section: horizontally scrolling marquee bars.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use folio_engine::{MarqueeStrip, StackSection};

use crate::region_of;
use crate::theme::Palette;

/// Rows between the tops of consecutive bars.
const BAR_PITCH: u16 = 3;

/// One terminal cell of a strip copy.
#[derive(Debug, Clone, PartialEq, Eq)]
enum StripCell {
    Blank,
    Glyph { text: String, width: usize, unit: usize },
    /// Right half of a wide glyph.
    Continuation { unit: usize },
}

impl StripCell {
    fn unit(&self) -> Option<usize> {
        match self {
            StripCell::Blank => None,
            StripCell::Glyph { unit, .. } | StripCell::Continuation { unit } => Some(*unit),
        }
    }
}

pub(crate) fn draw(frame: &mut Frame, stack: &mut StackSection, area: Rect, palette: &Palette) {
    for (i, strip) in stack.strips_mut().iter_mut().enumerate() {
        let y = u32::from(area.y) + 1 + i as u32 * u32::from(BAR_PITCH);
        if y >= u32::from(area.y) + u32::from(area.height) {
            break;
        }
        let row = Rect {
            x: area.x,
            y: y as u16,
            width: area.width,
            height: 1,
        };
        draw_strip(frame, strip, row, i % 2 == 0, palette);
    }
}

fn draw_strip(frame: &mut Frame, strip: &mut MarqueeStrip, row: Rect, bright: bool, palette: &Palette) {
    let bar = if bright {
        Style::default()
            .fg(palette.bg_dark)
            .bg(palette.bar)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.text_primary).bg(palette.bg_panel)
    };
    let highlight = bar.add_modifier(Modifier::REVERSED);

    let cells = copy_cells(strip);
    let line = visible_line(strip, &cells, row.width, bar, highlight);
    frame.render_widget(Paragraph::new(line).style(bar), row);

    let strip_width = strip.layout().strip_width();
    strip.record_render(region_of(row), strip_width);
}

/// Cells of a single copy, `layout().width()` long.
fn copy_cells(strip: &MarqueeStrip) -> Vec<StripCell> {
    let layout = strip.layout();
    let mut cells = vec![StripCell::Blank; layout.width()];
    for (unit, (&(start, _), content)) in layout
        .spans()
        .iter()
        .zip(strip.marquee().content())
        .enumerate()
    {
        let mut at = start;
        for grapheme in content.label().graphemes(true) {
            let width = grapheme.width();
            if width == 0 || at + width > cells.len() {
                continue;
            }
            cells[at] = StripCell::Glyph {
                text: grapheme.to_string(),
                width,
                unit,
            };
            for cell in &mut cells[at + 1..at + width] {
                *cell = StripCell::Continuation { unit };
            }
            at += width;
        }
    }
    cells
}

/// The viewport's slice of the endlessly repeated strip at the current offset.
fn visible_line(
    strip: &MarqueeStrip,
    cells: &[StripCell],
    columns: u16,
    bar: Style,
    highlight: Style,
) -> Line<'static> {
    if cells.is_empty() {
        return Line::default();
    }
    let hovered = strip.hovered_label();
    let content = strip.marquee().content();
    let is_highlighted = |unit: Option<usize>| {
        unit.zip(hovered)
            .is_some_and(|(unit, label)| content.get(unit).is_some_and(|c| c.label() == label))
    };

    let period = cells.len() as i64;
    let start = (-(strip.marquee().offset().floor() as i64)).rem_euclid(period);
    let columns = usize::from(columns);

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut run = String::new();
    let mut run_highlighted = false;
    let mut col = 0;
    while col < columns {
        let cell = &cells[((start + col as i64) % period) as usize];
        let (text, advance) = match cell {
            StripCell::Glyph { text, width, .. } if col + width <= columns => (text.as_str(), *width),
            StripCell::Glyph { .. } | StripCell::Blank | StripCell::Continuation { .. } => (" ", 1),
        };
        let highlighted = is_highlighted(cell.unit());
        if highlighted != run_highlighted && !run.is_empty() {
            let style = if run_highlighted { highlight } else { bar };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_highlighted = highlighted;
        run.push_str(text);
        col += advance;
    }
    if !run.is_empty() {
        let style = if run_highlighted { highlight } else { bar };
        spans.push(Span::styled(run, style));
    }
    Line::from(spans)
}
