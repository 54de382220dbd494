//! Painting the board.
//!
//! The layout mirrors a station departure screen: a banner row with the
//! live clock, column headings, the board lines, and a status bar with
//! the exit hint on the line after the last departure. Everything is
//! drawn from the retained [`LineBuffer`]; nothing here mutates state.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::board::{BoardLine, LineBuffer};

use super::style::Palette;

/// Column widths, in characters.
const TIME_W: usize = 5;
const DEST_W: usize = 24;
const PLAT_W: usize = 4;
const EXPT_W: usize = 9;
const CARS_W: usize = 4;

/// Width reserved for the "Esc to exit" hint in the status row.
const HINT: &str = " Esc to exit ";

/// Everything one frame needs, borrowed from the application.
pub struct BoardView<'a> {
    pub clock: &'a str,
    pub buffer: &'a LineBuffer,
    pub status: &'a str,
    pub status_row: usize,
    pub notices: Option<&'a [String]>,
    pub palette: &'a Palette,
    pub padding: u16,
}

/// Paint one frame.
pub fn draw(f: &mut Frame, view: &BoardView) {
    let area = f.area();
    let palette = view.palette;
    let pad_w = view.padding as usize;
    let sep = " ".repeat(pad_w);

    let mut lines: Vec<Line> = Vec::with_capacity(view.status_row + 3);

    // Banner with the clock over the right-hand columns
    let clock_col = TIME_W + pad_w + DEST_W + pad_w;
    lines.push(Line::from(vec![
        Span::styled(pad("Departures", clock_col), palette.heading()),
        Span::styled(view.clock.to_owned(), palette.item()),
    ]));

    // Column headings
    lines.push(Line::from(Span::styled(
        [
            pad("Time", TIME_W),
            pad("Destination", DEST_W),
            pad("Plat", PLAT_W),
            pad("Expt", EXPT_W),
            pad("Cars", CARS_W),
        ]
        .join(sep.as_str()),
        palette.heading(),
    )));

    // Board lines, placed at their buffer indices; the status bar goes on
    // the row the controller chose, directly after the last rendered line
    let mut body: Vec<Line> = vec![Line::default(); view.status_row];

    for (index, board_line) in view.buffer.lines() {
        if index >= body.len() {
            continue;
        }
        body[index] = match board_line {
            BoardLine::Service { row, .. } => Line::from(Span::styled(
                [
                    pad(&row.scheduled, TIME_W),
                    pad(&row.destination, DEST_W),
                    pad(&row.platform, PLAT_W),
                    pad(&row.expected, EXPT_W),
                    pad(&row.cars, CARS_W),
                ]
                .join(sep.as_str()),
                palette.item(),
            )),
            BoardLine::Reason { text, .. } => {
                let indent = " ".repeat(TIME_W + pad_w);
                let width = (area.width as usize).saturating_sub(indent.len());
                Line::from(vec![
                    Span::raw(indent),
                    Span::styled(clip(text, width), palette.item()),
                ])
            }
        };
    }
    lines.extend(body);

    // Status bar and exit hint, on the row after the last board line
    let status_width = (area.width as usize).saturating_sub(HINT.len());
    lines.push(Line::from(vec![
        Span::styled(pad(view.status, status_width), palette.status()),
        Span::styled(HINT, palette.status()),
    ]));

    f.render_widget(
        Paragraph::new(Text::from(lines)).style(palette.background()),
        area,
    );

    if let Some(notices) = view.notices {
        draw_notices(f, notices, palette);
    }
}

/// Modal overlay listing the service-wide notices.
fn draw_notices(f: &mut Frame, notices: &[String], palette: &Palette) {
    let area = f.area();
    let popup = centered(area, 60, (notices.len() as u16) * 3 + 4);

    let mut text = Text::default();
    for notice in notices {
        text.push_line(Line::from(notice.as_str()));
        text.push_line(Line::from(""));
    }
    text.push_line(Line::from(Span::styled(
        "Press any key to continue",
        palette.heading(),
    )));

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(text)
            .wrap(Wrap { trim: true })
            .style(palette.item())
            .block(Block::default().borders(Borders::ALL).title("Service update")),
        popup,
    );
}

/// A centered sub-rectangle, clamped to the available area.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", clip(text, width))
}
