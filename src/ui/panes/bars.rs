//! Bar pane: one vertical bar per array element
//!
//! Colour precedence follows the playback view: sorted, then the current
//! step's highlight, then the plain bar colour.

use crate::playback::View;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Colour for the bar at `index`
pub fn bar_color(view: &View, index: usize) -> Color {
    if view.is_sorted(index) {
        DEFAULT_THEME.sorted
    } else if let Some(highlight) = view.highlight_at(index) {
        DEFAULT_THEME.highlight(highlight)
    } else {
        DEFAULT_THEME.bar
    }
}

/// Width and gap that fit `count` bars into `width` columns
fn bar_geometry(count: usize, width: u16) -> (u16, u16) {
    let width = width as usize;
    if count == 0 {
        return (1, 0);
    }
    // Prefer a one-column gap while bars can stay at least two wide
    let with_gap = (width + 1) / count;
    if with_gap >= 3 {
        ((with_gap - 1).min(8) as u16, 1)
    } else {
        ((width / count).max(1) as u16, 0)
    }
}

pub fn render_bars_pane(frame: &mut Frame, area: Rect, view: &View, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if view.snapshot.is_empty() {
        let paragraph = Paragraph::new("(no data)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let (bar_width, bar_gap) = bar_geometry(view.snapshot.len(), inner_width);
    let max = view.snapshot.iter().copied().max().unwrap_or(1).max(1) as u64;

    let bars: Vec<Bar> = view
        .snapshot
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(String::new())
                .style(Style::default().fg(bar_color(view, index)))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(max);

    frame.render_widget(chart, area);
}
