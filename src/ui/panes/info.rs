//! Info pane: pseudocode with the current line, run statistics, the step
//! description and a colour legend

use crate::algorithms::Algorithm;
use crate::playback::View;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0))
}

fn pseudocode_lines(algorithm: Algorithm, view: &View) -> Vec<Line<'static>> {
    let current = view.kind.and_then(|kind| algorithm.pseudocode_line(kind));
    algorithm
        .pseudocode()
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let number = Span::styled(
                format!("{:>2} ", i + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            );
            if current == Some(i) {
                Line::from(vec![
                    number,
                    Span::styled(
                        format!("{} ◀", text),
                        Style::default()
                            .fg(DEFAULT_THEME.border_focused)
                            .bg(DEFAULT_THEME.current_line_bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    number,
                    Span::styled(text.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
                ])
            }
        })
        .collect()
}

fn stat_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            value,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn legend_entry(color: Color, label: &str) -> Vec<Span<'static>> {
    vec![
        Span::styled("■ ", Style::default().fg(color)),
        Span::styled(format!("{}  ", label), Style::default().fg(DEFAULT_THEME.fg)),
    ]
}

pub fn render_info_pane(frame: &mut Frame, area: Rect, algorithm: Algorithm, view: &View) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(algorithm.pseudocode().len() as u16 + 2),
            Constraint::Length(8),
            Constraint::Min(3),
            Constraint::Length(4),
        ])
        .split(area);

    let pseudocode = Paragraph::new(pseudocode_lines(algorithm, view))
        .block(pane_block(" Pseudocode "));
    frame.render_widget(pseudocode, rows[0]);

    let stats = vec![
        stat_line(
            "Algorithm",
            format!("{} {}", algorithm.label(), algorithm.complexity()),
        ),
        stat_line(
            "Stable",
            if algorithm.is_stable() { "yes" } else { "no" }.to_string(),
        ),
        stat_line("Step", format!("{}/{}", view.position(), view.total)),
        stat_line("Comparisons", view.comparisons.to_string()),
        stat_line("Swaps", view.swaps.to_string()),
        stat_line(
            "Sorted",
            format!("{}/{}", view.sorted.len(), view.snapshot.len()),
        ),
    ];
    frame.render_widget(
        Paragraph::new(stats).block(pane_block(" Statistics ")),
        rows[1],
    );

    let description = if view.total == 0 {
        Span::styled("Nothing to animate", Style::default().fg(DEFAULT_THEME.comment))
    } else if view.cursor.is_none() {
        Span::styled(
            "Press → or space to start",
            Style::default().fg(DEFAULT_THEME.comment),
        )
    } else {
        Span::styled(view.description.to_string(), Style::default().fg(DEFAULT_THEME.fg))
    };
    frame.render_widget(
        Paragraph::new(Line::from(description))
            .wrap(Wrap { trim: true })
            .block(pane_block(" Current Step ")),
        rows[2],
    );

    let mut first = Vec::new();
    first.extend(legend_entry(DEFAULT_THEME.comparing, "compare"));
    first.extend(legend_entry(DEFAULT_THEME.swapping, "swap"));
    first.extend(legend_entry(DEFAULT_THEME.pivot, "pivot"));
    let mut second = Vec::new();
    second.extend(legend_entry(DEFAULT_THEME.merging, "merge"));
    second.extend(legend_entry(DEFAULT_THEME.active, "active"));
    second.extend(legend_entry(DEFAULT_THEME.sorted, "sorted"));
    frame.render_widget(
        Paragraph::new(vec![Line::from(first), Line::from(second)]).block(pane_block(" Legend ")),
        rows[3],
    );
}
