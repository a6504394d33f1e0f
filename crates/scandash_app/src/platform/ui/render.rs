use ratatui::{
    layout::{Constraint, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
};

use scandash_core::{AppViewModel, BannerView, ScanMode, TargetRowView};

use crate::platform::input::InputMode;

/// Draws the whole dashboard from the view model.
///
/// Immediate mode: every draw rebuilds the banner, all table rows, and the
/// upload pane from scratch, so a repeated view renders identically.
pub fn render(frame: &mut Frame, view: &AppViewModel, mode: &InputMode) {
    // The banner line appears once the first status poll has succeeded
    // and stays for the rest of the session.
    let banner_height = if view.banner.is_some() { 1 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(banner_height),
        Constraint::Min(4),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .split(frame.area());

    if let Some(banner) = &view.banner {
        render_banner(frame, chunks[0], banner);
    }
    render_table(frame, chunks[1], &view.rows);
    render_upload_pane(frame, chunks[2], view, mode);
    render_footer(frame, chunks[3]);

    if let Some(notice) = &view.notice {
        render_notice(frame, notice);
    }
}

fn render_banner(frame: &mut Frame, area: Rect, banner: &BannerView) {
    let style = match banner.mode {
        ScanMode::Scanning => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ScanMode::Stopped => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ScanMode::Idle => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    };
    frame.render_widget(Paragraph::new(banner.text.as_str()).style(style), area);
}

fn render_table(frame: &mut Frame, area: Rect, rows: &[TargetRowView]) {
    let header = Row::new(vec![
        "ID", "Domain", "Brand", "Status", "Verified", "Active", "Interval", "Report",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let body = rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(row.id.to_string()),
            Cell::from(row.domain.clone()),
            Cell::from(row.brand.clone()),
            Cell::from(row.status.clone()),
            Cell::from(row.is_verified.to_string()),
            Cell::from(row.is_active.to_string()),
            Cell::from(row.scan_interval_minutes.to_string()),
            Cell::from(row.report_href.clone()),
        ])
    });

    let widths = [
        Constraint::Length(6),
        Constraint::Min(18),
        Constraint::Length(14),
        Constraint::Length(16),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Min(26),
    ];

    let table = Table::new(body, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Targets ({})", rows.len())),
    );
    frame.render_widget(table, area);
}

fn render_upload_pane(frame: &mut Frame, area: Rect, view: &AppViewModel, mode: &InputMode) {
    // The highlighted border while the prompt is open is the drop-zone
    // hover cue; it reverts as soon as the prompt closes.
    let (border_style, lines) = match mode {
        InputMode::PathEntry(buffer) => (
            Style::default().fg(Color::Yellow),
            vec![
                Line::from(format!("File path: {buffer}_")),
                Line::from("Enter to upload, Esc to cancel"),
            ],
        ),
        InputMode::Normal => {
            let mut lines = vec![Line::from(
                "Press u to enter a file path, or paste/drop one here",
            )];
            if let Some(result) = &view.upload_result {
                lines.push(Line::from(format!("Last upload: {result}")));
            }
            (Style::default(), lines)
        }
    };

    let pane = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Bulk upload"),
    );
    frame.render_widget(pane, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let hint = "s start scan   x stop scan   u upload   q quit";
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_notice(frame: &mut Frame, notice: &str) {
    let area = centered_rect(60, 20, frame.area());
    frame.render_widget(Clear, area);
    let body = Paragraph::new(vec![
        Line::from(notice.to_string()),
        Line::from(""),
        Line::styled(
            "press any key to continue",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Notice"),
    );
    frame.render_widget(body, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);
    let horizontal = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(vertical[1]);
    horizontal[1]
}
