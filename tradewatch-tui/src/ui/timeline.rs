//! Sidebar: investigation timeline cards and overall progress gauge.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use tradewatch_core::navigation::timeline_progress;
use tradewatch_core::{StepInfo, TIMELINE};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(Span::styled(" Investigation Timeline ", theme::accent_bold()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled("AI driven analysis progress", theme::muted()))),
        rows[0],
    );

    let mut lines: Vec<Line> = Vec::new();
    for info in TIMELINE.iter() {
        let active = app.nav.is_current(info.step);
        lines.extend(step_card(info, active));
        if !info.step.is_last() {
            lines.push(Line::from(Span::styled("   │", theme::muted())));
        }
    }
    f.render_widget(Paragraph::new(lines), rows[1]);

    let progress = timeline_progress();
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(theme::POSITIVE).bg(theme::ACTIVE_BACKGROUND))
        .percent(u16::from(progress))
        .label(format!("Overall Progress: {progress}%"));
    f.render_widget(gauge, rows[2]);
}

/// Three lines per step: title, description, status and timestamp.
fn step_card(info: &StepInfo, active: bool) -> Vec<Line<'static>> {
    let (bar, bar_style) = if active {
        ("▌", theme::accent())
    } else {
        (" ", Style::default())
    };
    let base = if active { theme::active_card() } else { Style::default() };
    let title_style = if active {
        theme::accent_bold().patch(base)
    } else {
        theme::text_bold()
    };

    vec![
        Line::from(vec![
            Span::styled(bar, bar_style),
            Span::styled(
                format!(" {} {} [{}]", info.icon, info.step.label(), info.step.index() + 1),
                title_style,
            ),
        ])
        .style(base),
        Line::from(vec![
            Span::styled(bar, bar_style),
            Span::styled(format!("   {}", info.description), theme::positive().patch(base)),
        ])
        .style(base),
        Line::from(vec![
            Span::styled(bar, bar_style),
            Span::styled(format!("   {:<12}", info.status.label()), theme::status_style(info.status)),
            Span::styled(info.timestamp, theme::secondary()),
        ])
        .style(base),
    ]
}
