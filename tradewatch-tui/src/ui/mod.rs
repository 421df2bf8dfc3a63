//! Top-level UI layout: timeline sidebar, main panel and status bar.

pub mod charts;
pub mod data_gathering;
pub mod help;
pub mod overview;
pub mod pattern_analysis;
pub mod recommendation;
pub mod risk_assessment;
pub mod status_bar;
pub mod timeline;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use tradewatch_core::InvestigationStep;

use crate::app::AppState;
use crate::theme;

const SIDEBAR_WIDTH: u16 = 42;
const OVERVIEW_HEIGHT: u16 = 6;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(chunks[0]);

    timeline::render(f, body[0], app);
    draw_main(f, body[1], app);
    status_bar::render(f, chunks[1], app);

    if app.show_help {
        help::render(f, chunks[0]);
    }
}

/// Alert overview header, then the view for the current step.
fn draw_main(f: &mut Frame, area: Rect, app: &AppState) {
    let step = app.current_step();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(Line::from(vec![
            Span::styled(" Alert Overview: ", theme::panel_title(true)),
            Span::styled(format!("{} [{}] ", step.label(), step.index() + 1), theme::text_bold()),
        ]));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(OVERVIEW_HEIGHT), Constraint::Min(0)])
        .split(inner);

    overview::render(f, rows[0]);

    let view = rows[1];
    match step {
        InvestigationStep::DataGathering => data_gathering::render(f, view),
        InvestigationStep::PatternAnalysis => pattern_analysis::render(f, view, &app.charts()),
        InvestigationStep::RiskAssessment => risk_assessment::render(f, view, app, &app.charts()),
        InvestigationStep::Recommendation => {
            recommendation::render(f, view, chrono::Local::now().naive_local())
        }
    }
}

/// Bordered block with a titled heading, as used by every view card.
pub fn card(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(Span::styled(format!(" {title} "), theme::accent_bold()))
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
