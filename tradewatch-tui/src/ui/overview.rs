//! Alert overview header: alert details and trade details side by side.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use tradewatch_core::content::{Field, ALERT_DETAILS, TRADE_DETAILS};

use crate::theme;

pub fn render(f: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    f.render_widget(Paragraph::new(field_lines("Alert Details", &ALERT_DETAILS)), cols[0]);
    f.render_widget(Paragraph::new(field_lines("Trade Details", &TRADE_DETAILS)), cols[1]);
}

fn field_lines(heading: &'static str, fields: &[Field]) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(heading, theme::accent_bold()))];
    for field in fields {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}: ", field.label), theme::muted()),
            Span::styled(field.value, theme::text_bold()),
        ]));
    }
    lines
}
