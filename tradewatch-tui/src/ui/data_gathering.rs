//! Step 1, Data Gathering: source overview and data-quality check.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use tradewatch_core::content::{
    DATA_GATHERING_NOTE, DATA_QUALITY, DATA_QUALITY_FINDING, DATA_SOURCES,
};

use crate::theme;
use crate::ui::card;

pub fn render(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Data Gathering & Integrity Check",
            theme::accent_bold(),
        ))),
        rows[0],
    );

    f.render_widget(
        Paragraph::new(Span::styled(DATA_GATHERING_NOTE, theme::secondary()))
            .block(card("Fetch Log")),
        rows[1],
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let mut sources: Vec<Line> = Vec::new();
    for source in DATA_SOURCES.iter() {
        sources.push(Line::from(vec![
            Span::styled("• ", theme::muted()),
            Span::styled(format!("{}: ", source.name), theme::text_bold()),
            Span::styled(source.detail, theme::text()),
        ]));
        sources.push(Line::from(Span::styled(
            format!("    Source: {}", source.origin),
            theme::muted(),
        )));
    }
    f.render_widget(
        Paragraph::new(sources)
            .wrap(Wrap { trim: false })
            .block(card("Data Source Overview")),
        cols[0],
    );

    let mut quality: Vec<Line> = Vec::new();
    for metric in DATA_QUALITY.iter() {
        quality.push(Line::from(Span::styled(metric.label, theme::muted())));
        quality.push(Line::from(vec![
            Span::styled(format!("{}  ", metric.value), theme::text_bold()),
            Span::styled(format!("↑ {}", metric.delta), theme::positive()),
        ]));
        quality.push(Line::from(""));
    }
    quality.push(Line::from(vec![
        Span::styled("Key Findings: ", theme::text_bold()),
        Span::styled(DATA_QUALITY_FINDING, theme::text()),
    ]));
    f.render_widget(
        Paragraph::new(quality)
            .wrap(Wrap { trim: true })
            .block(card("Data Quality Check")),
        cols[1],
    );
}
