//! Step 2, Pattern Analysis: headline metrics and three-security activity chart.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use tradewatch_core::charts::{ActivityPoint, ChartKind, EvidenceCharts, Tabular};
use tradewatch_core::content::{Metric, PATTERN_METRICS};

use crate::theme;
use crate::ui::card;
use crate::ui::charts::{render_xy, Series, XAxis};

pub fn render(f: &mut Frame, area: Rect, charts: &EvidenceCharts) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Pattern Analysis Results",
            theme::accent_bold(),
        ))),
        rows[0],
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    for (metric, col) in PATTERN_METRICS.iter().zip(cols.iter()) {
        render_metric(f, *col, metric);
    }

    render_activity(f, rows[2], &charts.activity);
}

fn render_metric(f: &mut Frame, area: Rect, metric: &Metric) {
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{}  ", metric.value), theme::text_bold()),
            Span::styled(format!("↑ {}", metric.delta), theme::negative()),
        ]),
        Line::from(Span::styled(metric.note, theme::secondary())),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(card(metric.label)),
        area,
    );
}

fn render_activity(f: &mut Frame, area: Rect, activity: &[ActivityPoint]) {
    // First column is the sample index; the rest are the securities.
    let names = &ActivityPoint::COLUMNS[1..];
    let series: Vec<Series> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let points = activity
                .iter()
                .map(|p| (p.step as f64, p.values()[i]))
                .collect();
            Series::line(*name, points, theme::SERIES[i])
        })
        .collect();

    let last = activity.len().saturating_sub(1);
    render_xy(
        f,
        area,
        &format!("Visualization: {}", ChartKind::Activity.title()),
        &series,
        XAxis {
            title: "Sample",
            bounds: [0.0, (last as f64).max(1.0)],
            labels: vec!["0".to_string(), last.to_string()],
        },
        "Cumulative",
    );
}
