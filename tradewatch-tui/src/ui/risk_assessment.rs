//! Step 3, Risk Assessment: AI reasoning and input parameters on the left,
//! tabbed evidence visualization on the right.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use tradewatch_core::charts::{AlertType, ChartKind, EvidenceCharts, PATTERN_BASELINE};
use tradewatch_core::content::{
    ANALYSIS_SCORE, ANALYSIS_STATUS, EVIDENCE_REFERENCE, INPUT_PARAMETERS, RISK_REASONING,
};

use crate::app::{AppState, EvidenceTab};
use crate::theme;
use crate::ui::card;
use crate::ui::charts::{render_bars, render_xy, BarSpec, Series, XAxis};

pub fn render(f: &mut Frame, area: Rect, app: &AppState, charts: &EvidenceCharts) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(2, 3)])
        .split(area);

    render_details(f, cols[0]);
    render_evidence(f, cols[1], app.evidence_tab, charts);
}

fn render_details(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(8),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Risk Assessment Details  ", theme::accent_bold()),
            Span::styled("[e] Export Details ⬇", theme::muted()),
        ])),
        rows[0],
    );

    let mut reasoning: Vec<Line> = Vec::new();
    for paragraph in RISK_REASONING.iter() {
        reasoning.push(Line::from(Span::styled(*paragraph, theme::text())));
        reasoning.push(Line::from(""));
    }
    reasoning.push(Line::from(vec![
        Span::styled(format!("Analysis Score: {ANALYSIS_SCORE:.2}"), theme::text_bold()),
        Span::raw("   "),
        Span::styled(format!("Status: {ANALYSIS_STATUS}"), theme::positive()),
    ]));
    f.render_widget(
        Paragraph::new(reasoning)
            .wrap(Wrap { trim: true })
            .block(card("AI Reasoning")),
        rows[1],
    );

    let mut params: Vec<Line> = Vec::new();
    for field in INPUT_PARAMETERS.iter() {
        params.push(Line::from(Span::styled(field.label, theme::muted())));
        params.push(Line::from(Span::styled(field.value, theme::text())));
    }
    f.render_widget(
        Paragraph::new(params)
            .wrap(Wrap { trim: true })
            .block(card("Input Parameters")),
        rows[2],
    );
}

fn render_evidence(f: &mut Frame, area: Rect, tab: EvidenceTab, charts: &EvidenceCharts) {
    let block = card("Evidence Visualization");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("Comprehensive data analysis for {EVIDENCE_REFERENCE}  "),
                theme::secondary(),
            ),
            Span::styled("[x] Export Charts ⬇", theme::muted()),
        ])),
        rows[0],
    );

    let tabs = Tabs::new(EvidenceTab::ALL.iter().map(|t| t.label()))
        .select(tab.index())
        .style(theme::muted())
        .highlight_style(theme::accent_bold())
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme::muted()));
    f.render_widget(tabs, rows[1]);

    let body = rows[2];
    match tab {
        EvidenceTab::Price => render_price_tab(f, body, charts),
        EvidenceTab::Liquidity => render_liquidity_tab(f, body, charts),
        EvidenceTab::Alerts => render_alerts_tab(f, body, charts),
        EvidenceTab::Pattern => render_pattern_tab(f, body, charts),
    }
}

fn render_price_tab(f: &mut Frame, area: Rect, charts: &EvidenceCharts) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let points: Vec<(f64, f64)> = charts
        .price
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.price))
        .collect();
    let labels = match (charts.price.first(), charts.price.last()) {
        (Some(first), Some(last)) => vec![
            first.time.format("%H:%M").to_string(),
            last.time.format("%H:%M").to_string(),
        ],
        _ => Vec::new(),
    };
    render_xy(
        f,
        rows[0],
        ChartKind::Price.title(),
        &[Series::line("Price", points, theme::ACCENT)],
        XAxis {
            title: "Time",
            bounds: [0.0, (charts.price.len().saturating_sub(1) as f64).max(1.0)],
            labels,
        },
        "Price",
    );

    let bars: Vec<BarSpec> = charts
        .volume
        .iter()
        .map(|v| BarSpec {
            label: v.label.clone(),
            value: u64::from(v.volume),
            text: format!("{:.1}k", f64::from(v.volume) / 1000.0),
        })
        .collect();
    render_bars(f, rows[1], ChartKind::Volume.title(), &bars, theme::NEUTRAL);
}

fn render_liquidity_tab(f: &mut Frame, area: Rect, charts: &EvidenceCharts) {
    let bars: Vec<BarSpec> = charts
        .liquidity
        .iter()
        .map(|m| BarSpec {
            label: m.metric.to_string(),
            value: (m.value * 100.0).round() as u64,
            text: format!("{:.2}", m.value),
        })
        .collect();
    render_bars(
        f,
        area,
        &format!("Key Liquidity Indicators: {}", ChartKind::Liquidity.title()),
        &bars,
        theme::ACCENT,
    );
}

fn alert_color(alert_type: AlertType) -> Color {
    match alert_type {
        AlertType::InsiderTrading => theme::NEGATIVE,
        AlertType::Spoofing => theme::WARNING,
        AlertType::WashTrading => theme::NEUTRAL,
        AlertType::MarketManipulation => theme::ACCENT,
    }
}

fn render_alerts_tab(f: &mut Frame, area: Rect, charts: &EvidenceCharts) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(AlertType::ALL.len() as u16)])
        .split(area);

    let series: Vec<Series> = AlertType::ALL
        .iter()
        .map(|&alert_type| {
            let points = charts
                .alerts
                .iter()
                .filter(|a| a.alert_type == alert_type)
                .map(|a| (f64::from(a.frequency), f64::from(a.severity)))
                .collect();
            Series::scatter(alert_type.label(), points, alert_color(alert_type))
        })
        .collect();
    render_xy(
        f,
        rows[0],
        ChartKind::Alerts.title(),
        &series,
        XAxis {
            title: "Frequency",
            bounds: [0.0, 15.0],
            labels: vec!["0".to_string(), "15".to_string()],
        },
        "Severity",
    );

    // Point size can't be drawn in a terminal, so volume impact is summarized.
    let impact: Vec<Line> = AlertType::ALL
        .iter()
        .map(|&alert_type| {
            let (count, total) = charts
                .alerts
                .iter()
                .filter(|a| a.alert_type == alert_type)
                .fold((0usize, 0.0f64), |(n, sum), a| (n + 1, sum + a.volume_impact));
            Line::from(vec![
                Span::styled("● ", Style::default().fg(alert_color(alert_type))),
                Span::styled(format!("{:<20}", alert_type.label()), theme::text()),
                Span::styled(
                    format!("{count:>2} alerts  volume impact {total:>10.0}"),
                    theme::secondary(),
                ),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(impact), rows[1]);
}

fn render_pattern_tab(f: &mut Frame, area: Rect, charts: &EvidenceCharts) {
    let score: Vec<(f64, f64)> = charts
        .pattern
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.score))
        .collect();
    let baseline: Vec<(f64, f64)> = charts
        .pattern
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.baseline))
        .collect();
    let labels = match (charts.pattern.first(), charts.pattern.last()) {
        (Some(first), Some(last)) => vec![first.month.clone(), last.month.clone()],
        _ => Vec::new(),
    };
    let baseline_name = format!("Baseline ({PATTERN_BASELINE:.0})");
    render_xy(
        f,
        area,
        ChartKind::Pattern.title(),
        &[
            Series::line("Score", score, theme::POSITIVE),
            Series::line(&baseline_name, baseline, theme::NEGATIVE),
        ],
        XAxis {
            title: "Month",
            bounds: [0.0, (charts.pattern.len().saturating_sub(1) as f64).max(1.0)],
            labels,
        },
        "Score",
    );
}
