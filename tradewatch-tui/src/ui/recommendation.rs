//! Step 4, Recommendation: verdict, analysis summary, key findings, risk
//! factor bars and the (presentational) analyst actions.

use chrono::NaiveDateTime;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Wrap};
use ratatui::Frame;

use tradewatch_core::content::{
    last_updated, RiskFactor, ANALYSIS_SUMMARY, ASSESSMENT, KEY_FINDINGS, RISK_FACTORS,
};

use crate::theme;
use crate::ui::card;

pub fn render(f: &mut Frame, area: Rect, now: NaiveDateTime) {
    let block = card("Investigation Assessment");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(10),
            Constraint::Length(1),
        ])
        .split(inner);

    render_verdict(f, rows[0]);
    render_summary(f, rows[1]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(3, 8),
            Constraint::Ratio(3, 8),
            Constraint::Ratio(2, 8),
        ])
        .split(rows[2]);
    render_findings(f, cols[0]);
    render_risk_factors(f, cols[1]);
    render_actions(f, cols[2]);

    f.render_widget(
        Paragraph::new(Span::styled(
            format!("Last updated: {}", last_updated(now)),
            theme::muted(),
        )),
        rows[3],
    );
}

fn render_verdict(f: &mut Frame, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(3, 4), Constraint::Ratio(1, 4)])
        .split(area);

    let status = vec![
        Line::from(vec![
            Span::styled("Investigation Assessment  ", theme::text_bold()),
            Span::styled(format!(" {} ", ASSESSMENT.severity), theme::severity_badge(ASSESSMENT.severity)),
        ]),
        Line::from(vec![
            Span::styled("Alert ID: ", theme::muted()),
            Span::styled(ASSESSMENT.alert_id, theme::text_bold()),
            Span::styled(" • Scenario: ", theme::muted()),
            Span::styled(ASSESSMENT.scenario, theme::text_bold()),
            Span::styled(" • Duration: ", theme::muted()),
            Span::styled(ASSESSMENT.duration, theme::text_bold()),
        ]),
    ];
    f.render_widget(Paragraph::new(status).wrap(Wrap { trim: true }), cols[0]);

    let verdict = vec![
        Line::from(Span::styled(
            format!("✅ {}", ASSESSMENT.outcome),
            theme::positive().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            format!("Confidence: {}%", ASSESSMENT.confidence_pct),
            theme::text(),
        ))
        .centered(),
    ];
    f.render_widget(Paragraph::new(verdict).style(theme::active_card()), cols[1]);
}

fn render_summary(f: &mut Frame, area: Rect) {
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "AI Analysis Summary",
        theme::accent_bold(),
    ))];
    for (i, paragraph) in ANALYSIS_SUMMARY.iter().enumerate() {
        lines.push(Line::from(Span::styled(*paragraph, theme::text())));
        if i == 0 {
            lines.push(Line::from(Span::styled("[w] Web View", theme::muted())));
        }
    }
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_findings(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = KEY_FINDINGS
        .iter()
        .map(|finding| {
            Line::from(vec![
                Span::styled("✅ ", theme::positive()),
                Span::styled(*finding, theme::text()),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(card("Key Findings")),
        area,
    );
}

fn render_risk_factors(f: &mut Frame, area: Rect) {
    let block = card("Risk Assessment");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(RISK_FACTORS.iter().map(|_| Constraint::Length(2)))
        .split(inner);

    for (factor, row) in RISK_FACTORS.iter().zip(rows.iter()) {
        render_factor(f, *row, factor);
    }
}

fn render_factor(f: &mut Frame, area: Rect, factor: &RiskFactor) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(factor.name, theme::text_bold())),
        rows[0],
    );
    let color = theme::risk_color(factor.band());
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(theme::ACTIVE_BACKGROUND))
        .percent(u16::from(factor.score.min(100)))
        .label(format!("{}%", factor.score));
    f.render_widget(gauge, rows[1]);
}

fn render_actions(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("[o] 🚫 Override - Create Case", theme::negative())),
        Line::from(""),
        Line::from(Span::styled("[a] ✅ Accept False Positive", theme::positive())),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(card("Actions")),
        area,
    );
}
