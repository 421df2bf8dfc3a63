//! Theme tokens for the TradeWatch dashboard.
//!
//! # Color Palette
//! - **Accent**: electric cyan (focus, active step, titles)
//! - **Positive**: neon green (completed steps, low risk, false-positive verdict)
//! - **Warning**: amber (in-progress step, elevated risk, medium severity)
//! - **Negative**: hot pink (high risk)
//! - **Neutral**: cool purple (secondary info)
//! - **Muted**: steel blue (pending step, hints, secondary text)

use ratatui::style::{Color, Modifier, Style};

use tradewatch_core::content::RiskBand;
use tradewatch_core::StepStatus;

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const WARNING: Color = Color::Rgb(255, 193, 7);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);
pub const ACTIVE_BACKGROUND: Color = Color::Rgb(20, 40, 64);

/// Series colors for multi-line charts.
pub const SERIES: [Color; 3] = [ACCENT, WARNING, NEUTRAL];

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_bold() -> Style {
    text().add_modifier(Modifier::BOLD)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Timeline card highlight for the selected step.
pub fn active_card() -> Style {
    Style::default().bg(ACTIVE_BACKGROUND)
}

pub fn status_color(status: StepStatus) -> Color {
    match status {
        StepStatus::Completed => POSITIVE,
        StepStatus::InProgress => WARNING,
        StepStatus::Pending => MUTED,
    }
}

pub fn status_style(status: StepStatus) -> Style {
    Style::default().fg(status_color(status))
}

pub fn risk_color(band: RiskBand) -> Color {
    match band {
        RiskBand::Low => POSITIVE,
        RiskBand::Elevated => WARNING,
        RiskBand::High => NEGATIVE,
    }
}

/// Severity badge: dark text on the severity color.
pub fn severity_badge(severity: &str) -> Style {
    let bg = match severity {
        "Low" => POSITIVE,
        "Medium" => WARNING,
        "High" | "Critical" => NEGATIVE,
        _ => MUTED,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}
