//! Keyboard input dispatch: help overlay → global keys → view-specific keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tradewatch_core::InvestigationStep;

use crate::app::{AppState, DashboardAction};

/// Handle a key event. Each handled press starts a new render cycle.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if dispatch(app, key) {
        app.advance_cycle();
    }
}

/// Returns whether the key was handled.
fn dispatch(app: &mut AppState, key: KeyEvent) -> bool {
    // 1. The help overlay consumes input first.
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
            return true;
        }
        return false;
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return true;
        }
        KeyCode::Char('q') => {
            app.running = false;
            return true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return true;
        }
        KeyCode::Char(c @ '1'..='4') => {
            let index = (c as u8 - b'1') as usize;
            if let Some(step) = InvestigationStep::from_index(index) {
                app.select_step(step);
            }
            return true;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_step(app.current_step().next());
            return true;
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_step(app.current_step().prev());
            return true;
        }
        _ => {}
    }

    // 3. View-specific keys.
    match app.current_step() {
        InvestigationStep::RiskAssessment => handle_risk_assessment_key(app, key),
        InvestigationStep::Recommendation => handle_recommendation_key(app, key),
        InvestigationStep::DataGathering | InvestigationStep::PatternAnalysis => false,
    }
}

fn handle_risk_assessment_key(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            app.evidence_tab = app.evidence_tab.prev();
        }
        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => {
            app.evidence_tab = app.evidence_tab.next();
        }
        KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Left => {
            app.evidence_tab = app.evidence_tab.prev();
        }
        KeyCode::Char('e') => app.trigger(DashboardAction::ExportDetails),
        KeyCode::Char('x') => app.trigger(DashboardAction::ExportCharts),
        _ => return false,
    }
    true
}

fn handle_recommendation_key(app: &mut AppState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('w') => app.trigger(DashboardAction::WebView),
        KeyCode::Char('o') => app.trigger(DashboardAction::OverrideCreateCase),
        KeyCode::Char('a') => app.trigger(DashboardAction::AcceptFalsePositive),
        _ => return false,
    }
    true
}

/// Key bindings help text.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("q / Ctrl+C", "Quit"),
        ("1-4", "Select investigation step"),
        ("↑/k, ↓/j", "Previous / next step"),
        ("Tab / Shift+Tab", "Cycle evidence tabs (Risk Assessment)"),
        ("e", "Export details (Risk Assessment)"),
        ("x", "Export charts (Risk Assessment)"),
        ("w", "Web view (Recommendation)"),
        ("o", "Override - create case (Recommendation)"),
        ("a", "Accept false positive (Recommendation)"),
        ("?", "Toggle this help"),
    ]
}
