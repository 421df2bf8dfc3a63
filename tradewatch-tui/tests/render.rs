use crossterm::event::{KeyCode, KeyEvent};
use proptest::prelude::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use tradewatch_core::InvestigationStep;
use tradewatch_tui::app::EvidenceTab;
use tradewatch_tui::{handle_key, ui, AppState};

fn render(app: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(180, 56)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn view_title(step: InvestigationStep) -> &'static str {
    match step {
        InvestigationStep::DataGathering => "Data Gathering & Integrity Check",
        InvestigationStep::PatternAnalysis => "Pattern Analysis Results",
        InvestigationStep::RiskAssessment => "Evidence Visualization",
        InvestigationStep::Recommendation => "Investigation Assessment",
    }
}

#[test]
fn each_step_renders_its_view() {
    for step in InvestigationStep::ALL {
        let app = AppState::new(step, 7);
        let screen = render(&app);
        assert!(screen.contains(view_title(step)), "{step:?} view missing");
        assert!(screen.contains("Alert Overview"));
    }
}

#[test]
fn sidebar_shows_fixed_progress() {
    let screen = render(&AppState::new(InvestigationStep::DataGathering, 7));
    assert!(screen.contains("Investigation Timeline"));
    assert!(screen.contains("Overall Progress: 50%"));
    for step in InvestigationStep::ALL {
        assert!(screen.contains(step.label()));
    }
}

#[test]
fn every_evidence_tab_renders() {
    let mut app = AppState::new(InvestigationStep::RiskAssessment, 3);
    for tab in EvidenceTab::ALL {
        app.evidence_tab = tab;
        let screen = render(&app);
        assert!(screen.contains(tab.label()));
    }
}

#[test]
fn help_overlay_lists_bindings() {
    let mut app = AppState::new(InvestigationStep::RiskAssessment, 3);
    handle_key(&mut app, KeyEvent::from(KeyCode::Char('?')));
    let screen = render(&app);
    assert!(screen.contains("Keyboard Shortcuts"));
    assert!(screen.contains("Esc or ? to close"));
}

#[test]
fn action_status_reaches_status_bar() {
    let mut app = AppState::new(InvestigationStep::Recommendation, 3);
    handle_key(&mut app, KeyEvent::from(KeyCode::Char('a')));
    let screen = render(&app);
    assert!(screen.contains("Accept False Positive: recorded"));
    assert!(screen.contains(view_title(InvestigationStep::Recommendation)));
}

fn key_strategy() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        prop::sample::select(vec!['1', '2', '3', '4', 'j', 'k', 'e', 'x', 'w', 'o', 'a', 'z'])
            .prop_map(KeyCode::Char),
        Just(KeyCode::Tab),
        Just(KeyCode::BackTab),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Any key sequence leaves the dashboard showing exactly the current step's view.
    #[test]
    fn displayed_view_follows_selection(
        seed in 1u64..1000,
        keys in prop::collection::vec(key_strategy(), 0..24),
    ) {
        let mut app = AppState::new(InvestigationStep::RiskAssessment, seed);
        for code in keys {
            handle_key(&mut app, KeyEvent::from(code));
        }
        prop_assert!(app.running);
        let screen = render(&app);
        prop_assert!(screen.contains(view_title(app.current_step())));
        prop_assert!(screen.contains("Overall Progress: 50%"));
    }
}
