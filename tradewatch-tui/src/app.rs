//! Application state: single-owner, main-thread only.
//!
//! All TUI state lives here. Navigation is a value updated on explicit
//! selection; chart tables are derived from `(seeds, cycle)` at draw time.

use tradewatch_core::charts::EvidenceCharts;
use tradewatch_core::rng::ChartSeeds;
use tradewatch_core::{InvestigationStep, NavigationState};

/// Tab inside the Risk Assessment evidence area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvidenceTab {
    Price,
    Liquidity,
    Alerts,
    Pattern,
}

impl EvidenceTab {
    pub const ALL: [EvidenceTab; 4] = [
        EvidenceTab::Price,
        EvidenceTab::Liquidity,
        EvidenceTab::Alerts,
        EvidenceTab::Pattern,
    ];

    pub fn index(self) -> usize {
        match self {
            EvidenceTab::Price => 0,
            EvidenceTab::Liquidity => 1,
            EvidenceTab::Alerts => 2,
            EvidenceTab::Pattern => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EvidenceTab::Price => "Price Analysis",
            EvidenceTab::Liquidity => "Liquidity Metrics",
            EvidenceTab::Alerts => "Related Alerts",
            EvidenceTab::Pattern => "Pattern Detection",
        }
    }

    pub fn next(self) -> EvidenceTab {
        Self::ALL[(self.index() + 1) % 4]
    }

    pub fn prev(self) -> EvidenceTab {
        Self::ALL[(self.index() + 3) % 4]
    }
}

/// Buttons that only acknowledge the press; none of them change navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    ExportDetails,
    ExportCharts,
    WebView,
    OverrideCreateCase,
    AcceptFalsePositive,
}

impl DashboardAction {
    pub fn label(self) -> &'static str {
        match self {
            DashboardAction::ExportDetails => "Export Details",
            DashboardAction::ExportCharts => "Export Charts",
            DashboardAction::WebView => "Web View",
            DashboardAction::OverrideCreateCase => "Override - Create Case",
            DashboardAction::AcceptFalsePositive => "Accept False Positive",
        }
    }

    /// Step whose view shows this button.
    pub fn home_step(self) -> InvestigationStep {
        match self {
            DashboardAction::ExportDetails | DashboardAction::ExportCharts => {
                InvestigationStep::RiskAssessment
            }
            DashboardAction::WebView
            | DashboardAction::OverrideCreateCase
            | DashboardAction::AcceptFalsePositive => InvestigationStep::Recommendation,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Top-level application state.
pub struct AppState {
    pub nav: NavigationState,
    pub evidence_tab: EvidenceTab,
    pub seeds: ChartSeeds,
    /// Render cycle; advances once per handled interaction.
    pub cycle: u64,
    pub running: bool,
    pub show_help: bool,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(initial_step: InvestigationStep, master_seed: u64) -> Self {
        Self {
            nav: NavigationState::new(initial_step),
            evidence_tab: EvidenceTab::Price,
            seeds: ChartSeeds::new(master_seed),
            cycle: 0,
            running: true,
            show_help: false,
            status_message: None,
        }
    }

    pub fn current_step(&self) -> InvestigationStep {
        self.nav.current_step()
    }

    /// Select a step. The next draw dispatches to its view.
    pub fn select_step(&mut self, step: InvestigationStep) {
        let from = self.nav.current_step();
        self.nav = self.nav.select(step);
        if from != step {
            tracing::info!(from = from.slug(), to = step.slug(), "step selected");
        }
    }

    /// Start a new render cycle; chart tables regenerate on the next draw.
    pub fn advance_cycle(&mut self) {
        self.cycle = self.cycle.wrapping_add(1);
    }

    /// Chart tables for the current render cycle.
    pub fn charts(&self) -> EvidenceCharts {
        EvidenceCharts::generate(&self.seeds, self.cycle)
    }

    /// Acknowledge a presentational button. Never changes navigation.
    pub fn trigger(&mut self, action: DashboardAction) {
        let home = action.home_step();
        if home != self.current_step() {
            self.set_warning(format!("{} is on the {} view", action.label(), home.label()));
            return;
        }
        tracing::info!(action = action.label(), step = home.slug(), "action pressed");
        self.set_status(format!("{}: recorded (demo only)", action.label()));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evidence_tab_cycle() {
        assert_eq!(EvidenceTab::Price.next(), EvidenceTab::Liquidity);
        assert_eq!(EvidenceTab::Pattern.next(), EvidenceTab::Price);
        assert_eq!(EvidenceTab::Price.prev(), EvidenceTab::Pattern);
        assert_eq!(EvidenceTab::Alerts.prev(), EvidenceTab::Liquidity);
    }

    #[test]
    fn starts_on_configured_step() {
        let app = AppState::new(InvestigationStep::RiskAssessment, 1);
        assert_eq!(app.current_step(), InvestigationStep::RiskAssessment);
        assert!(app.running);
        assert_eq!(app.cycle, 0);
    }

    #[test]
    fn charts_are_stable_within_a_cycle() {
        let mut app = AppState::new(InvestigationStep::RiskAssessment, 1);
        let first = app.charts();
        assert_eq!(first, app.charts());
        app.advance_cycle();
        assert_ne!(first.price, app.charts().price);
    }

    #[test]
    fn action_does_not_navigate() {
        let mut app = AppState::new(InvestigationStep::Recommendation, 1);
        app.trigger(DashboardAction::AcceptFalsePositive);
        assert_eq!(app.current_step(), InvestigationStep::Recommendation);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn action_off_its_view_warns() {
        let mut app = AppState::new(InvestigationStep::DataGathering, 1);
        app.trigger(DashboardAction::ExportCharts);
        assert_eq!(app.current_step(), InvestigationStep::DataGathering);
        assert!(matches!(app.status_message, Some((_, StatusLevel::Warning))));
    }
}
