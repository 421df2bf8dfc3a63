//! TradeWatch Core: investigation workflow model for the surveillance dashboard.
//!
//! This crate contains everything the dashboard shows that is not terminal I/O:
//! - The four fixed investigation steps and their static timeline attributes
//! - Navigation state (the currently selected step) and overall progress
//! - Static alert, finding and risk-factor content for each view
//! - Synthetic chart-table generators with fixed column schemas
//! - Deterministic per-chart RNG derivation
//! - TOML configuration and CSV/JSON table export

pub mod charts;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod navigation;
pub mod rng;
pub mod step;

pub use config::DashboardConfig;
pub use error::{ConfigError, ExportError, ParseStepError};
pub use navigation::{compute_progress, NavigationState};
pub use step::{InvestigationStep, StepInfo, StepStatus, TIMELINE};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: state and table types can cross thread boundaries.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<InvestigationStep>();
        require_sync::<InvestigationStep>();
        require_send::<NavigationState>();
        require_sync::<NavigationState>();
        require_send::<StepInfo>();
        require_sync::<StepInfo>();
        require_send::<DashboardConfig>();
        require_sync::<DashboardConfig>();
        require_send::<charts::EvidenceCharts>();
        require_sync::<charts::EvidenceCharts>();
        require_send::<rng::ChartSeeds>();
        require_sync::<rng::ChartSeeds>();
    }
}
