//! TradeWatch TUI: investigation dashboard for a single market-surveillance
//! alert, with a step timeline sidebar and one view per investigation step.

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
