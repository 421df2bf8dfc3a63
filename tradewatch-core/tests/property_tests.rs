//! Property tests for navigation and chart-table invariants.
//!
//! Uses proptest to verify:
//! 1. Selection round-trip: the last selected step is always the current step
//! 2. Progress bounds: progress stays in [0, 100] and never drops as steps complete
//! 3. Table schema: column set and row count do not depend on the seed

use proptest::prelude::*;
use tradewatch_core::charts::{ChartKind, EvidenceCharts};
use tradewatch_core::export::{write_table, ExportFormat};
use tradewatch_core::rng::ChartSeeds;
use tradewatch_core::{compute_progress, InvestigationStep, NavigationState, StepStatus, TIMELINE};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_step() -> impl Strategy<Value = InvestigationStep> {
    (0..4usize).prop_map(|i| InvestigationStep::ALL[i])
}

fn arb_completion_mask() -> impl Strategy<Value = [bool; 4]> {
    any::<[bool; 4]>()
}

// ── 1. Selection round-trip ──────────────────────────────────────────

proptest! {
    #[test]
    fn selection_sequence_is_reproduced(steps in prop::collection::vec(arb_step(), 1..32)) {
        let mut nav = NavigationState::default();
        for &step in &steps {
            nav.select_step(step);
            prop_assert_eq!(nav.current_step(), step);
        }
        prop_assert_eq!(nav.current_step(), *steps.last().unwrap());
    }

    #[test]
    fn select_by_value_matches_select_in_place(from in arb_step(), to in arb_step()) {
        let mut in_place = NavigationState::new(from);
        in_place.select_step(to);
        prop_assert_eq!(NavigationState::new(from).select(to), in_place);
    }
}

// ── 2. Progress bounds ───────────────────────────────────────────────

proptest! {
    #[test]
    fn progress_is_bounded_and_monotone(mask in arb_completion_mask(), extra in 0..4usize) {
        let mut steps = TIMELINE;
        for (info, &done) in steps.iter_mut().zip(mask.iter()) {
            info.status = if done { StepStatus::Completed } else { StepStatus::Pending };
        }
        let before = compute_progress(&steps);
        prop_assert!(before <= 100);

        steps[extra].status = StepStatus::Completed;
        let after = compute_progress(&steps);
        prop_assert!(after <= 100);
        prop_assert!(after >= before);
    }
}

// ── 3. Table schema ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn tables_keep_schema_for_any_seed(seed in any::<u64>(), cycle in 0..1_000u64) {
        let charts = EvidenceCharts::generate(&ChartSeeds::new(seed), cycle);
        for kind in ChartKind::ALL {
            prop_assert_eq!(charts.row_count(kind), kind.row_count());

            let mut buf = Vec::new();
            write_table(&mut buf, &charts, kind, ExportFormat::Csv).unwrap();
            let text = String::from_utf8(buf).unwrap();
            let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());
            let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
            prop_assert_eq!(headers, kind.columns().to_vec());
            prop_assert_eq!(reader.records().count(), kind.row_count());
        }
    }
}

#[test]
fn fixed_timeline_progress_is_fifty() {
    assert_eq!(compute_progress(&TIMELINE), 50);
}

#[test]
fn all_completed_is_one_hundred() {
    let mut steps = TIMELINE;
    for info in steps.iter_mut() {
        info.status = StepStatus::Completed;
    }
    assert_eq!(compute_progress(&steps), 100);
}
