//! Synthetic chart tables for the analysis views.
//!
//! Each table has a fixed column schema and row count; only the values are
//! random. Tables are regenerated from scratch for every render cycle.

mod generators;

use serde::{Deserialize, Serialize};

use crate::rng::ChartSeeds;

pub use generators::{
    generate_activity_data, generate_alerts_data, generate_liquidity_data,
    generate_pattern_data, generate_price_data, generate_volume_data, standard_normal,
    ActivityPoint, AlertPoint, AlertType, LiquidityMetric, PatternPoint, PricePoint, VolumeBar,
    PATTERN_BASELINE, PRICE_START,
};

/// A row type with a fixed, seed-independent column schema.
pub trait Tabular: Serialize {
    /// Column names, in serialization order.
    const COLUMNS: &'static [&'static str];
}

/// Every chart table the dashboard draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Price,
    Volume,
    Liquidity,
    Alerts,
    Pattern,
    Activity,
}

impl ChartKind {
    pub const ALL: [ChartKind; 6] = [
        ChartKind::Price,
        ChartKind::Volume,
        ChartKind::Liquidity,
        ChartKind::Alerts,
        ChartKind::Pattern,
        ChartKind::Activity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Price => "price",
            ChartKind::Volume => "volume",
            ChartKind::Liquidity => "liquidity",
            ChartKind::Alerts => "alerts",
            ChartKind::Pattern => "pattern",
            ChartKind::Activity => "activity",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Price => "Price Movement Timeline",
            ChartKind::Volume => "Volume Analysis",
            ChartKind::Liquidity => "Current Liquidity Profile",
            ChartKind::Alerts => "Alert Distribution by Type and Impact",
            ChartKind::Pattern => "Monthly Pattern Score Trend",
            ChartKind::Activity => "Trading Activity",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ChartKind::Price => PricePoint::COLUMNS,
            ChartKind::Volume => VolumeBar::COLUMNS,
            ChartKind::Liquidity => LiquidityMetric::COLUMNS,
            ChartKind::Alerts => AlertPoint::COLUMNS,
            ChartKind::Pattern => PatternPoint::COLUMNS,
            ChartKind::Activity => ActivityPoint::COLUMNS,
        }
    }

    pub fn row_count(self) -> usize {
        match self {
            ChartKind::Price => 30,
            ChartKind::Volume => 10,
            ChartKind::Liquidity => 4,
            ChartKind::Alerts => 20,
            ChartKind::Pattern => 12,
            ChartKind::Activity => 20,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// All tables for one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvidenceCharts {
    pub price: Vec<PricePoint>,
    pub volume: Vec<VolumeBar>,
    pub liquidity: Vec<LiquidityMetric>,
    pub alerts: Vec<AlertPoint>,
    pub pattern: Vec<PatternPoint>,
    pub activity: Vec<ActivityPoint>,
}

impl EvidenceCharts {
    pub fn generate(seeds: &ChartSeeds, cycle: u64) -> Self {
        Self {
            price: generate_price_data(
                &mut seeds.rng_for(ChartKind::Price, cycle),
                PRICE_START,
                ChartKind::Price.row_count(),
            ),
            volume: generate_volume_data(&mut seeds.rng_for(ChartKind::Volume, cycle)),
            liquidity: generate_liquidity_data(&mut seeds.rng_for(ChartKind::Liquidity, cycle)),
            alerts: generate_alerts_data(&mut seeds.rng_for(ChartKind::Alerts, cycle)),
            pattern: generate_pattern_data(&mut seeds.rng_for(ChartKind::Pattern, cycle)),
            activity: generate_activity_data(&mut seeds.rng_for(ChartKind::Activity, cycle)),
        }
    }

    pub fn row_count(&self, kind: ChartKind) -> usize {
        match kind {
            ChartKind::Price => self.price.len(),
            ChartKind::Volume => self.volume.len(),
            ChartKind::Liquidity => self.liquidity.len(),
            ChartKind::Alerts => self.alerts.len(),
            ChartKind::Pattern => self.pattern.len(),
            ChartKind::Activity => self.activity.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tables_have_declared_row_counts() {
        let charts = EvidenceCharts::generate(&ChartSeeds::new(11), 0);
        for kind in ChartKind::ALL {
            assert_eq!(charts.row_count(kind), kind.row_count(), "{}", kind.name());
        }
    }

    #[test]
    fn same_cycle_reproduces_tables() {
        let seeds = ChartSeeds::new(11);
        assert_eq!(
            EvidenceCharts::generate(&seeds, 4),
            EvidenceCharts::generate(&seeds, 4)
        );
    }

    #[test]
    fn next_cycle_changes_prices() {
        let seeds = ChartSeeds::new(11);
        let a = EvidenceCharts::generate(&seeds, 4);
        let b = EvidenceCharts::generate(&seeds, 5);
        assert_ne!(a.price, b.price);
        assert_eq!(a.alerts, b.alerts);
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in ChartKind::ALL {
            assert_eq!(ChartKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(ChartKind::from_name("heatmap"), None);
    }
}
