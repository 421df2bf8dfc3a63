//! Row types and random generators for each chart table.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use serde::Serialize;

use super::Tabular;

/// Opening price of the synthetic price walk.
pub const PRICE_START: f64 = 185.0;

/// Flat reference line drawn under the monthly pattern scores.
pub const PATTERN_BASELINE: f64 = 75.0;

const PRICE_STEP_STDDEV: f64 = 0.5;
const PRICE_INTERVAL_MINUTES: i64 = 15;
const VOLUME_BARS: usize = 10;
const ALERT_ROWS: usize = 20;
const PATTERN_MONTHS: u32 = 12;
const ACTIVITY_ROWS: usize = 20;

const LIQUIDITY_METRICS: [&str; 4] = [
    "Bid-Ask Spread",
    "Depth of Market",
    "Order Imbalance",
    "Execution Time",
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    #[serde(rename = "Time")]
    pub time: NaiveDateTime,
    #[serde(rename = "Price")]
    pub price: f64,
}

impl Tabular for PricePoint {
    const COLUMNS: &'static [&'static str] = &["Time", "Price"];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeBar {
    #[serde(rename = "Time")]
    pub label: String,
    #[serde(rename = "Volume")]
    pub volume: u32,
}

impl Tabular for VolumeBar {
    const COLUMNS: &'static [&'static str] = &["Time", "Volume"];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiquidityMetric {
    #[serde(rename = "Metric")]
    pub metric: &'static str,
    #[serde(rename = "Value")]
    pub value: f64,
}

impl Tabular for LiquidityMetric {
    const COLUMNS: &'static [&'static str] = &["Metric", "Value"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlertType {
    #[serde(rename = "Insider Trading")]
    InsiderTrading,
    #[serde(rename = "Spoofing")]
    Spoofing,
    #[serde(rename = "Wash Trading")]
    WashTrading,
    #[serde(rename = "Market Manipulation")]
    MarketManipulation,
}

impl AlertType {
    pub const ALL: [AlertType; 4] = [
        AlertType::InsiderTrading,
        AlertType::Spoofing,
        AlertType::WashTrading,
        AlertType::MarketManipulation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AlertType::InsiderTrading => "Insider Trading",
            AlertType::Spoofing => "Spoofing",
            AlertType::WashTrading => "Wash Trading",
            AlertType::MarketManipulation => "Market Manipulation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlertPoint {
    #[serde(rename = "Severity")]
    pub severity: u8,
    #[serde(rename = "Frequency")]
    pub frequency: u8,
    #[serde(rename = "Alert Type")]
    pub alert_type: AlertType,
    #[serde(rename = "Volume Impact")]
    pub volume_impact: f64,
}

impl Tabular for AlertPoint {
    const COLUMNS: &'static [&'static str] =
        &["Severity", "Frequency", "Alert Type", "Volume Impact"];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternPoint {
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Baseline")]
    pub baseline: f64,
}

impl Tabular for PatternPoint {
    const COLUMNS: &'static [&'static str] = &["Month", "Score", "Baseline"];
}

/// Cumulative activity of three securities at one sample index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActivityPoint {
    #[serde(rename = "Step")]
    pub step: usize,
    #[serde(rename = "Security A")]
    pub security_a: f64,
    #[serde(rename = "Security B")]
    pub security_b: f64,
    #[serde(rename = "Security C")]
    pub security_c: f64,
}

impl Tabular for ActivityPoint {
    const COLUMNS: &'static [&'static str] = &["Step", "Security A", "Security B", "Security C"];
}

impl ActivityPoint {
    pub fn values(&self) -> [f64; 3] {
        [self.security_a, self.security_b, self.security_c]
    }
}

/// Standard normal draw via the Box-Muller transform.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // (0, 1] keeps the logarithm finite.
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn price_start_time() -> NaiveDateTime {
    let date = NaiveDate::from_ymd_opt(2025, 9, 26).unwrap_or_default();
    let time = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default();
    date.and_time(time)
}

/// Random walk of prices at 15-minute intervals from 2025-09-26 09:00.
pub fn generate_price_data<R: Rng + ?Sized>(
    rng: &mut R,
    start_price: f64,
    num_points: usize,
) -> Vec<PricePoint> {
    let start = price_start_time();
    let mut price = start_price;
    (0..num_points)
        .map(|i| {
            price += PRICE_STEP_STDDEV * standard_normal(rng);
            PricePoint {
                time: start + Duration::minutes(PRICE_INTERVAL_MINUTES * i as i64),
                price: round_to(price, 2),
            }
        })
        .collect()
}

/// Ten five-minute volume bars labelled 10:00 through 10:45.
pub fn generate_volume_data<R: Rng + ?Sized>(rng: &mut R) -> Vec<VolumeBar> {
    (0..VOLUME_BARS)
        .map(|i| VolumeBar {
            label: format!("10:{:02}", i * 5),
            volume: rng.gen_range(6000..24000),
        })
        .collect()
}

pub fn generate_liquidity_data<R: Rng + ?Sized>(rng: &mut R) -> Vec<LiquidityMetric> {
    LIQUIDITY_METRICS
        .iter()
        .map(|&metric| LiquidityMetric {
            metric,
            value: round_to(rng.gen_range(0.1..5.0), 2),
        })
        .collect()
}

/// Related alerts. Callers seed this with a fixed seed so it is stable.
pub fn generate_alerts_data<R: Rng + ?Sized>(rng: &mut R) -> Vec<AlertPoint> {
    (0..ALERT_ROWS)
        .map(|_| AlertPoint {
            severity: rng.gen_range(1..10),
            frequency: rng.gen_range(1..15),
            alert_type: AlertType::ALL[rng.gen_range(0..AlertType::ALL.len())],
            volume_impact: rng.gen_range(1000.0..50000.0),
        })
        .collect()
}

/// Monthly pattern scores for 2025 against the fixed baseline.
pub fn generate_pattern_data<R: Rng + ?Sized>(rng: &mut R) -> Vec<PatternPoint> {
    (1..=PATTERN_MONTHS)
        .map(|month| PatternPoint {
            month: NaiveDate::from_ymd_opt(2025, month, 1)
                .map(|d| d.format("%Y-%m").to_string())
                .unwrap_or_default(),
            score: round_to(rng.gen_range(50.0..95.0), 1),
            baseline: PATTERN_BASELINE,
        })
        .collect()
}

/// Cumulative standard-normal walks for three securities.
pub fn generate_activity_data<R: Rng + ?Sized>(rng: &mut R) -> Vec<ActivityPoint> {
    let mut totals = [0.0f64; 3];
    (0..ACTIVITY_ROWS)
        .map(|step| {
            for total in totals.iter_mut() {
                *total += standard_normal(rng);
            }
            ActivityPoint {
                step,
                security_a: totals[0],
                security_b: totals[1],
                security_c: totals[2],
            }
        })
        .collect()
}
