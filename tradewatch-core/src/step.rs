//! Investigation steps and the static timeline shown in the sidebar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseStepError;

/// One stage of the fixed four-stage investigation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestigationStep {
    DataGathering,
    PatternAnalysis,
    RiskAssessment,
    Recommendation,
}

impl InvestigationStep {
    /// All steps in timeline order.
    pub const ALL: [InvestigationStep; 4] = [
        InvestigationStep::DataGathering,
        InvestigationStep::PatternAnalysis,
        InvestigationStep::RiskAssessment,
        InvestigationStep::Recommendation,
    ];

    pub fn index(self) -> usize {
        match self {
            InvestigationStep::DataGathering => 0,
            InvestigationStep::PatternAnalysis => 1,
            InvestigationStep::RiskAssessment => 2,
            InvestigationStep::Recommendation => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            InvestigationStep::DataGathering => "Data Gathering",
            InvestigationStep::PatternAnalysis => "Pattern Analysis",
            InvestigationStep::RiskAssessment => "Risk Assessment",
            InvestigationStep::Recommendation => "Recommendation",
        }
    }

    /// Machine name used in config files and on the command line.
    pub fn slug(self) -> &'static str {
        match self {
            InvestigationStep::DataGathering => "data_gathering",
            InvestigationStep::PatternAnalysis => "pattern_analysis",
            InvestigationStep::RiskAssessment => "risk_assessment",
            InvestigationStep::Recommendation => "recommendation",
        }
    }

    /// Next step in timeline order, wrapping after the last.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous step in timeline order, wrapping before the first.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Static timeline attributes for this step.
    pub fn info(self) -> &'static StepInfo {
        &TIMELINE[self.index()]
    }

    pub fn is_last(self) -> bool {
        self.index() + 1 == Self::ALL.len()
    }
}

impl fmt::Display for InvestigationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InvestigationStep {
    type Err = ParseStepError;

    /// Accepts the slug or the display label, case-insensitively, with
    /// spaces, dashes and underscores treated alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        Self::ALL
            .into_iter()
            .find(|step| step.slug() == normalized)
            .ok_or_else(|| ParseStepError(s.to_string()))
    }
}

/// Status attached statically to each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    InProgress,
    Pending,
}

impl StepStatus {
    pub fn label(self) -> &'static str {
        match self {
            StepStatus::Completed => "Completed",
            StepStatus::InProgress => "In Progress",
            StepStatus::Pending => "Pending",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Timeline card contents for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub step: InvestigationStep,
    pub status: StepStatus,
    pub icon: &'static str,
    pub description: &'static str,
    pub timestamp: &'static str,
}

/// The investigation timeline. Defined once, never mutated.
pub const TIMELINE: [StepInfo; 4] = [
    StepInfo {
        step: InvestigationStep::DataGathering,
        status: StepStatus::Completed,
        icon: "✅",
        description: "Collect trade data and market context.",
        timestamp: "24/09/2025, 10:25:12 am",
    },
    StepInfo {
        step: InvestigationStep::PatternAnalysis,
        status: StepStatus::Completed,
        icon: "✅",
        description: "Analyze trading patterns and behaviors.",
        timestamp: "24/09/2025, 10:35:45 am",
    },
    StepInfo {
        step: InvestigationStep::RiskAssessment,
        status: StepStatus::InProgress,
        icon: "⏳",
        description: "Evaluate compliance risk exposure.",
        timestamp: "24/09/2025, 10:38:22 am",
    },
    StepInfo {
        step: InvestigationStep::Recommendation,
        status: StepStatus::Pending,
        icon: "⚪",
        description: "AI-driven investigation outcome.",
        timestamp: "24/09/2025, 11:15:00 am",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_cycle() {
        assert_eq!(InvestigationStep::DataGathering.next(), InvestigationStep::PatternAnalysis);
        assert_eq!(InvestigationStep::Recommendation.next(), InvestigationStep::DataGathering);
        assert_eq!(InvestigationStep::DataGathering.prev(), InvestigationStep::Recommendation);
        assert_eq!(InvestigationStep::RiskAssessment.prev(), InvestigationStep::PatternAnalysis);
    }

    #[test]
    fn step_from_index() {
        for i in 0..4 {
            let step = InvestigationStep::from_index(i).unwrap();
            assert_eq!(step.index(), i);
        }
        assert!(InvestigationStep::from_index(4).is_none());
    }

    #[test]
    fn timeline_is_in_step_order() {
        for (i, info) in TIMELINE.iter().enumerate() {
            assert_eq!(info.step.index(), i);
            assert_eq!(info.step.info(), info);
        }
    }

    #[test]
    fn timeline_statuses() {
        let statuses: Vec<StepStatus> = TIMELINE.iter().map(|s| s.status).collect();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Completed,
                StepStatus::Completed,
                StepStatus::InProgress,
                StepStatus::Pending,
            ]
        );
    }

    #[test]
    fn parse_accepts_slug_and_label() {
        assert_eq!(
            "risk_assessment".parse::<InvestigationStep>().unwrap(),
            InvestigationStep::RiskAssessment
        );
        assert_eq!(
            "Pattern Analysis".parse::<InvestigationStep>().unwrap(),
            InvestigationStep::PatternAnalysis
        );
        assert_eq!(
            "data-gathering".parse::<InvestigationStep>().unwrap(),
            InvestigationStep::DataGathering
        );
        assert_eq!(
            " RECOMMENDATION ".parse::<InvestigationStep>().unwrap(),
            InvestigationStep::Recommendation
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "triage".parse::<InvestigationStep>().unwrap_err();
        assert!(err.to_string().contains("triage"));
    }

    #[test]
    fn only_recommendation_is_last() {
        let last: Vec<_> = InvestigationStep::ALL.into_iter().filter(|s| s.is_last()).collect();
        assert_eq!(last, vec![InvestigationStep::Recommendation]);
    }
}
