//! Contradiction module - detected logical conflicts between events

use serde::{Deserialize, Serialize};

/// Logical category of a detected inconsistency.
///
/// Wire values are the upstream analyzer's SCREAMING_SNAKE strings; the
/// kebab-case spellings some exports use are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContradictionKind {
    /// A stated fact directly contradicts another stated fact
    #[serde(rename = "FACTUAL_ERROR", alias = "factual-error")]
    FactualError,

    /// Witness statements irreconcilably at odds with each other or with
    /// documented facts
    #[serde(rename = "WITNESS_CONFLICT", alias = "witness-conflict")]
    WitnessConflict,

    /// The sequence or duration of events is logically impossible
    #[serde(rename = "TIMELINE_IMPOSSIBILITY", alias = "timeline-impossibility")]
    TimelineImpossibility,

    /// Critical information is referenced but never provided
    #[serde(rename = "MISSING_INFO", alias = "missing-info")]
    MissingInfo,
}

impl ContradictionKind {
    /// Wire spelling of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContradictionKind::FactualError => "FACTUAL_ERROR",
            ContradictionKind::WitnessConflict => "WITNESS_CONFLICT",
            ContradictionKind::TimelineImpossibility => "TIMELINE_IMPOSSIBILITY",
            ContradictionKind::MissingInfo => "MISSING_INFO",
        }
    }
}

/// Potential impact of a contradiction on the case outcome.
///
/// Ordered: `High > Medium > Low`. High severity means the contradiction
/// could reverse the verdict or invalidate a key claim on its own.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Severity {
    /// Minor inconsistency with limited impact
    #[serde(rename = "LOW")]
    Low,

    /// Weakens a position but does not overturn it alone
    #[serde(rename = "MEDIUM")]
    Medium,

    /// Could reverse the verdict or invalidate a key claim
    #[serde(rename = "HIGH")]
    High,
}

impl Severity {
    /// Wire spelling of the severity.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }

    /// Parse a severity from a string, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "LOW" => Some(Severity::Low),
            "MEDIUM" => Some(Severity::Medium),
            "HIGH" => Some(Severity::High),
            _ => None,
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid severity: {}", s))
    }
}

/// A detected logical inconsistency, conflict, or gap between two or more
/// events in the timeline.
///
/// Events are referenced by their 0-based index into the event list. The
/// upstream analyzer is asked for at least two indices per contradiction,
/// but that is not guaranteed; consumers must tolerate short or
/// out-of-range lists (see [`crate::AnalysisResult::sanitize`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contradiction {
    /// Short title conveying the nature of the conflict.
    pub title: String,

    /// Logical category of the inconsistency.
    #[serde(rename = "contradiction_type", alias = "type", alias = "contradictionType")]
    pub kind: ContradictionKind,

    /// Attorney-grade explanation: which events conflict, how, and the
    /// potential legal consequence.
    pub description: String,

    /// 0-based indices of every involved event.
    #[serde(alias = "involvedEventIds")]
    pub involved_event_ids: Vec<usize>,

    /// Impact class of the contradiction.
    pub severity: Severity,

    /// Analyzer confidence that this is a genuine contradiction, in [0, 1].
    #[serde(alias = "confidenceScore")]
    pub confidence_score: f64,

    /// Turkish legal concept or rule the contradiction implicates.
    #[serde(default, alias = "legalBasis")]
    pub legal_basis: Option<String>,

    /// Concrete recommendation for the attorney.
    #[serde(default, alias = "recommendedAction")]
    pub recommended_action: Option<String>,
}

impl Contradiction {
    /// Field-level checks mirroring the upstream schema.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("title is empty".to_string());
        }
        if self.involved_event_ids.is_empty() {
            return Err("involved_event_ids is empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.confidence_score) {
            return Err(format!(
                "confidence_score {} out of range [0.0, 1.0]",
                self.confidence_score
            ));
        }
        Ok(())
    }
}
