//! Risk module - aggregate case risk derived from contradiction severities

use serde::{Deserialize, Serialize};

use crate::contradiction::{Contradiction, Severity};

/// Overall case risk level.
///
/// The rule: `None` when no contradictions were found, `High` when at least
/// one HIGH severity contradiction exists, `Medium` when at least one MEDIUM
/// but no HIGH, `Low` otherwise. The upstream analyzer reports the level
/// itself, but it is re-derivable and [`RiskLevel::from_contradictions`] is
/// the authority when they disagree.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum RiskLevel {
    /// No contradictions detected
    #[serde(rename = "NONE")]
    #[default]
    None,

    /// Only LOW severity contradictions
    #[serde(rename = "LOW")]
    Low,

    /// At least one MEDIUM severity contradiction, no HIGH
    #[serde(rename = "MEDIUM")]
    Medium,

    /// At least one HIGH severity contradiction
    #[serde(rename = "HIGH")]
    High,
}

impl RiskLevel {
    /// Derive the risk level from a contradiction list.
    pub fn from_contradictions(contradictions: &[Contradiction]) -> Self {
        let mut level = RiskLevel::None;
        for contradiction in contradictions {
            let candidate = match contradiction.severity {
                Severity::High => RiskLevel::High,
                Severity::Medium => RiskLevel::Medium,
                Severity::Low => RiskLevel::Low,
            };
            level = level.max(candidate);
        }
        level
    }

    /// Wire spelling of the risk level.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::None => "NONE",
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contradiction::ContradictionKind;

    fn with_severity(severity: Severity) -> Contradiction {
        Contradiction {
            title: "t".to_string(),
            kind: ContradictionKind::FactualError,
            description: "d".to_string(),
            involved_event_ids: vec![0, 1],
            severity,
            confidence_score: 0.5,
            legal_basis: None,
            recommended_action: None,
        }
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(RiskLevel::from_contradictions(&[]), RiskLevel::None);
    }

    #[test]
    fn test_any_high_wins() {
        let list = vec![
            with_severity(Severity::Low),
            with_severity(Severity::High),
            with_severity(Severity::Medium),
        ];
        assert_eq!(RiskLevel::from_contradictions(&list), RiskLevel::High);
    }

    #[test]
    fn test_medium_without_high() {
        let list = vec![with_severity(Severity::Low), with_severity(Severity::Medium)];
        assert_eq!(RiskLevel::from_contradictions(&list), RiskLevel::Medium);
    }

    #[test]
    fn test_only_low() {
        let list = vec![with_severity(Severity::Low)];
        assert_eq!(RiskLevel::from_contradictions(&list), RiskLevel::Low);
    }

    #[test]
    fn test_ordering() {
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
        assert!(RiskLevel::Low > RiskLevel::None);
    }
}
