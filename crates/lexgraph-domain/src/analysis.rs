//! Analysis module - the merged envelope the upstream analysis service emits
//!
//! A deep analysis runs in two phases (timeline extraction, then logic
//! analysis over the extracted events) and the service merges both into one
//! flat JSON object. When the logic phase fails the service still returns
//! the timeline half; the contradiction fields default accordingly, so a
//! timeline-only document parses as a valid degraded result.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::contradiction::Contradiction;
use crate::error::DomainError;
use crate::event::CaseEvent;
use crate::risk::RiskLevel;

/// The complete output of one document analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Chronologically ordered list of extracted legal events.
    pub events: Vec<CaseEvent>,

    /// Executive summary of the document.
    #[serde(alias = "documentSummary")]
    pub document_summary: String,

    /// Reported event count; auto-corrected by [`AnalysisResult::sanitize`]
    /// when it disagrees with `events.len()`.
    #[serde(default, alias = "totalEventsFound")]
    pub total_events_found: usize,

    /// Primary court or jurisdiction, if identifiable.
    #[serde(default, alias = "primaryJurisdiction")]
    pub primary_jurisdiction: Option<String>,

    /// Official case/docket number (Esas No.), if present.
    #[serde(default, alias = "caseNumber")]
    pub case_number: Option<String>,

    /// Detected contradictions. Empty in degraded results.
    #[serde(default)]
    pub contradictions: Vec<Contradiction>,

    /// Reported contradiction count; auto-corrected by `sanitize`.
    #[serde(default, alias = "totalContradictionsFound")]
    pub total_contradictions_found: usize,

    /// Aggregate case risk as reported by the analyzer.
    #[serde(default, alias = "riskLevel")]
    pub risk_level: RiskLevel,

    /// Meta-observation about overall document reliability.
    #[serde(default, alias = "analysisNotes")]
    pub analysis_notes: Option<String>,
}

impl AnalysisResult {
    /// Parse and validate an analysis result from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let result: Self = serde_json::from_str(json)?;
        result.validate()?;
        Ok(result)
    }

    /// Field-level checks mirroring the upstream schema. Does not check
    /// cross-references; those are repaired, not rejected, by `sanitize`.
    pub fn validate(&self) -> Result<(), DomainError> {
        for (index, event) in self.events.iter().enumerate() {
            event
                .validate()
                .map_err(|e| DomainError::Validation(format!("event {}: {}", index, e)))?;
        }
        for (index, contradiction) in self.contradictions.iter().enumerate() {
            contradiction
                .validate()
                .map_err(|e| DomainError::Validation(format!("contradiction {}: {}", index, e)))?;
        }
        Ok(())
    }

    /// Repair the inconsistencies real analyzer output is known to contain.
    ///
    /// - Event references outside `0..events.len()` are dropped. A
    ///   contradiction left with no valid reference falls back to `[0]`
    ///   when at least one event exists, matching the upstream service.
    /// - Surviving references are de-duplicated and sorted.
    /// - The reported totals are corrected to the actual list lengths.
    /// - The risk level is recomputed from the surviving contradictions.
    pub fn sanitize(&mut self) {
        let total_events = self.events.len();

        for (index, contradiction) in self.contradictions.iter_mut().enumerate() {
            let ids = &mut contradiction.involved_event_ids;
            let before = ids.len();
            ids.retain(|&id| id < total_events);
            if ids.len() != before {
                warn!(
                    "Contradiction {}: dropped {} out-of-range event ids (total events: {})",
                    index,
                    before - ids.len(),
                    total_events
                );
            }
            if ids.is_empty() && total_events > 0 {
                ids.push(0);
            }
            ids.sort_unstable();
            ids.dedup();
        }

        if self.total_events_found != total_events {
            warn!(
                "total_events_found ({}) != actual count ({}), correcting",
                self.total_events_found, total_events
            );
            self.total_events_found = total_events;
        }

        let actual = self.contradictions.len();
        if self.total_contradictions_found != actual {
            warn!(
                "total_contradictions_found ({}) != actual count ({}), correcting",
                self.total_contradictions_found, actual
            );
            self.total_contradictions_found = actual;
        }

        let derived = RiskLevel::from_contradictions(&self.contradictions);
        if self.risk_level != derived {
            warn!(
                "risk_level {} disagrees with severities, correcting to {}",
                self.risk_level.as_str(),
                derived.as_str()
            );
            self.risk_level = derived;
        }
    }

    /// Sort contradictions by severity (HIGH first), then by confidence
    /// score descending. Stable, so analyzer order breaks remaining ties.
    pub fn sort_contradictions(&mut self) {
        self.contradictions.sort_by(|a, b| {
            b.severity
                .cmp(&a.severity)
                .then_with(|| b.confidence_score.total_cmp(&a.confidence_score))
        });
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::contradiction::{ContradictionKind, Severity};
    use proptest::prelude::*;

    fn arb_result() -> impl Strategy<Value = AnalysisResult> {
        (0usize..6, proptest::collection::vec(proptest::collection::vec(0usize..12, 0..6), 0..4))
            .prop_map(|(event_count, id_lists)| {
                let events = (0..event_count)
                    .map(|i| CaseEvent {
                        date: "2023-01-01".to_string(),
                        description: format!("olay {}", i),
                        source_page: 1,
                        entities: Vec::new(),
                        category: "Diğer".to_string(),
                        significance: None,
                    })
                    .collect();
                let contradictions = id_lists
                    .into_iter()
                    .map(|ids| Contradiction {
                        title: "t".to_string(),
                        kind: ContradictionKind::FactualError,
                        description: "d".to_string(),
                        involved_event_ids: ids,
                        severity: Severity::Medium,
                        confidence_score: 0.5,
                        legal_basis: None,
                        recommended_action: None,
                    })
                    .collect();
                AnalysisResult {
                    events,
                    document_summary: "özet".to_string(),
                    total_events_found: 0,
                    primary_jurisdiction: None,
                    case_number: None,
                    contradictions,
                    total_contradictions_found: 0,
                    risk_level: RiskLevel::None,
                    analysis_notes: None,
                }
            })
    }

    proptest! {
        /// Property: after sanitize, every reference is in range, sorted,
        /// and de-duplicated, and the totals match the lists
        #[test]
        fn test_sanitize_postconditions(mut r in arb_result()) {
            r.sanitize();
            let total_events = r.events.len();
            for c in &r.contradictions {
                for window in c.involved_event_ids.windows(2) {
                    prop_assert!(window[0] < window[1]);
                }
                if total_events == 0 {
                    prop_assert!(c.involved_event_ids.is_empty());
                } else {
                    for &id in &c.involved_event_ids {
                        prop_assert!(id < total_events);
                    }
                }
            }
            prop_assert_eq!(r.total_events_found, total_events);
            prop_assert_eq!(r.total_contradictions_found, r.contradictions.len());
        }

        /// Property: sanitize is idempotent
        #[test]
        fn test_sanitize_idempotent(mut r in arb_result()) {
            r.sanitize();
            let once = r.clone();
            r.sanitize();
            prop_assert_eq!(r, once);
        }
    }
}
