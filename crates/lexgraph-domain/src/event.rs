//! Event module - one date-bound legal event extracted from a document

use serde::{Deserialize, Serialize};

/// A single chronological legal event.
///
/// Events have no identifier of their own; their identity is the 0-based
/// position in the event list, and that index is what contradictions
/// reference. The list order is the extraction order and is never re-sorted
/// implicitly, even when parsed dates disagree with it (see
/// [`crate::date::chronology_violations`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseEvent {
    /// Calendar date string: `YYYY-MM-DD`, `YYYY-MM`, `YYYY`, a range
    /// (`start / end`), or the sentinel `Tarih Bilinmiyor` when unknown.
    pub date: String,

    /// Summary of the event in the source document's language.
    pub description: String,

    /// 1-indexed page of the source document where the event was found.
    #[serde(alias = "sourcePage")]
    pub source_page: u32,

    /// People, organizations, courts, or institutions involved in the
    /// event. Ordered; a name may repeat across events (and, in degenerate
    /// extractor output, within one event).
    #[serde(default)]
    pub entities: Vec<String>,

    /// Legal category label (free text).
    pub category: String,

    /// Optional note on why the event matters for the case.
    #[serde(default)]
    pub significance: Option<String>,
}

impl CaseEvent {
    /// Field-level checks mirroring the upstream schema.
    pub fn validate(&self) -> Result<(), String> {
        if self.date.is_empty() {
            return Err("date is empty".to_string());
        }
        if self.description.is_empty() {
            return Err("description is empty".to_string());
        }
        if self.source_page == 0 {
            return Err("source_page must be >= 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CaseEvent {
        CaseEvent {
            date: "2023-04-15".to_string(),
            description: "Dava dilekçesi mahkemeye sunuldu".to_string(),
            source_page: 3,
            entities: vec!["Ahmet Yılmaz".to_string()],
            category: "Dilekçe / Başvuru".to_string(),
            significance: None,
        }
    }

    #[test]
    fn test_valid_event() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_zero_source_page_rejected() {
        let mut event = sample();
        event.source_page = 0;
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_snake_case_wire_format() {
        let json = r#"{
            "date": "2022-11",
            "description": "Sözleşme imzalandı",
            "source_page": 1,
            "entities": [],
            "category": "Sözleşme / Anlaşma"
        }"#;
        let event: CaseEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.source_page, 1);
        assert_eq!(event.significance, None);
    }

    #[test]
    fn test_camel_case_alias_accepted() {
        let json = r#"{
            "date": "2021",
            "description": "Tanık dinlendi",
            "sourcePage": 7,
            "category": "Tanık İfadesi"
        }"#;
        let event: CaseEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.source_page, 7);
        assert!(event.entities.is_empty());
    }
}
