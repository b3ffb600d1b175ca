//! Context module - the grounding text block for the chat assistant
//!
//! The layout is fixed: header lines, an event section, a contradiction
//! section. Labels are plain ASCII Turkish so the block survives any
//! terminal or prompt encoding; `Belirtilmemis` stands in for every missing
//! optional field.

use lexgraph_domain::AnalysisResult;

/// Placeholder for optional fields the analysis left empty.
const UNSPECIFIED: &str = "Belirtilmemis";

/// Render the full case context as the assistant sees it.
///
/// Events and contradictions are numbered 1-based; the `[Olay #N]` markers
/// here are the same ones [`crate::extract_citations`] later looks for in
/// the assistant's answers.
pub fn render_case_context(result: &AnalysisResult) -> String {
    let summary = if result.document_summary.is_empty() {
        "Yok"
    } else {
        &result.document_summary
    };

    let mut lines: Vec<String> = vec![
        format!("Risk Seviyesi  : {}", result.risk_level.as_str()),
        format!("Toplam Olay    : {}", result.events.len()),
        format!("Toplam Celiski : {}", result.contradictions.len()),
        format!("Belge Ozeti    : {}", summary),
        String::new(),
        "--- OLAYLAR ---".to_string(),
    ];

    for (i, event) in result.events.iter().enumerate() {
        let parties = if event.entities.is_empty() {
            UNSPECIFIED.to_string()
        } else {
            event.entities.join(", ")
        };
        lines.push(String::new());
        lines.push(format!(
            "[Olay #{}]  Tarih: {}  |  Kategori: {}",
            i + 1,
            event.date,
            event.category
        ));
        lines.push(format!("  Aciklama   : {}", event.description));
        lines.push(format!("  Taraflar   : {}", parties));
        lines.push(format!(
            "  Hukuki Onem: {}",
            event.significance.as_deref().unwrap_or(UNSPECIFIED)
        ));
    }

    lines.push(String::new());
    lines.push("--- CELISKILER ---".to_string());

    for (i, contradiction) in result.contradictions.iter().enumerate() {
        let refs = if contradiction.involved_event_ids.is_empty() {
            UNSPECIFIED.to_string()
        } else {
            contradiction
                .involved_event_ids
                .iter()
                .map(|id| format!("Olay #{}", id + 1))
                .collect::<Vec<_>>()
                .join(" | ")
        };
        lines.push(String::new());
        lines.push(format!(
            "[Celiski #{}]  Tur: {}  |  Onem: {}",
            i + 1,
            contradiction.kind.as_str(),
            contradiction.severity.as_str()
        ));
        lines.push(format!("  Baslik     : {}", contradiction.title));
        lines.push(format!("  Aciklama   : {}", contradiction.description));
        lines.push(format!("  Ilgili     : {}", refs));
        lines.push(format!(
            "  Hukuki Dayanak: {}",
            contradiction.legal_basis.as_deref().unwrap_or(UNSPECIFIED)
        ));
        lines.push(format!(
            "  Tavsiye    : {}",
            contradiction
                .recommended_action
                .as_deref()
                .unwrap_or(UNSPECIFIED)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexgraph_domain::{
        CaseEvent, Contradiction, ContradictionKind, RiskLevel, Severity,
    };

    fn sample() -> AnalysisResult {
        AnalysisResult {
            events: vec![
                CaseEvent {
                    date: "2024-01-01".to_string(),
                    description: "Dava açıldı.".to_string(),
                    source_page: 1,
                    entities: vec!["Davacı".to_string(), "Davalı".to_string()],
                    category: "Mahkeme İşlemi".to_string(),
                    significance: Some("Önemli".to_string()),
                },
                CaseEvent {
                    date: "2024-02-15".to_string(),
                    description: "Tanık dinlendi.".to_string(),
                    source_page: 4,
                    entities: Vec::new(),
                    category: "Tanık İfadesi".to_string(),
                    significance: None,
                },
            ],
            document_summary: "Özet".to_string(),
            total_events_found: 2,
            primary_jurisdiction: None,
            case_number: None,
            contradictions: vec![Contradiction {
                title: "Tutar uyuşmazlığı".to_string(),
                kind: ContradictionKind::FactualError,
                description: "İki olay tutarsız.".to_string(),
                involved_event_ids: vec![0, 1],
                severity: Severity::High,
                confidence_score: 0.9,
                legal_basis: Some("HMK m.200".to_string()),
                recommended_action: None,
            }],
            total_contradictions_found: 1,
            risk_level: RiskLevel::High,
            analysis_notes: None,
        }
    }

    #[test]
    fn test_header_lines() {
        let text = render_case_context(&sample());
        assert!(text.starts_with("Risk Seviyesi  : HIGH"));
        assert!(text.contains("Toplam Olay    : 2"));
        assert!(text.contains("Toplam Celiski : 1"));
        assert!(text.contains("Belge Ozeti    : Özet"));
    }

    #[test]
    fn test_events_numbered_one_based() {
        let text = render_case_context(&sample());
        assert!(text.contains("[Olay #1]  Tarih: 2024-01-01  |  Kategori: Mahkeme İşlemi"));
        assert!(text.contains("[Olay #2]  Tarih: 2024-02-15"));
        assert!(text.contains("  Taraflar   : Davacı, Davalı"));
    }

    #[test]
    fn test_missing_optionals_get_placeholder() {
        let text = render_case_context(&sample());
        // Event 2 has no entities and no significance; the contradiction
        // has no recommendation.
        assert!(text.contains("  Taraflar   : Belirtilmemis"));
        assert!(text.contains("  Hukuki Onem: Belirtilmemis"));
        assert!(text.contains("  Tavsiye    : Belirtilmemis"));
    }

    #[test]
    fn test_contradiction_section() {
        let text = render_case_context(&sample());
        assert!(text.contains("--- CELISKILER ---"));
        assert!(text.contains("[Celiski #1]  Tur: FACTUAL_ERROR  |  Onem: HIGH"));
        assert!(text.contains("  Ilgili     : Olay #1 | Olay #2"));
        assert!(text.contains("  Hukuki Dayanak: HMK m.200"));
    }

    #[test]
    fn test_empty_result_still_renders_sections() {
        let result = AnalysisResult {
            events: Vec::new(),
            document_summary: String::new(),
            total_events_found: 0,
            primary_jurisdiction: None,
            case_number: None,
            contradictions: Vec::new(),
            total_contradictions_found: 0,
            risk_level: RiskLevel::None,
            analysis_notes: None,
        };
        let text = render_case_context(&result);
        assert!(text.contains("Belge Ozeti    : Yok"));
        assert!(text.contains("--- OLAYLAR ---"));
        assert!(text.contains("--- CELISKILER ---"));
    }
}
