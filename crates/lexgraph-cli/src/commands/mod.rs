//! Command implementations.

mod context;
mod contradictions;
mod graph;
mod timeline;

pub use context::execute_context;
pub use contradictions::execute_contradictions;
pub use graph::execute_graph;
pub use timeline::execute_timeline;

use std::fs;

use lexgraph_domain::AnalysisResult;

use crate::error::Result;

/// Load and parse an analysis-result JSON file.
pub(crate) fn load_analysis(path: &str) -> Result<AnalysisResult> {
    let contents = fs::read_to_string(path)?;
    Ok(AnalysisResult::from_json(&contents)?)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::Write;

    use tempfile::NamedTempFile;

    /// A small but complete analysis file: three events, one HIGH
    /// contradiction over events 0 and 2, a shared entity.
    pub const SAMPLE_ANALYSIS: &str = r#"{
        "events": [
            {"date": "2023-01-10", "description": "Sözleşme imzalandı",
             "source_page": 1, "entities": ["Ahmet Yılmaz", "Ziraat Bankası"],
             "category": "Sözleşme"},
            {"date": "2023-03-05", "description": "Ödeme yapıldı",
             "source_page": 2, "entities": ["Ahmet Yılmaz"],
             "category": "Ödeme"},
            {"date": "2023-06-20", "description": "Dava açıldı",
             "source_page": 4, "entities": ["Ahmet Yılmaz", "Ziraat Bankası"],
             "category": "Mahkeme İşlemi"}
        ],
        "document_summary": "Özet",
        "total_events_found": 3,
        "contradictions": [
            {"title": "Ödeme tutarı çelişkisi", "contradiction_type": "FACTUAL_ERROR",
             "description": "Tutar iki yerde farklı", "involved_event_ids": [0, 2],
             "severity": "HIGH", "confidence_score": 0.9}
        ],
        "total_contradictions_found": 1,
        "risk_level": "HIGH"
    }"#;

    pub fn sample_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_ANALYSIS.as_bytes()).unwrap();
        file
    }
}
