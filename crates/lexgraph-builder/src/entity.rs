//! Entity module - name classification and deterministic node ids
//!
//! Entity names arrive as free text extracted from Turkish legal documents.
//! Classification is a substring heuristic over known judicial and
//! institutional tokens; it exists to pick a node style, is wrong for names
//! carrying none of the tokens, and must never be treated as authoritative
//! by anything but the renderer. It lives behind [`classify_entity`] so a
//! real classifier could replace it without touching graph construction.

use serde::{Deserialize, Serialize};

/// Heuristic classification of an entity name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A natural person (the default when no token matches).
    Person,

    /// A company, institution, or administrative body.
    Organization,

    /// A court or other judicial body.
    Court,
}

/// Tokens naming courts and judicial bodies. Checked first.
const COURT_TOKENS: &[&str] = &[
    "mahkeme",
    "daire",
    "yargıtay",
    "anayasa",
    "savcılık",
    "cumhuriyet",
    "bölge adliye",
];

/// Corporate and institutional tokens. Checked when no court token matches.
const ORGANIZATION_TOKENS: &[&str] = &[
    "a.ş",
    "ltd",
    "şirketi",
    "müdürlüğü",
    "noter",
    "icra",
    "heyet",
    "kurul",
    "bilirkişi",
    "banka",
    "vakıf",
];

/// Classify an entity name by case-insensitive substring match, court
/// tokens before organization tokens, person as the fallback.
///
/// Lowercasing is Unicode-aware so the dotted and undotted i forms in the
/// token lists compare correctly against mixed-case input.
pub fn classify_entity(name: &str) -> EntityKind {
    let lowered = name.to_lowercase();
    if COURT_TOKENS.iter().any(|token| lowered.contains(token)) {
        return EntityKind::Court;
    }
    if ORGANIZATION_TOKENS.iter().any(|token| lowered.contains(token)) {
        return EntityKind::Organization;
    }
    EntityKind::Person
}

/// Derive the node id for an entity name.
///
/// Alphanumeric characters pass through; every other character is replaced
/// by its hex codepoint wrapped in `-` delimiters. Since `-` is itself
/// never a pass-through character the encoding is injective: two distinct
/// names can never produce the same id.
pub fn entity_node_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len() + 8);
    id.push_str("entity-");
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            id.push(ch);
        } else {
            id.push_str(&format!("-{:x}-", ch as u32));
        }
    }
    id
}
