//! Date module - sortable keys for the loosely formatted event date strings
//!
//! The upstream extractor is instructed to emit `YYYY-MM-DD`, falling back to
//! `YYYY-MM`, `YYYY`, a `start / end` range, or the literal sentinel
//! `Tarih Bilinmiyor` when the document gives no date at all. Real output
//! follows that contract closely but not perfectly, so parsing never fails;
//! anything unreadable is treated as an unknown date.

use crate::event::CaseEvent;

/// Sentinel the extractor uses for events without a recoverable date.
pub const UNKNOWN_DATE_SENTINEL: &str = "Tarih Bilinmiyor";

/// How much of a calendar date the raw string actually pins down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    /// Full `YYYY-MM-DD` date
    Day,

    /// `YYYY-MM`, day unknown
    Month,

    /// `YYYY` only
    Year,

    /// A `start / end` range; ordering uses the start bound
    Range,

    /// Sentinel, empty, or unparseable input
    Unknown,
}

/// A parsed event date with a total ordering key.
///
/// Unknown dates sort after every known date. Two dates with equal keys but
/// different precision (`"2021"` vs a range starting in 2021) compare equal
/// under [`EventDate::sort_key`], which is why this type exposes a key
/// instead of implementing `Ord` itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventDate {
    precision: DatePrecision,
    key: (i32, u8, u8),
}

const UNKNOWN_KEY: (i32, u8, u8) = (i32::MAX, u8::MAX, u8::MAX);

impl EventDate {
    /// Parse a raw date string. Never fails; unreadable input yields an
    /// unknown date.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNKNOWN_DATE_SENTINEL) {
            return Self::unknown();
        }

        if let Some((start, _end)) = trimmed.split_once('/') {
            let start = Self::parse_plain(start.trim());
            return match start.precision {
                DatePrecision::Unknown => Self::unknown(),
                _ => Self {
                    precision: DatePrecision::Range,
                    key: start.key,
                },
            };
        }

        Self::parse_plain(trimmed)
    }

    fn parse_plain(s: &str) -> Self {
        let mut parts = s.splitn(3, '-');
        let year = match parts.next().and_then(|p| p.parse::<i32>().ok()) {
            Some(y) if y > 0 => y,
            _ => return Self::unknown(),
        };
        let month = parts.next().map(|p| p.parse::<u8>());
        let day = parts.next().map(|p| p.parse::<u8>());

        match (month, day) {
            (None, _) => Self {
                precision: DatePrecision::Year,
                key: (year, 0, 0),
            },
            (Some(Ok(m)), None) if (1..=12).contains(&m) => Self {
                precision: DatePrecision::Month,
                key: (year, m, 0),
            },
            (Some(Ok(m)), Some(Ok(d)))
                if (1..=12).contains(&m) && (1..=31).contains(&d) =>
            {
                Self {
                    precision: DatePrecision::Day,
                    key: (year, m, d),
                }
            }
            _ => Self::unknown(),
        }
    }

    fn unknown() -> Self {
        Self {
            precision: DatePrecision::Unknown,
            key: UNKNOWN_KEY,
        }
    }

    /// The precision class of the parsed date.
    pub fn precision(&self) -> DatePrecision {
        self.precision
    }

    /// Total ordering key `(year, month, day)`. Missing components are `0`
    /// so coarser dates sort before finer dates in the same period; unknown
    /// dates sort after everything.
    pub fn sort_key(&self) -> (i32, u8, u8) {
        self.key
    }

    /// Whether the date carries any calendar information.
    pub fn is_known(&self) -> bool {
        self.precision != DatePrecision::Unknown
    }
}

/// Indices of events whose parsed date is earlier than a known date of some
/// preceding event. The event order itself is authoritative (it is the
/// identity contradictions reference); this is a diagnostic for flagging
/// suspicious extractor output, not a sorting aid.
pub fn chronology_violations(events: &[CaseEvent]) -> Vec<usize> {
    let mut violations = Vec::new();
    let mut max_seen: Option<(i32, u8, u8)> = None;

    for (index, event) in events.iter().enumerate() {
        let date = EventDate::parse(&event.date);
        if !date.is_known() {
            continue;
        }
        let key = date.sort_key();
        match max_seen {
            Some(max) if key < max => violations.push(index),
            _ => max_seen = Some(key),
        }
    }

    violations
}
