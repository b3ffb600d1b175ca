//! Citation module - resolving `[Olay #N]` markers in generated answers

use tracing::debug;

/// One citation marker found in an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    /// The 1-based number exactly as written in the marker.
    pub number: usize,

    /// The 0-based event index the marker resolves to, or `None` when the
    /// number is zero or beyond the event list (a dangling citation).
    pub event_index: Option<usize>,

    /// Byte range of the whole `[Olay #N]` marker within the answer.
    pub span: (usize, usize),
}

impl Citation {
    /// Whether the citation points at no existing event.
    pub fn is_dangling(&self) -> bool {
        self.event_index.is_none()
    }
}

const MARKER_PREFIX: &str = "[Olay #";

/// Scan an answer for `[Olay #N]` markers, in order of appearance.
///
/// Markers are kept as written: the same event cited twice yields two
/// citations, and a number outside `1..=event_count` yields a dangling
/// citation rather than being dropped. Malformed fragments (no digits, no
/// closing bracket, or a number too large to represent) are not citations
/// and are skipped.
pub fn extract_citations(answer: &str, event_count: usize) -> Vec<Citation> {
    let mut citations = Vec::new();
    let mut from = 0;

    while let Some(offset) = answer[from..].find(MARKER_PREFIX) {
        let start = from + offset;
        let digits_start = start + MARKER_PREFIX.len();
        let digits_len = answer[digits_start..]
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        let digits_end = digits_start + digits_len;

        if digits_len == 0 || !answer[digits_end..].starts_with(']') {
            from = digits_start;
            continue;
        }
        let end = digits_end + 1;

        // Parse can only fail on a digit run too long for usize; such a
        // fragment is not a plausible citation and is skipped.
        if let Ok(number) = answer[digits_start..digits_end].parse::<usize>() {
            let event_index = if number >= 1 && number <= event_count {
                Some(number - 1)
            } else {
                None
            };
            citations.push(Citation {
                number,
                event_index,
                span: (start, end),
            });
        }
        from = end;
    }

    let dangling = citations.iter().filter(|c| c.is_dangling()).count();
    if dangling > 0 {
        debug!(
            "{} of {} citations are dangling (event count: {})",
            dangling,
            citations.len(),
            event_count
        );
    }
    citations
}
