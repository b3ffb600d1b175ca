//! Footprint module - fixed node dimensions, per kind
//!
//! These values must match what a renderer actually draws for each node
//! kind; the solver guarantees non-overlap only for the boxes it was told
//! about.

/// Width and height of an event card in display units.
pub const EVENT_FOOTPRINT: (f64, f64) = (284.0, 134.0);

/// Width and height of an entity chip in display units.
pub const ENTITY_FOOTPRINT: (f64, f64) = (172.0, 68.0);

/// Footprint used for any node kind the table does not know. Layout never
/// fails on an unrecognized kind.
pub const DEFAULT_FOOTPRINT: (f64, f64) = (180.0, 80.0);

/// Look up the footprint for a node kind tag.
pub fn footprint(kind: &str) -> (f64, f64) {
    match kind {
        "event" => EVENT_FOOTPRINT,
        "entity" => ENTITY_FOOTPRINT,
        _ => DEFAULT_FOOTPRINT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds() {
        assert_eq!(footprint("event"), (284.0, 134.0));
        assert_eq!(footprint("entity"), (172.0, 68.0));
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        assert_eq!(footprint("annotation"), DEFAULT_FOOTPRINT);
        assert_eq!(footprint(""), DEFAULT_FOOTPRINT);
    }
}
