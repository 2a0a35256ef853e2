use std::collections::{BTreeMap, HashMap};

/// Running item counts for every list seen in one pass over a document.
///
/// Owned by whoever walks the paragraphs; a fresh value per document.
#[derive(Debug, Default, Clone)]
pub struct ListCounters {
    counts: HashMap<u32, BTreeMap<u8, u32>>,
    last_level: HashMap<u32, u8>,
}

impl ListCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more item at `level` of `list_id` and return its count.
    ///
    /// Stepping back to the same or a shallower level drops the counters of
    /// every deeper level, so the next sub-list starts again from 1.
    pub fn advance(&mut self, list_id: u32, level: u8) -> u32 {
        let levels = self.counts.entry(list_id).or_default();

        let restarts = self
            .last_level
            .get(&list_id)
            .is_none_or(|&last| level <= last);
        if restarts {
            levels.retain(|&l, _| l <= level);
        }

        let count = levels.entry(level).or_insert(0);
        *count += 1;
        self.last_level.insert(list_id, level);
        *count
    }

    /// Current count at `level`, if an item has been counted there since the
    /// last restart.
    pub fn count(&self, list_id: u32, level: u8) -> Option<u32> {
        self.counts.get(&list_id)?.get(&level).copied()
    }

    pub fn last_level(&self, list_id: u32) -> Option<u8> {
        self.last_level.get(&list_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flat_list_counts_up() {
        let mut c = ListCounters::new();
        let counts: Vec<u32> = (0..4).map(|_| c.advance(1, 0)).collect();
        assert_eq!(counts, vec![1, 2, 3, 4]);
    }

    #[test]
    fn returning_to_shallower_level_restarts_deeper_counts() {
        let mut c = ListCounters::new();
        let levels = [0u8, 1, 1, 0, 1];
        let counts: Vec<(u8, u32)> = levels.iter().map(|&l| (l, c.advance(1, l))).collect();

        assert_eq!(counts, vec![(0, 1), (1, 1), (1, 2), (0, 2), (1, 1)]);
    }

    #[test]
    fn going_deeper_keeps_parent_count() {
        let mut c = ListCounters::new();
        c.advance(1, 0);
        c.advance(1, 1);
        c.advance(1, 2);

        assert_eq!(c.count(1, 0), Some(1));
        assert_eq!(c.count(1, 1), Some(1));
        assert_eq!(c.count(1, 2), Some(1));
        assert_eq!(c.last_level(1), Some(2));
    }

    #[test]
    fn lists_are_counted_independently() {
        let mut c = ListCounters::new();
        assert_eq!(c.advance(1, 0), 1);
        assert_eq!(c.advance(2, 0), 1);
        assert_eq!(c.advance(1, 0), 2);
        assert_eq!(c.advance(2, 0), 2);
        assert_eq!(c.count(3, 0), None);
    }
}
