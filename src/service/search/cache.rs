use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::SearchState;

/// Searches kept for paging, keyed by the ID of the reply message.
///
/// Once the capacity is exceeded the search that was used least recently is
/// dropped; paging through a dropped search asks the user to start a new one.
#[derive(Debug)]
pub struct SearchCache {
    capacity: usize,
    entries: HashMap<u64, (SearchState, DateTime<Utc>)>,
}

impl SearchCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
        }
    }

    /// Stores the search, evicting the oldest ones beyond the capacity.
    ///
    /// # Arguments
    /// - `key` - ID of the message showing the search
    /// - `state` - Current state of the search
    /// - `time` - Time of the last use
    pub fn set(&mut self, key: u64, state: SearchState, time: DateTime<Utc>) {
        self.entries.insert(key, (state, time));

        while self.entries.len() > self.capacity {
            let Some(oldest) = self
                .entries
                .iter()
                .min_by_key(|(_, (_, time))| *time)
                .map(|(key, _)| *key)
            else {
                break;
            };
            self.entries.remove(&oldest);
        }
    }

    pub fn get(&self, key: u64) -> Option<&SearchState> {
        self.entries.get(&key).map(|(state, _)| state)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn evicts_oldest_search() {
        let mut cache = SearchCache::new(1);
        cache.set(
            1,
            SearchState::new("aaa", 10),
            Utc.with_ymd_and_hms(2021, 1, 3, 0, 0, 0).unwrap(),
        );
        cache.set(
            2,
            SearchState::new("ddd", 10),
            Utc.with_ymd_and_hms(2021, 1, 4, 0, 0, 0).unwrap(),
        );

        assert!(cache.get(1).is_none());
        assert_eq!(cache.get(2).map(|s| s.query.as_str()), Some("ddd"));
        assert_eq!(cache.len(), 1);
    }

    /// Tests that updating a search refreshes its time.
    ///
    /// Expected: The search that wasn't updated is evicted
    #[test]
    fn updating_keeps_search_alive() {
        let mut cache = SearchCache::new(2);
        let time = |day| Utc.with_ymd_and_hms(2021, 1, day, 0, 0, 0).unwrap();

        cache.set(1, SearchState::new("first", 10), time(1));
        cache.set(2, SearchState::new("second", 10), time(2));
        cache.set(1, SearchState::new("first", 10), time(3));
        cache.set(3, SearchState::new("third", 10), time(4));

        assert!(cache.get(1).is_some());
        assert!(cache.get(2).is_none());
        assert!(cache.get(3).is_some());
    }
}
