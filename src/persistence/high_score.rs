use log::{error, info, warn};

use super::store::ScoreStore;

/// Persisted best score under a single store key
///
/// The best seen in this process is kept alongside the store, so a failed write
/// never lets a later, lower score take its place.
pub struct HighScore<S> {
    store: S,
    key: String,
    best: u32,
}

impl<S: ScoreStore> HighScore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        let mut high_score = Self {
            store,
            key: key.into(),
            best: 0,
        };
        high_score.best = high_score.load();
        high_score
    }

    /// Best score known to this process, stored or not
    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current stored value; absent or unreadable data counts as 0
    pub fn load(&self) -> u32 {
        let Some(raw) = self.store.get(&self.key) else {
            return 0;
        };

        parse_score(&raw).unwrap_or_else(|| {
            warn!("Ignoring malformed high score {:?} under {:?}", raw, self.key);
            0
        })
    }

    /// Persist `score` if it strictly beats both the stored value and the best
    /// already seen.
    ///
    /// Write failures are logged and otherwise swallowed. Returns whether the
    /// score was a new best.
    pub fn record(&mut self, score: u32) -> bool {
        let best = self.load().max(self.best);
        if score <= best {
            self.best = best;
            return false;
        }

        info!("New high score {} (was {})", score, best);
        self.best = score;
        if let Err(err) = self.store.set(&self.key, &score.to_string()) {
            error!("Failed to save high score: {:#}", err);
        }
        true
    }
}

/// Leading-digits integer parse: surrounding whitespace is skipped and trailing
/// junk ignored, so `" 12abc"` reads as 12.
fn parse_score(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    trimmed[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use anyhow::{Result, bail};

    /// Reads fine, never manages to write
    struct ReadOnlyStore(MemoryStore);

    impl ScoreStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            bail!("disk full")
        }
    }

    const KEY: &str = "snake_hi_simple";

    #[test]
    fn test_absent_value_reads_zero() {
        let high = HighScore::new(MemoryStore::new(), KEY);
        assert_eq!(high.load(), 0);
    }

    #[test]
    fn test_malformed_values_read_zero() {
        for raw in ["", "abc", "-5", "  ", "99999999999999"] {
            let high = HighScore::new(MemoryStore::with_value(KEY, raw), KEY);
            assert_eq!(high.load(), 0, "raw {raw:?}");
        }
    }

    #[test]
    fn test_lenient_parsing() {
        assert_eq!(parse_score("12"), Some(12));
        assert_eq!(parse_score(" 12\n"), Some(12));
        assert_eq!(parse_score("12abc"), Some(12));
        assert_eq!(parse_score("+4"), Some(4));
        assert_eq!(parse_score("x12"), None);
    }

    #[test]
    fn test_record_only_strictly_greater() {
        let mut high = HighScore::new(MemoryStore::with_value(KEY, "10"), KEY);

        assert!(!high.record(5));
        assert_eq!(high.load(), 10);

        assert!(!high.record(10));
        assert_eq!(high.load(), 10);

        assert!(high.record(15));
        assert_eq!(high.load(), 15);
        assert_eq!(high.store().get(KEY).as_deref(), Some("15"));
    }

    #[test]
    fn test_record_over_malformed_value() {
        let mut high = HighScore::new(MemoryStore::with_value(KEY, "garbage"), KEY);
        assert!(high.record(1));
        assert_eq!(high.load(), 1);
    }

    #[test]
    fn test_zero_score_never_recorded() {
        let mut high = HighScore::new(MemoryStore::new(), KEY);
        assert!(!high.record(0));
        assert_eq!(high.store().get(KEY), None);
    }

    #[test]
    fn test_failed_write_keeps_best_in_memory() {
        let mut high = HighScore::new(ReadOnlyStore(MemoryStore::with_value(KEY, "2")), KEY);
        assert_eq!(high.best(), 2);

        assert!(high.record(3));
        assert_eq!(high.best(), 3);
        assert_eq!(high.load(), 2);

        assert!(!high.record(1));
        assert!(!high.record(3));
        assert_eq!(high.best(), 3);

        assert!(high.record(4));
        assert_eq!(high.best(), 4);
    }

    #[test]
    fn test_best_tracks_store_on_load() {
        let mut high = HighScore::new(MemoryStore::with_value(KEY, "10"), KEY);
        assert_eq!(high.best(), 10);
        assert!(high.record(11));
        assert_eq!(high.best(), 11);
    }
}
