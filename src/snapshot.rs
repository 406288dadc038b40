//! Lazily computed, explicitly reloadable dataset snapshot.
//!
//! A `SnapshotCache` is an ordinary value owned by whoever serves views. The
//! first `get` loads the dataset and derives its metrics; later calls share the
//! same immutable `Arc<DatasetSnapshot>`. Only `reload` and `invalidate`
//! replace it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use crate::data::PostRecord;
use crate::errors::ReportError;
use crate::loader::DatasetLoader;
use crate::metrics::{CorpusMetrics, CorpusMetricsBuilder};

/// Records and metrics from one dataset load.
#[derive(Debug)]
pub struct DatasetSnapshot {
    records: Vec<PostRecord>,
    metrics: CorpusMetrics,
}

impl DatasetSnapshot {
    /// Pair loaded records with metrics derived from them.
    pub fn new(records: Vec<PostRecord>, metrics: CorpusMetrics) -> Self {
        Self { records, metrics }
    }

    /// Load through `loader` and derive metrics with `builder`.
    pub fn load(
        loader: &DatasetLoader,
        builder: &CorpusMetricsBuilder,
    ) -> Result<Self, ReportError> {
        let (records, metrics) = builder.build(loader)?;
        Ok(Self::new(records, metrics))
    }

    /// Loaded rows in dataset order.
    pub fn records(&self) -> &[PostRecord] {
        &self.records
    }

    /// Derived corpus metrics.
    pub fn metrics(&self) -> &CorpusMetrics {
        &self.metrics
    }
}

/// Holds at most one `DatasetSnapshot`, computed on first use.
pub struct SnapshotCache {
    loader: DatasetLoader,
    builder: CorpusMetricsBuilder,
    slot: RwLock<Option<Arc<DatasetSnapshot>>>,
    loads: AtomicU64,
}

impl SnapshotCache {
    /// Create an empty cache; nothing is read until `get`.
    pub fn new(loader: DatasetLoader, builder: CorpusMetricsBuilder) -> Self {
        Self {
            loader,
            builder,
            slot: RwLock::new(None),
            loads: AtomicU64::new(0),
        }
    }

    /// Return the cached snapshot, loading it first if needed.
    pub fn get(&self) -> Result<Arc<DatasetSnapshot>, ReportError> {
        if let Some(snapshot) = self.peek() {
            return Ok(snapshot);
        }
        let mut slot = self.slot.write().expect("snapshot cache poisoned");
        // Another caller may have filled the slot while we waited for the lock.
        if let Some(snapshot) = slot.as_ref() {
            return Ok(Arc::clone(snapshot));
        }
        let snapshot = Arc::new(self.load_once()?);
        *slot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Cached snapshot without triggering a load.
    pub fn peek(&self) -> Option<Arc<DatasetSnapshot>> {
        self.slot
            .read()
            .expect("snapshot cache poisoned")
            .as_ref()
            .map(Arc::clone)
    }

    /// Re-read the dataset and replace the cached snapshot.
    ///
    /// On failure the previous snapshot, if any, stays in place.
    pub fn reload(&self) -> Result<Arc<DatasetSnapshot>, ReportError> {
        let fresh = match self.load_once() {
            Ok(snapshot) => Arc::new(snapshot),
            Err(err) => {
                warn!(
                    "[prepstats:snapshot] reload of {} failed; keeping previous snapshot: {}",
                    self.loader.path().display(),
                    err
                );
                return Err(err);
            }
        };
        let mut slot = self.slot.write().expect("snapshot cache poisoned");
        *slot = Some(Arc::clone(&fresh));
        Ok(fresh)
    }

    /// Drop the cached snapshot; the next `get` loads again.
    pub fn invalidate(&self) {
        self.slot.write().expect("snapshot cache poisoned").take();
    }

    /// Number of dataset loads performed by this cache.
    pub fn load_count(&self) -> u64 {
        self.loads.load(Ordering::Relaxed)
    }

    fn load_once(&self) -> Result<DatasetSnapshot, ReportError> {
        self.loads.fetch_add(1, Ordering::Relaxed);
        let snapshot = DatasetSnapshot::load(&self.loader, &self.builder)?;
        info!(
            "[prepstats:snapshot] computed metrics for {} posts from {}",
            snapshot.metrics.post_count,
            self.loader.path().display()
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "original_selftext,processed_text,tokens_stemmed\n";

    fn cache_for(path: &std::path::Path) -> SnapshotCache {
        SnapshotCache::new(
            DatasetLoader::new(path),
            CorpusMetricsBuilder::with_default_triggers().unwrap(),
        )
    }

    #[test]
    fn get_loads_lazily_and_shares_snapshot() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("posts.csv");
        fs::write(&path, format!("{HEADER}I don't know,know,know\n")).unwrap();

        let cache = cache_for(&path);
        assert!(cache.peek().is_none());
        assert_eq!(cache.load_count(), 0);

        let first = cache.get().unwrap();
        let second = cache.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.load_count(), 1);
        assert_eq!(first.metrics().post_count, 1);
        assert_eq!(first.records().len(), 1);
    }

    #[test]
    fn file_changes_are_ignored_until_reload() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("posts.csv");
        fs::write(&path, format!("{HEADER}a,a,a\n")).unwrap();
        let cache = cache_for(&path);
        assert_eq!(cache.get().unwrap().metrics().post_count, 1);

        fs::write(&path, format!("{HEADER}a,a,a\nb,b,b\n")).unwrap();
        assert_eq!(cache.get().unwrap().metrics().post_count, 1);

        let reloaded = cache.reload().unwrap();
        assert_eq!(reloaded.metrics().post_count, 2);
        assert_eq!(cache.get().unwrap().metrics().post_count, 2);
        assert_eq!(cache.load_count(), 2);
    }

    #[test]
    fn failed_reload_keeps_previous_snapshot() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("posts.csv");
        fs::write(&path, format!("{HEADER}a,a,a\n")).unwrap();
        let cache = cache_for(&path);
        let before = cache.get().unwrap();

        fs::remove_file(&path).unwrap();
        let err = cache.reload().unwrap_err();
        assert!(matches!(err, ReportError::DataUnavailable { .. }));
        let after = cache.peek().expect("snapshot kept");
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn failed_first_load_caches_nothing() {
        let temp = tempdir().unwrap();
        let cache = cache_for(&temp.path().join("absent.csv"));
        assert!(cache.get().is_err());
        assert!(cache.peek().is_none());
        assert!(cache.get().is_err());
        assert_eq!(cache.load_count(), 2);
    }

    #[test]
    fn invalidate_forces_next_get_to_load() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("posts.csv");
        fs::write(&path, format!("{HEADER}a,a,a\n")).unwrap();
        let cache = cache_for(&path);
        let first = cache.get().unwrap();
        cache.invalidate();
        assert!(cache.peek().is_none());
        let second = cache.get().unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first.metrics(), second.metrics());
    }
}
