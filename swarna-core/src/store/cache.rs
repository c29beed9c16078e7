//! Per-session series cache.
//!
//! Keyed by `(path, schema)`. A hit never touches storage. `invalidate`
//! drops every entry for a path, so the next load re-reads it; nothing stale
//! survives an invalidation. Failed loads are not cached.
//!
//! The cache is a plain value owned by whoever composes the session; there
//! is no process-wide instance.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::LoadError;
use super::ingest::LoadReport;
use super::source::{CsvFileSource, ForecastSource};
use crate::schema::SchemaConfig;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    path: PathBuf,
    schema: SchemaConfig,
}

pub struct SeriesCache {
    source: Box<dyn ForecastSource>,
    entries: HashMap<CacheKey, LoadReport>,
}

impl SeriesCache {
    pub fn new(source: impl ForecastSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            entries: HashMap::new(),
        }
    }

    /// Cache backed by CSV files on disk.
    pub fn csv() -> Self {
        Self::new(CsvFileSource)
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Return the cached report for `path`, loading it on a miss.
    ///
    /// The returned report shares its series with the cache through an `Arc`.
    pub fn get_or_load(
        &mut self,
        path: &Path,
        schema: &SchemaConfig,
    ) -> Result<LoadReport, LoadError> {
        let key = CacheKey {
            path: path.to_path_buf(),
            schema: schema.clone(),
        };
        if let Some(report) = self.entries.get(&key) {
            debug!(path = %path.display(), "series cache hit");
            return Ok(report.clone());
        }

        debug!(path = %path.display(), source = self.source.name(), "series cache miss");
        let report = self.source.read(path, schema)?;
        self.entries.insert(key, report.clone());
        Ok(report)
    }

    /// Drop every cached entry for `path`. Returns how many were removed.
    pub fn invalidate(&mut self, path: &Path) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| key.path.as_path() != path);
        let removed = before - self.entries.len();
        debug!(path = %path.display(), removed, "series cache invalidated");
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, path: &Path, schema: &SchemaConfig) -> bool {
        self.entries.contains_key(&CacheKey {
            path: path.to_path_buf(),
            schema: schema.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::csv()
    }
}

impl std::fmt::Debug for SeriesCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeriesCache")
            .field("source", &self.source.name())
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ingest::load_reader;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// In-memory source that counts reads and serves swappable content.
    struct CountingSource {
        reads: AtomicUsize,
        content: Mutex<String>,
    }

    impl CountingSource {
        fn new(content: &str) -> Arc<Self> {
            Arc::new(Self {
                reads: AtomicUsize::new(0),
                content: Mutex::new(content.to_string()),
            })
        }

        fn reads(&self) -> usize {
            self.reads.load(Ordering::SeqCst)
        }

        fn replace(&self, content: &str) {
            *self.content.lock().unwrap() = content.to_string();
        }
    }

    impl ForecastSource for CountingSource {
        fn name(&self) -> &str {
            "counting"
        }

        fn read(&self, path: &Path, schema: &SchemaConfig) -> Result<LoadReport, LoadError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            let content = self.content.lock().unwrap().clone();
            load_reader(content.as_bytes(), &path.display().to_string(), schema)
        }
    }

    const V1: &str = "Date,Predicted_Price\n18-05-2025,1000\n19-05-2025,1010\n";
    const V2: &str = "Date,Predicted_Price\n18-05-2025,2000\n";

    #[test]
    fn repeated_loads_read_storage_once() {
        let source = CountingSource::new(V1);
        let mut cache = SeriesCache::new(source.clone());
        let schema = SchemaConfig::default();
        let path = Path::new("forecast.csv");

        let a = cache.get_or_load(path, &schema).unwrap();
        let b = cache.get_or_load(path, &schema).unwrap();

        assert_eq!(source.reads(), 1);
        assert!(Arc::ptr_eq(&a.series, &b.series));
    }

    #[test]
    fn invalidate_forces_fresh_read() {
        let source = CountingSource::new(V1);
        let mut cache = SeriesCache::new(source.clone());
        let schema = SchemaConfig::default();
        let path = Path::new("forecast.csv");

        let before = cache.get_or_load(path, &schema).unwrap();
        assert_eq!(before.series.len(), 2);

        source.replace(V2);
        // Still served from cache until invalidated.
        assert_eq!(cache.get_or_load(path, &schema).unwrap().series.len(), 2);

        assert_eq!(cache.invalidate(path), 1);
        let after = cache.get_or_load(path, &schema).unwrap();
        assert_eq!(source.reads(), 2);
        assert_eq!(after.series.len(), 1);
        assert_eq!(after.series.first().unwrap().predicted_price, 2000.0);
    }

    #[test]
    fn distinct_paths_and_schemas_are_distinct_entries() {
        let source = CountingSource::new(V1);
        let mut cache = SeriesCache::new(source.clone());
        let schema = SchemaConfig::default();
        let renamed = SchemaConfig {
            upper_column: None,
            ..SchemaConfig::default()
        };

        cache.get_or_load(Path::new("a.csv"), &schema).unwrap();
        cache.get_or_load(Path::new("b.csv"), &schema).unwrap();
        cache.get_or_load(Path::new("a.csv"), &renamed).unwrap();

        assert_eq!(source.reads(), 3);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.invalidate(Path::new("a.csv")), 2);
        assert!(cache.contains(Path::new("b.csv"), &schema));
    }

    #[test]
    fn failed_loads_are_not_cached() {
        let source = CountingSource::new("Date,Predicted_Price\n");
        let mut cache = SeriesCache::new(source.clone());
        let schema = SchemaConfig::default();
        let path = Path::new("forecast.csv");

        assert!(cache.get_or_load(path, &schema).is_err());
        assert!(cache.is_empty());

        source.replace(V1);
        assert!(cache.get_or_load(path, &schema).is_ok());
        assert_eq!(source.reads(), 2);
    }

    #[test]
    fn clear_empties_cache() {
        let source = CountingSource::new(V1);
        let mut cache = SeriesCache::new(source.clone());
        cache
            .get_or_load(Path::new("forecast.csv"), &SchemaConfig::default())
            .unwrap();
        cache.clear();
        assert!(cache.is_empty());
    }
}
