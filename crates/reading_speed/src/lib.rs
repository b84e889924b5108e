//! Estimated reading time of an article, cached in the host's metadata store
//! whenever the article is saved.

pub mod content;
pub mod estimator;
pub mod hooks;
pub mod store;

pub use content::{ContentItem, ItemId};
pub use estimator::{
    calculate, Estimator, EstimatorOptions, ShortcodeMatching, WordCounting, WORDS_PER_MINUTE,
};
pub use hooks::{HookRegistry, SaveHook, DEFAULT_PRIORITY};
pub use store::{MemoryStore, MetadataStore, SqliteStore};

/// Metadata key the estimate is stored under.
pub const META_KEY: &str = "sp_reading_speed";

#[derive(Debug, Clone)]
pub struct ReadingSpeed<S> {
    estimator: Estimator,
    store: S,
}

impl<S: MetadataStore> ReadingSpeed<S> {
    pub fn new(store: S) -> Self {
        Self::with_estimator(store, Estimator::default())
    }

    pub fn with_estimator(store: S, estimator: Estimator) -> Self {
        Self { estimator, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    pub fn calculate(&self, item: &ContentItem) -> f64 {
        self.estimator.estimate(&item.body)
    }

    /// Cached estimate of `item`. A missing or zero value is computed and
    /// written back first.
    pub fn get_or_compute(&self, item: &ContentItem) -> anyhow::Result<f64> {
        match self.store.get(item.id, META_KEY)? {
            Some(read_time) if read_time != 0.0 => {
                tracing::debug!("Using cached reading speed of item {}.", item.id);
                Ok(read_time)
            }
            _ => {
                tracing::debug!("No reading speed cached for item {}.", item.id);
                let read_time = self.calculate(item);
                self.store.set(item.id, META_KEY, read_time)?;
                Ok(read_time)
            }
        }
    }

    /// Recomputes and overwrites the stored estimate, whatever was cached.
    pub fn on_save(&self, item_id: ItemId, item: &ContentItem) -> anyhow::Result<()> {
        if item_id != item.id {
            tracing::warn!(
                "Save event for item {} carries item {}, storing under {}.",
                item_id,
                item.id,
                item.id
            );
        }

        self.store.set(item.id, META_KEY, self.calculate(item))
    }
}

impl<S: MetadataStore + Clone + 'static> ReadingSpeed<S> {
    /// Hands a save hook to the host through `register`, at
    /// [`DEFAULT_PRIORITY`].
    pub fn init<R>(&self, register: R)
    where
        R: FnOnce(i32, Box<dyn SaveHook>),
    {
        register(DEFAULT_PRIORITY, Box::new(self.clone()));
    }
}

impl<S: MetadataStore> SaveHook for ReadingSpeed<S> {
    fn name(&self) -> &str {
        "reading_speed"
    }

    fn on_save(&self, item_id: ItemId, item: &ContentItem) -> anyhow::Result<()> {
        ReadingSpeed::on_save(self, item_id, item)
    }
}
