use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::content::ItemId;

pub mod sqlite;

pub use sqlite::SqliteStore;

/// Host-provided key-value metadata, keyed by item and metadata key.
///
/// Errors belong to the host and are passed through untouched.
pub trait MetadataStore {
    fn get(&self, item_id: ItemId, key: &str) -> anyhow::Result<Option<f64>>;
    fn set(&self, item_id: ItemId, key: &str, value: f64) -> anyhow::Result<()>;
}

impl<T: MetadataStore + ?Sized> MetadataStore for &T {
    fn get(&self, item_id: ItemId, key: &str) -> anyhow::Result<Option<f64>> {
        (**self).get(item_id, key)
    }

    fn set(&self, item_id: ItemId, key: &str, value: f64) -> anyhow::Result<()> {
        (**self).set(item_id, key, value)
    }
}

impl<T: MetadataStore + ?Sized> MetadataStore for Rc<T> {
    fn get(&self, item_id: ItemId, key: &str) -> anyhow::Result<Option<f64>> {
        (**self).get(item_id, key)
    }

    fn set(&self, item_id: ItemId, key: &str, value: f64) -> anyhow::Result<()> {
        (**self).set(item_id, key, value)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<(ItemId, String), f64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl MetadataStore for MemoryStore {
    fn get(&self, item_id: ItemId, key: &str) -> anyhow::Result<Option<f64>> {
        Ok(self
            .values
            .borrow()
            .get(&(item_id, key.to_owned()))
            .copied())
    }

    fn set(&self, item_id: ItemId, key: &str, value: f64) -> anyhow::Result<()> {
        self.values
            .borrow_mut()
            .insert((item_id, key.to_owned()), value);
        Ok(())
    }
}
