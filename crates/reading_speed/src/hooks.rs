//! Save-event seam between the host and the callbacks it runs.

use anyhow::Context;

use crate::content::{ContentItem, ItemId};

/// Priority callbacks get unless they ask otherwise. Lower runs first.
pub const DEFAULT_PRIORITY: i32 = 10;

/// Callback fired by the host after a content item is saved.
pub trait SaveHook {
    fn name(&self) -> &str;

    fn on_save(&self, item_id: ItemId, item: &ContentItem) -> anyhow::Result<()>;
}

/// Host-side table of save callbacks.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<(i32, Box<dyn SaveHook>)>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_save_hook(&mut self, priority: i32, hook: Box<dyn SaveHook>) {
        tracing::trace!(
            "Registered save hook '{}' with priority {}.",
            hook.name(),
            priority
        );

        // Stable position keeps registration order among equal priorities.
        let position = self.hooks.partition_point(|(p, _)| *p <= priority);
        self.hooks.insert(position, (priority, hook));
    }

    /// Runs every hook in priority order. Stops at the first failing hook and
    /// returns its error.
    #[tracing::instrument(skip(self, item))]
    pub fn dispatch_save(&self, item_id: ItemId, item: &ContentItem) -> anyhow::Result<()> {
        for (_, hook) in &self.hooks {
            hook.on_save(item_id, item)
                .with_context(|| format!("Save hook '{}' failed", hook.name()))?;
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.hooks.iter().map(|(priority, hook)| (priority, hook.name())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    struct Recorder {
        name: String,
        calls: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl SaveHook for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn on_save(&self, item_id: ItemId, _item: &ContentItem) -> anyhow::Result<()> {
            self.calls.borrow_mut().push(format!("{}:{}", self.name, item_id));
            if self.fail {
                anyhow::bail!("{} failed", self.name);
            }
            Ok(())
        }
    }

    fn recorder(name: &str, calls: &Rc<RefCell<Vec<String>>>, fail: bool) -> Box<dyn SaveHook> {
        Box::new(Recorder {
            name: name.to_owned(),
            calls: calls.clone(),
            fail,
        })
    }

    #[test]
    fn test_dispatch_in_priority_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = HookRegistry::new();
        registry.add_save_hook(DEFAULT_PRIORITY, recorder("b", &calls, false));
        registry.add_save_hook(1, recorder("a", &calls, false));
        registry.add_save_hook(DEFAULT_PRIORITY, recorder("c", &calls, false));
        registry.add_save_hook(99, recorder("d", &calls, false));
        assert_eq!(registry.len(), 4);

        registry
            .dispatch_save(5, &ContentItem::new(5, "body"))
            .unwrap();
        assert_eq!(*calls.borrow(), vec!["a:5", "b:5", "c:5", "d:5"]);
    }

    #[test]
    fn test_dispatch_stops_at_first_error() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = HookRegistry::new();
        registry.add_save_hook(1, recorder("first", &calls, false));
        registry.add_save_hook(2, recorder("broken", &calls, true));
        registry.add_save_hook(3, recorder("never", &calls, false));

        let error = registry
            .dispatch_save(1, &ContentItem::new(1, ""))
            .unwrap_err();
        assert_eq!(error.to_string(), "Save hook 'broken' failed");
        assert_eq!(error.root_cause().to_string(), "broken failed");
        assert_eq!(*calls.borrow(), vec!["first:1", "broken:1"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = HookRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.dispatch_save(1, &ContentItem::default()).is_ok());
    }
}
