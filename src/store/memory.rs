//! In-memory project store.

use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use super::{ProjectDraft, ProjectStore};
use crate::error::{Result, ScheduleError};
use crate::models::{ItemId, WorkItem};

/// Thread-safe store backed by an ordered map.
///
/// Ids start at 1 and are never reused, even after deletes or `clear`.
#[derive(Debug)]
pub struct InMemoryStore {
    items: RwLock<BTreeMap<ItemId, WorkItem>>,
    next_id: AtomicU64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectStore for InMemoryStore {
    fn all(&self) -> Result<Vec<WorkItem>> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Ok(items.values().cloned().collect())
    }

    fn get(&self, id: ItemId) -> Result<Option<WorkItem>> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(&id).cloned())
    }

    fn insert(&self, draft: ProjectDraft, now: NaiveDateTime) -> Result<WorkItem> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let item = WorkItem::new(id, draft.deadline, draft.revenue)
            .with_title(draft.title)
            .with_created_at(now);

        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        items.insert(id, item.clone());
        Ok(item)
    }

    fn persist(&self, item: WorkItem) -> Result<WorkItem> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        match items.get_mut(&item.id) {
            Some(slot) => {
                *slot = item.clone();
                Ok(item)
            }
            None => Err(ScheduleError::ProjectNotFound(item.id)),
        }
    }

    fn delete(&self, id: ItemId) -> Result<bool> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        Ok(items.remove(&id).is_some())
    }

    fn count(&self) -> Result<usize> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Ok(items.len())
    }

    fn clear(&self) -> Result<()> {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemStatus, Money};
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 4)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn draft(title: &str, deadline: i32, revenue: i64) -> ProjectDraft {
        ProjectDraft::new(title, deadline, Money::from_major(revenue))
    }

    #[test]
    fn test_insert_assigns_ascending_ids() {
        let store = InMemoryStore::new();
        let a = store.insert(draft("A", 2, 100), now()).unwrap();
        let b = store.insert(draft("B", 3, 200), now()).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.status, ItemStatus::Pending);
        assert_eq!(a.created_at, Some(now()));
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_ids_not_reused() {
        let store = InMemoryStore::new();
        store.insert(draft("A", 2, 100), now()).unwrap();
        store.clear().unwrap();
        let b = store.insert(draft("B", 2, 100), now()).unwrap();
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_persist_and_get() {
        let store = InMemoryStore::new();
        let item = store.insert(draft("A", 2, 100), now()).unwrap();

        let done = item.with_completed_at(now());
        store.persist(done.clone()).unwrap();
        assert_eq!(store.get(done.id).unwrap(), Some(done));
    }

    #[test]
    fn test_persist_unknown() {
        let store = InMemoryStore::new();
        let err = store
            .persist(WorkItem::new(42, 1, Money::ZERO))
            .unwrap_err();
        assert!(matches!(err, ScheduleError::ProjectNotFound(42)));
    }

    #[test]
    fn test_delete() {
        let store = InMemoryStore::new();
        let item = store.insert(draft("A", 2, 100), now()).unwrap();
        assert!(store.delete(item.id).unwrap());
        assert!(!store.delete(item.id).unwrap());
        assert_eq!(store.get(item.id).unwrap(), None);
    }

    #[test]
    fn test_load_pending() {
        let store = InMemoryStore::new();
        let a = store.insert(draft("A", 2, 100), now()).unwrap();
        store.insert(draft("B", 2, 100), now()).unwrap();
        store.persist(a.with_completed_at(now())).unwrap();

        let pending = store.load_pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "B");
    }

    #[test]
    fn test_completed_since() {
        let store = InMemoryStore::new();
        let old = store.insert(draft("old", 2, 100), now()).unwrap();
        let recent = store.insert(draft("recent", 2, 100), now()).unwrap();
        store.insert(draft("pending", 2, 100), now()).unwrap();

        store
            .persist(old.with_completed_at(now() - Duration::days(10)))
            .unwrap();
        store
            .persist(recent.with_completed_at(now() - Duration::days(2)))
            .unwrap();

        let week = store.completed_since(now() - Duration::days(7)).unwrap();
        assert_eq!(week.len(), 1);
        assert_eq!(week[0].title, "recent");

        let month = store.completed_since(now() - Duration::days(30)).unwrap();
        assert_eq!(month.len(), 2);
    }
}
