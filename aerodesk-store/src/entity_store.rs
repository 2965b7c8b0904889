use std::collections::HashMap;

use aerodesk_core::{Entity, StoreError, StoreResult};
use parking_lot::Mutex;
use tracing::debug;

#[derive(Debug)]
pub(crate) struct Inner<T> {
    /// Next id to hand out. Starts at 1 and only ever grows.
    counter: u64,
    records: HashMap<u64, T>,
}

/// Thread-safe CRUD over one entity kind.
///
/// A single mutex guards both the map and the id counter, and every
/// operation is one critical section. Reads take the same lock as writes.
#[derive(Debug)]
pub struct EntityStore<T> {
    pub(crate) inner: Mutex<Inner<T>>,
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                counter: 1,
                records: HashMap::new(),
            }),
        }
    }

    /// Assign the next id to `record`, store it and return the stored copy.
    ///
    /// The counter advances unconditionally, so ids are never reused even
    /// after the record is deleted.
    pub fn create(&self, mut record: T) -> T {
        let stored = {
            let mut inner = self.inner.lock();
            let id = inner.counter;
            inner.counter += 1;
            record.set_id(id);
            inner.records.insert(id, record.clone());
            record
        };
        debug!("Created {} {}", T::KIND, stored.id());
        stored
    }

    pub fn get(&self, id: u64) -> StoreResult<T> {
        self.inner
            .lock()
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found::<T>(id))
    }

    /// Replace the record stored under `id` wholesale.
    ///
    /// The id inside `record` is stored as given; it is not checked
    /// against `id`.
    pub fn update(&self, id: u64, record: T) -> StoreResult<T> {
        let mut inner = self.inner.lock();
        match inner.records.get_mut(&id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(not_found::<T>(id)),
        }
    }

    pub fn delete(&self, id: u64) -> StoreResult<()> {
        let removed = self.inner.lock().records.remove(&id);
        match removed {
            Some(_) => {
                debug!("Deleted {} {}", T::KIND, id);
                Ok(())
            }
            None => Err(not_found::<T>(id)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<T: Entity>(id: u64) -> StoreError {
    StoreError::NotFound { kind: T::KIND, id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerodesk_core::User;
    use chrono::Utc;
    use std::collections::HashSet;
    use std::thread;

    fn user(email: &str) -> User {
        let now = Utc::now();
        User {
            id: 0,
            phone: 79990001122,
            email: email.to_string(),
            password: "secret".to_string(),
            booked_tickets: false,
            date_of_creation: now,
            date_of_update: now,
        }
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let store = EntityStore::new();
        let ids: Vec<u64> = (0..5)
            .map(|i| store.create(user(&format!("u{i}@example.com"))).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get_after_create_returns_stored_copy() {
        let store = EntityStore::new();
        let created = store.create(user("a@example.com"));
        assert_eq!(created.id, 1);
        assert_eq!(store.get(created.id).unwrap(), created);
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let store = EntityStore::new();
        let created = store.create(user("a@example.com"));

        store.delete(created.id).unwrap();

        assert_eq!(
            store.get(created.id),
            Err(StoreError::NotFound { kind: "user", id: created.id })
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let store = EntityStore::new();
        let first = store.create(user("a@example.com"));
        store.delete(first.id).unwrap();

        let second = store.create(user("b@example.com"));
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let store = EntityStore::new();
        let created = store.create(user("old@example.com"));

        let mut replacement = user("new@example.com");
        replacement.id = created.id;
        replacement.booked_tickets = true;

        let stored = store.update(created.id, replacement.clone()).unwrap();
        assert_eq!(stored, replacement);
        assert_eq!(store.get(created.id).unwrap(), replacement);
    }

    #[test]
    fn test_update_keeps_body_id_verbatim() {
        let store = EntityStore::new();
        let created = store.create(user("a@example.com"));

        let mut replacement = user("b@example.com");
        replacement.id = 42;
        store.update(created.id, replacement).unwrap();

        let stored = store.get(created.id).unwrap();
        assert_eq!(stored.id, 42);
        assert!(store.get(42).is_err());
    }

    #[test]
    fn test_absent_id_never_mutates() {
        let store = EntityStore::new();
        store.create(user("a@example.com"));

        assert!(store.get(99).is_err());
        assert!(store.update(99, user("b@example.com")).is_err());
        assert!(store.delete(99).is_err());

        assert_eq!(store.len(), 1);
        assert!(store.get(99).is_err());
    }

    #[test]
    fn test_concurrent_creates_get_unique_gapless_ids() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 250;

        let store = EntityStore::new();
        let ids: Vec<u64> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|t| {
                    let store = &store;
                    s.spawn(move || {
                        (0..PER_THREAD)
                            .map(|i| store.create(user(&format!("{t}-{i}@example.com"))).id)
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let total = (THREADS * PER_THREAD) as u64;
        let unique: HashSet<u64> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(unique, (1..=total).collect::<HashSet<u64>>());
        assert_eq!(store.len(), total as usize);
    }

    #[test]
    fn test_ids_increase_in_call_order_per_thread() {
        let store = EntityStore::new();
        thread::scope(|s| {
            for t in 0..4 {
                let store = &store;
                s.spawn(move || {
                    let ids: Vec<u64> = (0..100)
                        .map(|i| store.create(user(&format!("{t}-{i}@example.com"))).id)
                        .collect();
                    assert!(ids.windows(2).all(|w| w[0] < w[1]));
                });
            }
        });
    }
}
