//! In-memory [`KeyValueStore`] with injectable failures.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use crate::error::PersistenceError;

use super::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
enum StoredValue {
    Int(u32),
    Text(String),
}

/// Map-backed store used by tests and simulations.
///
/// Values may be seeded with a non-integer type to exercise the
/// wrong-type-reads-as-default path, and writes can be made to fail after a
/// fixed number of successes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<(String, String), StoredValue>>,
    writes: RefCell<Vec<String>>,
    remaining_writes: Cell<Option<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every write after the first `successes` writes.
    pub fn failing_writes_after(self, successes: usize) -> Self {
        self.remaining_writes.set(Some(successes));
        self
    }

    /// Reject every write.
    pub fn read_only(self) -> Self {
        self.failing_writes_after(0)
    }

    pub fn insert_int(&self, path: &str, key: &str, value: u32) {
        self.values
            .borrow_mut()
            .insert((path.to_string(), key.to_string()), StoredValue::Int(value));
    }

    pub fn insert_text(&self, path: &str, key: &str, value: &str) {
        self.values.borrow_mut().insert(
            (path.to_string(), key.to_string()),
            StoredValue::Text(value.to_string()),
        );
    }

    /// Current integer value, if one is stored.
    pub fn int(&self, path: &str, key: &str) -> Option<u32> {
        match self
            .values
            .borrow()
            .get(&(path.to_string(), key.to_string()))
        {
            Some(StoredValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    /// Keys of successful writes, in order.
    pub fn write_log(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }
}

impl KeyValueStore for MemoryStore {
    fn read_int(&self, path: &str, key: &str, default: u32) -> Result<u32, PersistenceError> {
        Ok(self.int(path, key).unwrap_or(default))
    }

    fn write_int(&self, path: &str, key: &str, value: u32) -> Result<(), PersistenceError> {
        if let Some(remaining) = self.remaining_writes.get() {
            if remaining == 0 {
                return Err(PersistenceError::io(
                    format!("write {path}\\{key}"),
                    std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
                ));
            }
            self.remaining_writes.set(Some(remaining - 1));
        }
        self.insert_int(path, key, value);
        self.writes.borrow_mut().push(key.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_values_fall_back_to_default() {
        let store = MemoryStore::new();
        store.insert_text("A", "k", "1");
        assert_eq!(store.read_int("A", "k", 9).expect("read"), 9);
    }

    #[test]
    fn read_only_store_rejects_writes() {
        let store = MemoryStore::new().read_only();
        let err = store.write_int("A", "k", 1).expect_err("must fail");
        assert!(err.to_string().contains("access denied"), "got: {err}");
        assert!(store.write_log().is_empty());
        assert_eq!(store.int("A", "k"), None);
    }
}
