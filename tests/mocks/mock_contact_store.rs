use address_book_assistant::error::{ContactError, ContactResult};
use address_book_assistant::repositories::{ContactEntry, ContactStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact store for testing.
///
/// Keeps entries in a shared in-memory vector and tracks method calls for
/// verification. Clones share state, so a test can hand one clone to a
/// session and inspect the other.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactStore {
    entries: Arc<Mutex<Vec<ContactEntry>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactStore {
    /// Create a new empty MockContactStore.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Seed an entry directly, bypassing call tracking.
    pub fn insert(&self, name: &str, phones: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|e| e.name != name);
        entries.push(ContactEntry {
            name: name.to_string(),
            phones: phones.to_string(),
        });
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Names in stored order.
    pub fn names(&self) -> Vec<String> {
        let entries = self.entries.lock().unwrap();
        entries.iter().map(|e| e.name.clone()).collect()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MockContactStore {
    fn add(&mut self, name: &str, phone: &str) -> ContactResult<()> {
        self.track_call("add");

        self.insert(name, phone);
        Ok(())
    }

    fn update(&mut self, name: &str, phone: &str) -> ContactResult<()> {
        self.track_call("update");

        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| ContactError::ContactNotFound(name.to_string()))?;
        entry.phones = phone.to_string();
        Ok(())
    }

    fn lookup(&self, name: &str) -> Option<ContactEntry> {
        self.track_call("lookup");

        let entries = self.entries.lock().unwrap();
        entries.iter().find(|e| e.name == name).cloned()
    }

    fn list(&self) -> Vec<ContactEntry> {
        self.track_call("list");

        self.entries.lock().unwrap().clone()
    }

    fn delete(&mut self, name: &str) -> ContactResult<()> {
        self.track_call("delete");

        let mut entries = self.entries.lock().unwrap();
        let before = entries.len();
        entries.retain(|e| e.name != name);
        if entries.len() == before {
            return Err(ContactError::ContactNotFound(name.to_string()));
        }
        Ok(())
    }
}
