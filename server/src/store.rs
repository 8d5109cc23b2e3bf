//! In-memory authority for todo state.
//!
//! # Design
//! The item list and the id counter sit behind one `Mutex`, so every
//! operation observes and mutates a consistent snapshot and concurrent
//! creates can never hand out the same id. Critical sections never await,
//! which is why a blocking `std` mutex is used instead of an async one.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::StoreError;
use crate::types::{TodoItem, TodoStats};

#[derive(Debug)]
struct Inner {
    items: Vec<TodoItem>,
    next_id: u64,
}

/// Insertion-ordered collection of todo items with monotonically increasing
/// ids starting at 1. Ids are never reused after deletion.
#[derive(Debug)]
pub struct TodoStore {
    inner: Mutex<Inner>,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    // Items are plain values and no operation can panic halfway through a
    // mutation, so a poisoned lock still guards valid data.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all items in insertion order.
    pub fn list(&self) -> Vec<TodoItem> {
        self.lock().items.clone()
    }

    /// Append a new item and assign it the next id.
    ///
    /// Fails with [`StoreError::EmptyTitle`] when `title` is empty or only
    /// whitespace; no id is consumed in that case.
    pub fn add(
        &self,
        title: String,
        description: Option<String>,
        completed: bool,
    ) -> Result<TodoItem, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        let item = TodoItem {
            id,
            title,
            description,
            completed,
        };
        inner.items.push(item.clone());
        tracing::debug!(id, "todo added");
        Ok(item)
    }

    pub fn get(&self, id: u64) -> Option<TodoItem> {
        self.lock().items.iter().find(|t| t.id == id).cloned()
    }

    /// Replace title, description and completed flag of an existing item.
    pub fn update(
        &self,
        id: u64,
        title: String,
        description: Option<String>,
        completed: bool,
    ) -> Option<TodoItem> {
        let mut inner = self.lock();
        let todo = inner.items.iter_mut().find(|t| t.id == id)?;
        todo.title = title;
        todo.description = description;
        todo.completed = completed;
        tracing::debug!(id, "todo updated");
        Some(todo.clone())
    }

    /// Flip the completed flag. Returns `false` if `id` is unknown.
    pub fn toggle(&self, id: u64) -> bool {
        let mut inner = self.lock();
        match inner.items.iter_mut().find(|t| t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                tracing::debug!(id, completed = todo.completed, "todo toggled");
                true
            }
            None => false,
        }
    }

    /// Remove an item. Returns `false` if `id` is unknown.
    pub fn delete(&self, id: u64) -> bool {
        let mut inner = self.lock();
        let before = inner.items.len();
        inner.items.retain(|t| t.id != id);
        let removed = inner.items.len() != before;
        if removed {
            tracing::debug!(id, "todo deleted");
        }
        removed
    }

    pub fn counts(&self) -> TodoStats {
        let inner = self.lock();
        let total = inner.items.len() as u64;
        let completed = inner.items.iter().filter(|t| t.completed).count() as u64;
        TodoStats {
            total,
            completed,
            active: total - completed,
        }
    }
}
