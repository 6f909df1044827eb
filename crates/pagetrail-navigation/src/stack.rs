//! Bounded navigation stack
//!
//! One direction of history. Entries are doubly linked through slot indices
//! into an arena owned by the stack, so popping an entry frees its slot for
//! the next push instead of deallocating a node.

use crate::error::NavigationError;
use crate::Result;

/// Slot index into the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EntryId(usize);

#[derive(Debug, Clone)]
struct PageEntry {
    url: String,
    prev: Option<EntryId>,
    next: Option<EntryId>,
}

#[derive(Debug, Clone)]
pub struct NavigationStack {
    slots: Vec<Option<PageEntry>>,
    free: Vec<usize>,
    top: Option<EntryId>,
    len: usize,
    capacity: usize,
}

impl NavigationStack {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            top: None,
            len: 0,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Push a page on top. A full stack rejects the page and is left untouched.
    pub fn push(&mut self, url: impl Into<String>) -> Result<()> {
        if self.is_full() {
            tracing::warn!(capacity = self.capacity, "Stack is full, push rejected");
            return Err(NavigationError::StackFull {
                capacity: self.capacity,
            });
        }

        let id = self.alloc(PageEntry {
            url: url.into(),
            prev: self.top,
            next: None,
        });

        if let Some(old_top) = self.top {
            if let Some(entry) = self.entry_mut(old_top) {
                entry.next = Some(id);
            }
        }

        self.top = Some(id);
        self.len += 1;

        tracing::debug!(len = self.len, "Pushed page");
        Ok(())
    }

    /// Remove the top page and hand back its URL
    pub fn pop(&mut self) -> Option<String> {
        let id = self.top?;
        let entry = self.slots.get_mut(id.0)?.take()?;
        self.free.push(id.0);

        self.top = entry.prev;
        if let Some(new_top) = entry.prev {
            if let Some(below) = self.entry_mut(new_top) {
                below.next = None;
            }
        }
        self.len -= 1;

        tracing::debug!(len = self.len, "Popped page");
        Some(entry.url)
    }

    /// URL of the top entry
    pub fn current(&self) -> Option<&str> {
        self.top_entry().map(|entry| entry.url.as_str())
    }

    /// URL of the entry directly below the top
    pub fn previous(&self) -> Option<&str> {
        let prev = self.top_entry()?.prev?;
        self.entry(prev).map(|entry| entry.url.as_str())
    }

    /// URL linked above the top. Every pop clears this link on the new top,
    /// so a well-formed stack always answers `None`.
    pub fn peek_next(&self) -> Option<&str> {
        let next = self.top_entry()?.next?;
        self.entry(next).map(|entry| entry.url.as_str())
    }

    /// Walk the stack from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::successors(self.top_entry(), move |entry| {
            entry.prev.and_then(|prev| self.entry(prev))
        })
        .map(|entry| entry.url.as_str())
    }

    fn alloc(&mut self, entry: PageEntry) -> EntryId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(entry);
                EntryId(index)
            }
            None => {
                self.slots.push(Some(entry));
                EntryId(self.slots.len() - 1)
            }
        }
    }

    fn top_entry(&self) -> Option<&PageEntry> {
        self.entry(self.top?)
    }

    // `top`, `prev` and `next` only ever hold handles to occupied slots.
    fn entry(&self, id: EntryId) -> Option<&PageEntry> {
        self.slots.get(id.0)?.as_ref()
    }

    fn entry_mut(&mut self, id: EntryId) -> Option<&mut PageEntry> {
        self.slots.get_mut(id.0)?.as_mut()
    }
}
