//! Navigation history.
//!
//! Mirrors the browser history contract the console shell integrates
//! with: every committed navigation pushes an entry, back/forward move
//! a cursor over past entries, and navigating after going back
//! discards the forward stack.

use serde::{Deserialize, Serialize};
use touchline_types::ViewId;

/// One committed navigation.
///
/// Entries are recorded at the moment a navigation passes the access
/// policy; traversing back to an entry later does not re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// The view that was navigated to.
    pub view: ViewId,
}

impl NavigationEntry {
    /// Creates an entry for `view`.
    #[must_use]
    pub fn new(view: ViewId) -> Self {
        Self { view }
    }
}

/// A cursor over committed navigations.
///
/// # Semantics
///
/// - [`push`](Self::push) truncates any forward entries first, so the
///   forward stack dies the moment the user branches off it
/// - [`back`](Self::back) / [`forward`](Self::forward) move the
///   cursor and return the restored entry, or `None` at the ends
/// - The history is empty only before the first committed navigation
///
/// # Example
///
/// ```
/// use touchline_runtime::nav::History;
/// use touchline_types::ViewId;
///
/// let mut history = History::new();
/// history.push(ViewId::Home);
/// history.push(ViewId::Matches);
///
/// assert_eq!(history.back().map(|e| e.view), Some(ViewId::Home));
/// assert_eq!(history.forward().map(|e| e.view), Some(ViewId::Matches));
/// ```
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<NavigationEntry>,
    /// Index of the current entry; meaningful only when non-empty.
    cursor: usize,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a committed navigation, discarding any forward entries.
    pub fn push(&mut self, view: ViewId) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(NavigationEntry::new(view));
        self.cursor = self.entries.len() - 1;
    }

    /// Moves the cursor one entry back, returning the restored entry.
    ///
    /// Returns `None` when already at the oldest entry (or empty).
    pub fn back(&mut self) -> Option<NavigationEntry> {
        if self.cursor == 0 || self.entries.is_empty() {
            return None;
        }
        self.cursor -= 1;
        Some(self.entries[self.cursor])
    }

    /// Moves the cursor one entry forward, returning the restored entry.
    ///
    /// Returns `None` when already at the newest entry (or empty).
    pub fn forward(&mut self) -> Option<NavigationEntry> {
        if self.entries.is_empty() || self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor])
    }

    /// Returns the entry under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&NavigationEntry> {
        self.entries.get(self.cursor)
    }

    /// Returns `true` if [`back`](Self::back) would succeed.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0 && !self.entries.is_empty()
    }

    /// Returns `true` if [`forward`](Self::forward) would succeed.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        !self.entries.is_empty() && self.cursor + 1 < self.entries.len()
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no navigation has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
