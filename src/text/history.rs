//! Bounded undo/redo history of whole-state snapshots.
//!
//! Each entry is a full copy of whatever state the owner records, so undo is
//! a swap rather than a replay. The undo stack keeps at most `max_depth`
//! entries; the oldest are dropped first.

/// Default maximum number of undo entries to retain.
pub const DEFAULT_MAX_HISTORY_DEPTH: usize = 100;

/// Snapshot history with separate undo and redo stacks.
#[derive(Clone, Debug)]
pub struct History<S> {
    undo_stack: Vec<S>,
    redo_stack: Vec<S>,
    /// Maximum number of undo entries to retain. Oldest entries are dropped when exceeded.
    max_depth: usize,
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: DEFAULT_MAX_HISTORY_DEPTH,
        }
    }
}

impl<S> History<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history with a custom maximum depth.
    ///
    /// A depth of zero disables undo entirely.
    #[must_use]
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Record the state as it was before a mutation. Clears the redo stack.
    pub fn push(&mut self, snapshot: S) {
        self.redo_stack.clear();
        self.push_undo(snapshot);
    }

    fn push_undo(&mut self, snapshot: S) {
        self.undo_stack.push(snapshot);
        // Enforce depth limit by dropping oldest entries
        if self.undo_stack.len() > self.max_depth {
            let excess = self.undo_stack.len() - self.max_depth;
            self.undo_stack.drain(..excess);
        }
    }

    /// Step back: `current` moves to the redo stack and the most recent undo
    /// entry is returned. `None` (and `current` dropped) if nothing to undo.
    pub fn undo(&mut self, current: S) -> Option<S> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward: the inverse of [`History::undo`].
    pub fn redo(&mut self, current: S) -> Option<S> {
        let next = self.redo_stack.pop()?;
        self.push_undo(current);
        Some(next)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    #[must_use]
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
