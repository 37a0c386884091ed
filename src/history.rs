// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Linear undo/redo history of project snapshots.
//!
//! The history is an append-only list of immutable snapshots plus an integer
//! cursor. Committing a new snapshot while the cursor sits before the end
//! discards the redo-able tail (a branch-cut), matching standard editor undo
//! semantics. No operation ever mutates a snapshot already in the list.

use crate::model::ProjectState;

/// Ordered snapshots plus a cursor marking "current".
///
/// Invariants: the snapshot list is never empty, and `cursor` always indexes
/// into it. Undo/redo past the bounds are silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<ProjectState>,
    cursor: usize,
}

impl History {
    /// Starts a history with its initial snapshot at cursor 0.
    ///
    /// This is the only way to obtain a `History`, so the "initialize once"
    /// rule holds by construction.
    pub fn new(initial: ProjectState) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &ProjectState {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds its initial snapshot from construction.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.snapshots.len() - 1
    }

    /// Commits a new snapshot after the cursor, discarding any redo tail.
    pub fn push(&mut self, snapshot: ProjectState) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Moves the cursor back one snapshot. Returns whether it moved.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Moves the cursor forward one snapshot. Returns whether it moved.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::History;
    use crate::model::{ProjectFile, ProjectState};

    fn snapshot(tag: &str) -> ProjectState {
        ProjectState::new(vec![ProjectFile::new("App.tsx", tag)], tag, None)
    }

    #[test]
    fn new_history_starts_at_cursor_zero_with_no_undo_or_redo() {
        let history = History::new(snapshot("a"));
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.current(), &snapshot("a"));
    }

    #[test]
    fn push_appends_and_moves_cursor_to_the_end() {
        let mut history = History::new(snapshot("a"));
        history.push(snapshot("b"));
        history.push(snapshot("c"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current(), &snapshot("c"));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_then_push_cuts_the_redo_branch() {
        let mut history = History::new(snapshot("a"));
        history.push(snapshot("b"));
        history.push(snapshot("c"));

        assert!(history.undo());
        assert_eq!(history.current(), &snapshot("b"));

        history.push(snapshot("d"));
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current(), &snapshot("d"));

        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.current(), &snapshot("d"));

        assert!(history.undo());
        assert_eq!(history.current(), &snapshot("b"));
        assert!(history.undo());
        assert_eq!(history.current(), &snapshot("a"));
    }

    #[test]
    fn undo_at_the_start_is_a_silent_no_op() {
        let mut history = History::new(snapshot("a"));
        assert!(!history.undo());
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), &snapshot("a"));
    }

    #[test]
    fn redo_at_the_end_is_a_silent_no_op() {
        let mut history = History::new(snapshot("a"));
        history.push(snapshot("b"));
        assert!(!history.redo());
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn undo_and_redo_walk_the_same_snapshots() {
        let mut history = History::new(snapshot("a"));
        history.push(snapshot("b"));
        history.push(snapshot("c"));

        assert!(history.undo());
        assert!(history.undo());
        assert_eq!(history.current(), &snapshot("a"));
        assert!(history.can_redo());

        assert!(history.redo());
        assert_eq!(history.current(), &snapshot("b"));
        assert!(history.redo());
        assert_eq!(history.current(), &snapshot("c"));
        assert!(!history.can_redo());
    }
}
