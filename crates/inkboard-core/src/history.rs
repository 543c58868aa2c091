//! Undo/redo history.
//!
//! The history is an ordered log of transactions plus a cursor. Every
//! scene mutation is recorded as a reversible [`SceneCommand`]; the
//! commands of one gesture form a [`Transaction`]. Undo steps the cursor
//! back and replays a transaction's inverse commands in reverse order, redo
//! replays its commands forward.

use crate::shapes::{Shape, ShapeId};

/// Default number of transactions kept.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// One reversible scene mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// `shape` was inserted at z position `index`.
    Create { index: usize, shape: Shape },
    /// `shape` was removed from z position `index`.
    Delete { index: usize, shape: Shape },
    /// A shape changed in place.
    Modify { before: Shape, after: Shape },
}

impl SceneCommand {
    /// The command that undoes this one.
    pub fn inverse(&self) -> SceneCommand {
        match self {
            SceneCommand::Create { index, shape } => SceneCommand::Delete {
                index: *index,
                shape: shape.clone(),
            },
            SceneCommand::Delete { index, shape } => SceneCommand::Create {
                index: *index,
                shape: shape.clone(),
            },
            SceneCommand::Modify { before, after } => SceneCommand::Modify {
                before: after.clone(),
                after: before.clone(),
            },
        }
    }

    /// Id of the shape this command touches.
    pub fn shape_id(&self) -> ShapeId {
        match self {
            SceneCommand::Create { shape, .. } | SceneCommand::Delete { shape, .. } => shape.id(),
            SceneCommand::Modify { after, .. } => after.id(),
        }
    }
}

/// Commands recorded during one gesture.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transaction {
    commands: Vec<SceneCommand>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    ///
    /// A modification directly following a create or modify of the same shape
    /// is folded into it, so a drag records one command per shape.
    pub fn record(&mut self, command: SceneCommand) {
        if let SceneCommand::Modify { after, .. } = &command {
            let id = after.id();
            match self.commands.last_mut() {
                Some(SceneCommand::Create { shape, .. }) if shape.id() == id => {
                    *shape = after.clone();
                    return;
                }
                Some(SceneCommand::Modify { after: prev, .. }) if prev.id() == id => {
                    *prev = after.clone();
                    return;
                }
                _ => {}
            }
        }
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[SceneCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

/// Ordered transaction log with an undo cursor.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Transaction>,
    /// Number of entries currently applied.
    cursor: usize,
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// Append a finished transaction. Empty transactions are dropped and any
    /// undone entries past the cursor are discarded.
    pub fn commit(&mut self, transaction: Transaction) -> bool {
        if transaction.is_empty() {
            return false;
        }
        self.entries.truncate(self.cursor);
        self.entries.push(transaction);
        if self.entries.len() > self.max_depth {
            let overflow = self.entries.len() - self.max_depth;
            self.entries.drain(..overflow);
            log::trace!("history full, dropped {} oldest entries", overflow);
        }
        self.cursor = self.entries.len();
        true
    }

    /// Step back; returns the transaction whose inverse must be applied.
    pub fn undo(&mut self) -> Option<&Transaction> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward; returns the transaction to re-apply.
    pub fn redo(&mut self) -> Option<&Transaction> {
        let entry = self.entries.get(self.cursor)?;
        self.cursor += 1;
        Some(entry)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Number of transactions in the log, undone ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Rectangle;
    use kurbo::Point;

    fn rect(w: f64) -> Shape {
        Shape::Rectangle(Rectangle::new(Point::ZERO, w, w))
    }

    fn single(cmd: SceneCommand) -> Transaction {
        let mut tx = Transaction::new();
        tx.record(cmd);
        tx
    }

    #[test]
    fn test_modify_folds_into_create() {
        let shape = rect(0.0);
        let mut grown = shape.clone();
        if let Shape::Rectangle(r) = &mut grown {
            r.width = 40.0;
        }
        let mut tx = Transaction::new();
        tx.record(SceneCommand::Create { index: 0, shape: shape.clone() });
        tx.record(SceneCommand::Modify { before: shape, after: grown.clone() });
        assert_eq!(tx.len(), 1);
        assert_eq!(tx.commands()[0], SceneCommand::Create { index: 0, shape: grown });
    }

    #[test]
    fn test_modify_of_other_shape_not_folded() {
        let a = rect(1.0);
        let b = rect(2.0);
        let mut tx = Transaction::new();
        tx.record(SceneCommand::Create { index: 0, shape: a });
        tx.record(SceneCommand::Modify { before: b.clone(), after: b });
        assert_eq!(tx.len(), 2);
    }

    #[test]
    fn test_inverse_swaps() {
        let a = rect(1.0);
        let cmd = SceneCommand::Delete { index: 3, shape: a.clone() };
        assert_eq!(cmd.inverse(), SceneCommand::Create { index: 3, shape: a.clone() });
        assert_eq!(cmd.inverse().inverse(), cmd);
        assert_eq!(cmd.shape_id(), a.id());
    }

    #[test]
    fn test_cursor_moves() {
        let mut h = History::default();
        assert!(!h.can_undo());
        assert!(h.commit(single(SceneCommand::Create { index: 0, shape: rect(1.0) })));
        assert!(h.commit(single(SceneCommand::Create { index: 1, shape: rect(2.0) })));
        assert!(h.can_undo());
        assert!(h.undo().is_some());
        assert!(h.can_redo());
        assert!(h.redo().is_some());
        assert!(!h.can_redo());
        assert!(h.redo().is_none());
    }

    #[test]
    fn test_commit_after_undo_drops_redo_tail() {
        let mut h = History::default();
        h.commit(single(SceneCommand::Create { index: 0, shape: rect(1.0) }));
        h.commit(single(SceneCommand::Create { index: 1, shape: rect(2.0) }));
        h.undo();
        h.commit(single(SceneCommand::Create { index: 1, shape: rect(3.0) }));
        assert_eq!(h.len(), 2);
        assert!(!h.can_redo());
    }

    #[test]
    fn test_empty_transaction_ignored() {
        let mut h = History::default();
        assert!(!h.commit(Transaction::new()));
        assert!(h.is_empty());
    }

    #[test]
    fn test_max_depth_drops_oldest() {
        let mut h = History::new(2);
        for i in 0..4 {
            h.commit(single(SceneCommand::Create { index: i, shape: rect(i as f64) }));
        }
        assert_eq!(h.len(), 2);
        assert!(h.undo().is_some());
        assert!(h.undo().is_some());
        assert!(h.undo().is_none());
    }
}
