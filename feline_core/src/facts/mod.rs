//! Fact rotator - a cursor over the "did you know" facts.
//!
//! The step itself is a pure modulo increment on [`FactCursor`]. Timing lives in
//! [`ticker`], which only emits events; it never touches the cursor.

mod ticker;

pub use ticker::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Index into the fact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FactCursor(pub usize);

impl FactCursor {
    /// The next position, wrapping at `len`. An empty list leaves the cursor alone.
    pub fn advance(self, len: usize) -> Self {
        if len == 0 {
            return self;
        }
        Self((self.0 + 1) % len)
    }

    /// Get the raw index.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Cursor plus the mount state of the card that displays it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactRotator {
    cursor: FactCursor,
    len: usize,
    mounted: bool,
}

impl FactRotator {
    /// A mounted rotator at the first fact.
    pub fn new(len: usize) -> Self {
        Self {
            cursor: FactCursor::default(),
            len,
            mounted: true,
        }
    }

    /// Get the current cursor.
    pub fn cursor(&self) -> FactCursor {
        self.cursor
    }

    /// Index of the fact being shown.
    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    /// Number of facts being rotated.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there are no facts to rotate.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the owning card is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// User-triggered step. Does not touch the timer.
    pub fn advance(&mut self) {
        self.cursor = self.cursor.advance(self.len);
        debug!(index = self.cursor.index(), "fact advanced");
    }

    /// Timer-triggered step. Returns false (and does nothing) after teardown.
    pub fn tick(&mut self) -> bool {
        if !self.mounted {
            debug!("fact tick after teardown ignored");
            return false;
        }
        self.advance();
        true
    }

    /// Mark the owning card as torn down.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Full reinitialization: back to the first fact, mounted again.
    pub fn remount(&mut self) {
        self.cursor = FactCursor::default();
        self.mounted = true;
    }
}
