//! Question queue bookkeeping: the primary run, the retry list replayed in
//! the finish phase, and the deduplicated missed set that feeds it.

use serde::{Deserialize, Serialize};

use crate::quiz::types::Question;

/// Result of advancing the cursor within the active partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceResult {
    NextInPhase,
    PhaseExhausted,
}

/// Which partition the cursor walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePartition {
    Primary,
    Retry,
}

/// Owns the three question partitions and the advancement rules.
///
/// The retry and missed partitions are never both active: missed questions
/// accumulate during the primary run and become the retry list at the
/// finish-phase boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionQueue {
    primary: Vec<Question>,
    retry: Vec<Question>,
    missed: Vec<Question>,
    cursor: usize,
    /// Primary cursor position saved when the finish phase starts, so a
    /// failed finish attempt can resume the primary run just past it.
    saved_primary_cursor: usize,
}

impl QuestionQueue {
    pub fn new(primary: Vec<Question>) -> Self {
        Self {
            primary,
            retry: Vec::new(),
            missed: Vec::new(),
            cursor: 0,
            saved_primary_cursor: 0,
        }
    }

    /// The question under the cursor, or `None` when the active partition
    /// is exhausted.
    pub fn current(&self, partition: ActivePartition) -> Option<&Question> {
        match partition {
            ActivePartition::Primary => self.primary.get(self.cursor),
            ActivePartition::Retry => self.retry.get(self.cursor),
        }
    }

    /// Appends `question` to the missed set unless an entry with the same
    /// id is already tracked.
    pub fn record_miss(&mut self, question: &Question) {
        if !self.missed.iter().any(|q| q.id == question.id) {
            self.missed.push(question.clone());
        }
    }

    /// Moves the cursor forward within `partition`.
    pub fn advance(&mut self, partition: ActivePartition) -> AdvanceResult {
        self.cursor += 1;
        let len = match partition {
            ActivePartition::Primary => self.primary.len(),
            ActivePartition::Retry => self.retry.len(),
        };
        if self.cursor < len {
            AdvanceResult::NextInPhase
        } else {
            AdvanceResult::PhaseExhausted
        }
    }

    /// Seeds the retry list from the missed set (unless a pre-seeded retry
    /// list is already in place and nothing was missed), clears the missed
    /// set, and rewinds the cursor.
    pub fn start_finish_phase(&mut self) {
        if !self.missed.is_empty() {
            self.retry = std::mem::take(&mut self.missed);
        }
        self.missed.clear();
        self.saved_primary_cursor = self.cursor;
        self.cursor = 0;
    }

    /// Discards the retry list and repositions the cursor on the primary
    /// partition, one past where the finish phase was entered (wrapping).
    pub fn revert_to_primary(&mut self) {
        self.retry.clear();
        if self.primary.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = (self.saved_primary_cursor + 1) % self.primary.len();
        }
    }

    pub fn has_pending_retry_or_missed(&self) -> bool {
        !self.missed.is_empty() || !self.retry.is_empty()
    }

    pub fn missed_count(&self) -> usize {
        self.missed.len()
    }

    pub fn retry_count(&self) -> usize {
        self.retry.len()
    }

    pub fn primary_count(&self) -> usize {
        self.primary.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
