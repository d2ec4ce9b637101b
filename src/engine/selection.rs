//! The pending selection: the cards currently being compared.

use smallvec::SmallVec;

/// Positions of the face-up, unmatched cards under comparison.
///
/// Holds at most two entries; a third selection attempt is rejected by the
/// state machine. SmallVec keeps both entries inline without allocation.
#[derive(Clone, Debug, Default)]
pub(crate) struct Selection {
    pending: SmallVec<[usize; 2]>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_full(&self) -> bool {
        self.pending.len() == 2
    }

    /// The sole pending position, if exactly one card is selected.
    pub fn sole(&self) -> Option<usize> {
        if self.pending.len() == 1 {
            Some(self.pending[0])
        } else {
            None
        }
    }

    pub fn push(&mut self, position: usize) {
        debug_assert!(self.pending.len() < 2, "selection already holds two cards");
        self.pending.push(position);
    }
}
