//! Selected record numbers

use std::collections::BTreeSet;

use crate::record::Record;

/// Set of selected record numbers
///
/// Selection is never pruned by filtering: records that drop out of the
/// visible list stay selected until explicitly deselected or cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    numbers: BTreeSet<u64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, number: u64) {
        self.numbers.insert(number);
    }

    pub fn deselect(&mut self, number: u64) {
        self.numbers.remove(&number);
    }

    /// Flip membership, returning whether the number is now selected
    pub fn toggle(&mut self, number: u64) -> bool {
        if self.numbers.remove(&number) {
            false
        } else {
            self.numbers.insert(number);
            true
        }
    }

    /// Replace the selection with every visible record
    pub fn select_all<'a>(&mut self, visible: impl IntoIterator<Item = &'a Record>) {
        self.numbers = visible.into_iter().map(|r| r.number).collect();
    }

    pub fn clear(&mut self) {
        self.numbers.clear();
    }

    pub fn contains(&self, number: u64) -> bool {
        self.numbers.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// State of a "select all" checkbox over `visible`
    ///
    /// True iff there is at least one visible record and all of them are
    /// selected.
    pub fn all_selected(&self, visible: &[&Record]) -> bool {
        !visible.is_empty() && visible.iter().all(|r| self.contains(r.number))
    }

    /// Selected numbers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.numbers.iter().copied()
    }
}
