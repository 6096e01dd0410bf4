pub mod count;

use crate::types::{ItemId, ItemsetCounts, ItemsetLength};

/// Frequent itemsets, one table per itemset length.
///
/// Level `k` lives at index `k - 1`. Level 1 is always present, possibly
/// empty; no other empty level is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    levels: Vec<ItemsetCounts>,
    num_transactions: usize,
}

impl Lattice {
    pub(crate) fn new(level_one: ItemsetCounts, num_transactions: usize) -> Self {
        Lattice {
            levels: vec![level_one],
            num_transactions,
        }
    }

    pub(crate) fn push_level(&mut self, level: ItemsetCounts) {
        debug_assert!(!level.is_empty());
        self.levels.push(level);
    }

    /// The table for itemsets of length `size`.
    pub fn level(&self, size: ItemsetLength) -> Option<&ItemsetCounts> {
        size.checked_sub(1).and_then(|index| self.levels.get(index))
    }

    /// `(size, table)` pairs from level 1 upward.
    pub fn levels(&self) -> impl Iterator<Item = (ItemsetLength, &ItemsetCounts)> + '_ {
        self.levels
            .iter()
            .enumerate()
            .map(|(index, level)| (index + 1, level))
    }

    /// Length of the largest frequent itemset, or 0 when nothing is frequent.
    pub fn max_len(&self) -> ItemsetLength {
        match self.levels.as_slice() {
            [level] if level.is_empty() => 0,
            levels => levels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.max_len() == 0
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn num_itemsets(&self) -> usize {
        self.levels.iter().map(|level| level.len()).sum()
    }

    pub fn support_count(&self, itemset: &[ItemId]) -> Option<u32> {
        self.level(itemset.len())
            .and_then(|level| level.get(itemset))
            .copied()
    }

    /// Support as a fraction of all transactions.
    pub fn support(&self, itemset: &[ItemId]) -> Option<f32> {
        self.support_count(itemset)
            .map(|count| count as f32 / self.num_transactions as f32)
    }
}
