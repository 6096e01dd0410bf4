use std::collections::HashMap;

pub type ItemId = usize;
pub type ItemName = String;

/// Strictly ascending item ids. Sorting makes equality and hashing
/// independent of the order items were seen in.
pub type Itemset = Vec<ItemId>;

pub type ItemCounts = HashMap<ItemId, u32>;
pub type ItemsetCounts = HashMap<Itemset, u32>;

pub type ItemsetLength = usize;
