#![allow(non_snake_case)]

use crate::{
    combi::join_step,
    config::MiningConfig,
    itemsets::Lattice,
    misc::log::targets,
    transactions::{Transaction, TransactionStore},
    types::{ItemCounts, Itemset, ItemsetCounts, ItemsetLength},
};
use log::{debug, info};
use rayon::prelude::*;
use std::collections::HashMap;

/// Generate the lattice of frequent itemsets from a transaction store.
///
/// Levels are built one after the other: the candidates of level `k + 1`
/// are the self-join of the frequent `k`-itemsets, and only those reaching
/// `min_support` survive. Growth stops at the first level with no
/// candidates or no survivors, or at the configured `max_len`.
pub fn generate_frequent_itemsets(store: &TransactionStore, config: &MiningConfig) -> Lattice {
    let min_support = config.min_support();
    let N = store.len();

    info!(target: targets::LATTICE, "Counting itemsets of length 1.");
    let item_counts = generate_frequent_1_itemset_counts(store.transactions(), min_support);
    let mut lattice = Lattice::new(convert_to_itemset_counts(item_counts), N);

    let mut size: ItemsetLength = 1;
    loop {
        if config.max_len().map_or(false, |max_len| size >= max_len) {
            break;
        }
        let prev_itemset_counts = match lattice.level(size) {
            Some(level) if !level.is_empty() => level,
            _ => break,
        };

        size += 1;
        let candidates = join_step(prev_itemset_counts.keys().cloned().collect());
        if candidates.is_empty() {
            debug!(target: targets::LATTICE, "No candidates of length {}.", size);
            break;
        }

        info!(
            target: targets::LATTICE,
            "Counting {} candidates of length {}.",
            candidates.len(),
            size
        );

        let transactions: Vec<&Transaction> =
            store.iter().filter(|transaction| transaction.len() >= size).collect();
        let frequent_itemset_counts =
            generate_frequent_k_itemset_counts(candidates, &transactions, N, min_support);

        debug!(
            target: targets::LATTICE,
            "{} frequent itemsets of length {}.",
            frequent_itemset_counts.len(),
            size
        );

        if frequent_itemset_counts.is_empty() {
            break;
        }
        lattice.push_level(frequent_itemset_counts);
    }

    lattice
}

/// Whether `count` out of `N` transactions reaches `min_support`.
pub(crate) fn is_frequent(count: u32, N: usize, min_support: f32) -> bool {
    N > 0 && count as f32 / N as f32 >= min_support
}

/// Counts every candidate against the transactions in parallel, then keeps
/// the frequent ones. The table is only assembled once every count is done.
fn generate_frequent_k_itemset_counts(
    candidates: Vec<Itemset>,
    transactions: &[&Transaction],
    N: usize,
    min_support: f32,
) -> ItemsetCounts {
    candidates
        .into_par_iter()
        .filter_map(|candidate| {
            let candidate_count = transactions
                .iter()
                .filter(|transaction| transaction.contains_all(&candidate))
                .count() as u32;
            if is_frequent(candidate_count, N, min_support) {
                Some((candidate, candidate_count))
            } else {
                None
            }
        })
        .collect()
}

/// 1-itemset
fn generate_frequent_1_itemset_counts(
    transactions: &[Transaction],
    min_support: f32,
) -> ItemCounts {
    let N = transactions.len();

    let mut item_counts: ItemCounts = HashMap::new();
    for transaction in transactions {
        for item in transaction.items() {
            *item_counts.entry(item).or_insert(0) += 1;
        }
    }

    item_counts
        .into_iter()
        .filter(|&(_, support_count)| is_frequent(support_count, N, min_support))
        .collect()
}

fn convert_to_itemset_counts(item_counts: ItemCounts) -> ItemsetCounts {
    item_counts.into_iter().map(|(k, v)| (vec![k], v)).collect()
}
