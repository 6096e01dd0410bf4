use itertools::Itertools;

use crate::types::{ItemId, Itemset};

/// Prefix self-join of equal-length itemsets.
///
/// Itemsets sharing their first `k - 1` items are combined pairwise into
/// `k + 1` candidates. Every candidate is sorted, as its inputs are.
pub fn join_step(mut itemsets: Vec<Itemset>) -> Vec<Itemset> {
    if itemsets.is_empty() {
        return vec![];
    }

    let size = itemsets[0].len();
    assert!(
        itemsets.iter().all(|itemset| itemset.len() == size),
        "self-join over itemsets of mixed length"
    );

    itemsets.sort_unstable();

    let mut candidates: Vec<Itemset> = Vec::with_capacity(itemsets.len());
    let mut i = 0;
    while i < itemsets.len() {
        let prefix = &itemsets[i][..size - 1];
        let group_end = itemsets[i..]
            .iter()
            .position(|itemset| &itemset[..size - 1] != prefix)
            .map_or(itemsets.len(), |offset| i + offset);

        // Sorted tails keep `a` ahead of `b`, so pushing b's tail stays sorted.
        for (a, b) in itemsets[i..group_end].iter().tuple_combinations() {
            let mut candidate = Vec::with_capacity(size + 1);
            candidate.extend_from_slice(a);
            candidate.push(b[size - 1]);
            candidates.push(candidate);
        }

        i = group_end;
    }

    candidates
}

/// Pairwise unions of `consequents` with exactly `size` items, each once.
pub fn grow_consequents(consequents: &[Itemset], size: usize) -> Vec<Itemset> {
    consequents
        .iter()
        .tuple_combinations()
        .map(|(a, b)| union(a, b))
        .filter(|consequent| consequent.len() == size)
        .unique()
        .collect()
}

pub fn union(a: &[ItemId], b: &[ItemId]) -> Itemset {
    a.iter().merge(b.iter()).dedup().copied().collect()
}

/// Items of `itemset` not in `other`. Both sorted.
pub fn difference(itemset: &[ItemId], other: &[ItemId]) -> Itemset {
    itemset
        .iter()
        .filter(|item| other.binary_search(item).is_err())
        .copied()
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_join_step_prefix_groups() {
        // Groups by prefix: {2,5} with three tails, {2,6} alone, {3,4} with two.
        let itemsets: Vec<Itemset> = vec![
            vec![3, 4, 8],
            vec![2, 5, 9],
            vec![2, 6, 7],
            vec![2, 5, 7],
            vec![3, 4, 6],
            vec![2, 5, 8],
        ];
        let y = join_step(itemsets);
        assert_eq!(
            y,
            vec![
                vec![2, 5, 7, 8],
                vec![2, 5, 7, 9],
                vec![2, 5, 8, 9],
                vec![3, 4, 6, 8],
            ]
        );
    }

    #[test]
    fn test_join_step_unsorted_input() {
        let itemsets: Vec<Itemset> =
            vec![vec![2, 3, 4], vec![1, 3, 4], vec![1, 2, 4], vec![1, 2, 3]];
        let y = join_step(itemsets);
        assert_eq!(y, vec![vec![1, 2, 3, 4]]);
    }

    #[test]
    fn test_join_step_pairs() {
        let itemsets: Vec<Itemset> =
            vec![vec![1, 2], vec![2, 3], vec![1, 3], vec![1, 4], vec![3, 4]];
        let y = join_step(itemsets);
        assert_eq!(y.len(), 3);
        assert!(y.contains(&vec![1, 2, 3]));
        assert!(y.contains(&vec![1, 2, 4]));
        assert!(y.contains(&vec![1, 3, 4]));
        assert!(!y.contains(&vec![2, 3, 4]));
    }

    #[test]
    fn test_join_step_singletons() {
        let itemsets: Vec<Itemset> = vec![vec![13], vec![10], vec![14]];
        let y = join_step(itemsets);
        assert_eq!(y, vec![vec![10, 13], vec![10, 14], vec![13, 14]]);
    }

    #[test]
    fn test_join_step_lonely_groups() {
        let itemsets: Vec<Itemset> = vec![vec![10, 11], vec![13, 14]];
        assert!(join_step(itemsets).is_empty());
        assert!(join_step(vec![]).is_empty());
    }

    #[test]
    #[should_panic(expected = "mixed length")]
    fn test_join_step_mixed_lengths() {
        join_step(vec![vec![1, 2], vec![1, 2, 3]]);
    }

    #[test]
    fn test_grow_consequents() {
        let consequents: Vec<Itemset> = vec![vec![1], vec![2], vec![4]];
        let grown = grow_consequents(&consequents, 2);
        assert_eq!(grown, vec![vec![1, 2], vec![1, 4], vec![2, 4]]);
    }

    #[test]
    fn test_grow_consequents_drops_wide_unions() {
        let consequents: Vec<Itemset> = vec![vec![1, 2], vec![1, 3], vec![2, 3], vec![4, 5]];
        let grown = grow_consequents(&consequents, 3);
        assert_eq!(grown, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_set_operations() {
        assert_eq!(union(&[1, 3, 5], &[2, 3, 6]), vec![1, 2, 3, 5, 6]);
        assert_eq!(difference(&[1, 2, 3, 4], &[2, 4]), vec![1, 3]);
        assert_eq!(difference(&[1, 2], &[]), vec![1, 2]);
    }
}
