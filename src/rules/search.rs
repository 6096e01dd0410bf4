use std::collections::HashSet;

use log::{debug, info};
use rayon::prelude::*;

use crate::{
    combi::grow_consequents,
    itemsets::Lattice,
    misc::log::targets,
    rules::rule::Rule,
    types::{ItemId, ItemsetCounts},
};

/// Generate rules from every level of the lattice holding itemsets of two
/// or more items.
///
/// Rules are unique by antecedent and consequent, and returned in that
/// order.
pub fn generate_rules(lattice: &Lattice, min_conf: f32) -> Vec<Rule> {
    let rules: HashSet<Rule> = lattice
        .levels()
        .filter(|&(itemset_size, _)| itemset_size > 1)
        .flat_map(|(itemset_size, itemset_counts)| {
            let rules = rules_for_level(itemset_counts, min_conf, lattice);
            debug!(
                target: targets::RULES,
                "{} rules from itemsets of length {}.",
                rules.len(),
                itemset_size
            );
            rules
        })
        .collect();

    info!(target: targets::RULES, "{} rules.", rules.len());

    let mut rules: Vec<Rule> = rules.into_iter().collect();
    rules.sort_unstable_by(|a, b| {
        (&a.antecedent, &a.consequent).cmp(&(&b.antecedent, &b.consequent))
    });
    rules
}

/// Rules from one level of equal-length frequent itemsets.
pub fn rules_for_level(
    itemset_counts: &ItemsetCounts,
    min_conf: f32,
    lattice: &Lattice,
) -> Vec<Rule> {
    itemset_counts
        .par_iter()
        .flat_map_iter(|(itemset, _)| rules_for_itemset(itemset, min_conf, lattice))
        .collect()
}

/// Given a frequent itemset, find the rules that can be generated from it.
///
/// Consequents start as single items. A consequent of `n + 1` items is only
/// tried when it is the union of two accepted `n`-item consequents, as
/// moving items from the antecedent to the consequent never raises the
/// confidence.
pub fn rules_for_itemset(itemset: &[ItemId], min_conf: f32, lattice: &Lattice) -> Vec<Rule> {
    let mut final_rules = vec![];

    let mut accurate_consequents: Vec<Vec<ItemId>> = vec![];
    for &item in itemset {
        if let Some(rule) = accepted_rule(itemset, vec![item], min_conf, lattice) {
            accurate_consequents.push(rule.consequent.clone());
            final_rules.push(rule);
        }
    }

    if itemset.len() <= 2 {
        return final_rules;
    }

    let mut consequent_size = 2;
    while !accurate_consequents.is_empty() && consequent_size < itemset.len() {
        let candidates = grow_consequents(&accurate_consequents, consequent_size);

        accurate_consequents.clear();
        for consequent in candidates {
            if let Some(rule) = accepted_rule(itemset, consequent, min_conf, lattice) {
                accurate_consequents.push(rule.consequent.clone());
                final_rules.push(rule);
            }
        }

        consequent_size += 1;
    }

    final_rules
}

fn accepted_rule(
    itemset: &[ItemId],
    consequent: Vec<ItemId>,
    min_conf: f32,
    lattice: &Lattice,
) -> Option<Rule> {
    Rule::from_split(itemset, consequent, lattice).filter(|rule| rule.confidence >= min_conf)
}
