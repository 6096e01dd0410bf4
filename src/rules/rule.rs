#![allow(non_snake_case)]

use std::hash::{Hash, Hasher};

use crate::{
    combi::difference,
    itemsets::Lattice,
    transactions::Inventory,
    types::{ItemId, Itemset},
};

/// An association rule `antecedent => consequent` drawn from one frequent
/// itemset.
///
/// Two rules are equal when their antecedent and consequent are; the
/// measures follow from those and the lattice.
#[derive(Debug, Clone)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub confidence: f32,
    pub lift: f32,
}

impl Rule {
    /// The rule with consequent `consequent` taken out of `itemset`.
    ///
    /// `None` when the antecedent would be empty, or when a support the
    /// rule needs is missing from `lattice`.
    pub fn from_split(itemset: &[ItemId], consequent: Itemset, lattice: &Lattice) -> Option<Rule> {
        let antecedent = difference(itemset, &consequent);
        if antecedent.is_empty() || antecedent.len() + consequent.len() != itemset.len() {
            return None;
        }

        let union_support_count = lattice.support_count(itemset)? as f32;
        let antecedent_support_count = lattice.support_count(&antecedent)? as f32;
        let consequent_support_count = lattice.support_count(&consequent)? as f32;
        let N = lattice.num_transactions() as f32;

        Some(Rule {
            confidence: union_support_count / antecedent_support_count,
            lift: union_support_count / (antecedent_support_count * consequent_support_count) * N,
            antecedent,
            consequent,
        })
    }

    pub fn get_antecedent(&self) -> &[ItemId] {
        &self.antecedent
    }

    pub fn get_consequent(&self) -> &[ItemId] {
        &self.consequent
    }

    /// `a,b -> c` form used in reports.
    pub fn format(&self, inventory: &Inventory) -> String {
        format!(
            "{} -> {}",
            inventory.format(&self.antecedent),
            inventory.format(&self.consequent)
        )
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Rule) -> bool {
        self.antecedent == other.antecedent && self.consequent == other.consequent
    }
}

impl Eq for Rule {}

impl Hash for Rule {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.antecedent.hash(state);
        self.consequent.hash(state);
    }
}
