#![allow(non_snake_case)]

use std::{
    cmp::Reverse,
    fmt::{Display, Formatter, Result},
};

use crate::{itemsets::Lattice, rules::Rule, transactions::Inventory};

/// Ranked itemsets and rules, printable as a plain text report.
///
/// Itemsets are listed per length by descending support, rules by
/// descending confidence. Values are compared as printed, to three
/// decimals, and ties are broken by the text of the line.
pub struct Report<'l> {
    lattice: &'l Lattice,
    rules: &'l [Rule],
    inventory: &'l Inventory,
}

impl<'l> Report<'l> {
    pub fn new(lattice: &'l Lattice, rules: &'l [Rule], inventory: &'l Inventory) -> Self {
        Report {
            lattice,
            rules,
            inventory,
        }
    }

    /// `(itemset text, support)` for itemsets of length `size`, ranked.
    pub fn ranked_itemsets(&self, size: usize) -> Vec<(String, f32)> {
        let N = self.lattice.num_transactions() as f32;
        let itemsets = match self.lattice.level(size) {
            Some(level) => level,
            None => return vec![],
        };

        rank(
            itemsets
                .iter()
                .map(|(itemset, &count)| (self.inventory.format(itemset), count as f32 / N)),
        )
    }

    /// `(rule text, confidence)`, ranked.
    pub fn ranked_rules(&self) -> Vec<(String, f32)> {
        rank(
            self.rules
                .iter()
                .map(|rule| (rule.format(self.inventory), rule.confidence)),
        )
    }
}

fn rank(lines: impl Iterator<Item = (String, f32)>) -> Vec<(String, f32)> {
    let mut lines: Vec<(String, f32)> = lines.collect();
    lines.sort_by_cached_key(|(text, value)| (Reverse(thousandths(*value)), text.clone()));
    lines
}

/// `value` in thousandths, exactly as `{:.3}` prints it.
fn thousandths(value: f32) -> i64 {
    format!("{:.3}", value)
        .replace('.', "")
        .parse()
        .unwrap_or(i64::MIN)
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (size, level) in self.lattice.levels() {
            if level.is_empty() {
                continue;
            }
            writeln!(f, "Itemsets of size {}", size)?;
            for (itemset, support) in self.ranked_itemsets(size) {
                writeln!(f, "{} {:.3}", itemset, support)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "RULES")?;
        for (rule, confidence) in self.ranked_rules() {
            writeln!(f, "{} {:.3}", rule, confidence)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::MiningConfig, mine, transactions::TransactionStore};

    #[test]
    fn basket_report() {
        let store = TransactionStore::from_raw(vec![
            vec!["A", "B", "C"],
            vec!["A", "B"],
            vec!["A", "C"],
            vec!["B", "C"],
            vec!["A", "B", "C"],
        ]);
        let mined = mine(&store, &MiningConfig::new(0.6, 0.7).unwrap());
        let report = Report::new(&mined.lattice, &mined.rules, store.inventory());

        let expected = "\
Itemsets of size 1
A 0.800
B 0.800
C 0.800

Itemsets of size 2
A,B 0.600
A,C 0.600
B,C 0.600

RULES
A -> B 0.750
A -> C 0.750
B -> A 0.750
B -> C 0.750
C -> A 0.750
C -> B 0.750
";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn ranks_by_value_then_text() {
        let store = TransactionStore::from_raw(vec![
            vec!["milk", "bread"],
            vec!["milk", "bread"],
            vec!["milk", "eggs"],
            vec!["milk"],
        ]);
        let mined = mine(&store, &MiningConfig::new(0.25, 0.5).unwrap());
        let report = Report::new(&mined.lattice, &mined.rules, store.inventory());

        assert_eq!(
            report.ranked_itemsets(1),
            vec![
                ("milk".to_owned(), 1.0),
                ("bread".to_owned(), 0.5),
                ("eggs".to_owned(), 0.25),
            ]
        );
        assert_eq!(
            report
                .ranked_rules()
                .into_iter()
                .map(|(text, _)| text)
                .collect::<Vec<_>>(),
            vec!["bread -> milk", "eggs -> milk", "milk -> bread"]
        );
        assert!(report.ranked_itemsets(3).is_empty());
    }

    #[test]
    fn ranks_by_printed_value() {
        // 0.0625 prints as 0.062, so it ranks with 0.062 and below 0.063.
        let ranked = rank(
            vec![
                ("a".to_owned(), 0.0625),
                ("b".to_owned(), 0.063),
                ("c".to_owned(), 0.062),
            ]
            .into_iter(),
        );

        let printed: Vec<String> = ranked
            .iter()
            .map(|(text, value)| format!("{} {:.3}", text, value))
            .collect();
        assert_eq!(printed, vec!["b 0.063", "a 0.062", "c 0.062"]);
        assert_eq!(thousandths(0.0625), 62);
        assert_eq!(thousandths(1.0), 1000);
    }

    #[test]
    fn empty_report_is_well_formed() {
        let store = TransactionStore::from_raw(Vec::<Vec<&str>>::new());
        let mined = mine(&store, &MiningConfig::new(0.5, 0.5).unwrap());
        let report = Report::new(&mined.lattice, &mined.rules, store.inventory());

        assert_eq!(report.to_string(), "RULES\n");
    }
}
