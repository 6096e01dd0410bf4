/*!
Targets for the [log] macros used across the crate.

No logger is installed by the library. The `apriori` binary installs
`env_logger`, so e.g. `RUST_LOG=lattice=debug` shows per-level counts.
*/

pub mod targets {
    /// Loading and interning transactions.
    pub const TRANSACTIONS: &str = "transactions";

    /// Candidate generation and support counting.
    pub const LATTICE: &str = "lattice";

    /// Rule derivation.
    pub const RULES: &str = "rules";

    /// Whole runs of the `apriori` binary.
    pub const MINE: &str = "mine";
}

#[cfg(test)]
mod tests {
    use super::targets;
    use itertools::Itertools;

    #[test]
    fn targets_filter_independently() {
        let all = [
            targets::TRANSACTIONS,
            targets::LATTICE,
            targets::RULES,
            targets::MINE,
        ];

        assert!(all.iter().all_unique());
        for (a, b) in all.iter().tuple_combinations() {
            assert!(!a.starts_with(b) && !b.starts_with(a));
        }
    }
}
