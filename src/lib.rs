//! Frequent itemsets and association rules with the Apriori algorithm.
//!
//! ```
//! use apriori::{mine, MiningConfig, TransactionStore};
//!
//! let store = TransactionStore::from_raw(vec![
//!     vec!["bread", "milk"],
//!     vec!["bread", "milk", "eggs"],
//!     vec!["milk"],
//! ]);
//! let config = MiningConfig::new(0.5, 0.6).unwrap();
//! let mined = mine(&store, &config);
//!
//! assert_eq!(mined.lattice.max_len(), 2);
//! assert_eq!(mined.rules.len(), 2);
//! ```

pub mod combi;
pub mod config;
pub mod errors;
pub mod itemsets;
pub mod misc;
pub mod report;
pub mod rules;
pub mod transactions;
pub mod types;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
mod wrapper;

pub use config::MiningConfig;
pub use errors::{AprioriError, ConfigError};
pub use itemsets::{count::generate_frequent_itemsets, Lattice};
pub use report::Report;
pub use rules::{generate_rules, rules_for_level, Rule};
pub use transactions::{Inventory, Transaction, TransactionStore};

/// Frequent itemsets of every length, and the rules drawn from them.
#[derive(Debug, Clone)]
pub struct Mined {
    pub lattice: Lattice,
    pub rules: Vec<Rule>,
}

/// Build the lattice, then the rules of every level of two or more items.
pub fn mine(store: &TransactionStore, config: &MiningConfig) -> Mined {
    let lattice = generate_frequent_itemsets(store, config);
    let rules = generate_rules(&lattice, config.min_confidence());
    Mined { lattice, rules }
}

#[cfg(feature = "python")]
#[pymodule]
#[pyo3(name = "apriori")]
fn py_apriori(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(wrapper::apriori, m)?)?;
    m.add_class::<wrapper::PyRule>()?;
    Ok(())
}
